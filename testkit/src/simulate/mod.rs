//! Deterministic simulation of test inputs
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same parameters → bit-identical output
//! 2. **Density**: each slot (or matrix cell) is independently non-zero with
//!    probability `density`
//! 3. **Bounds**: drawn values lie in `[lower, upper)`
//!
//! # Example
//!
//! ```
//! use numeric_testkit::simulate::{simulate_vector, SimulationParameters};
//!
//! let params = SimulationParameters::<f64> {
//!     lower: 1.0,
//!     upper: 6.6,
//!     seed: 42,
//!     ..Default::default()
//! };
//! let values = simulate_vector(100, &params).unwrap();
//! assert!(values.iter().all(|&x| (1.0..6.6).contains(&x)));
//! ```

mod fingerprint;
pub mod sparse;
pub mod vector;

pub use fingerprint::fingerprint_values;
pub use sparse::{
    simulate_compressed_sparse_matrix, SimulateCompressedSparseMatrixParameters,
    SimulatedCompressedSparseMatrix,
};
pub use vector::{simulate_vector, SimulationParameters};

use crate::numeric::SimulatedValue;
use thiserror::Error;

/// Seed used when parameters do not name one.
pub const DEFAULT_SEED: u64 = 1234567890;

/// Errors raised while validating or running a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    #[error("Invalid bounds: lower {lower} must be finite and below upper {upper}")]
    InvalidBounds { lower: String, upper: String },

    #[error("Extent {0} cannot be used as a dimension length")]
    InvalidExtent(String),

    #[error("Value {value} does not fit in the index or pointer type")]
    ExtentOverflow { value: usize },

    #[error("Malformed compressed sparse matrix: {0}")]
    MalformedMatrix(String),

    #[error("Invalid simulation parameters: {0}")]
    Config(String),
}

/// Shared check for the density and bounds of every parameter type.
pub(crate) fn check_parameters<T: SimulatedValue>(
    density: f64,
    lower: T,
    upper: T,
) -> Result<(), SimulationError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(SimulationError::InvalidDensity(density));
    }
    if !T::valid_bounds(lower, upper) {
        return Err(SimulationError::InvalidBounds {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    Ok(())
}
