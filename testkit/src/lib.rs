//! Numeric Testkit - test utilities for numerical code
//!
//! Helpers consumed directly by the tests of a numerical-computing library.
//!
//! # Architecture
//!
//! - **compare**: Approximate floating-point equality with non-fatal reporting
//! - **simulate**: Deterministic vectors and compressed sparse matrices
//! - **expect_error**: Assertions that a call fails with a given message
//! - **initial_value**: Rotating non-zero sentinel for zeroing assumptions
//! - **vector_n**: Owned copies of array contents
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG)
//! 2. Simulated values lie in `[lower, upper)`
//! 3. Sentinel values are never zero

// Module declarations
pub mod compare;
pub mod expect_error;
pub mod initial_value;
pub mod numeric;
pub mod rng;
pub mod simulate;
pub mod vector_n;

// Re-exports for convenience
pub use compare::{
    almost_equal, compare_almost_equal, compare_almost_equal_containers,
    CompareAlmostEqualParameters, Expectations, Failure, FailureSink,
};
pub use expect_error::{expect_error, expect_panic};
pub use initial_value::InitialValue;
pub use numeric::{CompressedIndex, SimulatedValue};
pub use rng::RngManager;
pub use simulate::{
    fingerprint_values, simulate_compressed_sparse_matrix, simulate_vector,
    SimulateCompressedSparseMatrixParameters, SimulatedCompressedSparseMatrix,
    SimulationError, SimulationParameters,
};
pub use vector_n::{vector_n, vector_n_raw};
