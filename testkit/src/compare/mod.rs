//! Approximate comparison of floating-point results
//!
//! - **almost_equal**: tolerance-based scalar and sequence comparison
//! - **expectations**: non-fatal failure collection for the comparisons

mod almost_equal;
mod expectations;

pub use almost_equal::{
    almost_equal, compare_almost_equal, compare_almost_equal_containers,
    CompareAlmostEqualParameters,
};
pub use expectations::{Expectations, Failure, FailureSink};
