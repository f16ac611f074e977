//! Approximate equality of floating-point values
//!
//! Two values are equal when their absolute difference is within
//! `relative_tolerance` times the magnitude of their mean. The threshold never
//! drops below `absolute_tolerance`, so values that should both be zero are
//! not held to an exact comparison.

use super::expectations::{Failure, FailureSink};
use serde::{Deserialize, Serialize};

/// Parameters for [`compare_almost_equal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareAlmostEqualParameters {
    /// Relative tolerance for the difference between values.
    pub relative_tolerance: f64,

    /// Floor on the tolerated difference, for values near zero.
    pub absolute_tolerance: f64,

    /// Whether two NaNs compare equal. A NaN never equals a number.
    pub nan_equal: bool,

    /// Whether a mismatch is recorded as a test failure.
    pub report: bool,
}

impl Default for CompareAlmostEqualParameters {
    fn default() -> Self {
        Self {
            relative_tolerance: 1e-8,
            absolute_tolerance: 1e-15,
            nan_equal: false,
            report: true,
        }
    }
}

impl CompareAlmostEqualParameters {
    /// Default parameters with a different relative tolerance.
    pub fn with_tolerance(relative_tolerance: f64) -> Self {
        Self {
            relative_tolerance,
            ..Self::default()
        }
    }

    pub fn with_nan_equal(mut self, nan_equal: bool) -> Self {
        self.nan_equal = nan_equal;
        self
    }

    pub fn with_report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }
}

/// Core predicate, without any reporting.
pub fn almost_equal(left: f64, right: f64, params: &CompareAlmostEqualParameters) -> bool {
    if left == right {
        return true;
    }
    if left.is_nan() || right.is_nan() {
        return params.nan_equal && left.is_nan() && right.is_nan();
    }

    // |difference| <= tol * |mean|, floored at the absolute tolerance.
    // A NaN threshold (opposite infinities) is left in place and never fails.
    let mut threshold = params.relative_tolerance * (left + right).abs() / 2.0;
    if threshold < params.absolute_tolerance {
        threshold = params.absolute_tolerance;
    }
    if (left - right).abs() > threshold {
        return false;
    }
    true
}

/// Check whether two values are almost equal.
///
/// On a mismatch with `params.report` set, a non-fatal failure is recorded on
/// `sink`; the test continues either way.
///
/// # Example
/// ```
/// use numeric_testkit::compare::{compare_almost_equal, CompareAlmostEqualParameters, Expectations};
///
/// let expect = Expectations::new();
/// let quiet = CompareAlmostEqualParameters::with_tolerance(1e-8).with_report(false);
/// assert!(!compare_almost_equal(1.0, 1.00000005, &quiet, &expect));
/// assert!(compare_almost_equal(1.0, 1.000000005, &quiet, &expect));
/// expect.finish();
/// ```
pub fn compare_almost_equal<S: FailureSink + ?Sized>(
    left: f64,
    right: f64,
    params: &CompareAlmostEqualParameters,
    sink: &S,
) -> bool {
    if almost_equal(left, right, params) {
        return true;
    }
    if params.report {
        sink.record(Failure::new(format!(
            "mismatch in almost-equal floats (expected {}, got {})",
            left, right
        )));
    }
    false
}

/// Compare two sequences element-wise with [`almost_equal`].
///
/// Per-element reporting is suppressed; the first differing element is
/// recorded as one failure on `sink`, regardless of `params.report`.
///
/// # Panics
/// Panics immediately if the sequences differ in length.
pub fn compare_almost_equal_containers<L, R, S>(
    left: &[L],
    right: &[R],
    params: &CompareAlmostEqualParameters,
    sink: &S,
) -> bool
where
    L: Copy + Into<f64>,
    R: Copy + Into<f64>,
    S: FailureSink + ?Sized,
{
    assert_eq!(
        left.len(),
        right.len(),
        "cannot compare containers of different lengths"
    );

    for (i, (&l, &r)) in left.iter().zip(right).enumerate() {
        let (l, r): (f64, f64) = (l.into(), r.into());
        if !almost_equal(l, r, params) {
            sink.record(Failure::new(format!(
                "mismatch in almost-equal floats at element {} (expected {}, got {})",
                i, l, r
            )));
            return false;
        }
    }
    true
}
