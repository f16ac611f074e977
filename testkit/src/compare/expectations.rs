//! Non-fatal failure reporting
//!
//! The standard test harness only knows fatal failures (panics). Comparisons
//! in this crate report mismatches through a [`FailureSink`] instead, so a
//! test can keep going after a mismatch and still fail at the end.

use std::cell::RefCell;
use std::fmt;

/// A single recorded test failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receiver of non-fatal failures.
pub trait FailureSink {
    fn record(&self, failure: Failure);
}

/// Per-test collector of non-fatal failures.
///
/// Failures accumulate without stopping the test. Call [`Expectations::finish`]
/// at the end of the test to fail it if anything was recorded; an
/// `Expectations` dropped with outstanding failures panics as well.
///
/// # Example
/// ```
/// use numeric_testkit::compare::{compare_almost_equal, CompareAlmostEqualParameters, Expectations};
///
/// let expect = Expectations::new();
/// let params = CompareAlmostEqualParameters::default();
/// assert!(compare_almost_equal(1.0, 1.000000005, &params, &expect));
/// expect.finish();
/// ```
#[derive(Debug, Default)]
pub struct Expectations {
    failures: RefCell<Vec<Failure>>,
}

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every failure recorded so far.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }

    /// True when nothing has been recorded.
    pub fn is_ok(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    /// Take the recorded failures, leaving the collector empty.
    pub fn take(&self) -> Vec<Failure> {
        self.failures.take()
    }

    /// Fail the test if any failure was recorded.
    ///
    /// # Panics
    /// Panics with every recorded message, one per line.
    pub fn finish(self) {
        let failures = self.take();
        if !failures.is_empty() {
            panic!("{}", summarize(&failures));
        }
    }
}

impl FailureSink for Expectations {
    fn record(&self, failure: Failure) {
        tracing::warn!(failure = %failure.message, "expectation failed");
        self.failures.borrow_mut().push(failure);
    }
}

impl Drop for Expectations {
    fn drop(&mut self) {
        let failures = self.failures.get_mut();
        if !failures.is_empty() && !std::thread::panicking() {
            let summary = summarize(failures.as_slice());
            failures.clear();
            panic!("{}", summary);
        }
    }
}

fn summarize(failures: &[Failure]) -> String {
    let mut summary = format!("{} expectation(s) failed:", failures.len());
    for failure in failures {
        summary.push_str("\n  ");
        summary.push_str(&failure.message);
    }
    summary
}
