//! Assertions that a call fails with a particular message
//!
//! Both helpers run the call, capture the failure message if there is one,
//! and then assert on it. A call that succeeds, or fails with an unrelated
//! message, fails the test with a panic.

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

/// Assert that `fun` returns an error whose message contains `expected`.
///
/// # Panics
/// Panics if `fun` returns `Ok`, or if the error's `Display` output does not
/// contain `expected`.
///
/// # Example
/// ```
/// use numeric_testkit::expect_error;
///
/// expect_error(|| -> Result<(), String> { Err("ahh wheeeee".to_string()) }, "whee");
/// ```
pub fn expect_error<T, E, F>(fun: F, expected: &str)
where
    F: FnOnce() -> Result<T, E>,
    E: fmt::Display,
{
    let message = fun().err().map(|e| e.to_string());
    assert_failure_message(message, expected);
}

/// Assert that `fun` panics with a message containing `expected`.
///
/// The panic is caught, so the rest of the test still runs. Payloads that are
/// neither `&str` nor `String` are treated as an empty message.
///
/// # Panics
/// Panics if `fun` returns normally, or if the panic message does not contain
/// `expected`.
pub fn expect_panic<F>(fun: F, expected: &str)
where
    F: FnOnce() + UnwindSafe,
{
    let message = panic::catch_unwind(fun).err().map(panic_message);
    assert_failure_message(message, expected);
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::new()
    }
}

fn assert_failure_message(message: Option<String>, expected: &str) {
    match message {
        None => panic!(
            "function did not return an error with message '{}'",
            expected
        ),
        Some(actual) => assert!(
            actual.contains(expected),
            "function did not return an error with message '{}' (got '{}')",
            expected,
            actual
        ),
    }
}
