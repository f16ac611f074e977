//! Non-zero sentinel values for testing zeroing assumptions
//!
//! Functions that write into a caller-supplied buffer must not assume the
//! buffer was zeroed. Pre-filling the buffer with a value from
//! [`InitialValue`] and checking the output against the expected result (or
//! against a second run with a different sentinel) exposes such assumptions.

use std::sync::atomic::{AtomicU8, Ordering};

/// Rotating counter over `[1, 255]`.
///
/// Every value fits in all numeric types, and consecutive calls never return
/// the same value. The counter uses an atomic, so a shared `&InitialValue` can
/// be used from several threads.
///
/// # Example
/// ```
/// use numeric_testkit::InitialValue;
///
/// let sentinel = InitialValue::new();
/// assert_eq!(sentinel.next(), 1);
/// assert_eq!(sentinel.next(), 2);
///
/// let mut buffer = vec![0.0f64; 4];
/// sentinel.fill(&mut buffer);
/// assert!(buffer.iter().all(|&x| x == 3.0));
/// ```
#[derive(Debug, Default)]
pub struct InitialValue {
    last: AtomicU8,
}

impl InitialValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next value in the rotation: 1, 2, ..., 255, 1, ...
    pub fn next(&self) -> u8 {
        match self
            .last
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| Some(advance(c)))
        {
            Ok(previous) | Err(previous) => advance(previous),
        }
    }

    /// Next value converted into `T`.
    pub fn next_as<T: From<u8>>(&self) -> T {
        T::from(self.next())
    }

    /// Fill `buffer` with the next value.
    pub fn fill<T: From<u8> + Clone>(&self, buffer: &mut [T]) {
        buffer.fill(self.next_as());
    }
}

fn advance(current: u8) -> u8 {
    if current == u8::MAX {
        1
    } else {
        current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        assert_eq!(InitialValue::new().next(), 1);
    }

    #[test]
    fn test_wraps_to_one() {
        let sentinel = InitialValue::new();
        for expected in 1..=255u8 {
            assert_eq!(sentinel.next(), expected);
        }
        assert_eq!(sentinel.next(), 1);
    }

    #[test]
    fn test_next_as_converts() {
        let sentinel = InitialValue::new();
        let a: i32 = sentinel.next_as();
        let b: f32 = sentinel.next_as();
        assert_eq!(a, 1);
        assert_eq!(b, 2.0);
    }

    #[test]
    fn test_independent_counters() {
        let a = InitialValue::new();
        let b = InitialValue::new();
        a.next();
        a.next();
        assert_eq!(b.next(), 1);
    }
}
