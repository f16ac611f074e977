//! Owned copies of array contents, for `assert_eq!` against a `Vec`

/// Copy the first `n` elements of `values` into a new vector.
///
/// # Panics
/// Panics if `n > values.len()`.
///
/// # Example
/// ```
/// use numeric_testkit::vector_n;
///
/// let whee = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(vector_n(&whee, 3), vec![1.0, 2.0, 3.0]);
/// ```
pub fn vector_n<T: Clone>(values: &[T], n: usize) -> Vec<T> {
    values[..n].to_vec()
}

/// Copy `n` elements starting at `ptr` into a new vector.
///
/// For output buffers handed across an FFI boundary or obtained through
/// `as_ptr()`. When `n` is zero, `ptr` is never read and may be null.
///
/// # Safety
/// If `n > 0`, `ptr` must be non-null, aligned, and valid for reads of `n`
/// consecutive initialized values of `T`.
pub unsafe fn vector_n_raw<T: Clone>(ptr: *const T, n: usize) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    // SAFETY: upheld by the caller per the contract above.
    unsafe { std::slice::from_raw_parts(ptr, n) }.to_vec()
}
