//! SHA-256 fingerprints of simulated output
//!
//! Encodes values in a fixed little-endian layout before hashing, so the same
//! simulated fixture has the same fingerprint on every platform.

use crate::numeric::{CompressedIndex, SimulatedValue};
use sha2::{Digest, Sha256};

/// Incremental hasher over canonical encodings.
#[derive(Default)]
pub(crate) struct Fingerprint {
    hasher: Sha256,
    buffer: Vec<u8>,
}

impl Fingerprint {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Hash a length-prefixed section of values.
    pub(crate) fn values<T: SimulatedValue>(&mut self, values: &[T]) -> &mut Self {
        self.length(values.len());
        for &v in values {
            v.write_le_bytes(&mut self.buffer);
        }
        self.flush()
    }

    /// Hash a length-prefixed section of indices or pointers.
    pub(crate) fn indices<I: CompressedIndex>(&mut self, indices: &[I]) -> &mut Self {
        self.length(indices.len());
        for &i in indices {
            i.write_le_bytes(&mut self.buffer);
        }
        self.flush()
    }

    pub(crate) fn length(&mut self, len: usize) -> &mut Self {
        self.buffer.extend_from_slice(&(len as u64).to_le_bytes());
        self.flush()
    }

    fn flush(&mut self) -> &mut Self {
        self.hasher.update(&self.buffer);
        self.buffer.clear();
        self
    }

    pub(crate) fn finish(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}

/// Hex SHA-256 digest of a simulated vector.
///
/// # Example
/// ```
/// use numeric_testkit::simulate::{fingerprint_values, simulate_vector, SimulationParameters};
///
/// let params = SimulationParameters::<f64>::default();
/// let a = simulate_vector(50, &params).unwrap();
/// let b = simulate_vector(50, &params).unwrap();
/// assert_eq!(fingerprint_values(&a), fingerprint_values(&b));
/// ```
pub fn fingerprint_values<T: SimulatedValue>(values: &[T]) -> String {
    let mut fp = Fingerprint::new();
    fp.values(values);
    fp.finish()
}
