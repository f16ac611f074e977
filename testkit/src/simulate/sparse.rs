//! Compressed sparse matrix simulation
//!
//! The primary dimension is the one along which non-zero elements are
//! compressed: rows for a compressed sparse row matrix, columns for a
//! compressed sparse column matrix.
//!
//! # Invariants
//!
//! - `pointers.len() == primary + 1`
//! - `pointers[0] == 0` and `pointers` is non-decreasing
//! - `pointers[primary] == data.len() == index.len()`
//! - indices within each primary slice are strictly ascending and lie in `[0, secondary)`

use super::fingerprint::Fingerprint;
use super::{check_parameters, SimulationError, DEFAULT_SEED};
use crate::numeric::{CompressedIndex, SimulatedValue};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Parameters for [`simulate_compressed_sparse_matrix`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: SimulatedValue"))]
pub struct SimulateCompressedSparseMatrixParameters<T: SimulatedValue = f64> {
    /// Probability that any given cell is a structural non-zero.
    pub density: f64,

    /// Inclusive lower bound for the simulated values.
    pub lower: T,

    /// Exclusive upper bound for the simulated values.
    pub upper: T,

    /// Seed for the random number generator.
    pub seed: u64,
}

impl<T: SimulatedValue> Default for SimulateCompressedSparseMatrixParameters<T> {
    fn default() -> Self {
        Self {
            density: 0.2,
            lower: T::default_lower(),
            upper: T::default_upper(),
            seed: DEFAULT_SEED,
        }
    }
}

impl<T: SimulatedValue> SimulateCompressedSparseMatrixParameters<T> {
    /// Check that density lies in `[0, 1]` and that `[lower, upper)` is non-empty.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_parameters(self.density, self.lower, self.upper)
    }

    /// Parse parameters from a JSON object and validate them.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| SimulationError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

/// Contents of a simulated compressed sparse matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedCompressedSparseMatrix<T, I = i32, P = usize> {
    /// Extent of the primary dimension.
    pub primary: I,

    /// Extent of the secondary dimension.
    pub secondary: I,

    /// Values of the structural non-zero elements.
    pub data: Vec<T>,

    /// Secondary-dimension indices of the structural non-zero elements.
    pub index: Vec<I>,

    /// Offsets into `data`/`index` marking where each primary slice starts and ends.
    pub pointers: Vec<P>,
}

impl<T, I, P> SimulatedCompressedSparseMatrix<T, I, P>
where
    T: SimulatedValue,
    I: CompressedIndex,
    P: CompressedIndex,
{
    /// Number of structural non-zero elements.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Indices and values of primary slice `p`, or `None` if `p` is out of range.
    pub fn primary_slice(&self, p: usize) -> Option<(&[I], &[T])> {
        let start = self.pointers.get(p)?.to_usize()?;
        let end = self.pointers.get(p + 1)?.to_usize()?;
        Some((self.index.get(start..end)?, self.data.get(start..end)?))
    }

    /// Expand into a dense matrix, primary dimension outermost.
    pub fn to_dense(&self) -> Result<Vec<Vec<T>>, SimulationError> {
        self.validate()?;
        let (n_primary, n_secondary) = self.extents()?;

        let mut dense = vec![vec![T::zero(); n_secondary]; n_primary];
        for (p, row) in dense.iter_mut().enumerate() {
            if let Some((indices, values)) = self.primary_slice(p) {
                for (&i, &v) in indices.iter().zip(values) {
                    // validate() guarantees every index converts and is in range
                    if let Some(s) = i.to_usize() {
                        row[s] = v;
                    }
                }
            }
        }
        Ok(dense)
    }

    /// Re-check every structural invariant of the compressed representation.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let (n_primary, n_secondary) = self.extents()?;
        let malformed = |msg: String| Err(SimulationError::MalformedMatrix(msg));

        if self.pointers.len() != n_primary + 1 {
            return malformed(format!(
                "expected {} pointers, found {}",
                n_primary + 1,
                self.pointers.len()
            ));
        }
        if self.data.len() != self.index.len() {
            return malformed(format!(
                "data has {} values but index has {}",
                self.data.len(),
                self.index.len()
            ));
        }

        let offsets = self
            .pointers
            .iter()
            .map(|p| p.to_usize())
            .collect::<Option<Vec<_>>>();
        let Some(offsets) = offsets else {
            return malformed("negative pointer".to_string());
        };

        if offsets[0] != 0 {
            return malformed(format!("first pointer is {}, not 0", offsets[0]));
        }
        if offsets[n_primary] != self.index.len() {
            return malformed(format!(
                "last pointer is {} but there are {} non-zeros",
                offsets[n_primary],
                self.index.len()
            ));
        }

        for (p, bounds) in offsets.windows(2).enumerate() {
            let (start, end) = (bounds[0], bounds[1]);
            if start > end || end > self.index.len() {
                return malformed(format!(
                    "pointers decrease or overrun at primary element {}",
                    p
                ));
            }

            let mut previous: Option<usize> = None;
            for &i in &self.index[start..end] {
                let Some(s) = i.to_usize().filter(|&s| s < n_secondary) else {
                    return malformed(format!(
                        "index {:?} in primary element {} is outside [0, {})",
                        i, p, n_secondary
                    ));
                };
                if previous.is_some_and(|prev| prev >= s) {
                    return malformed(format!(
                        "indices in primary element {} are not strictly increasing",
                        p
                    ));
                }
                previous = Some(s);
            }
        }

        Ok(())
    }

    /// Hex SHA-256 digest over extents, pointers, indices and values.
    pub fn fingerprint(&self) -> String {
        let mut fp = Fingerprint::new();
        fp.indices(&[self.primary, self.secondary])
            .indices(&self.pointers)
            .indices(&self.index)
            .values(&self.data);
        fp.finish()
    }

    fn extents(&self) -> Result<(usize, usize), SimulationError> {
        Ok((to_extent(self.primary)?, to_extent(self.secondary)?))
    }
}

fn to_extent<I: CompressedIndex>(extent: I) -> Result<usize, SimulationError> {
    extent
        .to_usize()
        .ok_or_else(|| SimulationError::InvalidExtent(format!("{:?}", extent)))
}

fn to_index<I: CompressedIndex>(value: usize) -> Result<I, SimulationError> {
    I::from_usize(value).ok_or(SimulationError::ExtentOverflow { value })
}

/// Simulate the contents of a compressed sparse matrix.
///
/// Cells are visited primary-outer, secondary-inner. Each cell independently
/// becomes a structural non-zero with probability `params.density`, in which
/// case its secondary index and a value drawn from `[lower, upper)` are
/// appended. Indices are therefore ascending within each primary slice by
/// construction.
///
/// # Errors
/// Returns [`SimulationError`] if the parameters fail validation, an extent
/// is negative, or the non-zero count overflows the pointer type `P`.
///
/// # Example
/// ```
/// use numeric_testkit::simulate::{
///     simulate_compressed_sparse_matrix, SimulateCompressedSparseMatrixParameters,
///     SimulatedCompressedSparseMatrix,
/// };
///
/// let params = SimulateCompressedSparseMatrixParameters::<f64>::default();
/// let res: SimulatedCompressedSparseMatrix<f64> =
///     simulate_compressed_sparse_matrix(10, 50, &params).unwrap();
/// assert_eq!(res.pointers.len(), 11);
/// assert_eq!(res.pointers[10], res.data.len());
/// ```
pub fn simulate_compressed_sparse_matrix<T, I, P>(
    primary: I,
    secondary: I,
    params: &SimulateCompressedSparseMatrixParameters<T>,
) -> Result<SimulatedCompressedSparseMatrix<T, I, P>, SimulationError>
where
    T: SimulatedValue,
    I: CompressedIndex,
    P: CompressedIndex,
{
    params.validate()?;
    let n_primary = to_extent(primary)?;
    let n_secondary = to_extent(secondary)?;
    tracing::debug!(
        primary = n_primary,
        secondary = n_secondary,
        density = params.density,
        seed = params.seed,
        "simulating compressed sparse matrix"
    );

    let mut rng = RngManager::from_seed(params.seed);
    let mut output = SimulatedCompressedSparseMatrix {
        primary,
        secondary,
        data: Vec::new(),
        index: Vec::new(),
        pointers: Vec::with_capacity(n_primary + 1),
    };
    output.pointers.push(to_index(0)?);

    for _ in 0..n_primary {
        for s in 0..n_secondary {
            if rng.bernoulli(params.density) {
                output.index.push(to_index(s)?);
                output
                    .data
                    .push(T::draw_uniform(&mut rng, params.lower, params.upper));
            }
        }
        output.pointers.push(to_index(output.index.len())?);
    }

    Ok(output)
}
