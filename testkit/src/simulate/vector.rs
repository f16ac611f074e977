//! Dense and sparse vector simulation

use super::{check_parameters, SimulationError, DEFAULT_SEED};
use crate::numeric::SimulatedValue;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Parameters for [`simulate_vector`].
///
/// Missing fields take their defaults when deserialized, so a JSON fixture
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: SimulatedValue"))]
pub struct SimulationParameters<T: SimulatedValue = f64> {
    /// Probability that a slot is assigned a drawn value; otherwise it stays zero.
    pub density: f64,

    /// Inclusive lower bound. Defaults to 0 for unsigned types, -10 otherwise.
    pub lower: T,

    /// Exclusive upper bound.
    pub upper: T,

    /// Seed for the random number generator.
    pub seed: u64,
}

impl<T: SimulatedValue> Default for SimulationParameters<T> {
    fn default() -> Self {
        Self {
            density: 1.0,
            lower: T::default_lower(),
            upper: T::default_upper(),
            seed: DEFAULT_SEED,
        }
    }
}

impl<T: SimulatedValue> SimulationParameters<T> {
    /// Check that density lies in `[0, 1]` and that `[lower, upper)` is non-empty.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_parameters(self.density, self.lower, self.upper)
    }

    /// Parse parameters from a JSON object and validate them.
    ///
    /// # Example
    /// ```
    /// use numeric_testkit::simulate::SimulationParameters;
    ///
    /// let params = SimulationParameters::<u8>::from_json(r#"{"upper": 50, "seed": 7}"#).unwrap();
    /// assert_eq!(params.lower, 0);
    /// assert_eq!(params.upper, 50);
    /// assert_eq!(params.density, 1.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| SimulationError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

/// Simulate a vector of `length` random values.
///
/// With `density < 1` this is a sparse vector: each slot first rolls a
/// Bernoulli trial and is only drawn when the trial succeeds. With
/// `density == 1` no trial is rolled and every slot is drawn.
///
/// # Errors
/// Returns [`SimulationError`] if the parameters fail validation.
pub fn simulate_vector<T: SimulatedValue>(
    length: usize,
    params: &SimulationParameters<T>,
) -> Result<Vec<T>, SimulationError> {
    params.validate()?;
    tracing::debug!(
        length,
        density = params.density,
        seed = params.seed,
        "simulating vector"
    );

    let mut rng = RngManager::from_seed(params.seed);
    let mut values = vec![T::zero(); length];

    if params.density == 1.0 {
        for v in values.iter_mut() {
            *v = T::draw_uniform(&mut rng, params.lower, params.upper);
        }
    } else {
        for v in values.iter_mut() {
            if rng.bernoulli(params.density) {
                *v = T::draw_uniform(&mut rng, params.lower, params.upper);
            }
        }
    }

    Ok(values)
}
