//! Gaussian trait sampling with a non-negative floor.
//!
//! Every scalar trait of an organ type is described by a mean and a
//! standard deviation; realization draws from the corresponding normal
//! distribution and clamps the result at 0, since lengths, rates and
//! lifetimes cannot be negative.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Sample from a normal distribution using the Box-Muller transform.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from N(mean, std_dev²), unclamped.
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.max(f64::MIN_POSITIVE).ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// A (mean, standard deviation) pair describing one scalar organ trait.
///
/// Draws are floored at 0. A deviation of 0 makes the trait exact: the
/// sample is always `max(mean, 0)`, never a stray negative value.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use organs::sampling::TraitDistribution;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
///
/// let basal_zone = TraitDistribution::new(2.0, 0.5);
/// assert!(basal_zone.sample(&mut rng) >= 0.0);
///
/// let radius = TraitDistribution::fixed(0.1);
/// assert_eq!(radius.sample(&mut rng), 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDistribution {
    /// Mean of the trait.
    pub mean: f64,
    /// Standard deviation of the trait.
    pub dev: f64,
}

impl TraitDistribution {
    /// Create a distribution from mean and standard deviation.
    pub fn new(mean: f64, dev: f64) -> Self {
        Self { mean, dev }
    }

    /// Create an exact trait with no variation.
    pub fn fixed(mean: f64) -> Self {
        Self { mean, dev: 0.0 }
    }

    /// Draw one realization of this trait, floored at 0.
    pub fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        if self.dev <= 0.0 {
            return self.mean.max(0.0);
        }
        sample_gaussian(rng, self.mean, self.dev).max(0.0)
    }
}

impl std::fmt::Display for TraitDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}±{}", self.mean, self.dev)
    }
}
