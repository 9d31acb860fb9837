//! Growth functions mapping organ age to length.
//!
//! A growth function is a stateless rule relating elapsed age to achieved
//! length, given the realized initial growth rate `r` and the maximal
//! length `k` of one realized organ. The elongation loop queries `length`
//! each step and uses the inverse `age` when an organ's target length is
//! rescaled by the environment.

use std::sync::Arc;

/// A stateless age-to-length growth rule.
///
/// Implementations must be monotonically non-decreasing in `age` and
/// bounded above by `k`.
pub trait GrowthFunction: Send + Sync {
    /// Organ length after growing for `age` days at initial rate `r`
    /// [cm day⁻¹] toward maximal length `k` [cm].
    fn length(&self, age: f64, r: f64, k: f64) -> f64;

    /// Age at which the organ reached `length`, the inverse of
    /// [`GrowthFunction::length`].
    fn age(&self, length: f64, r: f64, k: f64) -> f64;

    /// Short human-readable name, used by debug output.
    fn name(&self) -> &'static str;
}

/// Negative exponential growth: `l(t) = k (1 − e^(−rt/k))`.
///
/// Growth starts at rate `r` and slows as the organ approaches its maximal
/// length, which it reaches only asymptotically.
///
/// # Example
/// ```
/// use plant_env::growth::{GrowthFunction, NegativeExponentialGrowth};
///
/// let gf = NegativeExponentialGrowth;
/// let l = gf.length(10.0, 1.0, 20.0);
/// assert!(l > 0.0 && l < 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeExponentialGrowth;

impl GrowthFunction for NegativeExponentialGrowth {
    fn length(&self, age: f64, r: f64, k: f64) -> f64 {
        if k <= 0.0 || r <= 0.0 || age <= 0.0 {
            return 0.0;
        }
        k * (1.0 - (-r * age / k).exp())
    }

    fn age(&self, length: f64, r: f64, k: f64) -> f64 {
        if k <= 0.0 || r <= 0.0 || length <= 0.0 {
            return 0.0;
        }
        // The asymptote is never reached; cap just below it so the
        // logarithm stays finite.
        let l = length.min(k * (1.0 - 1e-12));
        -k / r * (1.0 - l / k).ln()
    }

    fn name(&self) -> &'static str {
        "negative exponential"
    }
}

/// Linear growth capped at the maximal length: `l(t) = min(rt, k)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearGrowth;

impl GrowthFunction for LinearGrowth {
    fn length(&self, age: f64, r: f64, k: f64) -> f64 {
        if k <= 0.0 || r <= 0.0 || age <= 0.0 {
            return 0.0;
        }
        (r * age).min(k)
    }

    fn age(&self, length: f64, r: f64, k: f64) -> f64 {
        if k <= 0.0 || r <= 0.0 || length <= 0.0 {
            return 0.0;
        }
        length.min(k) / r
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Selects one of the built-in growth functions.
///
/// Parameter definitions store this choice as a numeric code (1 = negative
/// exponential, 2 = linear); the simulator instantiates the matching
/// capability after loading a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthKind {
    #[default]
    NegativeExponential,
    Linear,
}

impl GrowthKind {
    /// Numeric wire code used by parameter-definition documents.
    pub fn code(&self) -> u32 {
        match self {
            Self::NegativeExponential => 1,
            Self::Linear => 2,
        }
    }

    /// Parse a wire code back into a growth kind.
    ///
    /// # Example
    /// ```
    /// use plant_env::growth::GrowthKind;
    ///
    /// assert_eq!(GrowthKind::from_code(2), Ok(GrowthKind::Linear));
    /// assert!(GrowthKind::from_code(7).is_err());
    /// ```
    pub fn from_code(code: u32) -> Result<Self, String> {
        match code {
            1 => Ok(Self::NegativeExponential),
            2 => Ok(Self::Linear),
            other => Err(format!("unknown growth function code: {}", other)),
        }
    }

    /// Instantiate the matching growth capability.
    pub fn instantiate(&self) -> Arc<dyn GrowthFunction> {
        match self {
            Self::NegativeExponential => Arc::new(NegativeExponentialGrowth),
            Self::Linear => Arc::new(LinearGrowth),
        }
    }
}

impl std::fmt::Display for GrowthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeExponential => write!(f, "negative exponential"),
            Self::Linear => write!(f, "linear"),
        }
    }
}
