//! Positional trends for inter-lateral distances.
//!
//! Along an organ the distances between successive branch points need not
//! be homogeneous: many species space laterals progressively wider or
//! tighter toward the tip. The spacing shape turns the single configured
//! spacing mean into one mean per gap position; realization then samples
//! each gap independently around its positional mean.

use serde::{Deserialize, Serialize};

/// First-to-last ratio of the positional means for the non-uniform shapes.
/// Linear shapes run from mean/2 to 3·mean/2; the exponential shapes span
/// the same ratio geometrically.
const SPAN_RATIO: f64 = 3.0;

/// Positional trend of inter-lateral distances along an organ.
///
/// Wire code (`lnf` in parameter definitions): 0 uniform, 1 linear
/// increasing, 2 linear decreasing, 3 exponential increasing,
/// 4 exponential decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpacingShape {
    /// Every gap shares the configured mean.
    #[default]
    Uniform,
    /// Means grow linearly toward the tip.
    LinearIncreasing,
    /// Means shrink linearly toward the tip.
    LinearDecreasing,
    /// Means grow geometrically toward the tip.
    ExponentialIncreasing,
    /// Means shrink geometrically toward the tip.
    ExponentialDecreasing,
}

impl SpacingShape {
    /// Per-gap means for `count` gaps with configured mean `mean`.
    ///
    /// Whatever the shape, the means sum to `count × mean`, so shaping
    /// never changes the expected total spacing length.
    ///
    /// # Example
    /// ```
    /// use organs::spacing::SpacingShape;
    ///
    /// let means = SpacingShape::LinearIncreasing.positional_means(1.0, 4);
    /// assert_eq!(means.len(), 4);
    /// assert_eq!(means[0], 0.5);
    /// assert_eq!(means[3], 1.5);
    /// assert!((means.iter().sum::<f64>() - 4.0).abs() < 1e-12);
    /// ```
    pub fn positional_means(&self, mean: f64, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 || *self == Self::Uniform {
            return vec![mean; count];
        }

        match self {
            Self::Uniform => unreachable!("handled above"),
            Self::LinearIncreasing => linear_ramp(mean, count),
            Self::LinearDecreasing => reversed(linear_ramp(mean, count)),
            Self::ExponentialIncreasing => geometric_ramp(mean, count),
            Self::ExponentialDecreasing => reversed(geometric_ramp(mean, count)),
        }
    }

    /// Numeric wire code used by parameter-definition documents.
    pub fn code(&self) -> u32 {
        match self {
            Self::Uniform => 0,
            Self::LinearIncreasing => 1,
            Self::LinearDecreasing => 2,
            Self::ExponentialIncreasing => 3,
            Self::ExponentialDecreasing => 4,
        }
    }

    /// Parse a wire code back into a spacing shape.
    pub fn from_code(code: u32) -> Result<Self, String> {
        match code {
            0 => Ok(Self::Uniform),
            1 => Ok(Self::LinearIncreasing),
            2 => Ok(Self::LinearDecreasing),
            3 => Ok(Self::ExponentialIncreasing),
            4 => Ok(Self::ExponentialDecreasing),
            other => Err(format!("unknown spacing shape code: {}", other)),
        }
    }
}

/// Means rising linearly from mean/2 to 3·mean/2; sums to count × mean.
fn linear_ramp(mean: f64, count: usize) -> Vec<f64> {
    let n = count as f64;
    (0..count)
        .map(|i| mean * (0.5 + i as f64 / (n - 1.0)))
        .collect()
}

/// Geometric progression spanning the same first-to-last ratio as the
/// linear ramp, rescaled so the means sum to count × mean.
fn geometric_ramp(mean: f64, count: usize) -> Vec<f64> {
    let n = count as f64;
    let growth = SPAN_RATIO.powf(1.0 / (n - 1.0));
    let raw: Vec<f64> = (0..count).map(|i| growth.powi(i as i32)).collect();
    let raw_sum: f64 = raw.iter().sum();
    raw.into_iter().map(|r| mean * n * r / raw_sum).collect()
}

fn reversed(mut means: Vec<f64>) -> Vec<f64> {
    means.reverse();
    means
}

impl std::fmt::Display for SpacingShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::LinearIncreasing => write!(f, "linear increasing"),
            Self::LinearDecreasing => write!(f, "linear decreasing"),
            Self::ExponentialIncreasing => write!(f, "exponential increasing"),
            Self::ExponentialDecreasing => write!(f, "exponential decreasing"),
        }
    }
}
