//! Position-dependent environment multipliers.
//!
//! A soil lookup maps a 3-D position to a non-negative scale factor that
//! modulates elongation, branching angle or branching probability. The
//! neutral element is 1 everywhere; a lookup returning 0 at a position
//! signals "no growth here" to its consumer.

use nalgebra::Point3;

/// A position-dependent environment multiplier in `[0, ∞)`.
///
/// Implementations must return non-negative values; 1 is neutral.
pub trait SoilLookup: Send + Sync {
    /// Scale factor at `position` (coordinates in cm, z pointing up).
    fn scale(&self, position: &Point3<f64>) -> f64;

    /// Short human-readable name, used by debug output.
    fn name(&self) -> &'static str;
}

/// The same scale everywhere. `UniformScale::neutral()` (scale 1) is the
/// default capability attached to every parameter set.
#[derive(Debug, Clone, Copy)]
pub struct UniformScale {
    value: f64,
}

impl UniformScale {
    /// Create a uniform lookup; negative values are clamped to 0.
    pub fn new(value: f64) -> Self {
        Self {
            value: value.max(0.0),
        }
    }

    /// The neutral lookup returning 1 everywhere.
    pub fn neutral() -> Self {
        Self { value: 1.0 }
    }
}

impl Default for UniformScale {
    fn default() -> Self {
        Self::neutral()
    }
}

impl SoilLookup for UniformScale {
    fn scale(&self, _position: &Point3<f64>) -> f64 {
        self.value
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Piecewise-constant multiplier by soil depth.
///
/// Depth is measured downward from the surface at z = 0, so a position
/// with z = −15 lies at depth 15. Band `i` covers depths up to
/// `boundaries[i]`; the last scale applies below the deepest boundary.
///
/// # Example
/// ```
/// use nalgebra::Point3;
/// use plant_env::soil::{DepthBands, SoilLookup};
///
/// // Topsoil favors branching, subsoil suppresses it.
/// let bands = DepthBands::new(vec![10.0, 30.0], vec![1.5, 1.0, 0.2]).unwrap();
/// assert_eq!(bands.scale(&Point3::new(0.0, 0.0, -5.0)), 1.5);
/// assert_eq!(bands.scale(&Point3::new(0.0, 0.0, -50.0)), 0.2);
/// ```
#[derive(Debug, Clone)]
pub struct DepthBands {
    boundaries: Vec<f64>,
    scales: Vec<f64>,
}

impl DepthBands {
    /// Create a banded lookup from depth boundaries [cm] and per-band
    /// scales. Requires one more scale than boundaries and strictly
    /// increasing boundaries; negative scales are clamped to 0.
    pub fn new(boundaries: Vec<f64>, scales: Vec<f64>) -> Result<Self, String> {
        if scales.len() != boundaries.len() + 1 {
            return Err(format!(
                "expected {} scales for {} boundaries, got {}",
                boundaries.len() + 1,
                boundaries.len(),
                scales.len()
            ));
        }
        if boundaries.windows(2).any(|w| w[1] <= w[0]) {
            return Err("depth boundaries must be strictly increasing".to_string());
        }
        Ok(Self {
            boundaries,
            scales: scales.into_iter().map(|s| s.max(0.0)).collect(),
        })
    }
}

impl SoilLookup for DepthBands {
    fn scale(&self, position: &Point3<f64>) -> f64 {
        let depth = -position.z;
        for (boundary, scale) in self.boundaries.iter().zip(&self.scales) {
            if depth <= *boundary {
                return *scale;
            }
        }
        *self.scales.last().unwrap_or(&1.0)
    }

    fn name(&self) -> &'static str {
        "depth bands"
    }
}

/// A user-supplied lookup function.
///
/// The wrapped closure's result is clamped to `[0, ∞)` so the trait
/// contract holds regardless of the supplied function.
pub struct FnScale {
    f: Box<dyn Fn(&Point3<f64>) -> f64 + Send + Sync>,
}

impl FnScale {
    pub fn new(f: impl Fn(&Point3<f64>) -> f64 + Send + Sync + 'static) -> Self {
        Self { f: Box::new(f) }
    }
}

impl SoilLookup for FnScale {
    fn scale(&self, position: &Point3<f64>) -> f64 {
        (self.f)(position).max(0.0)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}
