//! Stochastic growth-direction models.
//!
//! A tropism proposes the heading for the next organ segment given the
//! current tip position and heading. The surrounding growth loop queries
//! it each elongation step; parameter sets only hold the handle for
//! handoff. All directions are unit vectors in cm space with z up.

use std::f64::consts::PI;

use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_chacha::ChaChaRng;

/// A stochastic growth-direction model.
pub trait Tropism: Send + Sync {
    /// Direction for the next segment grown from `position` with current
    /// `heading`. Returns a unit vector unless the input heading is zero.
    fn direction(
        &self,
        position: &Point3<f64>,
        heading: &Vector3<f64>,
        rng: &mut ChaChaRng,
    ) -> Vector3<f64>;

    /// Short human-readable name, used by debug output.
    fn name(&self) -> &'static str;
}

/// No bending: the organ keeps its current heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightTropism;

impl Tropism for StraightTropism {
    fn direction(
        &self,
        _position: &Point3<f64>,
        heading: &Vector3<f64>,
        _rng: &mut ChaChaRng,
    ) -> Vector3<f64> {
        normalize_or_keep(heading)
    }

    fn name(&self) -> &'static str {
        "straight"
    }
}

/// Random angular deflection around the current heading.
///
/// The polar deflection angle is drawn from |N(0, σ²)| [rad] and the
/// azimuth uniformly from [0, 2π), producing an isotropic wobble cone.
/// σ = 0 degenerates to [`StraightTropism`].
///
/// # Example
/// ```
/// use nalgebra::{Point3, Vector3};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use plant_env::tropism::{RandomDeflection, Tropism};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let tropism = RandomDeflection::new(0.2);
/// let dir = tropism.direction(&Point3::origin(), &Vector3::z(), &mut rng);
/// assert!((dir.norm() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomDeflection {
    sigma: f64,
}

impl RandomDeflection {
    /// Create a deflection model with angular standard deviation `sigma`
    /// [rad]; negative values are clamped to 0.
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma: sigma.max(0.0),
        }
    }
}

impl Tropism for RandomDeflection {
    fn direction(
        &self,
        _position: &Point3<f64>,
        heading: &Vector3<f64>,
        rng: &mut ChaChaRng,
    ) -> Vector3<f64> {
        let h = normalize_or_keep(heading);
        if self.sigma <= 0.0 || h.norm() == 0.0 {
            return h;
        }

        let u1: f64 = rng.random();
        let u2: f64 = rng.random();
        let z = (-2.0 * u1.max(f64::MIN_POSITIVE).ln()).sqrt() * (2.0 * PI * u2).cos();
        let alpha = (self.sigma * z).abs();
        let beta: f64 = rng.random_range(0.0..2.0 * PI);

        let (u, v) = orthonormal_frame(&h);
        (h * alpha.cos() + (u * beta.cos() + v * beta.sin()) * alpha.sin()).normalize()
    }

    fn name(&self) -> &'static str {
        "random deflection"
    }
}

/// A user-supplied direction function.
///
/// The wrapped closure's result is normalized so the trait contract holds
/// regardless of the supplied function.
pub struct FnTropism {
    f: Box<dyn Fn(&Point3<f64>, &Vector3<f64>) -> Vector3<f64> + Send + Sync>,
}

impl FnTropism {
    pub fn new(f: impl Fn(&Point3<f64>, &Vector3<f64>) -> Vector3<f64> + Send + Sync + 'static) -> Self {
        Self { f: Box::new(f) }
    }
}

impl Tropism for FnTropism {
    fn direction(
        &self,
        position: &Point3<f64>,
        heading: &Vector3<f64>,
        _rng: &mut ChaChaRng,
    ) -> Vector3<f64> {
        normalize_or_keep(&(self.f)(position, heading))
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

fn normalize_or_keep(v: &Vector3<f64>) -> Vector3<f64> {
    let n = v.norm();
    if n > 0.0 {
        v / n
    } else {
        *v
    }
}

/// Two unit vectors spanning the plane perpendicular to unit vector `h`.
fn orthonormal_frame(h: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    // Any fixed axis works as long as it is not parallel to h.
    let reference = if h.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u = h.cross(&reference).normalize();
    let v = h.cross(&u);
    (u, v)
}
