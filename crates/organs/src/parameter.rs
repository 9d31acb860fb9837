//! The statistical description of one organ subtype.
//!
//! An [`OrganTypeParameters`] is configured once (by hand or from a
//! persisted definition), registered with its organism, and read many
//! times: `realize()` draws concrete organs from it and
//! `choose_successor()` dices lateral types at branch points. Nothing in
//! here mutates during a simulation run.

use std::sync::Arc;

use nalgebra::Point3;
use rand_chacha::ChaChaRng;

use plant_env::growth::{GrowthFunction, GrowthKind};
use plant_env::soil::{SoilLookup, UniformScale};
use plant_env::tropism::{StraightTropism, Tropism};

use crate::organ::RealizedOrgan;
use crate::organism::{OrganismId, SubTypeId};
use crate::sampling::TraitDistribution;
use crate::spacing::SpacingShape;
use crate::successor::SuccessorTable;

/// Shared capability handles wired up once per organism.
///
/// The handles are `Arc`-shared across all organ types of the same
/// organism; nobody owns them exclusively. Only the branching scale is
/// consumed here (by successor selection); tropism, growth function and
/// the remaining scales are held for handoff to the growth loop.
#[derive(Clone)]
pub struct OrganCallbacks {
    /// Growth-direction model.
    pub tropism: Arc<dyn Tropism>,
    /// Age-to-length growth function.
    pub growth: Arc<dyn GrowthFunction>,
    /// Environment multiplier on elongation.
    pub elongation_scale: Arc<dyn SoilLookup>,
    /// Environment multiplier on the branching angle.
    pub angle_scale: Arc<dyn SoilLookup>,
    /// Environment multiplier on branching probability.
    pub branching_scale: Arc<dyn SoilLookup>,
}

impl Default for OrganCallbacks {
    fn default() -> Self {
        Self {
            tropism: Arc::new(StraightTropism),
            growth: GrowthKind::default().instantiate(),
            elongation_scale: Arc::new(UniformScale::neutral()),
            angle_scale: Arc::new(UniformScale::neutral()),
            branching_scale: Arc::new(UniformScale::neutral()),
        }
    }
}

impl std::fmt::Debug for OrganCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganCallbacks")
            .field("tropism", &self.tropism.name())
            .field("growth", &self.growth.name())
            .field("elongation_scale", &self.elongation_scale.name())
            .field("angle_scale", &self.angle_scale.name())
            .field("branching_scale", &self.branching_scale.name())
            .finish()
    }
}

/// Statistical parameter set of one organ subtype.
///
/// Scalar traits are (mean, deviation) distributions; defaults describe an
/// unbranched organ with apical zone 10 cm, growth rate 1 cm day⁻¹,
/// radius 0.1 cm, branching angle 1.22 rad and an effectively unlimited
/// lifetime.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use organs::organism::{OrganismId, SubTypeId};
/// use organs::parameter::OrganTypeParameters;
/// use organs::sampling::TraitDistribution;
///
/// let mut params = OrganTypeParameters::new(
///     SubTypeId(1),
///     OrganismId::from_seed_name("demo"),
/// );
/// params.basal_zone = TraitDistribution::new(2.0, 0.2);
/// params.branch_count = TraitDistribution::fixed(4.0);
///
/// let mut rng = ChaChaRng::seed_from_u64(params.organism.seed());
/// let stem = params.realize(&mut rng);
/// assert_eq!(stem.lateral_spacings.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct OrganTypeParameters {
    /// Subtype this set describes.
    pub sub_type: SubTypeId,
    /// Human-readable organ name ("stem", "lateral root", ...).
    pub name: String,
    /// Non-owning back-reference to the owning organism.
    pub organism: OrganismId,

    /// Basal zone length [cm].
    pub basal_zone: TraitDistribution,
    /// Apical zone length [cm].
    pub apical_zone: TraitDistribution,
    /// Inter-lateral spacing [cm].
    pub lateral_spacing: TraitDistribution,
    /// Number of branches [1].
    pub branch_count: TraitDistribution,
    /// Initial growth rate [cm day⁻¹].
    pub growth_rate: TraitDistribution,
    /// Organ radius [cm].
    pub radius: TraitDistribution,
    /// Angle between organ and parent organ [rad].
    pub branching_angle: TraitDistribution,
    /// Organ life time [day].
    pub life_time: TraitDistribution,

    /// Positional trend of inter-lateral spacing.
    pub spacing_shape: SpacingShape,
    /// Lateral types and their emergence weights.
    pub successors: SuccessorTable,
    /// Maximal segment length hint for the elongation loop [cm].
    pub dx: f64,
    /// Which built-in growth function `callbacks.growth` should carry.
    pub growth_kind: GrowthKind,
    /// Shared capability handles.
    pub callbacks: OrganCallbacks,
}

impl Default for OrganTypeParameters {
    fn default() -> Self {
        Self {
            sub_type: SubTypeId::default(),
            name: "organ".to_string(),
            organism: OrganismId::default(),
            basal_zone: TraitDistribution::fixed(0.0),
            apical_zone: TraitDistribution::fixed(10.0),
            lateral_spacing: TraitDistribution::fixed(1.0),
            branch_count: TraitDistribution::fixed(0.0),
            growth_rate: TraitDistribution::fixed(1.0),
            radius: TraitDistribution::fixed(0.1),
            branching_angle: TraitDistribution::fixed(1.22),
            life_time: TraitDistribution::fixed(1e9),
            spacing_shape: SpacingShape::Uniform,
            successors: SuccessorTable::empty(),
            dx: 0.25,
            growth_kind: GrowthKind::default(),
            callbacks: OrganCallbacks::default(),
        }
    }
}

impl OrganTypeParameters {
    /// Create a parameter set with default traits for `sub_type`, owned by
    /// `organism`.
    pub fn new(sub_type: SubTypeId, organism: OrganismId) -> Self {
        Self {
            sub_type,
            organism,
            ..Self::default()
        }
    }

    /// Draw one concrete organ from this statistical description.
    ///
    /// Every scalar trait is sampled from its normal distribution and
    /// floored at 0; the branch count is rounded to the nearest
    /// non-negative integer; the inter-lateral distances get one entry per
    /// gap, each sampled around its positional mean from the spacing
    /// shape. The returned instance always satisfies
    /// `lateral_spacings.len() == max(branch_count − 1, 0)`.
    ///
    /// Repeated calls with a free-running generator produce independent
    /// draws; seed the generator for reproducibility.
    pub fn realize(&self, rng: &mut ChaChaRng) -> RealizedOrgan {
        let basal_zone = self.basal_zone.sample(rng);
        let apical_zone = self.apical_zone.sample(rng);
        let branch_count = self.branch_count.sample(rng).round() as u32;

        let gap_count = branch_count.saturating_sub(1) as usize;
        let lateral_spacings: Vec<f64> = self
            .spacing_shape
            .positional_means(self.lateral_spacing.mean, gap_count)
            .into_iter()
            .map(|mean| TraitDistribution::new(mean, self.lateral_spacing.dev).sample(rng))
            .collect();

        RealizedOrgan {
            sub_type: self.sub_type,
            basal_zone,
            apical_zone,
            branch_count,
            lateral_spacings,
            growth_rate: self.growth_rate.sample(rng),
            radius: self.radius.sample(rng),
            branching_angle: self.branching_angle.sample(rng),
            life_time: self.life_time.sample(rng),
        }
    }

    /// Pick which lateral subtype emerges at the branch point `position`.
    ///
    /// The successor weights are multiplied by the branching-probability
    /// scale at `position` before sampling. `None` means no lateral grows
    /// there: either the table is empty (terminal branch point) or the
    /// environment scale suppresses growth entirely.
    pub fn choose_successor(
        &self,
        position: &Point3<f64>,
        rng: &mut ChaChaRng,
    ) -> Option<SubTypeId> {
        let scale = self.callbacks.branching_scale.scale(position);
        self.successors.choose(scale, rng)
    }

    /// Mean maximal organ length [cm]: basal mean + apical mean +
    /// max(branch-count mean − 1, 0) × spacing mean.
    ///
    /// A planning estimate from configured means only, not the statistical
    /// expectation of `realize()`; the two coincide exactly when every
    /// deviation is 0.
    pub fn expected_maximal_length(&self) -> f64 {
        let gaps = (self.branch_count.mean - 1.0).max(0.0);
        self.basal_zone.mean + self.apical_zone.mean + gaps * self.lateral_spacing.mean
    }
}

impl std::fmt::Display for OrganTypeParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): lb {} cm, la {} cm, ln {} cm ({}), nob {}, r {} cm/day, \
             a {} cm, theta {} rad, rlt {} days, {} successors",
            self.name,
            self.sub_type,
            self.basal_zone,
            self.apical_zone,
            self.lateral_spacing,
            self.spacing_shape,
            self.branch_count,
            self.growth_rate,
            self.radius,
            self.branching_angle,
            self.life_time,
            self.successors.len(),
        )
    }
}
