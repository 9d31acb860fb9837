//! One realized organ.
//!
//! Created by `OrganTypeParameters::realize()` and immutable afterwards;
//! the surrounding simulator builds its organ object around this value and
//! drops it with that organ.

use serde::{Deserialize, Serialize};

use crate::organism::SubTypeId;

/// Concrete sampled parameters of a single organ.
///
/// Invariants, guaranteed by construction:
/// `lateral_spacings.len() == max(branch_count − 1, 0)`, and every
/// length/rate/lifetime field is ≥ 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedOrgan {
    /// Subtype this organ was realized from.
    pub sub_type: SubTypeId,
    /// Basal zone length [cm].
    pub basal_zone: f64,
    /// Apical zone length [cm].
    pub apical_zone: f64,
    /// Number of branches [1].
    pub branch_count: u32,
    /// Inter-lateral distances [cm], one per gap between branch points.
    pub lateral_spacings: Vec<f64>,
    /// Initial growth rate [cm day⁻¹].
    pub growth_rate: f64,
    /// Organ radius [cm].
    pub radius: f64,
    /// Angle between organ and parent organ [rad].
    pub branching_angle: f64,
    /// Organ life time [day].
    pub life_time: f64,
}

impl RealizedOrgan {
    /// Exact maximal length of this realization [cm]: basal zone + apical
    /// zone + the sum of the realized inter-lateral distances.
    pub fn maximal_length(&self) -> f64 {
        self.basal_zone + self.apical_zone + self.lateral_spacings.iter().sum::<f64>()
    }
}

impl std::fmt::Display for RealizedOrgan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: lb {:.3} cm, la {:.3} cm, {} branches, r {:.3} cm/day, \
             a {:.3} cm, theta {:.3} rad, rlt {:.1} days, max length {:.3} cm",
            self.sub_type,
            self.basal_zone,
            self.apical_zone,
            self.branch_count,
            self.growth_rate,
            self.radius,
            self.branching_angle,
            self.life_time,
            self.maximal_length(),
        )
    }
}
