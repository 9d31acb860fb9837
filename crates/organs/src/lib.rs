//! Statistical organ-type parameter sets and their realization.
//!
//! An organ type (a stem variety, a lateral root order) is described by
//! [`parameter::OrganTypeParameters`]: a set of (mean, deviation) trait
//! distributions, a spacing shape for inter-branch distances, a weighted
//! successor table for lateral types, and shared capability handles.
//! Realization draws one internally consistent [`organ::RealizedOrgan`]
//! from that description.
//!
//! Main components:
//! - [`sampling`]: Gaussian trait distributions with a non-negative floor.
//! - [`spacing`]: positional trends for inter-lateral distances.
//! - [`successor`]: weighted lateral-type selection.
//! - [`parameter`]: the per-type statistical description.
//! - [`organ`]: the realized, immutable organ instance.
//! - [`organism`]: organism identity and the parameter-set registry.

pub mod organ;
pub mod organism;
pub mod parameter;
pub mod sampling;
pub mod spacing;
pub mod successor;

#[cfg(test)]
mod spacing_test;

pub use organ::RealizedOrgan;
pub use organism::{OrganismId, OrganismRegistry, ParameterCatalog, SubTypeId};
pub use parameter::{OrganCallbacks, OrganTypeParameters};
pub use sampling::{sample_gaussian, TraitDistribution};
pub use spacing::SpacingShape;
pub use successor::SuccessorTable;
