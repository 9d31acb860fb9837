//! Environment couplings for plant organ growth.
//!
//! Organ parameter sets hold shared handles to three kinds of capability,
//! wired up once per organism and consumed by the surrounding growth loop:
//!
//! - [`tropism`]: stochastic growth-direction models.
//! - [`growth`]: stateless age-to-length growth functions.
//! - [`soil`]: position-dependent environment multipliers.
//!
//! Each capability is a trait with a small closed set of concrete variants
//! plus a user-supplied-function variant, shared by reference (`Arc`) with
//! no single owner.

pub mod growth;
pub mod soil;
pub mod tropism;

#[cfg(test)]
mod tropism_test;

pub use growth::{GrowthFunction, GrowthKind, LinearGrowth, NegativeExponentialGrowth};
pub use soil::{DepthBands, FnScale, SoilLookup, UniformScale};
pub use tropism::{FnTropism, RandomDeflection, StraightTropism, Tropism};
