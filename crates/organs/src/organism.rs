//! Organism identity and the per-organism parameter registry.
//!
//! Parameter sets belong to an organism but must not own it; the
//! back-reference is a non-owning [`OrganismId`] resolved through an
//! explicit [`OrganismRegistry`]. Each organism maps organ subtypes to
//! their shared parameter sets in a [`ParameterCatalog`], which is how the
//! simulator turns a successor choice into the parameter set for the next
//! `realize()` call.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parameter::OrganTypeParameters;

/// Identifier of an organ subtype (a named category of organ sharing one
/// parameter set, e.g. a specific stem variety).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubTypeId(pub u32);

impl std::fmt::Display for SubTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subtype {}", self.0)
    }
}

/// Non-owning identifier of an organism.
///
/// UUIDs are JSON-safe (serialized as strings) and double as a
/// deterministic RNG seed source via [`OrganismId::seed`]. The default id
/// is the nil UUID, meaning "not attached to any registry".
///
/// # Example
/// ```
/// use organs::organism::OrganismId;
///
/// let a = OrganismId::from_seed_name("maize-plot-3");
/// let b = OrganismId::from_seed_name("maize-plot-3");
/// // Same seed name produces the same id and the same seed.
/// assert_eq!(a, b);
/// assert_eq!(a.seed(), b.seed());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrganismId(Uuid);

impl OrganismId {
    /// Create a fresh random id.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a deterministic id from a human-readable name.
    ///
    /// The same name always produces the same id (and thus the same RNG
    /// seed), which makes whole-organism generation reproducible from a
    /// label.
    pub fn from_seed_name(seed_name: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, seed_name.as_bytes()))
    }

    /// Derive a u64 seed for RNG initialization from the first 8 bytes of
    /// the id.
    pub fn seed(&self) -> u64 {
        self.0.as_u64_pair().0
    }

    /// The underlying UUID.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for OrganismId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-organism map from organ subtype to its shared parameter set.
///
/// Parameter sets are handed out as `Arc` clones: every organ of the
/// subtype reads the same immutable description, and the catalog holds no
/// exclusive ownership.
#[derive(Debug, Clone, Default)]
pub struct ParameterCatalog {
    sets: HashMap<SubTypeId, Arc<OrganTypeParameters>>,
}

impl ParameterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter set, keyed by its own subtype. Replaces and
    /// returns any previous set for that subtype.
    pub fn insert(
        &mut self,
        set: Arc<OrganTypeParameters>,
    ) -> Option<Arc<OrganTypeParameters>> {
        self.sets.insert(set.sub_type, set)
    }

    /// Look up the parameter set for a subtype.
    pub fn get(&self, sub_type: SubTypeId) -> Option<&Arc<OrganTypeParameters>> {
        self.sets.get(&sub_type)
    }

    /// All registered subtypes, in ascending id order.
    pub fn sub_types(&self) -> Vec<SubTypeId> {
        let mut ids: Vec<SubTypeId> = self.sets.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Registry resolving organism ids to their parameter catalogs.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use organs::organism::{OrganismId, OrganismRegistry, SubTypeId};
/// use organs::parameter::OrganTypeParameters;
///
/// let mut registry = OrganismRegistry::new();
/// let id = OrganismId::from_seed_name("demo");
///
/// let mut stem = OrganTypeParameters::new(SubTypeId(1), id);
/// stem.name = "stem".to_string();
/// registry.register(id).insert(Arc::new(stem));
///
/// let catalog = registry.get(id).unwrap();
/// assert_eq!(catalog.get(SubTypeId(1)).unwrap().name, "stem");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrganismRegistry {
    organisms: HashMap<OrganismId, ParameterCatalog>,
}

impl OrganismRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the catalog for an organism.
    pub fn register(&mut self, id: OrganismId) -> &mut ParameterCatalog {
        self.organisms.entry(id).or_default()
    }

    /// Resolve an organism id to its catalog, if registered.
    pub fn get(&self, id: OrganismId) -> Option<&ParameterCatalog> {
        self.organisms.get(&id)
    }

    /// Mutable access to an organism's catalog, if registered.
    pub fn get_mut(&mut self, id: OrganismId) -> Option<&mut ParameterCatalog> {
        self.organisms.get_mut(&id)
    }

    /// Remove an organism and return its catalog.
    pub fn remove(&mut self, id: OrganismId) -> Option<ParameterCatalog> {
        self.organisms.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }
}
