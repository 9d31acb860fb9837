//! The field-descriptor table and document conversions.
//!
//! Every scalar trait of a parameter set appears exactly once in
//! [`SCALAR_FIELDS`], as a wire name with an accessor and a mutator. Save
//! walks the table to emit entries; load walks the same table to apply
//! them. Adding a trait means adding one table row.

use plant_env::growth::GrowthKind;

use organs::parameter::OrganTypeParameters;
use organs::sampling::TraitDistribution;
use organs::spacing::SpacingShape;
use organs::successor::SuccessorTable;

use crate::document::{OrganTypeDocument, ScalarEntry, SuccessorEntries};

/// Accessor/mutator pair for one scalar trait of a parameter set.
pub struct FieldDescriptor {
    /// Wire name used in definition documents.
    pub name: &'static str,
    /// Read the trait distribution from a parameter set.
    pub get: fn(&OrganTypeParameters) -> TraitDistribution,
    /// Write the trait distribution into a parameter set.
    pub set: fn(&mut OrganTypeParameters, TraitDistribution),
}

/// The scalar traits of a parameter set, in wire order.
pub const SCALAR_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "lb",
        get: |p| p.basal_zone,
        set: |p, d| p.basal_zone = d,
    },
    FieldDescriptor {
        name: "la",
        get: |p| p.apical_zone,
        set: |p, d| p.apical_zone = d,
    },
    FieldDescriptor {
        name: "ln",
        get: |p| p.lateral_spacing,
        set: |p, d| p.lateral_spacing = d,
    },
    FieldDescriptor {
        name: "nob",
        get: |p| p.branch_count,
        set: |p, d| p.branch_count = d,
    },
    FieldDescriptor {
        name: "r",
        get: |p| p.growth_rate,
        set: |p, d| p.growth_rate = d,
    },
    FieldDescriptor {
        name: "a",
        get: |p| p.radius,
        set: |p, d| p.radius = d,
    },
    FieldDescriptor {
        name: "theta",
        get: |p| p.branching_angle,
        set: |p, d| p.branching_angle = d,
    },
    FieldDescriptor {
        name: "rlt",
        get: |p| p.life_time,
        set: |p, d| p.life_time = d,
    },
];

/// Turn a parameter set into its definition document.
pub fn to_document(params: &OrganTypeParameters) -> OrganTypeDocument {
    let parameters = SCALAR_FIELDS
        .iter()
        .map(|field| {
            let dist = (field.get)(params);
            (field.name.to_string(), ScalarEntry::new(dist.mean, dist.dev))
        })
        .collect();

    OrganTypeDocument {
        sub_type: params.sub_type,
        name: params.name.clone(),
        organism: params.organism,
        parameters,
        lnf: params.spacing_shape.code(),
        dx: params.dx,
        gf: params.growth_kind.code(),
        successors: SuccessorEntries {
            types: params.successors.types().to_vec(),
            weights: params.successors.weights().to_vec(),
        },
    }
}

/// Build a parameter set from a definition document.
///
/// Scalar entries with unknown wire names are ignored and missing entries
/// keep their defaults. Mismatched successor array lengths and unknown
/// `lnf`/`gf` codes are rejected here, never deferred to simulation time.
///
/// The growth capability is re-instantiated from the `gf` code; tropism
/// and soil handles stay at their neutral defaults for the simulator to
/// replace.
pub fn from_document(doc: &OrganTypeDocument) -> Result<OrganTypeParameters, String> {
    let mut params = OrganTypeParameters::new(doc.sub_type, doc.organism);
    params.name = doc.name.clone();

    for field in SCALAR_FIELDS {
        if let Some(entry) = doc.parameters.get(field.name) {
            (field.set)(&mut params, TraitDistribution::new(entry.value, entry.dev));
        }
    }

    params.spacing_shape = SpacingShape::from_code(doc.lnf)?;
    params.dx = doc.dx;
    params.growth_kind = GrowthKind::from_code(doc.gf)?;
    params.callbacks.growth = params.growth_kind.instantiate();
    params.successors = SuccessorTable::new(
        doc.successors.types.clone(),
        doc.successors.weights.clone(),
    )?;

    Ok(params)
}

/// Serialize a parameter set to pretty-printed JSON.
pub fn save_string(params: &OrganTypeParameters) -> Result<String, String> {
    to_document(params).to_json_string()
}

/// Load a parameter set from JSON text.
///
/// # Example
/// ```
/// use organs::parameter::OrganTypeParameters;
/// use organ_defs::{load_str, save_string};
///
/// let params = OrganTypeParameters::default();
/// let json = save_string(&params).unwrap();
/// let restored = load_str(&json).unwrap();
/// assert_eq!(restored.sub_type, params.sub_type);
/// ```
pub fn load_str(json: &str) -> Result<OrganTypeParameters, String> {
    from_document(&OrganTypeDocument::from_json_str(json)?)
}
