//! The serde model of one organ-type definition.
//!
//! Scalar traits are keyed by their short wire names (`lb` basal zone,
//! `la` apical zone, `ln` inter-lateral spacing, `nob` branch count, `r`
//! growth rate, `a` radius, `theta` branching angle, `rlt` life time),
//! each carrying a value and an optional deviation. The spacing shape and
//! growth function travel as their numeric wire codes (`lnf`, `gf`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use organs::organism::{OrganismId, SubTypeId};

/// One scalar trait in a definition: value plus optional deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarEntry {
    pub value: f64,
    #[serde(default)]
    pub dev: f64,
}

impl ScalarEntry {
    pub fn new(value: f64, dev: f64) -> Self {
        Self { value, dev }
    }
}

/// Successor types and their weights, as parallel arrays.
///
/// The arrays are kept parallel on the wire because that is how the
/// upstream parameter files are laid out; their lengths are validated when
/// the document is turned back into a parameter set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessorEntries {
    #[serde(default)]
    pub types: Vec<SubTypeId>,
    #[serde(default)]
    pub weights: Vec<f64>,
}

/// A persisted organ-type definition.
///
/// # Example
/// ```
/// use organ_defs::document::OrganTypeDocument;
///
/// let json = r#"{
///     "subType": 1,
///     "name": "taproot",
///     "organism": "00000000-0000-0000-0000-000000000000",
///     "parameters": { "lb": { "value": 2.0, "dev": 0.4 } },
///     "lnf": 1,
///     "dx": 0.25,
///     "gf": 1,
///     "successors": { "types": [2], "weights": [1.0] }
/// }"#;
/// let doc = OrganTypeDocument::from_json_str(json).unwrap();
/// assert_eq!(doc.name, "taproot");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganTypeDocument {
    /// Subtype the definition describes.
    pub sub_type: SubTypeId,
    /// Human-readable organ name.
    pub name: String,
    /// Owning organism (nil UUID when detached).
    #[serde(default)]
    pub organism: OrganismId,
    /// Scalar traits keyed by wire name.
    #[serde(default)]
    pub parameters: BTreeMap<String, ScalarEntry>,
    /// Spacing-shape wire code (0 uniform .. 4 exponential decreasing).
    #[serde(default)]
    pub lnf: u32,
    /// Maximal segment length hint [cm].
    pub dx: f64,
    /// Growth-function wire code (1 negative exponential, 2 linear).
    pub gf: u32,
    /// Lateral types and emergence weights.
    #[serde(default)]
    pub successors: SuccessorEntries,
}

impl OrganTypeDocument {
    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Parse a definition from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
