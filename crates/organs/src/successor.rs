//! Weighted lateral-type selection.
//!
//! When an organ sprouts a lateral, the successor table decides which
//! subtype emerges. Selection is weighted discrete sampling over the
//! declared types, optionally damped by the environment: a scale of 0 at
//! the branch point means nothing grows there at all.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::organism::SubTypeId;

/// Tolerance when deciding whether declared weights already sum to 1.
const WEIGHT_EPSILON: f64 = 1e-9;

/// Scaled totals at or below this select nothing.
const MIN_TOTAL_WEIGHT: f64 = 1e-12;

/// Ordered successor types with parallel selection weights.
///
/// The two sequences must have equal length; this is checked once at
/// construction and never again. Negative weights are clamped to 0 and a
/// positive total is renormalized to 1, so a table built from raw counts
/// works as well as one built from probabilities. An empty table (or one
/// whose weights are all 0) never selects anything, which marks a
/// terminal branch point.
///
/// # Example
/// ```
/// use organs::organism::SubTypeId;
/// use organs::successor::SuccessorTable;
///
/// let table = SuccessorTable::new(
///     vec![SubTypeId(2), SubTypeId(3)],
///     vec![7.0, 3.0],
/// ).unwrap();
/// // Raw counts are normalized to probabilities.
/// assert!((table.weights()[0] - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuccessorTable {
    types: Vec<SubTypeId>,
    weights: Vec<f64>,
}

impl SuccessorTable {
    /// Build a table from parallel type and weight sequences.
    ///
    /// # Errors
    /// A length mismatch between the sequences is a configuration fault
    /// and is rejected here rather than at selection time.
    pub fn new(types: Vec<SubTypeId>, weights: Vec<f64>) -> Result<Self, String> {
        if types.len() != weights.len() {
            return Err(format!(
                "{} successor types but {} weights",
                types.len(),
                weights.len()
            ));
        }

        let mut weights: Vec<f64> = weights.into_iter().map(|w| w.max(0.0)).collect();
        let total: f64 = weights.iter().sum();
        if total > WEIGHT_EPSILON && (total - 1.0).abs() > WEIGHT_EPSILON {
            for w in &mut weights {
                *w /= total;
            }
        }

        Ok(Self { types, weights })
    }

    /// A table with no successors ("no laterals").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pick a successor subtype, with every weight multiplied by the
    /// environment `scale` at the branch point.
    ///
    /// Draws a uniform value in [0, total) and walks the cumulative
    /// weights in declaration order, returning the first type whose
    /// cumulative weight exceeds the draw. Returns `None` when the table
    /// is empty or the scaled total is (near) zero: "nothing grows
    /// here", deliberately distinct from falling back to the first type.
    pub fn choose(&self, scale: f64, rng: &mut ChaChaRng) -> Option<SubTypeId> {
        let scale = scale.max(0.0);
        let total: f64 = self.weights.iter().map(|w| w * scale).sum();
        if total <= MIN_TOTAL_WEIGHT {
            return None;
        }

        let roll: f64 = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        for (sub_type, weight) in self.types.iter().zip(&self.weights) {
            cumulative += weight * scale;
            if roll < cumulative {
                return Some(*sub_type);
            }
        }

        // Floating-point slack can leave the roll a hair past the final
        // cumulative sum.
        self.types.last().copied()
    }

    /// Declared successor subtypes, in declaration order.
    pub fn types(&self) -> &[SubTypeId] {
        &self.types
    }

    /// Normalized selection weights, parallel to [`SuccessorTable::types`].
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
