//! Parameter-definition persistence.
//!
//! Organ-type parameter sets round-trip through a structured JSON document.
//! Instead of runtime reflection, a static field-descriptor table maps the
//! wire name of every scalar trait (`lb`, `la`, `ln`, ...) to its accessor
//! and mutator; both save and load walk the same table, so the two
//! directions cannot drift apart.
//!
//! Capability handles are wiring, not data: only the growth-function code
//! is stored, and the matching capability is re-instantiated on load.
//! Tropism and soil handles are reattached by the simulator afterwards.

pub mod descriptor;
pub mod document;

#[cfg(test)]
mod descriptor_test;

pub use descriptor::{
    from_document, load_str, save_string, to_document, FieldDescriptor, SCALAR_FIELDS,
};
pub use document::{OrganTypeDocument, ScalarEntry, SuccessorEntries};
