use organs::organism::{OrganismId, SubTypeId};
use organs::parameter::OrganTypeParameters;
use organs::sampling::TraitDistribution;

use crate::descriptor::{from_document, to_document, SCALAR_FIELDS};
use crate::document::ScalarEntry;

#[test]
fn the_table_names_every_scalar_trait_once() {
    let expected = ["lb", "la", "ln", "nob", "r", "a", "theta", "rlt"];
    let names: Vec<&str> = SCALAR_FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn every_descriptor_reads_back_what_it_wrote() {
    for (i, field) in SCALAR_FIELDS.iter().enumerate() {
        let mut params = OrganTypeParameters::default();
        let dist = TraitDistribution::new(10.0 + i as f64, 0.25 * i as f64);
        (field.set)(&mut params, dist);
        assert_eq!(
            (field.get)(&params),
            dist,
            "descriptor {} must be a matching accessor/mutator pair",
            field.name
        );
    }
}

#[test]
fn descriptors_touch_distinct_fields() {
    // Writing through one descriptor must not affect any other.
    for (i, field) in SCALAR_FIELDS.iter().enumerate() {
        let defaults = OrganTypeParameters::default();
        let mut params = OrganTypeParameters::default();
        (field.set)(&mut params, TraitDistribution::new(123.0, 4.0));
        for (j, other) in SCALAR_FIELDS.iter().enumerate() {
            if i != j {
                assert_eq!(
                    (other.get)(&params),
                    (other.get)(&defaults),
                    "setting {} must leave {} untouched",
                    field.name,
                    other.name
                );
            }
        }
    }
}

#[test]
fn documents_carry_every_table_entry() {
    let params = OrganTypeParameters::new(SubTypeId(4), OrganismId::from_seed_name("doc"));
    let doc = to_document(&params);
    for field in SCALAR_FIELDS {
        assert!(
            doc.parameters.contains_key(field.name),
            "document must carry an entry for {}",
            field.name
        );
    }
}

#[test]
fn unknown_scalar_entries_are_ignored_on_load() {
    let params = OrganTypeParameters::default();
    let mut doc = to_document(&params);
    doc.parameters
        .insert("tropismN".to_string(), ScalarEntry::new(2.0, 0.0));

    let restored = from_document(&doc).unwrap();
    assert_eq!(restored.basal_zone, params.basal_zone);
}

#[test]
fn missing_scalar_entries_keep_defaults() {
    let params = OrganTypeParameters::default();
    let mut doc = to_document(&params);
    doc.parameters.remove("la");

    let restored = from_document(&doc).unwrap();
    assert_eq!(restored.apical_zone, TraitDistribution::fixed(10.0));
}

#[test]
fn mismatched_successor_arrays_fail_to_load() {
    let mut doc = to_document(&OrganTypeParameters::default());
    doc.successors.types = vec![SubTypeId(2), SubTypeId(3)];
    doc.successors.weights = vec![1.0];
    assert!(from_document(&doc).is_err());
}

#[test]
fn unknown_shape_and_growth_codes_fail_to_load() {
    let mut doc = to_document(&OrganTypeParameters::default());
    doc.lnf = 9;
    assert!(from_document(&doc).is_err());

    let mut doc = to_document(&OrganTypeParameters::default());
    doc.gf = 0;
    assert!(from_document(&doc).is_err());
}

#[test]
fn load_reinstantiates_the_growth_capability() {
    let mut doc = to_document(&OrganTypeParameters::default());
    doc.gf = 2;
    let restored = from_document(&doc).unwrap();
    assert_eq!(restored.callbacks.growth.name(), "linear");
}
