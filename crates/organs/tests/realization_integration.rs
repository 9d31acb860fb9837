//! Integration tests for the registry-driven realization flow.
//!
//! These tests exercise the path the surrounding simulator takes: register
//! parameter sets for an organism, realize a parent organ, dice successor
//! types at its branch points, and realize the chosen laterals.

use std::sync::Arc;

use nalgebra::Point3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use organs::{
    OrganTypeParameters, OrganismId, OrganismRegistry, SpacingShape, SubTypeId, SuccessorTable,
    TraitDistribution,
};

const TAPROOT: SubTypeId = SubTypeId(1);
const LONG_LATERAL: SubTypeId = SubTypeId(2);
const SHORT_LATERAL: SubTypeId = SubTypeId(3);

fn build_registry(organism: OrganismId) -> OrganismRegistry {
    let mut taproot = OrganTypeParameters::new(TAPROOT, organism);
    taproot.name = "taproot".to_string();
    taproot.basal_zone = TraitDistribution::new(2.0, 0.3);
    taproot.apical_zone = TraitDistribution::new(5.0, 0.5);
    taproot.lateral_spacing = TraitDistribution::new(1.0, 0.2);
    taproot.branch_count = TraitDistribution::new(8.0, 2.0);
    taproot.spacing_shape = SpacingShape::LinearIncreasing;
    taproot.successors = SuccessorTable::new(
        vec![LONG_LATERAL, SHORT_LATERAL],
        vec![0.7, 0.3],
    )
    .unwrap();

    let mut long_lateral = OrganTypeParameters::new(LONG_LATERAL, organism);
    long_lateral.name = "long lateral".to_string();
    long_lateral.apical_zone = TraitDistribution::new(3.0, 0.4);

    let mut short_lateral = OrganTypeParameters::new(SHORT_LATERAL, organism);
    short_lateral.name = "short lateral".to_string();
    short_lateral.apical_zone = TraitDistribution::new(0.8, 0.1);

    let mut registry = OrganismRegistry::new();
    let catalog = registry.register(organism);
    catalog.insert(Arc::new(taproot));
    catalog.insert(Arc::new(long_lateral));
    catalog.insert(Arc::new(short_lateral));
    registry
}

#[test]
fn parent_to_lateral_flow() {
    let organism = OrganismId::from_seed_name("integration-plant");
    let registry = build_registry(organism);
    let mut rng = ChaChaRng::seed_from_u64(organism.seed());

    let catalog = registry.get(organism).expect("organism must be registered");
    let taproot_params = catalog.get(TAPROOT).expect("taproot must be registered");
    let parent = taproot_params.realize(&mut rng);

    assert_eq!(
        parent.lateral_spacings.len(),
        (parent.branch_count as usize).saturating_sub(1)
    );
    assert!(parent.maximal_length() > 0.0);

    // Walk the branch points down the taproot and grow a lateral at each.
    let mut depth = -parent.basal_zone;
    let mut laterals = 0;
    for gap in &parent.lateral_spacings {
        let position = Point3::new(0.0, 0.0, depth);
        if let Some(sub_type) = taproot_params.choose_successor(&position, &mut rng) {
            let lateral_params = catalog
                .get(sub_type)
                .expect("every successor subtype must resolve through the catalog");
            let lateral = lateral_params.realize(&mut rng);
            assert_eq!(lateral.sub_type, sub_type);
            assert!(lateral.maximal_length() >= 0.0);
            laterals += 1;
        }
        depth -= gap;
    }

    assert_eq!(
        laterals,
        parent.lateral_spacings.len(),
        "a neutral environment must grow a lateral at every branch point"
    );
}

#[test]
fn organism_seed_makes_the_whole_flow_reproducible() {
    let organism = OrganismId::from_seed_name("integration-plant");
    let registry = build_registry(organism);
    let catalog = registry.get(organism).unwrap();
    let taproot_params = catalog.get(TAPROOT).unwrap();

    let mut rng_a = ChaChaRng::seed_from_u64(organism.seed());
    let mut rng_b = ChaChaRng::seed_from_u64(organism.seed());

    let parent_a = taproot_params.realize(&mut rng_a);
    let parent_b = taproot_params.realize(&mut rng_b);
    assert_eq!(parent_a, parent_b);

    let position = Point3::new(0.0, 0.0, -3.0);
    assert_eq!(
        taproot_params.choose_successor(&position, &mut rng_a),
        taproot_params.choose_successor(&position, &mut rng_b)
    );
}

#[test]
fn successor_frequencies_match_the_table_through_the_full_stack() {
    let organism = OrganismId::from_seed_name("integration-plant");
    let registry = build_registry(organism);
    let taproot_params = registry.get(organism).unwrap().get(TAPROOT).unwrap().clone();

    let mut rng = ChaChaRng::seed_from_u64(42);
    let position = Point3::new(0.0, 0.0, -5.0);

    let n = 10_000;
    let mut long = 0usize;
    for _ in 0..n {
        match taproot_params.choose_successor(&position, &mut rng) {
            Some(id) if id == LONG_LATERAL => long += 1,
            Some(id) if id == SHORT_LATERAL => {}
            other => panic!("unexpected selection {:?}", other),
        }
    }

    let observed = long as f64 / n as f64;
    assert!(
        (observed - 0.7).abs() < 0.02,
        "long-lateral frequency {} should be within ±2% of 0.7",
        observed
    );
}
