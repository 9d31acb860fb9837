use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::tropism::{FnTropism, RandomDeflection, StraightTropism, Tropism};

#[test]
fn straight_tropism_preserves_heading() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let tropism = StraightTropism;
    let dir = tropism.direction(&Point3::origin(), &Vector3::new(0.0, 0.0, -2.0), &mut rng);
    assert_relative_eq!(dir.x, 0.0);
    assert_relative_eq!(dir.y, 0.0);
    assert_relative_eq!(dir.z, -1.0);
}

#[test]
fn deflection_returns_unit_vectors() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let tropism = RandomDeflection::new(0.3);
    for _ in 0..200 {
        let dir = tropism.direction(&Point3::origin(), &Vector3::new(1.0, 1.0, -1.0), &mut rng);
        assert_relative_eq!(dir.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn deflection_with_zero_sigma_is_straight() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let tropism = RandomDeflection::new(0.0);
    let dir = tropism.direction(&Point3::origin(), &Vector3::z(), &mut rng);
    assert_relative_eq!(dir.z, 1.0);
}

#[test]
fn deflection_varies_between_draws() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let tropism = RandomDeflection::new(0.5);
    let first = tropism.direction(&Point3::origin(), &Vector3::z(), &mut rng);
    let second = tropism.direction(&Point3::origin(), &Vector3::z(), &mut rng);
    assert!(
        (first - second).norm() > 1e-9,
        "two draws should deflect differently"
    );
}

#[test]
fn deflection_stays_near_heading_for_small_sigma() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let tropism = RandomDeflection::new(0.05);
    let mut mean_dot = 0.0;
    let n = 500;
    for _ in 0..n {
        let dir = tropism.direction(&Point3::origin(), &Vector3::z(), &mut rng);
        mean_dot += dir.dot(&Vector3::z());
    }
    mean_dot /= n as f64;
    assert!(
        mean_dot > 0.99,
        "small-sigma deflections should hug the heading, mean dot {}",
        mean_dot
    );
}

#[test]
fn deflection_works_for_headings_along_every_axis() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let tropism = RandomDeflection::new(0.2);
    for heading in [Vector3::x(), Vector3::y(), Vector3::z(), -Vector3::x()] {
        let dir = tropism.direction(&Point3::origin(), &heading, &mut rng);
        assert_relative_eq!(dir.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn zero_heading_is_returned_unchanged() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let tropism = RandomDeflection::new(0.3);
    let dir = tropism.direction(&Point3::origin(), &Vector3::zeros(), &mut rng);
    assert_eq!(dir, Vector3::zeros());
}

#[test]
fn fn_tropism_normalizes_its_result() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let tropism = FnTropism::new(|_, _| Vector3::new(0.0, 3.0, -4.0));
    let dir = tropism.direction(&Point3::origin(), &Vector3::z(), &mut rng);
    assert_relative_eq!(dir.y, 0.6);
    assert_relative_eq!(dir.z, -0.8);
}
