use approx::assert_relative_eq;

use crate::spacing::SpacingShape;

const SHAPES: [SpacingShape; 5] = [
    SpacingShape::Uniform,
    SpacingShape::LinearIncreasing,
    SpacingShape::LinearDecreasing,
    SpacingShape::ExponentialIncreasing,
    SpacingShape::ExponentialDecreasing,
];

#[test]
fn uniform_repeats_the_mean() {
    let means = SpacingShape::Uniform.positional_means(1.5, 4);
    assert_eq!(means, vec![1.5, 1.5, 1.5, 1.5]);
}

#[test]
fn every_shape_preserves_the_total() {
    for shape in SHAPES {
        for count in [2, 3, 7, 20] {
            let means = shape.positional_means(0.8, count);
            assert_eq!(means.len(), count);
            assert_relative_eq!(
                means.iter().sum::<f64>(),
                0.8 * count as f64,
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn linear_increasing_is_strictly_increasing_with_configured_mean() {
    let means = SpacingShape::LinearIncreasing.positional_means(1.0, 4);
    assert!(
        means.windows(2).all(|w| w[1] > w[0]),
        "means {:?} should be strictly increasing",
        means
    );
    assert_relative_eq!(means.iter().sum::<f64>() / 4.0, 1.0, epsilon = 1e-12);
    assert_relative_eq!(means[0], 0.5);
    assert_relative_eq!(means[3], 1.5);
}

#[test]
fn linear_decreasing_mirrors_increasing() {
    let increasing = SpacingShape::LinearIncreasing.positional_means(2.0, 5);
    let mut decreasing = SpacingShape::LinearDecreasing.positional_means(2.0, 5);
    decreasing.reverse();
    assert_eq!(increasing, decreasing);
}

#[test]
fn exponential_means_form_a_geometric_progression() {
    let means = SpacingShape::ExponentialIncreasing.positional_means(1.0, 6);
    assert!(means.windows(2).all(|w| w[1] > w[0]));

    let first_ratio = means[1] / means[0];
    for window in means.windows(2) {
        assert_relative_eq!(window[1] / window[0], first_ratio, epsilon = 1e-9);
    }

    // Same first-to-last span as the linear ramp.
    assert_relative_eq!(means[5] / means[0], 3.0, epsilon = 1e-9);
}

#[test]
fn exponential_decreasing_mirrors_increasing() {
    let increasing = SpacingShape::ExponentialIncreasing.positional_means(1.0, 5);
    let mut decreasing = SpacingShape::ExponentialDecreasing.positional_means(1.0, 5);
    decreasing.reverse();
    assert_eq!(increasing, decreasing);
}

#[test]
fn degenerate_counts() {
    for shape in SHAPES {
        assert!(shape.positional_means(1.0, 0).is_empty());
        assert_eq!(shape.positional_means(1.0, 1), vec![1.0]);
    }
}

#[test]
fn wire_codes_round_trip() {
    for shape in SHAPES {
        assert_eq!(SpacingShape::from_code(shape.code()), Ok(shape));
    }
    assert!(SpacingShape::from_code(5).is_err());
}
