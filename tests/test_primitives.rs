//! Integration tests: primitive distances, CSG algebra and inside tests
//!
//! Reference values for spheres, cones and sphere-minus-sphere.

mod common;

use common::*;
use sdflit::prelude::*;

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn sphere_reference_distances() {
    let sphere = test_sphere();
    assert_close(sphere.distance(Vec3::ZERO), -1.0, 1e-6, "center");
    assert_close(sphere.distance(Vec3::X), 0.0, 1e-6, "surface");
    assert_close(sphere.distance(Vec3::new(2.0, 0.0, 0.0)), 1.0, 1e-6, "outside");

    assert!(sphere.inside(Vec3::ZERO));
    assert!(!sphere.inside(Vec3::X));
    assert!(!sphere.inside(Vec3::new(2.0, 0.0, 0.0)));
}

#[test]
fn sphere_matches_euclidean_everywhere() {
    let center = Vec3::new(1.0, 1.0, 1.0);
    let sphere = SdfNode::sphere(center, 1.0).unwrap();
    for p in test_grid_points(8) {
        assert_close(
            sphere.distance(p),
            (p - center).length() - 1.0,
            1e-6,
            "sphere formula",
        );
    }
    assert!(!sphere.inside(Vec3::ZERO));
    assert!(!sphere.inside(Vec3::X));
}

// ============================================================================
// Subtraction
// ============================================================================

#[test]
fn subtract_reference_values() {
    let s = |x: f32| SdfNode::sphere(Vec3::new(x, 0.0, 0.0), 2.0).unwrap();

    let cut = s(0.0).subtract(s(2.0));
    assert_close(cut.distance(Vec3::X), 1.0, 1e-6, "offset 2 at x=1");

    let cut = s(0.0).subtract(s(3.0));
    assert_close(cut.distance(Vec3::ZERO), -1.0, 1e-6, "offset 3 at origin");
}

#[test]
fn subtract_is_max_of_a_and_negated_b() {
    let a = test_round_cone();
    let b = test_frustum();
    let cut = a.clone().subtract(b.clone());
    for p in test_grid_points(10) {
        assert_eq!(cut.distance(p), a.distance(p).max(-b.distance(p)));
        assert_eq!(cut.inside(p), cut.distance(p) < 0.0);
    }
}

// ============================================================================
// Frustum cone
// ============================================================================

#[test]
fn frustum_reference_values() {
    let cone = test_frustum();
    let distances = [
        (Vec3::new(0.0, 0.0, -1.0), 1.0),
        (Vec3::new(0.0, 0.0, 0.0), 0.0),
        (Vec3::new(0.0, 0.0, 1.0), -1.0),
        (Vec3::new(1.5, 0.0, 1.0), 0.0),
        (Vec3::new(0.0, 0.0, 2.0), 0.0),
        (Vec3::new(0.0, 0.0, 3.0), 1.0),
    ];
    for (p, expected) in distances {
        assert_close(cone.distance(p), expected, 1e-5, &format!("frustum at {:?}", p));
    }

    let inside = [
        (Vec3::new(0.0, 0.0, -1.0), false),
        (Vec3::new(0.0, 0.0, 0.0), false),
        (Vec3::new(0.0, 0.0, 1.0), true),
        (Vec3::new(1.4, 0.0, 1.0), true),
        (Vec3::new(1.5, 0.0, 1.0), false),
        (Vec3::new(0.0, 0.0, 2.0), false),
        (Vec3::new(0.0, 0.0, 3.0), false),
    ];
    for (p, expected) in inside {
        assert_eq!(cone.inside(p), expected, "frustum inside at {:?}", p);
    }
}

#[test]
fn frustum_with_equal_radii_is_a_cylinder() {
    let a = Vec3::new(1.0, -1.0, 0.5);
    let b = Vec3::new(1.0, 2.0, 0.5);
    let radius = 0.75;
    let cylinder = SdfNode::cylinder(a, b, radius).unwrap();

    for p in test_grid_points(9) {
        // Exact capped cylinder along Y
        let q = p - a;
        let radial = Vec3::new(q.x, 0.0, q.z).length() - radius;
        let axial = (q.y - 1.5).abs() - 1.5;
        let outside = Vec3::new(radial.max(0.0), axial.max(0.0), 0.0).length();
        let expected = radial.max(axial).min(0.0) + outside;
        assert_close(cylinder.distance(p), expected, 1e-4, &format!("cylinder at {:?}", p));
    }
}

// ============================================================================
// Round cone
// ============================================================================

#[test]
fn round_cone_reference_values() {
    let cone = test_round_cone();
    let distances = [
        (-2.0, 0.0),
        (-1.0, -1.0),
        (0.0, -2.0),
        (1.0, -1.5),
        (2.0, -1.0),
        (3.0, 0.0),
        (4.0, 1.0),
    ];
    for (z, expected) in distances {
        let p = Vec3::new(0.0, 0.0, z);
        assert_close(cone.distance(p), expected, 1e-5, &format!("round cone at z={}", z));
    }

    let inside = [
        (-2.0, false),
        (-1.0, true),
        (0.0, true),
        (1.0, true),
        (2.0, true),
        (3.0, false),
        (4.0, false),
    ];
    for (z, expected) in inside {
        assert_eq!(cone.inside(Vec3::new(0.0, 0.0, z)), expected, "z={}", z);
    }
}

#[test]
fn round_cone_with_equal_radii_is_a_capsule() {
    let a = Vec3::new(-0.5, 0.2, 0.0);
    let b = Vec3::new(0.8, -0.4, 1.1);
    let radius = 0.6;
    let capsule = SdfNode::capsule(a, b, radius).unwrap();

    for p in test_grid_points(9) {
        let ba = b - a;
        let h = ((p - a).dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
        let expected = (p - a - ba * h).length() - radius;
        assert_close(capsule.distance(p), expected, 1e-4, &format!("capsule at {:?}", p));
    }
}

#[test]
fn cones_are_finite_on_their_axis() {
    let a = Vec3::new(0.3, -0.7, 0.1);
    let b = Vec3::new(-1.9, 2.3, 4.4);
    let frustum = SdfNode::frustum_cone(a, b, 0.9, 0.2).unwrap();
    let round = SdfNode::round_cone(a, b, 0.9, 0.2).unwrap();
    for i in 0..=50 {
        let p = a.lerp(b, i as f32 / 50.0 * 1.6 - 0.3);
        assert!(frustum.distance(p).is_finite(), "frustum NaN at {:?}", p);
        assert!(round.distance(p).is_finite(), "round cone NaN at {:?}", p);
        assert!(normal(&frustum, p, 1e-3).is_finite());
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn degenerate_geometry_is_rejected() {
    assert!(SdfNode::sphere(Vec3::ZERO, 0.0).is_err());
    assert!(SdfNode::frustum_cone(Vec3::ONE, Vec3::ONE, 1.0, 1.0).is_err());
    assert!(SdfNode::round_cone(Vec3::ZERO, Vec3::Z, 1.0, 0.0).is_err());
    let err = SdfNode::frustum_cone(Vec3::ZERO, Vec3::Z, -2.0, 1.0).unwrap_err();
    assert_eq!(err.to_string(), "radius `ra` must be positive, got -2");
}
