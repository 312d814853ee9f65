//! Common test helpers for sdflit integration tests

#![allow(dead_code)]

use sdflit::prelude::*;

// ============================================================================
// Standard test shapes
// ============================================================================

/// Unit sphere at origin
pub fn test_sphere() -> SdfNode {
    SdfNode::sphere(Vec3::ZERO, 1.0).unwrap()
}

/// Frustum along +Z: radius 2 at the origin, radius 1 at z = 2
pub fn test_frustum() -> SdfNode {
    SdfNode::frustum_cone(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 2.0, 1.0).unwrap()
}

/// Round cone along +Z: radius 2 at the origin, radius 1 at z = 2
pub fn test_round_cone() -> SdfNode {
    SdfNode::round_cone(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 2.0, 1.0).unwrap()
}

/// Scene holding one white unit sphere on the given background
pub fn white_sphere_scene(background: Vec3) -> ObjectsScene {
    let mut scene = ObjectsScene::new();
    scene.add_object(SdfObject::new(test_sphere(), Material::colored(Vec3::ONE)));
    scene.set_background(background);
    scene
}

// ============================================================================
// Standard test points
// ============================================================================

/// Generate cell-center points in [-2, 2]^3
pub fn test_grid_points(resolution: usize) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(resolution * resolution * resolution);
    let step = 4.0 / resolution as f32;
    for i in 0..resolution {
        for j in 0..resolution {
            for k in 0..resolution {
                points.push(Vec3::new(
                    -2.0 + (i as f32 + 0.5) * step,
                    -2.0 + (j as f32 + 0.5) * step,
                    -2.0 + (k as f32 + 0.5) * step,
                ));
            }
        }
    }
    points
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}
