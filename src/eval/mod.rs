//! SDF Evaluation
//!
//! Functions for evaluating SDF trees at points.

pub mod parallel;

pub use parallel::{eval_batch, eval_batch_parallel};

use crate::operations::*;
use crate::primitives::*;
use crate::types::SdfNode;
use glam::Vec3;

/// Evaluate an SDF tree at a single point
///
/// Recursively traverses the tree and computes the signed distance.
///
/// # Arguments
/// * `node` - The SDF tree root
/// * `point` - Point to evaluate
///
/// # Returns
/// Signed distance to the surface
#[inline]
pub fn eval(node: &SdfNode, point: Vec3) -> f32 {
    match node {
        // === Primitives (Leaf Nodes) ===
        SdfNode::Sphere { center, radius } => sdf_sphere_at(point, *center, *radius),
        SdfNode::FrustumCone { a, b, ra, rb } => sdf_frustum_cone(point, *a, *b, *ra, *rb),
        SdfNode::RoundCone { a, b, ra, rb } => sdf_round_cone(point, *a, *b, *ra, *rb),

        // === Operations ===
        SdfNode::Union { a, b } => sdf_union(eval(a, point), eval(b, point)),
        SdfNode::Intersection { a, b } => sdf_intersection(eval(a, point), eval(b, point)),
        SdfNode::Subtraction { a, b } => sdf_subtraction(eval(a, point), eval(b, point)),
    }
}

/// Whether `point` is strictly inside the solid (`eval < 0`)
#[inline]
pub fn inside(node: &SdfNode, point: Vec3) -> bool {
    eval(node, point) < 0.0
}

/// Compute the surface normal at a point using central differences
///
/// # Arguments
/// * `node` - The SDF tree
/// * `point` - Point on or near the surface
/// * `epsilon` - Small offset for gradient estimation
///
/// # Returns
/// Normalized surface normal, `+Y` where the gradient vanishes
/// (e.g. the center of a sphere)
#[inline]
pub fn normal(node: &SdfNode, point: Vec3, epsilon: f32) -> Vec3 {
    let grad = gradient(node, point, epsilon);

    let len_sq = grad.length_squared();
    if len_sq < 1e-20 || !len_sq.is_finite() {
        return Vec3::Y;
    }
    grad / len_sq.sqrt()
}

/// Compute the gradient of the SDF at a point
///
/// Similar to normal but not normalized. Magnitude is ~1 wherever the field
/// is an exact distance.
#[inline]
pub fn gradient(node: &SdfNode, point: Vec3, epsilon: f32) -> Vec3 {
    let ex = Vec3::new(epsilon, 0.0, 0.0);
    let ey = Vec3::new(0.0, epsilon, 0.0);
    let ez = Vec3::new(0.0, 0.0, epsilon);

    let inv_2e = 1.0 / (2.0 * epsilon);

    Vec3::new(
        eval(node, point + ex) - eval(node, point - ex),
        eval(node, point + ey) - eval(node, point - ey),
        eval(node, point + ez) - eval(node, point - ez),
    ) * inv_2e
}
