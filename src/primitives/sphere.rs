//! Sphere primitive SDF
//!
//! The only primitive whose distance is a single expression.

use glam::Vec3;

/// Signed distance to a sphere at an arbitrary center
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `center` - Sphere center
/// * `radius` - Sphere radius
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_sphere_at(point: Vec3, center: Vec3, radius: f32) -> f32 {
    (point - center).length() - radius
}
