//! Intersection operation for SDFs

/// Intersection of two SDFs
///
/// # Returns
/// Maximum of the two distances
#[inline(always)]
pub fn sdf_intersection(d1: f32, d2: f32) -> f32 {
    d1.max(d2)
}
