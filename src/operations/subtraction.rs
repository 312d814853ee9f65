//! Subtraction operation for SDFs

/// Subtraction of B from A (A minus B)
///
/// Inside the result means inside A (`d1 < 0`) and outside B (`-d2 < 0`);
/// the max enforces both. The value is a bound, not the exact Euclidean
/// distance, near the cut surface.
///
/// # Returns
/// max(d1, -d2)
#[inline(always)]
pub fn sdf_subtraction(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}
