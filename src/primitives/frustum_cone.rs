//! Frustum cone SDF
//!
//! Truncated cone between two arbitrary axis points, flat caps at both ends.
//! Disc of radius `ra` at `a`, radius `rb` at `b`.
//!
//! Based on Inigo Quilez's sdCappedCone formula, arbitrary-axis form.

use glam::Vec3;

/// Exact SDF for a frustum cone with flat caps
///
/// The query is decomposed into `t`, the axial coordinate normalized so that
/// `a` is 0 and `b` is 1, and `x`, the distance from the axis line. Two
/// candidate closest points are compared in that 2D half-plane:
/// - `ca`: the nearer cap disc
/// - `cb`: the sloped lateral segment, clamped to its two rims
///
/// The point is inside iff it is between the caps and behind the lateral
/// line. With `ra == rb` this is the exact capped-cylinder distance.
///
/// Points on the axis: `x` is computed from a difference of squares that can
/// round below zero, so the radicand is clamped and such points get `x = 0`.
#[inline(always)]
pub fn sdf_frustum_cone(p: Vec3, a: Vec3, b: Vec3, ra: f32, rb: f32) -> f32 {
    let ba = b - a;
    let pa = p - a;
    let rba = rb - ra;
    let baba = ba.dot(ba);
    let papa = pa.dot(pa);
    let paba = pa.dot(ba) / baba;

    let x = (papa - paba * paba * baba).max(0.0).sqrt();

    // Cap: radial overshoot past the nearer rim, axial offset past the nearer cap
    let cap_r = if paba < 0.5 { ra } else { rb };
    let cax = (x - cap_r).max(0.0);
    let cay = (paba - 0.5).abs() - 0.5;

    // Lateral: project onto the slant segment
    let k = rba * rba + baba;
    let f = ((rba * (x - ra) + paba * baba) / k).clamp(0.0, 1.0);
    let cbx = x - ra - f * rba;
    let cby = paba - f;

    let s = if cbx < 0.0 && cay < 0.0 { -1.0 } else { 1.0 };
    s * (cax * cax + cay * cay * baba)
        .min(cbx * cbx + cby * cby * baba)
        .sqrt()
}
