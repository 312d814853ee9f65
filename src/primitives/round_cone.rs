//! Round cone SDF
//!
//! Convex hull of two spheres: radius `ra` at `a`, radius `rb` at `b`.
//! No flat caps.
//!
//! Based on Inigo Quilez's arbitrary-axis sdRoundCone formula.

use glam::Vec3;

use super::sdf_sphere_at;

/// Exact SDF for a round cone between two arbitrary points
///
/// Similar triangles: the tangent line touching both spheres has slope set
/// by `ra - rb` over the axis length. Comparing the query's axial offset
/// against that slope picks the region:
/// - past the tangent point at `b`: distance to sphere `b`
/// - before the tangent point at `a`: distance to sphere `a`
/// - otherwise: distance to the lateral tangent surface
///
/// All comparisons are done on quantities scaled by `|b - a|^2` so only one
/// square root is taken per query.
///
/// When one sphere swallows the other (`|ra - rb| >= |b - a|`) the tangent
/// surface does not exist; the distance is then the nearer of the two
/// sphere distances, which is the enclosing sphere.
#[inline(always)]
pub fn sdf_round_cone(p: Vec3, a: Vec3, b: Vec3, ra: f32, rb: f32) -> f32 {
    let ba = b - a;
    let l2 = ba.dot(ba);
    let rr = ra - rb;
    let a2 = l2 - rr * rr;
    if a2 <= 0.0 {
        return sdf_sphere_at(p, a, ra).min(sdf_sphere_at(p, b, rb));
    }
    let il2 = 1.0 / l2;

    let pa = p - a;
    let y = pa.dot(ba);
    let z = y - l2;
    let x2 = (pa * l2 - ba * y).length_squared();
    let y2 = y * y * l2;
    let z2 = z * z * l2;

    let k = rr.signum() * rr * rr * x2;
    if z.signum() * a2 * z2 > k {
        return (x2 + z2).sqrt() * il2 - rb;
    }
    if y.signum() * a2 * y2 < k {
        return (x2 + y2).sqrt() * il2 - ra;
    }
    ((x2 * a2 * il2).sqrt() + y * rr) * il2 - ra
}
