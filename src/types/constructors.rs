//! Primitive constructors for SdfNode
//!
//! Every constructor validates its geometry and returns
//! [`SdfError`](crate::error::SdfError) on degenerate input, so a built
//! node never produces NaN for a finite query.

use glam::Vec3;

use super::SdfNode;
use crate::error::{check_finite_vec, check_radius, Result, SdfError};

impl SdfNode {
    // === Primitive constructors ===

    /// Create a sphere
    ///
    /// Fails when `radius <= 0` or any argument is not finite.
    pub fn sphere(center: Vec3, radius: f32) -> Result<Self> {
        check_finite_vec("center", center)?;
        check_radius("radius", radius)?;
        Ok(SdfNode::Sphere { center, radius })
    }

    /// Create a frustum cone: disc radius `ra` at `a`, `rb` at `b`, flat caps
    ///
    /// Fails on non-positive radii or when `a == b`.
    pub fn frustum_cone(a: Vec3, b: Vec3, ra: f32, rb: f32) -> Result<Self> {
        check_axis(a, b)?;
        check_radius("ra", ra)?;
        check_radius("rb", rb)?;
        Ok(SdfNode::FrustumCone { a, b, ra, rb })
    }

    /// Create a round cone: convex hull of spheres `(a, ra)` and `(b, rb)`
    ///
    /// Fails on non-positive radii or when `a == b`. If one sphere encloses
    /// the other the node is still valid and behaves as the larger sphere.
    pub fn round_cone(a: Vec3, b: Vec3, ra: f32, rb: f32) -> Result<Self> {
        check_axis(a, b)?;
        check_radius("ra", ra)?;
        check_radius("rb", rb)?;
        if (ra - rb).abs() >= a.distance(b) {
            tracing::debug!(?a, ?b, ra, rb, "round cone degenerates to its larger sphere");
        }
        Ok(SdfNode::RoundCone { a, b, ra, rb })
    }

    /// Create a capsule, the `ra == rb` round cone
    pub fn capsule(a: Vec3, b: Vec3, radius: f32) -> Result<Self> {
        Self::round_cone(a, b, radius, radius)
    }

    /// Create a capped cylinder, the `ra == rb` frustum cone
    pub fn cylinder(a: Vec3, b: Vec3, radius: f32) -> Result<Self> {
        Self::frustum_cone(a, b, radius, radius)
    }
}

fn check_axis(a: Vec3, b: Vec3) -> Result<()> {
    check_finite_vec("a", a)?;
    check_finite_vec("b", b)?;
    if a == b {
        return Err(SdfError::DegenerateAxis { point: a.to_array() });
    }
    Ok(())
}
