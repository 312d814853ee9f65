//! Core types
//!
//! Defines the SdfNode tree structure, the `DistanceField` capability and
//! the bounding box container.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{Result, SdfError};

mod constructors;
mod containers;
mod operations;

pub use containers::Aabb;

/// Anything that answers signed distance queries
///
/// `inside` is always derived from `distance`; implementors only provide
/// the distance. Implementations must be pure so queries can run from any
/// number of threads.
pub trait DistanceField: Send + Sync {
    /// Signed distance from `point` to the boundary, negative inside
    fn distance(&self, point: Vec3) -> f32;

    /// Whether `point` lies strictly inside the solid
    #[inline]
    fn inside(&self, point: Vec3) -> bool {
        self.distance(point) < 0.0
    }
}

/// Signed Distance Function Node
///
/// Represents a node in the SDF tree. Each node is either:
/// - A primitive shape (sphere, frustum cone, round cone)
/// - An operation combining two shapes (union, intersection, subtraction)
///
/// Children are shared immutably behind `Arc`; a node can only be built
/// from already-built nodes, so the structure is always a tree.
///
/// Deserialization goes through the validating constructors, so degenerate
/// geometry is rejected on load as it is on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSdfNode")]
pub enum SdfNode {
    // === Primitives ===
    /// Sphere at an arbitrary center
    Sphere {
        /// Sphere center
        center: Vec3,
        /// Sphere radius
        radius: f32,
    },

    /// Frustum between two axis points with flat caps
    FrustumCone {
        /// Axis start
        a: Vec3,
        /// Axis end
        b: Vec3,
        /// Cap radius at `a`
        ra: f32,
        /// Cap radius at `b`
        rb: f32,
    },

    /// Convex hull of two spheres
    RoundCone {
        /// Center of the first sphere
        a: Vec3,
        /// Center of the second sphere
        b: Vec3,
        /// Radius at `a`
        ra: f32,
        /// Radius at `b`
        rb: f32,
    },

    // === Operations ===
    /// Union of two shapes
    Union {
        /// First operand
        a: Arc<SdfNode>,
        /// Second operand
        b: Arc<SdfNode>,
    },

    /// Intersection of two shapes
    Intersection {
        /// First operand
        a: Arc<SdfNode>,
        /// Second operand
        b: Arc<SdfNode>,
    },

    /// `a` with `b` removed
    Subtraction {
        /// Shape to carve from
        a: Arc<SdfNode>,
        /// Shape removed
        b: Arc<SdfNode>,
    },
}

/// Unchecked wire form of [`SdfNode`]
#[derive(Deserialize)]
enum RawSdfNode {
    Sphere {
        center: Vec3,
        radius: f32,
    },
    FrustumCone {
        a: Vec3,
        b: Vec3,
        ra: f32,
        rb: f32,
    },
    RoundCone {
        a: Vec3,
        b: Vec3,
        ra: f32,
        rb: f32,
    },
    Union {
        a: Arc<SdfNode>,
        b: Arc<SdfNode>,
    },
    Intersection {
        a: Arc<SdfNode>,
        b: Arc<SdfNode>,
    },
    Subtraction {
        a: Arc<SdfNode>,
        b: Arc<SdfNode>,
    },
}

impl TryFrom<RawSdfNode> for SdfNode {
    type Error = SdfError;

    fn try_from(raw: RawSdfNode) -> Result<Self> {
        match raw {
            RawSdfNode::Sphere { center, radius } => SdfNode::sphere(center, radius),
            RawSdfNode::FrustumCone { a, b, ra, rb } => SdfNode::frustum_cone(a, b, ra, rb),
            RawSdfNode::RoundCone { a, b, ra, rb } => SdfNode::round_cone(a, b, ra, rb),
            // Children were validated when they were deserialized
            RawSdfNode::Union { a, b } => Ok(SdfNode::Union { a, b }),
            RawSdfNode::Intersection { a, b } => Ok(SdfNode::Intersection { a, b }),
            RawSdfNode::Subtraction { a, b } => Ok(SdfNode::Subtraction { a, b }),
        }
    }
}

impl SdfNode {
    /// Count total nodes in the tree
    pub fn node_count(&self) -> u32 {
        match self {
            SdfNode::Sphere { .. } | SdfNode::FrustumCone { .. } | SdfNode::RoundCone { .. } => 1,
            SdfNode::Union { a, b }
            | SdfNode::Intersection { a, b }
            | SdfNode::Subtraction { a, b } => 1 + a.node_count() + b.node_count(),
        }
    }

    /// Whether this node is a leaf primitive
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            SdfNode::Sphere { .. } | SdfNode::FrustumCone { .. } | SdfNode::RoundCone { .. }
        )
    }

    /// Conservative axis-aligned bounds of the solid
    ///
    /// Tight for primitives. Intersections may produce an empty box
    /// (see [`Aabb::is_empty`]).
    pub fn bounding_box(&self) -> Aabb {
        match self {
            SdfNode::Sphere { center, radius } => {
                Aabb::from_center_extents(*center, Vec3::splat(*radius))
            }
            SdfNode::FrustumCone { a, b, ra, rb } => {
                // Extent of a disc with unit normal n along axis i is r * sqrt(1 - n_i^2)
                let n = (*b - *a).normalize_or_zero();
                let d2 = (Vec3::ONE - n * n).max(Vec3::ZERO);
                let disc = Vec3::new(d2.x.sqrt(), d2.y.sqrt(), d2.z.sqrt());
                Aabb::from_center_extents(*a, disc * *ra)
                    .union(&Aabb::from_center_extents(*b, disc * *rb))
            }
            SdfNode::RoundCone { a, b, ra, rb } => Aabb::from_center_extents(*a, Vec3::splat(*ra))
                .union(&Aabb::from_center_extents(*b, Vec3::splat(*rb))),
            SdfNode::Union { a, b } => a.bounding_box().union(&b.bounding_box()),
            SdfNode::Intersection { a, b } => a.bounding_box().intersection(&b.bounding_box()),
            SdfNode::Subtraction { a, .. } => a.bounding_box(),
        }
    }
}

impl DistanceField for SdfNode {
    #[inline]
    fn distance(&self, point: Vec3) -> f32 {
        crate::eval::eval(self, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> SdfNode {
        SdfNode::sphere(Vec3::ZERO, 1.0).unwrap()
    }

    #[test]
    fn test_node_count() {
        let shape = unit_sphere()
            .subtract(SdfNode::sphere(Vec3::X, 0.5).unwrap())
            .union(SdfNode::round_cone(Vec3::ZERO, Vec3::Y, 0.2, 0.1).unwrap());
        assert_eq!(shape.node_count(), 5);
        assert!(!shape.is_primitive());
        assert!(unit_sphere().is_primitive());
    }

    #[test]
    fn test_inside_is_derived_from_distance() {
        let shape = unit_sphere().subtract(SdfNode::sphere(Vec3::X, 0.5).unwrap());
        for p in [
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(0.9, 0.0, 0.0),
            Vec3::new(-0.9, 0.0, 0.0),
            Vec3::splat(2.0),
        ] {
            assert_eq!(shape.inside(p), shape.distance(p) < 0.0, "at {:?}", p);
        }
    }

    #[test]
    fn test_deserialize_validates_geometry() {
        let cone = r#"{"FrustumCone":{"a":[0,0,0],"b":[0,0,0],"ra":1.0,"rb":1.0}}"#;
        let err = serde_json::from_str::<SdfNode>(cone).unwrap_err();
        assert!(err.to_string().contains("coincide"), "{}", err);

        let sphere = r#"{"Sphere":{"center":[0,0,0],"radius":-1.0}}"#;
        assert!(serde_json::from_str::<SdfNode>(sphere).is_err());

        // A bad leaf anywhere in the tree rejects the whole tree
        let nested = r#"{"Union":{
            "a":{"Sphere":{"center":[0,0,0],"radius":1.0}},
            "b":{"RoundCone":{"a":[1,1,1],"b":[1,1,1],"ra":0.5,"rb":0.2}}
        }}"#;
        assert!(serde_json::from_str::<SdfNode>(nested).is_err());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let shape = SdfNode::round_cone(Vec3::ZERO, Vec3::Z, 0.5, 0.25)
            .unwrap()
            .subtract(unit_sphere());
        let json = serde_json::to_string(&shape).unwrap();
        let restored: SdfNode = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, shape);
    }

    #[test]
    fn test_sphere_bounds() {
        let aabb = SdfNode::sphere(Vec3::new(1.0, 2.0, 3.0), 0.5)
            .unwrap()
            .bounding_box();
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_frustum_bounds_axis_aligned() {
        let aabb = SdfNode::frustum_cone(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 2.0, 1.0)
            .unwrap()
            .bounding_box();
        assert!((aabb.min - Vec3::new(-2.0, -2.0, 0.0)).length() < 1e-6);
        assert!((aabb.max - Vec3::new(2.0, 2.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_intersection_bounds() {
        let a = unit_sphere();
        let b = SdfNode::sphere(Vec3::new(1.5, 0.0, 0.0), 1.0).unwrap();
        let aabb = a.clone().intersection(b).bounding_box();
        assert_eq!(aabb.min.x, 0.5);
        assert_eq!(aabb.max.x, 1.0);

        let far = SdfNode::sphere(Vec3::splat(10.0), 1.0).unwrap();
        assert!(a.intersection(far).bounding_box().is_empty());
    }

    #[test]
    fn test_bounds_contain_surface() {
        let cone = SdfNode::frustum_cone(Vec3::ZERO, Vec3::new(1.0, 2.0, -1.0), 0.8, 0.3).unwrap();
        let aabb = cone.bounding_box();
        // Points just outside the box are outside the solid
        let outside = [
            aabb.min - Vec3::splat(1e-3),
            aabb.max + Vec3::splat(1e-3),
            Vec3::new(aabb.max.x + 1e-3, 0.0, 0.0),
        ];
        for p in outside {
            assert!(!cone.inside(p), "{:?} escaped bounds", p);
        }
    }
}
