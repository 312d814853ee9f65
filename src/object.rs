//! Scene objects: one distance field bound to one material

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::eval::eval;
use crate::material::{Color, Material};
use crate::types::{Aabb, DistanceField, SdfNode};

/// A renderable solid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdfObject {
    field: SdfNode,
    material: Material,
}

impl SdfObject {
    /// Bind a field to a material
    pub fn new(field: SdfNode, material: Material) -> Self {
        SdfObject { field, material }
    }

    /// The object's geometry
    pub fn field(&self) -> &SdfNode {
        &self.field
    }

    /// The object's surface material
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Material color at `point`, regardless of whether the point is inside
    #[inline]
    pub fn color_at(&self, point: Vec3) -> Color {
        self.material.color_at(point)
    }

    /// Material color when `point` is inside the solid
    #[inline]
    pub fn hit(&self, point: Vec3) -> Option<Color> {
        (eval(&self.field, point) < 0.0).then(|| self.material.color_at(point))
    }

    /// Bounds of the underlying field
    pub fn bounding_box(&self) -> Aabb {
        self.field.bounding_box()
    }
}

impl DistanceField for SdfObject {
    #[inline]
    fn distance(&self, point: Vec3) -> f32 {
        eval(&self.field, point)
    }
}
