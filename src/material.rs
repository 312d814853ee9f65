//! Surface materials
//!
//! A material maps a query point to a flat color. There is no lighting:
//! the color returned is exactly what a sampler records.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{check_finite_vec, Result, SdfError};

/// RGB color, conventionally in `[0, 1]` but never clamped
pub type Color = Vec3;

/// Surface appearance of a scene object
///
/// Deserialized gradients are validated like [`Material::linear_gradient`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMaterial")]
pub enum Material {
    /// Constant color everywhere
    Colored {
        /// The color
        color: Color,
    },

    /// Color blended linearly between two points
    ///
    /// Points are projected onto the `start -> end` segment; the parameter
    /// is clamped to `[0, 1]`, so the color is constant beyond either end.
    LinearGradient {
        /// Point where the color is `from`
        start: Vec3,
        /// Point where the color is `to`
        end: Vec3,
        /// Color at `start`
        from: Color,
        /// Color at `end`
        to: Color,
    },
}

/// Unchecked wire form of [`Material`]
#[derive(Deserialize)]
enum RawMaterial {
    Colored {
        color: Color,
    },
    LinearGradient {
        start: Vec3,
        end: Vec3,
        from: Color,
        to: Color,
    },
}

impl TryFrom<RawMaterial> for Material {
    type Error = SdfError;

    fn try_from(raw: RawMaterial) -> Result<Self> {
        match raw {
            RawMaterial::Colored { color } => Ok(Material::colored(color)),
            RawMaterial::LinearGradient {
                start,
                end,
                from,
                to,
            } => Material::linear_gradient(start, end, from, to),
        }
    }
}

impl Material {
    /// Constant-color material
    pub fn colored(color: Color) -> Self {
        Material::Colored { color }
    }

    /// Linear gradient from `from` at `start` to `to` at `end`
    ///
    /// Fails when `start == end` or any argument is not finite.
    pub fn linear_gradient(start: Vec3, end: Vec3, from: Color, to: Color) -> Result<Self> {
        check_finite_vec("start", start)?;
        check_finite_vec("end", end)?;
        check_finite_vec("from", from)?;
        check_finite_vec("to", to)?;
        if start == end {
            return Err(SdfError::DegenerateGradient {
                point: start.to_array(),
            });
        }
        Ok(Material::LinearGradient {
            start,
            end,
            from,
            to,
        })
    }

    /// Color of the surface at `point`
    #[inline]
    pub fn color_at(&self, point: Vec3) -> Color {
        match self {
            Material::Colored { color } => *color,
            Material::LinearGradient {
                start,
                end,
                from,
                to,
            } => {
                let axis = *end - *start;
                let t = ((point - *start).dot(axis) / axis.length_squared()).clamp(0.0, 1.0);
                from.lerp(*to, t)
            }
        }
    }
}

impl Default for Material {
    /// White
    fn default() -> Self {
        Material::colored(Vec3::ONE)
    }
}
