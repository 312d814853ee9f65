//! Configuration errors
//!
//! Every error here is raised while *building* something (a primitive, a
//! material, a sampler). Queries never fail: once a value exists it answers
//! `distance`, `hit` and `sample` for any finite input.

use thiserror::Error;

/// Result alias used by every fallible constructor in the crate
pub type Result<T> = std::result::Result<T, SdfError>;

/// Invalid construction parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdfError {
    /// A radius was zero or negative
    #[error("radius `{name}` must be positive, got {value}")]
    NonPositiveRadius {
        /// Argument name
        name: &'static str,
        /// Rejected value
        value: f32,
    },

    /// Both cone axis endpoints are the same point
    #[error("cone axis endpoints `a` and `b` coincide at {point:?}")]
    DegenerateAxis {
        /// The shared endpoint
        point: [f32; 3],
    },

    /// Gradient material with identical start and end points
    #[error("gradient `start` and `end` coincide at {point:?}")]
    DegenerateGradient {
        /// The shared point
        point: [f32; 3],
    },

    /// NaN or infinite argument
    #[error("argument `{name}` must be finite")]
    NonFinite {
        /// Argument name
        name: &'static str,
    },

    /// Sampling box is empty along one axis
    #[error("sampling box is empty on axis {axis}: min {min} >= max {max}")]
    EmptyRegion {
        /// Axis label (`x`, `y` or `z`)
        axis: char,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },

    /// Sampling box extent overflows `f32` along one axis
    #[error("sampling box extent on axis {axis} is not finite")]
    ExtentOverflow {
        /// Axis label (`x`, `y` or `z`)
        axis: char,
    },

    /// Grid cell count does not fit in memory addressing
    #[error("grid cell count overflows at axis {axis}")]
    GridTooLarge {
        /// First axis at which the count overflows
        axis: char,
    },

    /// Grid stride was zero or negative
    #[error("stride on axis {axis} must be positive, got {value}")]
    NonPositiveStride {
        /// Axis label (`x`, `y` or `z`)
        axis: char,
        /// Rejected value
        value: f32,
    },

    /// Sampler chunk size of zero
    #[error("sampler chunk size must be at least 1")]
    ZeroChunkSize,
}

pub(crate) const AXES: [char; 3] = ['x', 'y', 'z'];

pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SdfError::NonFinite { name })
    }
}

pub(crate) fn check_finite_vec(name: &'static str, value: glam::Vec3) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SdfError::NonFinite { name })
    }
}

pub(crate) fn check_radius(name: &'static str, value: f32) -> Result<()> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SdfError::NonPositiveRadius { name, value })
    }
}

/// Validate an axis-aligned box `min < max` with a finite extent on every axis
pub(crate) fn check_region(min: glam::Vec3, max: glam::Vec3) -> Result<()> {
    check_finite_vec("min", min)?;
    check_finite_vec("max", max)?;
    for (axis, (lo, hi)) in AXES
        .iter()
        .zip(min.to_array().into_iter().zip(max.to_array()))
    {
        if lo >= hi {
            return Err(SdfError::EmptyRegion {
                axis: *axis,
                min: lo,
                max: hi,
            });
        }
        if !(hi - lo).is_finite() {
            return Err(SdfError::ExtentOverflow { axis: *axis });
        }
    }
    Ok(())
}

pub(crate) fn check_stride(stride: glam::Vec3) -> Result<()> {
    check_finite_vec("stride", stride)?;
    for (axis, value) in AXES.iter().zip(stride.to_array()) {
        if value <= 0.0 {
            return Err(SdfError::NonPositiveStride { axis: *axis, value });
        }
    }
    Ok(())
}
