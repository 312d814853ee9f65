//! Regular grid sampler over an axis-aligned box

use std::time::Instant;

use glam::Vec3;
use ndarray::parallel::prelude::*;
use ndarray::{Array4, ArrayViewMut3, Axis};

use super::{write_color, SamplerConfig};
use crate::error::{check_region, check_stride, Result, SdfError, AXES};
use crate::scene::Scene;

/// Evaluates the scene at every point of a fixed lattice
///
/// Cell `(i, j, k)` is sampled at `min + (i, j, k) * stride`. The sampler
/// does no centering: callers wanting cell centers offset `min` by half a
/// stride, or use [`RangeSampler::cell_centers`].
///
/// The per-axis cell count is `ceil((max - min) / stride)`. It is fixed at
/// construction, so the output buffer size is known before any work starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSampler {
    min: Vec3,
    stride: Vec3,
    shape: (usize, usize, usize),
    config: SamplerConfig,
}

impl RangeSampler {
    /// Grid starting at `min`, advancing by `stride`, bounded by `max`
    ///
    /// Fails unless `min < max` and `stride > 0` on every axis, or when the
    /// resulting grid is too large to allocate.
    pub fn new(min: Vec3, max: Vec3, stride: Vec3) -> Result<Self> {
        check_region(min, max)?;
        check_stride(stride)?;
        Ok(RangeSampler {
            min,
            stride,
            shape: grid_shape(min, max, stride)?,
            config: SamplerConfig::default(),
        })
    }

    /// Grid of cell centers tiling the box `[min, max]`
    ///
    /// Equivalent to `new(min + stride / 2, max, stride)`.
    pub fn cell_centers(min: Vec3, max: Vec3, stride: Vec3) -> Result<Self> {
        check_stride(stride)?;
        Self::new(min + stride * 0.5, max, stride)
    }

    /// Replace the execution settings (only `parallel` applies to grids)
    pub fn with_config(mut self, config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Grid origin
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Grid step per axis
    pub fn stride(&self) -> Vec3 {
        self.stride
    }

    /// Cell counts `(nx, ny, nz)`
    pub fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    /// Position of cell `(i, j, k)`
    #[inline]
    pub fn point(&self, i: usize, j: usize, k: usize) -> Vec3 {
        self.min + Vec3::new(i as f32, j as f32, k as f32) * self.stride
    }

    /// Sample every cell; the result has shape `(nx, ny, nz, 3)`
    pub fn sample<S: Scene + ?Sized>(&self, scene: &S) -> Array4<f32> {
        let (nx, ny, nz) = self.shape();
        tracing::debug!(nx, ny, nz, parallel = self.config.parallel, "range sampling");
        let start = Instant::now();

        let mut out = Array4::<f32>::zeros((nx, ny, nz, 3));
        // One x-slab per task
        let fill = |(i, mut slab): (usize, ArrayViewMut3<'_, f32>)| {
            for (j, mut row) in slab.outer_iter_mut().enumerate() {
                for (k, cell) in row.outer_iter_mut().enumerate() {
                    write_color(cell, scene.hit(self.point(i, j, k)));
                }
            }
        };

        let slabs = out.axis_iter_mut(Axis(0));
        if self.config.parallel {
            slabs.into_par_iter().enumerate().for_each(fill);
        } else {
            slabs.enumerate().for_each(fill);
        }

        tracing::debug!(
            cells = nx * ny * nz,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "range sampling done"
        );
        out
    }
}

/// Per-axis cell counts, rejected when the `(nx, ny, nz, 3)` buffer
/// would exceed `isize::MAX` elements
fn grid_shape(min: Vec3, max: Vec3, stride: Vec3) -> Result<(usize, usize, usize)> {
    let cells = ((max - min) / stride).ceil();
    let mut counts = [0usize; 3];
    // Color channels
    let mut total: usize = 3;
    for ((axis, count), n) in AXES.iter().zip(counts.iter_mut()).zip(cells.to_array()) {
        if !n.is_finite() || n >= isize::MAX as f32 {
            return Err(SdfError::GridTooLarge { axis: *axis });
        }
        *count = n as usize;
        total = total
            .checked_mul(*count)
            .filter(|&t| t <= isize::MAX as usize)
            .ok_or(SdfError::GridTooLarge { axis: *axis })?;
    }
    Ok((counts[0], counts[1], counts[2]))
}
