//! Bulk samplers
//!
//! Both samplers are a pure map from an index space (random draw index or
//! grid cell) to a scene color, written into a pre-sized `ndarray` buffer.
//! Work is split across rayon workers by disjoint output slabs; there is no
//! shared accumulator.
//!
//! Samplers hold only the query region and a [`SamplerConfig`]; the scene is
//! an argument of every `sample` call.

mod range;
mod uniform;

pub use range::RangeSampler;
pub use uniform::UniformSampler;

use ndarray::ArrayViewMut1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SdfError};
use crate::material::Color;

/// Execution settings shared by the samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Spread work over the rayon thread pool
    pub parallel: bool,
    /// Random draws per independently seeded chunk (uniform sampler only)
    pub chunk_size: usize,
    /// Base seed for random draws; `None` picks a fresh one per call
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            parallel: true,
            chunk_size: 4096,
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// Single-threaded config
    pub fn sequential() -> Self {
        SamplerConfig {
            parallel: false,
            ..Default::default()
        }
    }

    /// Fix the base seed, making uniform sampling reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set draws per chunk
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable or disable the thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject settings that cannot drive a sampler
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SdfError::ZeroChunkSize);
        }
        Ok(())
    }
}

#[inline(always)]
fn write_color(mut cell: ArrayViewMut1<'_, f32>, color: Color) {
    for (dst, v) in cell.iter_mut().zip(color.to_array()) {
        *dst = v;
    }
}
