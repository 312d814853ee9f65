//! Monte Carlo sampler over an axis-aligned box

use std::time::Instant;

use glam::Vec3;
use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayViewMut2, Axis};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{write_color, SamplerConfig};
use crate::error::{check_region, Result};
use crate::scene::Scene;
use crate::types::Aabb;

/// Draws points uniformly at random from `[min, max)` and records their color
///
/// Averaging a color channel over the output estimates the fraction of the
/// box covered by objects of that color; the standard error shrinks as
/// `1 / sqrt(n)`.
///
/// Draws are generated in chunks of `config.chunk_size`, chunk `c` using its
/// own generator seeded from `(seed, c)`. With a fixed seed the output is
/// identical whether sampled in parallel or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSampler {
    min: Vec3,
    max: Vec3,
    config: SamplerConfig,
}

impl UniformSampler {
    /// Sampler over the box `[min, max]`
    ///
    /// Fails unless `min < max` on every axis.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self> {
        check_region(min, max)?;
        Ok(UniformSampler {
            min,
            max,
            config: SamplerConfig::default(),
        })
    }

    /// Sampler over a bounding box, e.g. a scene's
    pub fn from_aabb(aabb: Aabb) -> Result<Self> {
        Self::new(aabb.min, aabb.max)
    }

    /// Replace the execution settings
    pub fn with_config(mut self, config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Fix the base seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The sampled region
    pub fn region(&self) -> Aabb {
        Aabb::new(self.min, self.max)
    }

    /// Current execution settings
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sample `count` colors; row `i` of the `(count, 3)` result is draw `i`
    pub fn sample<S: Scene + ?Sized>(&self, scene: &S, count: usize) -> Array2<f32> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let chunk_size = self.config.chunk_size;
        let dist = (
            Uniform::new(self.min.x, self.max.x),
            Uniform::new(self.min.y, self.max.y),
            Uniform::new(self.min.z, self.max.z),
        );

        tracing::debug!(
            count,
            chunk_size,
            parallel = self.config.parallel,
            seed,
            "uniform sampling"
        );
        let start = Instant::now();

        let mut out = Array2::<f32>::zeros((count, 3));
        let fill = |(c, mut rows): (usize, ArrayViewMut2<'_, f32>)| {
            let mut rng = StdRng::seed_from_u64(chunk_seed(seed, c));
            for row in rows.outer_iter_mut() {
                let p = Vec3::new(rng.sample(dist.0), rng.sample(dist.1), rng.sample(dist.2));
                write_color(row, scene.hit(p));
            }
        };

        let chunks = out.axis_chunks_iter_mut(Axis(0), chunk_size);
        if self.config.parallel {
            chunks.into_par_iter().enumerate().for_each(fill);
        } else {
            chunks.enumerate().for_each(fill);
        }

        tracing::debug!(
            count,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "uniform sampling done"
        );
        out
    }
}

/// Decorrelate per-chunk seeds (SplitMix64 finalizer)
#[inline]
fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    let mut z = seed.wrapping_add((chunk as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
