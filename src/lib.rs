//! # sdflit
//!
//! A signed distance field kernel: exact primitive distances, CSG, flat
//! colored scenes and bulk samplers.
//!
//! ## Features
//!
//! - **Primitives**: Sphere, FrustumCone (flat caps), RoundCone (sphere hull)
//! - **Operations**: Union, Intersection, Subtraction
//! - **Materials**: constant color, linear gradient
//! - **Scenes**: objects with a background, closest-object resolution
//! - **Samplers**: Monte Carlo (uniform random) and regular grid, rayon parallel
//!
//! ## Example
//!
//! ```rust
//! use sdflit::prelude::*;
//!
//! // A unit sphere with a bite taken out of it
//! let shape = SdfNode::sphere(Vec3::ZERO, 1.0)?
//!     .subtract(SdfNode::sphere(Vec3::new(1.0, 0.0, 0.0), 0.5)?);
//! assert!(shape.inside(Vec3::new(-0.5, 0.0, 0.0)));
//! assert!(!shape.inside(Vec3::new(0.9, 0.0, 0.0)));
//!
//! let mut scene = ObjectsScene::new();
//! scene.add_object(SdfObject::new(shape, Material::colored(Vec3::ONE)));
//! scene.set_background(Vec3::ZERO);
//!
//! // Fraction of the box covered by the shape
//! let sampler = UniformSampler::new(Vec3::splat(-1.0), Vec3::ONE)?.with_seed(7);
//! let samples = sampler.sample(&scene, 10_000);
//! let fraction = samples.column(0).sum() / 10_000.0;
//! assert!(fraction > 0.3 && fraction < 0.6);
//! # Ok::<(), sdflit::SdfError>(())
//! ```
//!
//! ## Concurrency
//!
//! Every query is a pure function of its inputs. Samplers split their output
//! buffer across rayon workers. A scene is borrowed immutably for the whole
//! of a `sample` call, so it cannot be modified while being sampled.

#![warn(missing_docs)]

pub mod error;
pub mod eval;
pub mod material;
pub mod object;
pub mod operations;
pub mod primitives;
pub mod sampler;
pub mod scene;
pub mod types;

pub use error::{Result, SdfError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::error::{Result, SdfError};
    pub use crate::eval::{eval, eval_batch, eval_batch_parallel, gradient, inside, normal};
    pub use crate::material::{Color, Material};
    pub use crate::object::SdfObject;
    pub use crate::operations::*;
    pub use crate::primitives::*;
    pub use crate::sampler::{RangeSampler, SamplerConfig, UniformSampler};
    pub use crate::scene::{ObjectsScene, Scene};
    pub use crate::types::{Aabb, DistanceField, SdfNode};
    pub use glam::Vec3;
}
