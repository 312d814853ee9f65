//! Batch SDF evaluation
//!
//! Batch evaluation using rayon for CPU parallelism.

use crate::eval::eval;
use crate::types::SdfNode;
use glam::Vec3;
use rayon::prelude::*;

/// Evaluate SDF at multiple points (single-threaded)
///
/// # Arguments
/// * `node` - The SDF tree
/// * `points` - Slice of points to evaluate
///
/// # Returns
/// Vector of distances
#[inline]
pub fn eval_batch(node: &SdfNode, points: &[Vec3]) -> Vec<f32> {
    points.iter().map(|&p| eval(node, p)).collect()
}

/// Evaluate SDF at multiple points (parallel)
///
/// Uses rayon for parallel iteration over points. Output order matches
/// `points`.
#[inline]
pub fn eval_batch_parallel(node: &SdfNode, points: &[Vec3]) -> Vec<f32> {
    points.par_iter().map(|&p| eval(node, p)).collect()
}
