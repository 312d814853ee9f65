//! Primitive SDF shapes
//!
//! Free functions computing exact signed Euclidean distance, negative
//! inside. They take raw geometry and perform no validation; the checked
//! entry points are the [`SdfNode`](crate::types::SdfNode) constructors.

mod frustum_cone;
mod round_cone;
mod sphere;

pub use frustum_cone::sdf_frustum_cone;
pub use round_cone::sdf_round_cone;
pub use sphere::sdf_sphere_at;
