//! CSG (Constructive Solid Geometry) operations
//!
//! Boolean algebra on distance values: union is `min`, intersection is
//! `max`, subtraction is `max(a, -b)`. Union of exact fields stays exact
//! outside the solid; intersection and subtraction yield bounds.

mod intersection;
mod subtraction;
mod union;

pub use intersection::sdf_intersection;
pub use subtraction::sdf_subtraction;
pub use union::sdf_union;
