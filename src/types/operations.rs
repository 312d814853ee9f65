//! Boolean operations for SdfNode

use std::sync::Arc;

use super::SdfNode;

impl SdfNode {
    // === Operation methods ===

    /// Union with another shape
    #[inline]
    pub fn union(self, other: SdfNode) -> Self {
        SdfNode::Union {
            a: Arc::new(self),
            b: Arc::new(other),
        }
    }

    /// Intersection with another shape
    #[inline]
    pub fn intersection(self, other: SdfNode) -> Self {
        SdfNode::Intersection {
            a: Arc::new(self),
            b: Arc::new(other),
        }
    }

    /// Subtract another shape from this one
    ///
    /// The resulting distance is `max(self, -other)`: the sign is exact,
    /// the magnitude is a lower bound near the cut.
    #[inline]
    pub fn subtract(self, other: SdfNode) -> Self {
        SdfNode::Subtraction {
            a: Arc::new(self),
            b: Arc::new(other),
        }
    }
}
