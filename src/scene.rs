//! Scenes: objects plus a background color
//!
//! A scene is built with `&mut self` calls and queried through `&self`.
//! Samplers borrow the scene immutably for the whole call, so adding objects
//! while a sample is running is rejected at compile time rather than checked
//! at runtime.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::Color;
use crate::object::SdfObject;
use crate::types::{Aabb, DistanceField};

/// Point-to-color resolution, the only capability samplers need
pub trait Scene: Send + Sync {
    /// Visible color at `point`
    fn hit(&self, point: Vec3) -> Color;

    /// Bounds of everything that can produce a non-background color
    fn bounding_box(&self) -> Option<Aabb>;
}

/// A scene with a list of objects
///
/// Overlapping objects resolve to the one with the smallest distance at the
/// query point (the most deeply inside), ties going to the first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectsScene {
    objects: Vec<SdfObject>,
    background: Color,
}

impl ObjectsScene {
    /// Empty scene with a black background
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object; order only matters for tie-breaking
    pub fn add_object(&mut self, object: SdfObject) {
        self.objects.push(object);
    }

    /// Replace the background color
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    /// Builder form of [`add_object`](Self::add_object)
    #[must_use]
    pub fn with_object(mut self, object: SdfObject) -> Self {
        self.add_object(object);
        self
    }

    /// Builder form of [`set_background`](Self::set_background)
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.set_background(background);
        self
    }

    /// Objects in insertion order
    pub fn objects(&self) -> &[SdfObject] {
        &self.objects
    }

    /// Current background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The object with the smallest distance at `point`, with that distance
    pub fn closest(&self, point: Vec3) -> Option<(&SdfObject, f32)> {
        let mut best: Option<(&SdfObject, f32)> = None;
        for obj in &self.objects {
            let d = obj.distance(point);
            // Strict comparison keeps the first-added object on ties
            if best.map_or(true, |(_, d_min)| d < d_min) {
                best = Some((obj, d));
            }
        }
        best
    }
}

impl Scene for ObjectsScene {
    fn hit(&self, point: Vec3) -> Color {
        match self.closest(point) {
            Some((obj, d)) if d < 0.0 => obj.color_at(point),
            _ => self.background,
        }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.objects
            .iter()
            .map(SdfObject::bounding_box)
            .reduce(|acc, b| acc.union(&b))
    }
}

impl FromIterator<SdfObject> for ObjectsScene {
    fn from_iter<I: IntoIterator<Item = SdfObject>>(iter: I) -> Self {
        ObjectsScene {
            objects: iter.into_iter().collect(),
            background: Color::ZERO,
        }
    }
}

impl Extend<SdfObject> for ObjectsScene {
    fn extend<I: IntoIterator<Item = SdfObject>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}
