//! Math types for scene placement
//!
//! Provides the vector alias and the axis-aligned bounding box used to
//! scatter point lights.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Axis-aligned bounding box defined by min/max corner points
///
/// Each `max` component is assumed to be >= the corresponding `min`
/// component; this is checked only by a debug assertion when sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,

    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a bounding box from min/max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Per-axis spans (`max - min`)
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether a point lies inside the box (min inclusive, max exclusive)
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
            && point.z >= self.min.z
            && point.z < self.max.z
    }

    /// Sample a point uniformly inside the box
    ///
    /// Each coordinate is drawn independently in `[min_i, max_i)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        debug_assert!(
            self.max.x >= self.min.x && self.max.y >= self.min.y && self.max.z >= self.min.z,
            "degenerate bounding box: {self:?}"
        );
        let extents = self.extents();
        Vec3::new(
            self.min.x + rng.gen::<f32>() * extents.x,
            self.min.y + rng.gen::<f32>() * extents.y,
            self.min.z + rng.gen::<f32>() * extents.z,
        )
    }
}
