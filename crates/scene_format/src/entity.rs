//! Typed scene entities
//!
//! Each entity kind the downstream loader recognizes gets a typed variant
//! with explicit fields. Conversion to the untyped [`EntityRecord`] happens
//! only at the serialization boundary, so field names and formatting live in
//! one place.

use crate::math::Vec3;
use crate::record::EntityRecord;

/// Format a vector the way the loader's `ParseVec3` expects: three
/// whitespace-separated components, no fixed precision (`0 0 0`, `3 3 3`).
fn plain_vec3(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// Format a vector with two decimal places per component (`12.34 5.67 -2.10`)
fn fixed_vec3(v: Vec3) -> String {
    format!("{:.2} {:.2} {:.2}", v.x, v.y, v.z)
}

/// Static model placed in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEntity {
    /// World-space position
    pub origin: Vec3,

    /// Euler angles in degrees
    pub angles: Vec3,

    /// Per-axis scale factors
    pub scale: Vec3,

    /// Asset path, relative to the renderer's working directory
    pub path: String,
}

impl ModelEntity {
    /// Convert to an untyped record in loader field order
    pub fn to_record(&self) -> EntityRecord {
        EntityRecord::new()
            .with("classname", "model")
            .with("origin", plain_vec3(self.origin))
            .with("angles", plain_vec3(self.angles))
            .with("scale", plain_vec3(self.scale))
            .with("path", self.path.clone())
    }
}

/// Skybox cubemap described by six face texture paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyboxEntity {
    /// +Z face texture path
    pub front: String,

    /// -Z face texture path
    pub back: String,

    /// +Y face texture path
    pub top: String,

    /// -Y face texture path
    pub bottom: String,

    /// +X face texture path
    pub right: String,

    /// -X face texture path
    pub left: String,
}

impl SkyboxEntity {
    /// Convert to an untyped record in loader field order
    pub fn to_record(&self) -> EntityRecord {
        EntityRecord::new()
            .with("classname", "skybox")
            .with("front", self.front.clone())
            .with("back", self.back.clone())
            .with("top", self.top.clone())
            .with("bottom", self.bottom.clone())
            .with("right", self.right.clone())
            .with("left", self.left.clone())
    }
}

/// Point light radiating from a position
#[derive(Debug, Clone, PartialEq)]
pub struct PointLightEntity {
    /// World-space position
    pub origin: Vec3,

    /// Maximum lighting distance
    pub radius: f32,

    /// RGB color, each channel in `[0.0, 1.0)`
    pub color: Vec3,

    /// Intensity multiplier
    pub intensity: f32,
}

impl PointLightEntity {
    /// Convert to an untyped record; sampled fields carry two decimal
    /// places, while `intensity` keeps its shortest lossless form with at
    /// least one decimal (`1.0`, `0.25`).
    pub fn to_record(&self) -> EntityRecord {
        EntityRecord::new()
            .with("classname", "point_light")
            .with("origin", fixed_vec3(self.origin))
            .with("radius", format!("{:.2}", self.radius))
            .with("color", fixed_vec3(self.color))
            .with("intensity", format!("{:?}", self.intensity))
    }
}

/// Any entity kind the generator can emit
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// Static model instance
    Model(ModelEntity),

    /// Skybox cubemap
    Skybox(SkyboxEntity),

    /// Point light
    PointLight(PointLightEntity),
}

impl Entity {
    /// The `classname` the downstream loader dispatches on
    pub fn classname(&self) -> &'static str {
        match self {
            Self::Model(_) => "model",
            Self::Skybox(_) => "skybox",
            Self::PointLight(_) => "point_light",
        }
    }

    /// Convert to an untyped record for serialization
    pub fn to_record(&self) -> EntityRecord {
        match self {
            Self::Model(model) => model.to_record(),
            Self::Skybox(skybox) => skybox.to_record(),
            Self::PointLight(light) => light.to_record(),
        }
    }
}
