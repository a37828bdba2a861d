//! Scene profile configuration
//!
//! A profile bundles everything about a generated level that is not random:
//! the model asset, the skybox faces, and the ranges the point lights are
//! drawn from. Defaults reproduce the Sponza test level. Profiles load from
//! `.toml` or `.ron` files, dispatched on the file extension.

use serde::{Deserialize, Serialize};

use crate::entity::{ModelEntity, SkyboxEntity};
use crate::error::SceneError;
use crate::math::{Aabb, Vec3};

/// Model placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelProfile {
    /// Asset path, relative to the renderer's working directory
    pub path: String,

    /// World-space position
    pub origin: Vec3,

    /// Euler angles in degrees
    pub angles: Vec3,

    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Default for ModelProfile {
    fn default() -> Self {
        Self {
            path: "../assets/models/sponza/glTF/Sponza.gltf".to_string(),
            origin: Vec3::zeros(),
            angles: Vec3::zeros(),
            scale: Vec3::new(3.0, 3.0, 3.0),
        }
    }
}

/// Skybox face texture paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyboxProfile {
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

impl Default for SkyboxProfile {
    fn default() -> Self {
        Self {
            front: "../assets/skybox/room/pz.png".to_string(),
            back: "../assets/skybox/room/nz.png".to_string(),
            top: "../assets/skybox/room/py.png".to_string(),
            bottom: "../assets/skybox/room/ny.png".to_string(),
            right: "../assets/skybox/room/px.png".to_string(),
            left: "../assets/skybox/room/nx.png".to_string(),
        }
    }
}

/// Point light scattering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightProfile {
    /// Region lights are scattered in
    pub bounds: Aabb,

    /// Lower radius bound (inclusive)
    pub radius_min: f32,

    /// Upper radius bound (exclusive)
    pub radius_max: f32,

    /// Intensity applied to every light
    pub intensity: f32,
}

impl Default for LightProfile {
    fn default() -> Self {
        Self {
            bounds: Aabb::new(Vec3::new(-30.0, 0.0, -15.0), Vec3::new(25.0, 30.0, 5.0)),
            radius_min: 5.0,
            radius_max: 10.0,
            intensity: 1.0,
        }
    }
}

/// Complete generation profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneProfile {
    /// Model placement settings
    pub model: ModelProfile,

    /// Skybox face texture paths
    pub skybox: SkyboxProfile,

    /// Point light scattering settings
    pub lights: LightProfile,
}

impl SceneProfile {
    /// Load a profile from a `.toml` or `.ron` file
    pub fn load_from_file(path: &str) -> Result<Self, SceneError> {
        if path.ends_with(".toml") {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents).map_err(|e| SceneError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            let contents = std::fs::read_to_string(path)?;
            ron::from_str(&contents).map_err(|e| SceneError::Parse(e.to_string()))
        } else {
            Err(SceneError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Model entity described by this profile
    pub fn model_entity(&self) -> ModelEntity {
        ModelEntity {
            origin: self.model.origin,
            angles: self.model.angles,
            scale: self.model.scale,
            path: self.model.path.clone(),
        }
    }

    /// Skybox entity described by this profile
    pub fn skybox_entity(&self) -> SkyboxEntity {
        SkyboxEntity {
            front: self.skybox.front.clone(),
            back: self.skybox.back.clone(),
            top: self.skybox.top.clone(),
            bottom: self.skybox.bottom.clone(),
            right: self.skybox.right.clone(),
            left: self.skybox.left.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_sponza_level() {
        let profile = SceneProfile::default();

        assert_eq!(profile.model.path, "../assets/models/sponza/glTF/Sponza.gltf");
        assert_eq!(profile.model.scale, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(profile.skybox.front, "../assets/skybox/room/pz.png");
        assert_eq!(profile.skybox.left, "../assets/skybox/room/nx.png");

        assert_eq!(
            profile.lights.bounds,
            Aabb::new(Vec3::new(-30.0, 0.0, -15.0), Vec3::new(25.0, 30.0, 5.0))
        );
        assert_relative_eq!(profile.lights.radius_min, 5.0);
        assert_relative_eq!(profile.lights.radius_max, 10.0);
        assert_relative_eq!(profile.lights.intensity, 1.0);
    }

    #[test]
    fn toml_profile_overrides_defaults() {
        let profile: SceneProfile = toml::from_str(
            r#"
            [model]
            path = "level.gltf"

            [lights]
            radius_min = 1.0
            radius_max = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(profile.model.path, "level.gltf");
        assert_relative_eq!(profile.lights.radius_min, 1.0);
        assert_relative_eq!(profile.lights.radius_max, 2.0);
        // Untouched sections keep their defaults
        assert_eq!(profile.skybox, SkyboxProfile::default());
        assert_eq!(profile.lights.bounds, LightProfile::default().bounds);
    }

    #[test]
    fn empty_ron_profile_is_all_defaults() {
        let profile: SceneProfile = ron::from_str("()").unwrap();
        assert_eq!(profile, SceneProfile::default());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = SceneProfile::load_from_file("profile.yaml");
        assert!(matches!(result, Err(SceneError::UnsupportedFormat(_))));
    }
}
