//! # Scene Format
//!
//! Typed entity model and text serialization for renderer scene files.
//!
//! A scene file is a flat sequence of entity blocks, each a `{`/`}`-delimited
//! list of `"key" "value"` lines. The downstream scene loader dispatches on
//! the `classname` field to interpret the rest. This crate models the
//! recognized entity kinds as typed variants and converts them to untyped
//! records only at the serialization boundary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_format::{generate_scene, write_scene, SceneProfile};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), scene_format::SceneError> {
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let entities = generate_scene(&mut rng, &SceneProfile::default(), 8);
//!     let mut out = Vec::new();
//!     write_scene(&mut out, &entities)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod entity;
pub mod error;
pub mod generate;
pub mod math;
pub mod profile;
pub mod record;
pub mod writer;

pub use entity::{Entity, ModelEntity, PointLightEntity, SkyboxEntity};
pub use error::SceneError;
pub use generate::generate_scene;
pub use math::{Aabb, Vec3};
pub use profile::SceneProfile;
pub use record::EntityRecord;
pub use writer::{write_record, write_scene};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        entity::{Entity, ModelEntity, PointLightEntity, SkyboxEntity},
        error::SceneError,
        generate::generate_scene,
        math::{Aabb, Vec3},
        profile::SceneProfile,
        record::EntityRecord,
        writer::{write_record, write_scene},
    };
}
