//! Random scene generation
//!
//! Produces the entity list for a level: the profile's model and skybox
//! first, then a requested number of randomly placed point lights. The RNG
//! is passed in explicitly so tests can seed it for reproducible output.

use rand::Rng;

use crate::entity::{Entity, PointLightEntity};
use crate::math::Vec3;
use crate::profile::{LightProfile, SceneProfile};

/// Generate the full entity sequence for a level
///
/// Emits the model, the skybox, then exactly `light_count` point lights.
/// Counts `<= 0` yield only the two fixed entities.
pub fn generate_scene<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &SceneProfile,
    light_count: i64,
) -> Vec<Entity> {
    let count = usize::try_from(light_count).unwrap_or(0);

    let mut entities = Vec::with_capacity(count + 2);
    entities.push(Entity::Model(profile.model_entity()));
    entities.push(Entity::Skybox(profile.skybox_entity()));

    for _ in 0..count {
        entities.push(Entity::PointLight(sample_light(rng, &profile.lights)));
    }

    log::debug!("generated {} entities ({count} lights)", entities.len());
    entities
}

/// Draw one point light from the profile's ranges
///
/// Sampling order is fixed (origin, radius, color) so a seeded run is
/// byte-for-byte reproducible.
fn sample_light<R: Rng + ?Sized>(rng: &mut R, lights: &LightProfile) -> PointLightEntity {
    let origin = lights.bounds.sample(rng);
    let radius = lights.radius_min + rng.gen::<f32>() * (lights.radius_max - lights.radius_min);
    let color = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());

    PointLightEntity {
        origin,
        radius,
        color,
        intensity: lights.intensity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64, count: i64) -> Vec<Entity> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_scene(&mut rng, &SceneProfile::default(), count)
    }

    #[test]
    fn zero_lights_yields_only_fixed_entities() {
        let entities = generate(1, 0);
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].classname(), "model");
        assert_eq!(entities[1].classname(), "skybox");
    }

    #[test]
    fn negative_count_is_treated_as_zero() {
        assert_eq!(generate(1, -4).len(), 2);
    }

    #[test]
    fn count_plus_two_blocks_in_order() {
        let entities = generate(2, 3);
        assert_eq!(entities.len(), 5);
        assert_eq!(entities[0].classname(), "model");
        assert_eq!(entities[1].classname(), "skybox");
        for entity in &entities[2..] {
            assert_eq!(entity.classname(), "point_light");
        }
    }

    #[test]
    fn lights_respect_profile_ranges() {
        let profile = SceneProfile::default();
        let mut rng = StdRng::seed_from_u64(3);
        let entities = generate_scene(&mut rng, &profile, 200);

        for entity in &entities[2..] {
            let Entity::PointLight(light) = entity else {
                panic!("expected point light, got {}", entity.classname());
            };
            assert!(profile.lights.bounds.contains(light.origin));
            assert!(light.radius >= 5.0 && light.radius < 10.0);
            for channel in [light.color.x, light.color.y, light.color.z] {
                assert!((0.0..1.0).contains(&channel));
            }
            assert_eq!(light.intensity, 1.0);
        }
    }

    #[test]
    fn same_seed_reproduces_the_scene() {
        assert_eq!(generate(42, 16), generate(42, 16));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate(42, 16), generate(43, 16));
    }
}
