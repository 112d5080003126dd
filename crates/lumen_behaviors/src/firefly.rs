//! Wandering point lights
//!
//! A [`Fireflies`] spawner scatters scripted children across a box; each
//! child runs [`Firefly`], which drifts around its spawn point along three
//! unrelated sine waves.

use crate::config::{FirefliesConfig, FireflyConfig, MAX_FIREFLIES};
use crate::script::ComponentScript;
use lumen_bindings::{Entity, HostApi};
use lumen_math::Vec3;
use rand::Rng;

/// Single firefly bobbing around where it was spawned
#[derive(Debug, Clone)]
pub struct Firefly {
    entity: Entity,
    origin: Vec3,
    roam_bounds: Vec3,
    speed: f64,
    phase: f64,
    phase_offset: Vec3,
    phase_factor: Vec3,
}

impl Firefly {
    /// Attach to `entity`, lighting it and remembering its current position
    pub fn new<H: HostApi, R: Rng + ?Sized>(
        host: &mut H,
        entity: Entity,
        config: &FireflyConfig,
        rng: &mut R,
    ) -> Self {
        let origin = entity.transform(host).position(&*host);
        entity.add_point_light(host).set_intensity(host, config.intensity);

        let phase = rng.gen::<f64>() * 100.0;
        let phase_offset = Vec3::random(rng) * 100.0;
        let phase_factor = Vec3::random(rng) * 0.7 + Vec3::splat(0.65);

        log::debug!("firefly {:?} at {:?}", entity, origin);

        Self {
            entity,
            origin,
            roam_bounds: config.roam_bounds,
            speed: config.speed,
            phase,
            phase_offset,
            phase_factor,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Position for a given phase; every axis stays within the roam bounds
    pub fn position_at(&self, phase: f64) -> Vec3 {
        let wave = ((Vec3::splat(phase * self.speed) + self.phase_offset) * self.phase_factor).sin();
        wave * self.roam_bounds + self.origin
    }
}

impl<H: HostApi> ComponentScript<H> for Firefly {
    fn update(&mut self, host: &mut H, dt: f64) {
        self.phase += dt;
        let position = self.position_at(self.phase);
        self.entity.transform(host).set_position(host, position);
    }
}

/// Spawner that seeds a swarm of fireflies on creation
#[derive(Debug, Clone)]
pub struct Fireflies {
    entity: Entity,
    spawned: Vec<Entity>,
}

impl Fireflies {
    /// Move to the swarm center and spawn `count` scripted children
    ///
    /// Children land in the swarm box shrunk by `roam_bounds`, so no firefly
    /// wanders outside `size`.
    pub fn new<H: HostApi, R: Rng + ?Sized>(
        host: &mut H,
        entity: Entity,
        config: &FirefliesConfig,
        roam_bounds: Vec3,
        rng: &mut R,
    ) -> Self {
        entity.transform(host).set_position(host, config.center);

        let extent = config.size - roam_bounds;
        let spawned = (0..config.count.min(MAX_FIREFLIES))
            .map(|_| {
                let offset = (Vec3::random(rng) * 2.0 - Vec3::ONE) * extent;
                entity.spawn_scripted_child_at(host, &config.script_impl, offset)
            })
            .collect::<Vec<_>>();

        log::info!("spawned {} fireflies under {:?}", spawned.len(), entity);

        Self { entity, spawned }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn spawned(&self) -> &[Entity] {
        &self.spawned
    }
}

impl<H: HostApi> ComponentScript<H> for Fireflies {
    fn update(&mut self, _host: &mut H, _dt: f64) {}
}
