//! Animated light rigs

use crate::config::{RingLightConfig, SlidingLightConfig, MAX_RING_LIGHTS};
use crate::script::ComponentScript;
use lumen_bindings::{Entity, HostApi};
use lumen_math::consts::TAU;
use lumen_math::{hsv_to_rgb, Vec3};

/// Light that slides back and forth along the x axis
#[derive(Debug, Clone)]
pub struct SlidingLight {
    entity: Entity,
    velocity: f64,
    destination_a: f64,
    destination_b: f64,
}

impl SlidingLight {
    pub fn new<H: HostApi>(host: &mut H, entity: Entity, config: &SlidingLightConfig) -> Self {
        entity.transform(host);
        Self {
            entity,
            velocity: config.speed,
            destination_a: config.destination_a,
            destination_b: config.destination_b,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl<H: HostApi> ComponentScript<H> for SlidingLight {
    fn update(&mut self, host: &mut H, dt: f64) {
        let transform = self.entity.transform(host);
        let mut position = transform.position(&*host);

        // Only turn around when heading further out, so a light that starts
        // outside the range walks back in instead of jittering.
        if (position.x < self.destination_a && self.velocity < 0.0)
            || (position.x > self.destination_b && self.velocity > 0.0)
        {
            self.velocity = -self.velocity;
        }

        position.x += self.velocity * dt;
        transform.set_position(host, position);
    }
}

/// Ring of lights around an entity cycling through the hue wheel
#[derive(Debug, Clone)]
pub struct RingLight {
    lights: Vec<Entity>,
    delta: f64,
    hue_speed: f64,
    hue_offset: f64,
}

impl RingLight {
    /// Spawn one lit child every `delta` radians on a horizontal circle
    pub fn new<H: HostApi>(host: &mut H, entity: Entity, config: &RingLightConfig) -> Self {
        let count = config.light_count().min(MAX_RING_LIGHTS);
        let mut lights = Vec::with_capacity(count as usize);
        for index in 0..count {
            let theta = f64::from(index) * config.delta;
            let position = Vec3::new(theta.sin() * config.radius, config.height, theta.cos() * config.radius);
            let light = entity.spawn_child_at(host, position);
            light.add_point_light(host).set_intensity(host, config.initial_intensity);
            lights.push(light);
        }

        log::info!("ring light {:?} with {} lights", entity, lights.len());

        Self {
            lights,
            delta: config.delta,
            hue_speed: config.hue_speed,
            hue_offset: 0.0,
        }
    }

    pub fn lights(&self) -> &[Entity] {
        &self.lights
    }

    /// Hue of the light at `index`, in turns
    pub fn hue_of(&self, index: usize) -> f64 {
        index as f64 * self.delta / TAU + self.hue_offset
    }
}

impl<H: HostApi> ComponentScript<H> for RingLight {
    fn update(&mut self, host: &mut H, dt: f64) {
        self.hue_offset += dt * self.hue_speed;
        for (index, light) in self.lights.iter().enumerate() {
            let color = hsv_to_rgb(self.hue_of(index), 1.0, 1.0);
            light.point_light(host).set_intensity(host, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_bindings::RecordingHost;

    #[test]
    fn test_sliding_light_moves_and_turns() {
        let mut host = RecordingHost::new();
        let entity = host.spawn_root_at(Vec3::new(9.5, 1.0, 0.0));
        let config = SlidingLightConfig::default();
        let mut light = SlidingLight::new(&mut host, entity, &config);

        light.update(&mut host, 0.25);
        assert_eq!(host.position_of(entity).unwrap(), Vec3::new(10.25, 1.0, 0.0));

        light.update(&mut host, 0.25);
        assert_eq!(light.velocity(), -3.0);
        assert_eq!(host.position_of(entity).unwrap().x, 9.5);
    }

    #[test]
    fn test_sliding_light_stays_in_range() {
        let mut host = RecordingHost::new();
        let entity = host.spawn_root_at(Vec3::ZERO);
        let config = SlidingLightConfig::default();
        let mut light = SlidingLight::new(&mut host, entity, &config);

        let step = config.speed / 60.0;
        for _ in 0..5000 {
            light.update(&mut host, 1.0 / 60.0);
            let x = host.position_of(entity).unwrap().x;
            assert!(x >= config.destination_a - step - 1e-9 && x <= config.destination_b + step + 1e-9);
        }
    }

    #[test]
    fn test_ring_light_layout() {
        let mut host = RecordingHost::new();
        let entity = host.spawn_root_at(Vec3::ZERO);
        let config = RingLightConfig::default();
        let ring = RingLight::new(&mut host, entity, &config);

        // 0.0, 0.3, ..., 6.0 are all below 2pi
        assert_eq!(ring.lights().len(), 21);
        assert_eq!(host.children_of(entity), ring.lights().to_vec());

        for light in ring.lights() {
            let record = host.entity(*light).unwrap();
            assert_eq!(record.point_light, Some([1.0, 0.0, 1.0]));
            let p = host.position_of(*light).unwrap();
            assert_eq!(p.y, 0.05);
            assert!((Vec3::new(p.x, 0.0, p.z).length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ring_light_count_is_capped() {
        let mut host = RecordingHost::new();
        let entity = host.spawn_root_at(Vec3::ZERO);
        let config = RingLightConfig {
            delta: 1e-12,
            ..RingLightConfig::default()
        };
        let ring = RingLight::new(&mut host, entity, &config);
        assert_eq!(ring.lights().len(), MAX_RING_LIGHTS as usize);
    }

    #[test]
    fn test_ring_light_hue_advances() {
        let mut host = RecordingHost::new();
        let entity = host.spawn_root_at(Vec3::ZERO);
        let mut ring = RingLight::new(&mut host, entity, &RingLightConfig::default());

        ring.update(&mut host, 1.0);
        assert!((ring.hue_of(0) - 0.1).abs() < 1e-12);

        let first = ring.lights()[0];
        let expected = hsv_to_rgb(0.1, 1.0, 1.0);
        let [r, g, b] = host.entity(first).unwrap().point_light.unwrap();
        assert_eq!([r, g, b], [expected.r, expected.g, expected.b]);
    }
}
