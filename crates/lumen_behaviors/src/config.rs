//! Tunables for the bundled behaviors
//!
//! Every section falls back to its defaults, so a config only needs to name
//! the values it changes:
//!
//! ```json
//! { "seed": 7, "ring_light": { "radius": 2.0 } }
//! ```

use crate::error::{Result, ScriptError};
use log::LevelFilter;
use lumen_math::consts::TAU;
use lumen_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration shared by every script instance in a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Seed for the runtime RNG; instances draw their own seeds from it
    pub seed: u64,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub firefly: FireflyConfig,
    pub fireflies: FirefliesConfig,
    pub sliding_light: SlidingLightConfig,
    pub ring_light: RingLightConfig,
    pub message_log: MessageLogConfig,
    pub pulsing_panel: PulsingPanelConfig,
    pub polka_dots: PolkaDotsConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            log_level: "info".to_string(),
            firefly: FireflyConfig::default(),
            fireflies: FirefliesConfig::default(),
            sliding_light: SlidingLightConfig::default(),
            ring_light: RingLightConfig::default(),
            message_log: MessageLogConfig::default(),
            pulsing_panel: PulsingPanelConfig::default(),
            polka_dots: PolkaDotsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireflyConfig {
    /// Half-extent of the box a firefly wanders around its origin
    pub roam_bounds: Vec3,
    /// Phase advance per second
    pub speed: f64,
    pub intensity: Color,
}

impl Default for FireflyConfig {
    fn default() -> Self {
        Self {
            roam_bounds: Vec3::new(0.5, 0.3, 0.5),
            speed: 0.3,
            intensity: Color::rgb(1.0, 0.6, 0.3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirefliesConfig {
    pub count: u32,
    pub center: Vec3,
    /// Half-extent of the swarm before subtracting the roam bounds
    pub size: Vec3,
    /// Implementation name each spawned child runs
    pub script_impl: String,
}

impl Default for FirefliesConfig {
    fn default() -> Self {
        Self {
            count: 10,
            center: Vec3::new(-0.5, 0.45, -0.5),
            size: Vec3::new(10.0, 0.4, 1.8),
            script_impl: "Firefly".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidingLightConfig {
    pub speed: f64,
    pub destination_a: f64,
    pub destination_b: f64,
}

impl Default for SlidingLightConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            destination_a: -10.0,
            destination_b: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingLightConfig {
    pub radius: f64,
    /// Angle between neighbouring lights, in radians
    pub delta: f64,
    pub height: f64,
    /// Hue turns per second
    pub hue_speed: f64,
    pub initial_intensity: Color,
}

impl Default for RingLightConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            delta: 0.3,
            height: 0.05,
            hue_speed: 0.1,
            initial_intensity: Color::MAGENTA,
        }
    }
}

impl RingLightConfig {
    /// Lights one full turn takes at `delta` spacing, saturating at `u32::MAX`
    pub fn light_count(&self) -> u32 {
        (TAU / self.delta).ceil() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageLogConfig {
    pub lifespan: f64,
    pub fade_duration: f64,
    pub line_height: f64,
    /// Panel-space x of every line
    pub left: f64,
    /// Panel-space y the log grows upward from
    pub bottom: f64,
    /// Extra lifetime per message in a burst
    pub stagger: f64,
    pub max_stagger: f64,
    pub color: Color,
}

impl Default for MessageLogConfig {
    fn default() -> Self {
        Self {
            lifespan: 5.0,
            fade_duration: 0.25,
            line_height: 0.05,
            left: -0.45,
            bottom: -0.45,
            stagger: 0.5,
            max_stagger: 5.0,
            color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulsingPanelConfig {
    /// Pulses per second
    pub rate: f64,
    /// Relative size swing
    pub amplitude: f64,
    /// Fraction of alpha lost at the bottom of a pulse
    pub alpha_depth: f64,
    pub color: Color,
    pub highlight: Color,
    /// Seconds a hover keeps the highlight lit
    pub hover_hold: f64,
}

impl Default for PulsingPanelConfig {
    fn default() -> Self {
        Self {
            rate: 0.5,
            amplitude: 0.05,
            alpha_depth: 0.25,
            color: Color::new(0.05, 0.05, 0.1, 0.9),
            highlight: Color::new(0.2, 0.25, 0.5, 0.95),
            hover_hold: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolkaDotsConfig {
    pub lifespan: f64,
    pub grow: f64,
    pub shrink: f64,
    pub radius: f64,
    /// Minimum drag distance between dots
    pub spacing: f64,
    /// Hue advance per dot, in turns
    pub hue_step: f64,
    pub max_dots: usize,
}

impl Default for PolkaDotsConfig {
    fn default() -> Self {
        Self {
            lifespan: 3.0,
            grow: 0.2,
            shrink: 0.5,
            radius: 0.04,
            spacing: 0.06,
            hue_step: 0.07,
            max_dots: 256,
        }
    }
}

/// Most children a swarm may spawn
pub const MAX_FIREFLIES: u32 = 1024;

/// Most lights a ring may spawn
pub const MAX_RING_LIGHTS: u32 = 1024;

fn positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ScriptError::InvalidConfig(format!("{} must be positive, got {}", name, value)))
    }
}

fn fraction(name: &str, value: f64) -> Result<()> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ScriptError::InvalidConfig(format!("{} must be in [0, 1), got {}", name, value)))
    }
}

impl BehaviorConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parsed `log_level`
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ScriptError::InvalidConfig(format!("unknown log level '{}'", self.log_level)))
    }

    /// Reject values the behaviors cannot run with
    pub fn validate(&self) -> Result<()> {
        self.level_filter()?;

        positive("firefly.speed", self.firefly.speed)?;
        let extent = self.fireflies.size - self.firefly.roam_bounds;
        if extent.x < 0.0 || extent.y < 0.0 || extent.z < 0.0 {
            return Err(ScriptError::InvalidConfig(
                "fireflies.size must contain firefly.roam_bounds".to_string(),
            ));
        }
        if self.fireflies.count > MAX_FIREFLIES {
            return Err(ScriptError::InvalidConfig(format!(
                "fireflies.count must be at most {}, got {}",
                MAX_FIREFLIES, self.fireflies.count
            )));
        }
        if self.fireflies.script_impl.is_empty() {
            return Err(ScriptError::InvalidConfig("fireflies.script_impl is empty".to_string()));
        }

        positive("sliding_light.speed", self.sliding_light.speed)?;
        if self.sliding_light.destination_a >= self.sliding_light.destination_b {
            return Err(ScriptError::InvalidConfig(
                "sliding_light.destination_a must be below destination_b".to_string(),
            ));
        }

        positive("ring_light.radius", self.ring_light.radius)?;
        positive("ring_light.delta", self.ring_light.delta)?;
        let lights = self.ring_light.light_count();
        if lights > MAX_RING_LIGHTS {
            return Err(ScriptError::InvalidConfig(format!(
                "ring_light.delta {} would spawn {} lights, at most {} allowed",
                self.ring_light.delta, lights, MAX_RING_LIGHTS
            )));
        }

        positive("message_log.lifespan", self.message_log.lifespan)?;
        positive("message_log.fade_duration", self.message_log.fade_duration)?;
        positive("message_log.line_height", self.message_log.line_height)?;

        positive("pulsing_panel.rate", self.pulsing_panel.rate)?;
        fraction("pulsing_panel.amplitude", self.pulsing_panel.amplitude)?;
        fraction("pulsing_panel.alpha_depth", self.pulsing_panel.alpha_depth)?;

        positive("polka_dots.lifespan", self.polka_dots.lifespan)?;
        positive("polka_dots.grow", self.polka_dots.grow)?;
        positive("polka_dots.shrink", self.polka_dots.shrink)?;
        positive("polka_dots.radius", self.polka_dots.radius)?;
        if self.polka_dots.max_dots == 0 {
            return Err(ScriptError::InvalidConfig("polka_dots.max_dots must be non-zero".to_string()));
        }

        Ok(())
    }
}
