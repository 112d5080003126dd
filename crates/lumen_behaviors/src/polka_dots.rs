//! Paint fading dots on a panel with the pointer
//!
//! Selecting drops a dot; dragging keeps dropping them whenever the pointer
//! has moved `spacing` away from the last one. Each dot grows in, lives for
//! a while and shrinks away. The panel is redrawn from scratch every frame.

use crate::config::PolkaDotsConfig;
use crate::script::UiScript;
use crate::timer::Envelope;
use lumen_bindings::{HostApi, UiPanel};
use lumen_math::{hsv_to_rgb, Color, Vec2};

/// A single dot
#[derive(Debug, Clone, Copy)]
pub struct Dot {
    pub center: Vec2,
    pub color: Color,
    envelope: Envelope,
}

impl Dot {
    /// Radius scale in `[0, 1]`
    pub fn factor(&self) -> f64 {
        self.envelope.factor()
    }
}

#[derive(Debug, Clone)]
pub struct PolkaDots {
    panel: UiPanel,
    config: PolkaDotsConfig,
    dots: Vec<Dot>,
    last_dot: Option<Vec2>,
    hue: f64,
}

impl PolkaDots {
    pub fn new(panel: UiPanel, config: &PolkaDotsConfig) -> Self {
        Self {
            panel,
            config: config.clone(),
            dots: Vec::new(),
            last_dot: None,
            hue: 0.0,
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Drop a dot at `center`, advancing the hue
    ///
    /// Returns false when the panel already holds `max_dots`.
    pub fn spawn(&mut self, center: Vec2) -> bool {
        self.last_dot = Some(center);
        if self.dots.len() >= self.config.max_dots {
            log::debug!("polka dots on {:?} at capacity", self.panel);
            return false;
        }

        self.dots.push(Dot {
            center,
            color: hsv_to_rgb(self.hue, 0.6, 1.0),
            envelope: Envelope::new(self.config.lifespan, self.config.grow, self.config.shrink),
        });
        self.hue = (self.hue + self.config.hue_step).fract();
        true
    }
}

impl<H: HostApi> UiScript<H> for PolkaDots {
    fn update(&mut self, host: &mut H, dt: f64) {
        // Order is irrelevant, only the set is drawn
        let mut i = 0;
        while i < self.dots.len() {
            if self.dots[i].envelope.tick(dt) {
                i += 1;
            } else {
                self.dots.swap_remove(i);
            }
        }

        for dot in &self.dots {
            let factor = dot.factor();
            self.panel
                .draw_circle(host, dot.center, self.config.radius * factor, dot.color.with_alpha(factor));
        }
    }

    fn on_select(&mut self, _host: &mut H, x: f64, y: f64) {
        self.spawn(Vec2::new(x, y));
    }

    fn on_drag(&mut self, _host: &mut H, x: f64, y: f64) {
        let point = Vec2::new(x, y);
        let far_enough = self
            .last_dot
            .map_or(true, |last| last.distance(point) >= self.config.spacing);
        if far_enough {
            self.spawn(point);
        }
    }

    fn on_deselect(&mut self, _host: &mut H, _x: f64, _y: f64) {
        self.last_dot = None;
    }
}
