//! Panel that breathes in size and opacity and lights up under the pointer

use crate::config::PulsingPanelConfig;
use crate::script::UiScript;
use lumen_bindings::{HostApi, UiPanel};
use lumen_math::consts::TAU;
use lumen_math::{Color, Vec2};

#[derive(Debug, Clone)]
pub struct PulsingPanel {
    panel: UiPanel,
    config: PulsingPanelConfig,
    base_size: Vec2,
    time: f64,
    hover_glow: f64,
    selected: bool,
}

impl PulsingPanel {
    /// Capture the panel's current size as the rest size
    pub fn new<H: HostApi>(host: &mut H, panel: UiPanel, config: &PulsingPanelConfig) -> Self {
        let base_size = panel.size(&*host);
        panel.set_color(host, config.color);
        Self {
            panel,
            config: config.clone(),
            base_size,
            time: 0.0,
            hover_glow: 0.0,
            selected: false,
        }
    }

    pub fn base_size(&self) -> Vec2 {
        self.base_size
    }

    pub fn is_highlighted(&self) -> bool {
        self.selected || self.hover_glow > 0.0
    }

    /// Pulse wave in `[-1, 1]` at the current time
    fn wave(&self) -> f64 {
        (TAU * self.config.rate * self.time).sin()
    }

    /// Color for the current frame
    pub fn current_color(&self) -> Color {
        let base = if self.is_highlighted() {
            self.config.highlight
        } else {
            self.config.color
        };
        let dip = 0.5 * (1.0 - self.wave());
        base.with_alpha(base.a * (1.0 - self.config.alpha_depth * dip))
    }

    /// Size for the current frame
    pub fn current_size(&self) -> Vec2 {
        self.base_size * (1.0 + self.config.amplitude * self.wave())
    }
}

impl<H: HostApi> UiScript<H> for PulsingPanel {
    fn update(&mut self, host: &mut H, dt: f64) {
        self.time += dt;
        self.hover_glow = (self.hover_glow - dt).max(0.0);

        self.panel.set_size(host, self.current_size());
        self.panel.set_color(host, self.current_color());
    }

    fn on_hover(&mut self, _host: &mut H, _x: f64, _y: f64) {
        self.hover_glow = self.config.hover_hold;
    }

    fn on_select(&mut self, _host: &mut H, _x: f64, _y: f64) {
        self.selected = true;
    }

    fn on_deselect(&mut self, _host: &mut H, _x: f64, _y: f64) {
        self.selected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_bindings::RecordingHost;

    fn setup() -> (RecordingHost, UiPanel, PulsingPanel) {
        let mut host = RecordingHost::new();
        let panel = host.create_panel(2.0, 1.0);
        let config = PulsingPanelConfig {
            rate: 1.0,
            amplitude: 0.5,
            alpha_depth: 0.5,
            color: Color::new(0.0, 0.0, 0.0, 1.0),
            highlight: Color::new(1.0, 1.0, 1.0, 1.0),
            hover_hold: 0.25,
        };
        let pulsing = PulsingPanel::new(&mut host, panel, &config);
        (host, panel, pulsing)
    }

    #[test]
    fn test_size_follows_wave() {
        let (mut host, panel, mut pulsing) = setup();
        assert_eq!(pulsing.base_size(), Vec2::new(2.0, 1.0));

        // Quarter period: top of the wave
        pulsing.update(&mut host, 0.25);
        let size = host.panel(panel).unwrap().size;
        assert!((size.x - 3.0).abs() < 1e-12 && (size.y - 1.5).abs() < 1e-12);
        assert!((host.panel(panel).unwrap().color.a - 1.0).abs() < 1e-12);

        // Three quarters: bottom of the wave
        pulsing.update(&mut host, 0.5);
        let panel_state = host.panel(panel).unwrap();
        assert!((panel_state.size.x - 1.0).abs() < 1e-12);
        assert!((panel_state.color.a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hover_highlight_decays() {
        let (mut host, panel, mut pulsing) = setup();
        pulsing.on_hover(&mut host, 0.0, 0.0);
        pulsing.update(&mut host, 0.125);
        assert!(pulsing.is_highlighted());
        assert_eq!(host.panel(panel).unwrap().color.r, 1.0);

        pulsing.update(&mut host, 0.125);
        assert!(!pulsing.is_highlighted());
        assert_eq!(host.panel(panel).unwrap().color.r, 0.0);
    }

    #[test]
    fn test_selection_holds_highlight() {
        let (mut host, _, mut pulsing) = setup();
        pulsing.on_select(&mut host, 0.1, 0.1);
        for _ in 0..10 {
            pulsing.update(&mut host, 0.1);
        }
        assert!(pulsing.is_highlighted());

        pulsing.on_deselect(&mut host, 0.1, 0.1);
        assert!(!pulsing.is_highlighted());
    }
}
