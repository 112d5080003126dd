//! Scrolling message log on a UI panel
//!
//! Messages stack upward from the bottom of the panel, each with its own
//! glyph style. Lines expire after a fixed lifespan, fading and collapsing
//! their height over the last `fade_duration` seconds. Expired lines clear
//! their text and return the style to a pool so long sessions do not keep
//! allocating styles on the host.
//!
//! A burst of messages is staggered: each message arriving shortly after
//! another gets extra lifetime, so the burst expires one line at a time.

use crate::config::MessageLogConfig;
use crate::script::UiScript;
use crate::timer::Lifespan;
use lumen_bindings::{GlyphStyle, HostApi, UiPanel};
use lumen_math::Vec2;

#[derive(Debug, Clone)]
struct LogLine {
    style: GlyphStyle,
    lifespan: Lifespan,
    height: f64,
}

impl LogLine {
    /// Tick the line; returns false once it has expired
    fn update<H: HostApi>(&mut self, host: &mut H, dt: f64, config: &MessageLogConfig) -> bool {
        if !self.lifespan.tick(dt) {
            return false;
        }

        if self.lifespan.in_fade() {
            let alpha = self.lifespan.alpha();
            self.style.set_color(host, config.color.with_alpha(config.color.a * alpha));
            self.height = config.line_height * alpha;
        }

        true
    }
}

/// Message log bound to a panel
#[derive(Debug, Clone)]
pub struct MessageLog {
    panel: UiPanel,
    config: MessageLogConfig,
    lines: Vec<LogLine>,
    style_pool: Vec<GlyphStyle>,
    log_top: f64,
    last_message: f64,
}

impl MessageLog {
    pub fn new(panel: UiPanel, config: &MessageLogConfig) -> Self {
        Self {
            panel,
            config: config.clone(),
            lines: Vec::new(),
            style_pool: Vec::new(),
            log_top: config.bottom,
            last_message: 0.0,
        }
    }

    /// Append a line at the top of the log
    pub fn push<H: HostApi>(&mut self, host: &mut H, text: &str) {
        let style = match self.style_pool.pop() {
            Some(style) => style,
            None => self.panel.create_glyph_style(host),
        };
        style.set_color(host, self.config.color);
        style.set_text(host, text);
        style.set_offset(host, Vec2::new(self.config.left, self.log_top));

        let mut lifespan = Lifespan::new(self.config.lifespan, self.config.fade_duration);
        self.last_message = (self.last_message + self.config.stagger).min(self.config.max_stagger);
        if self.last_message > 0.0 {
            lifespan.extend(self.last_message);
        }

        self.log_top += self.config.line_height;
        self.lines.push(LogLine {
            style,
            lifespan,
            height: self.config.line_height,
        });

        log::debug!("message log {:?}: {}", self.panel, text);
    }

    /// Age every line, drop expired ones and restack the rest
    pub fn update<H: HostApi>(&mut self, host: &mut H, dt: f64) {
        self.last_message = (self.last_message - dt).max(0.0);

        let config = &self.config;
        let pool = &mut self.style_pool;
        let mut bottom = config.bottom;
        self.lines.retain_mut(|line| {
            if line.update(host, dt, config) {
                line.style.set_offset(host, Vec2::new(config.left, bottom));
                bottom += line.height;
                true
            } else {
                line.style.set_text(host, "");
                pool.push(line.style);
                false
            }
        });
        self.log_top = bottom;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Styles waiting to be reused
    pub fn pooled_styles(&self) -> usize {
        self.style_pool.len()
    }

    /// Remaining lifetime of each line, oldest first
    pub fn remaining(&self) -> Vec<f64> {
        self.lines.iter().map(|line| line.lifespan.remaining()).collect()
    }
}

impl<H: HostApi> UiScript<H> for MessageLog {
    fn update(&mut self, host: &mut H, dt: f64) {
        MessageLog::update(self, host, dt);
    }

    fn handle_message(&mut self, host: &mut H, message: &str) {
        self.push(host, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_bindings::RecordingHost;
    use lumen_math::Color;

    fn config() -> MessageLogConfig {
        MessageLogConfig {
            lifespan: 1.0,
            fade_duration: 0.5,
            line_height: 0.125,
            left: -0.5,
            bottom: -0.5,
            stagger: 0.5,
            max_stagger: 5.0,
            color: Color::WHITE,
        }
    }

    fn setup() -> (RecordingHost, UiPanel, MessageLog) {
        let mut host = RecordingHost::new();
        let panel = host.create_panel(1.0, 1.0);
        let log = MessageLog::new(panel, &config());
        (host, panel, log)
    }

    #[test]
    fn test_push_places_line() {
        let (mut host, panel, mut log) = setup();
        log.push(&mut host, "hello");

        let styles = host.styles_of(panel);
        assert_eq!(styles.len(), 1);
        let glyph = host.glyph(styles[0]).unwrap();
        assert_eq!(glyph.text, "hello");
        assert_eq!(glyph.offset, Vec2::new(-0.5, -0.5));
        assert_eq!(log.remaining(), vec![1.5]);
    }

    #[test]
    fn test_lines_stack_and_restack() {
        let (mut host, panel, mut log) = setup();
        log.push(&mut host, "a");
        log.update(&mut host, 0.5);
        log.push(&mut host, "b");

        let styles = host.styles_of(panel);
        assert_eq!(host.glyph(styles[1]).unwrap().offset, Vec2::new(-0.5, -0.375));

        // "a" expires, "b" drops to the bottom
        log.update(&mut host, 1.0);
        assert_eq!(log.len(), 1);
        assert_eq!(host.glyph(styles[0]).unwrap().text, "");
        assert_eq!(host.glyph(styles[1]).unwrap().offset, Vec2::new(-0.5, -0.5));
    }

    #[test]
    fn test_fade_shrinks_and_dims() {
        let (mut host, panel, mut log) = setup();
        log.push(&mut host, "a");
        log.push(&mut host, "b");

        log.update(&mut host, 1.25);

        let styles = host.styles_of(panel);
        let first = host.glyph(styles[0]).unwrap();
        assert_eq!(first.color.a, 0.5);
        // Height of "a" is half a line, so "b" sits that far up
        assert_eq!(host.glyph(styles[1]).unwrap().offset, Vec2::new(-0.5, -0.4375));
    }

    #[test]
    fn test_burst_is_staggered() {
        let (mut host, _, mut log) = setup();
        for text in ["a", "b", "c"] {
            log.push(&mut host, text);
        }
        assert_eq!(log.remaining(), vec![1.5, 2.0, 2.5]);

        let mut expired_at = Vec::new();
        for frame in 1..=12 {
            let before = log.len();
            log.update(&mut host, 0.25);
            if log.len() < before {
                expired_at.push(frame);
            }
        }
        assert_eq!(expired_at, vec![6, 8, 10]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_stagger_is_capped() {
        let (mut host, _, mut log) = setup();
        for i in 0..20 {
            log.push(&mut host, &i.to_string());
        }
        assert_eq!(log.remaining().last().copied(), Some(6.0));
    }

    #[test]
    fn test_styles_are_recycled() {
        let (mut host, panel, mut log) = setup();
        log.push(&mut host, "a");
        log.update(&mut host, 2.0);
        assert_eq!(log.pooled_styles(), 1);

        log.push(&mut host, "b");
        assert_eq!(log.pooled_styles(), 0);
        let styles = host.styles_of(panel);
        assert_eq!(styles.len(), 1);
        assert_eq!(host.glyph(styles[0]).unwrap().text, "b");
        assert_eq!(host.glyph(styles[0]).unwrap().color, Color::WHITE);
    }
}
