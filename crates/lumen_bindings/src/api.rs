//! Host API that scripts call

use crate::handles::{Entity, GlyphStyle, PointLightComponent, TransformComponent, UiPanel};
use lumen_math::{Color, Quat, Vec2, Vec3};

/// Host API interface that scripts call into
///
/// This trait is the whole surface the engine exposes. Every method is a
/// one-way call into the host; the host is assumed to succeed, and an invalid
/// handle is the caller's problem.
pub trait HostApi {
    // =========================================================================
    // Entity lifecycle
    // =========================================================================

    /// Spawn a child entity under `parent`
    fn spawn_child(&mut self, parent: Entity) -> Entity;

    /// Spawn a child entity with a transform at the given position
    fn spawn_child_at(&mut self, parent: Entity, x: f64, y: f64, z: f64) -> Entity;

    /// Spawn a child entity running `script_impl` from the parent's script module
    ///
    /// Guest exports are not re-entrant, so the host instantiates the child's
    /// script after the export that spawned it returns.
    fn spawn_scripted_child(&mut self, parent: Entity, script_impl: &str) -> Entity;

    /// Spawn a scripted child entity with a transform at the given position
    fn spawn_scripted_child_at(
        &mut self,
        parent: Entity,
        script_impl: &str,
        x: f64,
        y: f64,
        z: f64,
    ) -> Entity;

    // =========================================================================
    // Components
    // =========================================================================

    fn has_transform(&self, entity: Entity) -> bool;
    fn add_transform(&mut self, entity: Entity) -> TransformComponent;
    fn get_transform(&mut self, entity: Entity) -> TransformComponent;

    fn has_point_light(&self, entity: Entity) -> bool;
    fn add_point_light(&mut self, entity: Entity) -> PointLightComponent;
    fn get_point_light(&mut self, entity: Entity) -> PointLightComponent;

    // =========================================================================
    // Transform
    // =========================================================================

    fn transform_get_x(&self, transform: TransformComponent) -> f64;
    fn transform_get_y(&self, transform: TransformComponent) -> f64;
    fn transform_get_z(&self, transform: TransformComponent) -> f64;
    fn transform_set_position(&mut self, transform: TransformComponent, x: f64, y: f64, z: f64);

    /// Rotation as `[w, x, y, z]`
    fn transform_get_rotation(&self, transform: TransformComponent) -> [f64; 4];
    fn transform_set_rotation(&mut self, transform: TransformComponent, w: f64, x: f64, y: f64, z: f64);

    // =========================================================================
    // Point light
    // =========================================================================

    fn point_light_set_intensity(&mut self, light: PointLightComponent, r: f64, g: f64, b: f64);

    // =========================================================================
    // UI panels
    // =========================================================================

    fn panel_get_width(&self, panel: UiPanel) -> f64;
    fn panel_get_height(&self, panel: UiPanel) -> f64;
    fn panel_set_size(&mut self, panel: UiPanel, width: f64, height: f64);
    fn panel_set_color(&mut self, panel: UiPanel, r: f64, g: f64, b: f64, a: f64);
    fn panel_create_glyph_style(&mut self, panel: UiPanel) -> GlyphStyle;

    #[allow(clippy::too_many_arguments)]
    fn panel_draw_triangle(
        &mut self,
        panel: UiPanel,
        points: [Vec2; 3],
        r: f64,
        g: f64,
        b: f64,
        a: f64,
    );

    #[allow(clippy::too_many_arguments)]
    fn panel_draw_circle(&mut self, panel: UiPanel, x: f64, y: f64, radius: f64, r: f64, g: f64, b: f64, a: f64);

    #[allow(clippy::too_many_arguments)]
    fn panel_draw_ring(
        &mut self,
        panel: UiPanel,
        x: f64,
        y: f64,
        inner_radius: f64,
        outer_radius: f64,
        r: f64,
        g: f64,
        b: f64,
        a: f64,
    );

    // =========================================================================
    // Glyph styles
    // =========================================================================

    fn glyph_set_text(&mut self, style: GlyphStyle, text: &str);
    fn glyph_set_color(&mut self, style: GlyphStyle, r: f64, g: f64, b: f64, a: f64);
    fn glyph_set_offset(&mut self, style: GlyphStyle, x: f64, y: f64);
    fn glyph_set_scale(&mut self, style: GlyphStyle, scale: f64);

    // =========================================================================
    // Logging
    // =========================================================================

    fn log(&mut self, level: LogLevel, message: &str);
}

/// Log levels understood by the host's `log` import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Wire value passed to the host
    pub fn as_i32(self) -> i32 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
        }
    }

    pub fn from_i32(level: i32) -> Self {
        match level {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

/// Mutating calls a script made against the host, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// A child entity was spawned
    Spawn {
        parent: Entity,
        child: Entity,
        position: Option<Vec3>,
        script: Option<String>,
    },
    AddTransform(Entity),
    AddPointLight(Entity),
    SetPosition { entity: Entity, position: Vec3 },
    SetRotation { entity: Entity, rotation: Quat },
    SetIntensity { entity: Entity, intensity: [f64; 3] },
    SetPanelSize { panel: UiPanel, size: Vec2 },
    SetPanelColor { panel: UiPanel, color: Color },
    CreateGlyphStyle { panel: UiPanel, style: GlyphStyle },
    DrawTriangle { panel: UiPanel, points: [Vec2; 3], color: Color },
    DrawCircle { panel: UiPanel, center: Vec2, radius: f64, color: Color },
    DrawRing { panel: UiPanel, center: Vec2, inner_radius: f64, outer_radius: f64, color: Color },
    SetGlyphText { style: GlyphStyle, text: String },
    SetGlyphColor { style: GlyphStyle, color: Color },
    SetGlyphOffset { style: GlyphStyle, offset: Vec2 },
    SetGlyphScale { style: GlyphStyle, scale: f64 },
    Log { level: LogLevel, message: String },
}

impl HostCommand {
    /// Whether this command is a panel draw call
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            HostCommand::DrawTriangle { .. } | HostCommand::DrawCircle { .. } | HostCommand::DrawRing { .. }
        )
    }
}
