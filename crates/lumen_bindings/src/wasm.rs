//! `HostApi` over the real host imports

use crate::api::{HostApi, LogLevel};
use crate::ffi;
use crate::handles::{Entity, GlyphStyle, PointLightComponent, TransformComponent, UiPanel};
use lumen_math::Vec2;

/// Host reached through the `env` imports of the running module
#[derive(Debug, Default, Clone, Copy)]
pub struct WasmHost;

// SAFETY (all blocks below): the imports take plain numbers and, for
// strings, a pointer/length pair into a live `&str` for the duration of the
// call. The host never retains the pointer.
impl HostApi for WasmHost {
    fn spawn_child(&mut self, parent: Entity) -> Entity {
        Entity(unsafe { ffi::entity_spawn_child(parent.0) })
    }

    fn spawn_child_at(&mut self, parent: Entity, x: f64, y: f64, z: f64) -> Entity {
        Entity(unsafe { ffi::entity_spawn_child_at(parent.0, x, y, z) })
    }

    fn spawn_scripted_child(&mut self, parent: Entity, script_impl: &str) -> Entity {
        Entity(unsafe { ffi::entity_spawn_scripted_child(parent.0, script_impl.as_ptr(), script_impl.len()) })
    }

    fn spawn_scripted_child_at(&mut self, parent: Entity, script_impl: &str, x: f64, y: f64, z: f64) -> Entity {
        Entity(unsafe {
            ffi::entity_spawn_scripted_child_at(parent.0, script_impl.as_ptr(), script_impl.len(), x, y, z)
        })
    }

    fn has_transform(&self, entity: Entity) -> bool {
        unsafe { ffi::entity_has_transform(entity.0) != 0 }
    }

    fn add_transform(&mut self, entity: Entity) -> TransformComponent {
        TransformComponent(unsafe { ffi::entity_add_transform(entity.0) })
    }

    fn get_transform(&mut self, entity: Entity) -> TransformComponent {
        TransformComponent(unsafe { ffi::entity_get_transform(entity.0) })
    }

    fn has_point_light(&self, entity: Entity) -> bool {
        unsafe { ffi::entity_has_point_light(entity.0) != 0 }
    }

    fn add_point_light(&mut self, entity: Entity) -> PointLightComponent {
        PointLightComponent(unsafe { ffi::entity_add_point_light(entity.0) })
    }

    fn get_point_light(&mut self, entity: Entity) -> PointLightComponent {
        PointLightComponent(unsafe { ffi::entity_get_point_light(entity.0) })
    }

    fn transform_get_x(&self, transform: TransformComponent) -> f64 {
        unsafe { ffi::transform_get_x(transform.0) }
    }

    fn transform_get_y(&self, transform: TransformComponent) -> f64 {
        unsafe { ffi::transform_get_y(transform.0) }
    }

    fn transform_get_z(&self, transform: TransformComponent) -> f64 {
        unsafe { ffi::transform_get_z(transform.0) }
    }

    fn transform_set_position(&mut self, transform: TransformComponent, x: f64, y: f64, z: f64) {
        unsafe { ffi::transform_set_position(transform.0, x, y, z) }
    }

    fn transform_get_rotation(&self, transform: TransformComponent) -> [f64; 4] {
        unsafe {
            [
                ffi::transform_get_rotation_w(transform.0),
                ffi::transform_get_rotation_x(transform.0),
                ffi::transform_get_rotation_y(transform.0),
                ffi::transform_get_rotation_z(transform.0),
            ]
        }
    }

    fn transform_set_rotation(&mut self, transform: TransformComponent, w: f64, x: f64, y: f64, z: f64) {
        unsafe { ffi::transform_set_rotation(transform.0, w, x, y, z) }
    }

    fn point_light_set_intensity(&mut self, light: PointLightComponent, r: f64, g: f64, b: f64) {
        unsafe { ffi::point_light_set_intensity(light.0, r, g, b) }
    }

    fn panel_get_width(&self, panel: UiPanel) -> f64 {
        unsafe { ffi::panel_get_width(panel.0) }
    }

    fn panel_get_height(&self, panel: UiPanel) -> f64 {
        unsafe { ffi::panel_get_height(panel.0) }
    }

    fn panel_set_size(&mut self, panel: UiPanel, width: f64, height: f64) {
        unsafe { ffi::panel_set_size(panel.0, width, height) }
    }

    fn panel_set_color(&mut self, panel: UiPanel, r: f64, g: f64, b: f64, a: f64) {
        unsafe { ffi::panel_set_color(panel.0, r, g, b, a) }
    }

    fn panel_create_glyph_style(&mut self, panel: UiPanel) -> GlyphStyle {
        GlyphStyle(unsafe { ffi::panel_create_glyph_style(panel.0) })
    }

    fn panel_draw_triangle(&mut self, panel: UiPanel, points: [Vec2; 3], r: f64, g: f64, b: f64, a: f64) {
        let [p1, p2, p3] = points;
        unsafe { ffi::panel_draw_triangle(panel.0, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y, r, g, b, a) }
    }

    fn panel_draw_circle(&mut self, panel: UiPanel, x: f64, y: f64, radius: f64, r: f64, g: f64, b: f64, a: f64) {
        unsafe { ffi::panel_draw_circle(panel.0, x, y, radius, r, g, b, a) }
    }

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
    ) {
        unsafe { ffi::panel_draw_ring(panel.0, x, y, inner_radius, outer_radius, r, g, b, a) }
    }

    fn glyph_set_text(&mut self, style: GlyphStyle, text: &str) {
        unsafe { ffi::glyph_set_text(style.0, text.as_ptr(), text.len()) }
    }

    fn glyph_set_color(&mut self, style: GlyphStyle, r: f64, g: f64, b: f64, a: f64) {
        unsafe { ffi::glyph_set_color(style.0, r, g, b, a) }
    }

    fn glyph_set_offset(&mut self, style: GlyphStyle, x: f64, y: f64) {
        unsafe { ffi::glyph_set_offset(style.0, x, y) }
    }

    fn glyph_set_scale(&mut self, style: GlyphStyle, scale: f64) {
        unsafe { ffi::glyph_set_scale(style.0, scale) }
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        unsafe { ffi::log(level.as_i32(), message.as_ptr(), message.len()) }
    }
}
