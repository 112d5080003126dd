//! Raw imports provided by the host under the `env` module
//!
//! Symbol names follow `<Class>_<method>`; the first argument is always the
//! receiver's handle. Strings are passed as a UTF-8 `(ptr, len)` pair into
//! guest memory.

#[link(wasm_import_module = "env")]
extern "C" {
    #[link_name = "Entity_spawnChild"]
    pub fn entity_spawn_child(this: i32) -> i32;
    #[link_name = "Entity_spawnChildAt"]
    pub fn entity_spawn_child_at(this: i32, x: f64, y: f64, z: f64) -> i32;
    #[link_name = "Entity_spawnScriptedChild"]
    pub fn entity_spawn_scripted_child(this: i32, impl_ptr: *const u8, impl_len: usize) -> i32;
    #[link_name = "Entity_spawnScriptedChildAt"]
    pub fn entity_spawn_scripted_child_at(
        this: i32,
        impl_ptr: *const u8,
        impl_len: usize,
        x: f64,
        y: f64,
        z: f64,
    ) -> i32;

    #[link_name = "Entity_hasTransform"]
    pub fn entity_has_transform(this: i32) -> i32;
    #[link_name = "Entity_addTransform"]
    pub fn entity_add_transform(this: i32) -> i32;
    #[link_name = "Entity_getTransform"]
    pub fn entity_get_transform(this: i32) -> i32;
    #[link_name = "Entity_hasPointLight"]
    pub fn entity_has_point_light(this: i32) -> i32;
    #[link_name = "Entity_addPointLight"]
    pub fn entity_add_point_light(this: i32) -> i32;
    #[link_name = "Entity_getPointLight"]
    pub fn entity_get_point_light(this: i32) -> i32;

    #[link_name = "TransformComponent_getX"]
    pub fn transform_get_x(this: i32) -> f64;
    #[link_name = "TransformComponent_getY"]
    pub fn transform_get_y(this: i32) -> f64;
    #[link_name = "TransformComponent_getZ"]
    pub fn transform_get_z(this: i32) -> f64;
    #[link_name = "TransformComponent_setPosition"]
    pub fn transform_set_position(this: i32, x: f64, y: f64, z: f64);
    #[link_name = "TransformComponent_getRotationW"]
    pub fn transform_get_rotation_w(this: i32) -> f64;
    #[link_name = "TransformComponent_getRotationX"]
    pub fn transform_get_rotation_x(this: i32) -> f64;
    #[link_name = "TransformComponent_getRotationY"]
    pub fn transform_get_rotation_y(this: i32) -> f64;
    #[link_name = "TransformComponent_getRotationZ"]
    pub fn transform_get_rotation_z(this: i32) -> f64;
    #[link_name = "TransformComponent_setRotation"]
    pub fn transform_set_rotation(this: i32, w: f64, x: f64, y: f64, z: f64);

    #[link_name = "PointLightComponent_setIntensity"]
    pub fn point_light_set_intensity(this: i32, r: f64, g: f64, b: f64);

    #[link_name = "UiPanel_getWidth"]
    pub fn panel_get_width(this: i32) -> f64;
    #[link_name = "UiPanel_getHeight"]
    pub fn panel_get_height(this: i32) -> f64;
    #[link_name = "UiPanel_setSize"]
    pub fn panel_set_size(this: i32, width: f64, height: f64);
    #[link_name = "UiPanel_setColor"]
    pub fn panel_set_color(this: i32, r: f64, g: f64, b: f64, a: f64);
    #[link_name = "UiPanel_createGlyphStyle"]
    pub fn panel_create_glyph_style(this: i32) -> i32;
    #[link_name = "UiPanel_drawTriangle"]
    pub fn panel_draw_triangle(
        this: i32,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        r: f64,
        g: f64,
        b: f64,
        a: f64,
    );
    #[link_name = "UiPanel_drawCircle"]
    pub fn panel_draw_circle(this: i32, x: f64, y: f64, radius: f64, r: f64, g: f64, b: f64, a: f64);
    #[link_name = "UiPanel_drawRing"]
    pub fn panel_draw_ring(
        this: i32,
        x: f64,
        y: f64,
        inner_radius: f64,
        outer_radius: f64,
        r: f64,
        g: f64,
        b: f64,
        a: f64,
    );

    #[link_name = "GlyphStyle_setText"]
    pub fn glyph_set_text(this: i32, text_ptr: *const u8, text_len: usize);
    #[link_name = "GlyphStyle_setColor"]
    pub fn glyph_set_color(this: i32, r: f64, g: f64, b: f64, a: f64);
    #[link_name = "GlyphStyle_setOffset"]
    pub fn glyph_set_offset(this: i32, x: f64, y: f64);
    #[link_name = "GlyphStyle_setScale"]
    pub fn glyph_set_scale(this: i32, scale: f64);

    pub fn log(level: i32, msg_ptr: *const u8, msg_len: usize);
}
