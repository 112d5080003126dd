//! In-memory host for native builds and tests
//!
//! Keeps just enough scene state to answer the queries scripts make and logs
//! every mutating call as a [`HostCommand`]. It is not an entity-component
//! store: there are no systems, no hierarchy transforms and no rendering.

use crate::api::{HostApi, HostCommand, LogLevel};
use crate::handles::{Entity, GlyphStyle, PointLightComponent, TransformComponent, UiPanel};
use lumen_math::{Color, Quat, Vec2, Vec3};
use std::collections::HashMap;

/// Entity state tracked by the recording host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityRecord {
    pub parent: Option<Entity>,
    /// Position and rotation, present once a transform was added
    pub transform: Option<(Vec3, Quat)>,
    /// Light intensity, present once a point light was added
    pub point_light: Option<[f64; 3]>,
    /// Script implementation the entity was spawned with
    pub script: Option<String>,
}

/// Panel state tracked by the recording host
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRecord {
    pub size: Vec2,
    pub color: Color,
}

/// Glyph style state tracked by the recording host
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    pub panel: UiPanel,
    pub text: String,
    pub color: Color,
    pub offset: Vec2,
    pub scale: f64,
}

/// Host stand-in that records script calls
#[derive(Debug)]
pub struct RecordingHost {
    entities: HashMap<Entity, EntityRecord>,
    panels: HashMap<UiPanel, PanelRecord>,
    styles: HashMap<GlyphStyle, GlyphRecord>,
    commands: Vec<HostCommand>,
    next_key: i32,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            panels: HashMap::new(),
            styles: HashMap::new(),
            commands: Vec::new(),
            next_key: 1,
        }
    }

    fn allocate_key(&mut self) -> i32 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    /// Create a parentless entity with a transform, as the scene loader would
    pub fn spawn_root_at(&mut self, position: Vec3) -> Entity {
        let entity = Entity(self.allocate_key());
        self.entities.insert(
            entity,
            EntityRecord {
                transform: Some((position, Quat::IDENTITY)),
                ..Default::default()
            },
        );
        entity
    }

    /// Create a panel of the given size, as the UI system would
    pub fn create_panel(&mut self, width: f64, height: f64) -> UiPanel {
        let panel = UiPanel(self.allocate_key());
        self.panels.insert(
            panel,
            PanelRecord {
                size: Vec2::new(width, height),
                color: Color::new(0.0, 0.0, 0.0, 0.9),
            },
        );
        panel
    }

    /// Forget an entity and its descendants
    pub fn despawn(&mut self, entity: Entity) {
        for child in self.children_of(entity) {
            self.despawn(child);
        }
        self.entities.remove(&entity);
    }

    pub fn entity(&self, entity: Entity) -> Option<&EntityRecord> {
        self.entities.get(&entity)
    }

    pub fn panel(&self, panel: UiPanel) -> Option<&PanelRecord> {
        self.panels.get(&panel)
    }

    pub fn glyph(&self, style: GlyphStyle) -> Option<&GlyphRecord> {
        self.styles.get(&style)
    }

    /// Position of an entity's transform, if it has one
    pub fn position_of(&self, entity: Entity) -> Option<Vec3> {
        self.entities.get(&entity)?.transform.map(|(p, _)| p)
    }

    /// Direct children of `parent`, ordered by spawn
    pub fn children_of(&self, parent: Entity) -> Vec<Entity> {
        let mut children: Vec<Entity> = self
            .entities
            .iter()
            .filter(|(_, record)| record.parent == Some(parent))
            .map(|(entity, _)| *entity)
            .collect();
        children.sort();
        children
    }

    /// Styles created on a panel, ordered by creation
    pub fn styles_of(&self, panel: UiPanel) -> Vec<GlyphStyle> {
        let mut styles: Vec<GlyphStyle> = self
            .styles
            .iter()
            .filter(|(_, record)| record.panel == panel)
            .map(|(style, _)| *style)
            .collect();
        styles.sort();
        styles
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Take every command recorded since the last drain
    pub fn drain_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    fn spawn(&mut self, parent: Entity, position: Option<Vec3>, script: Option<&str>) -> Entity {
        if !self.entities.contains_key(&parent) {
            log::warn!("spawning child of unknown entity {:?}", parent);
        }

        let child = Entity(self.allocate_key());
        self.entities.insert(
            child,
            EntityRecord {
                parent: Some(parent),
                transform: position.map(|p| (p, Quat::IDENTITY)),
                point_light: None,
                script: script.map(str::to_owned),
            },
        );
        self.commands.push(HostCommand::Spawn {
            parent,
            child,
            position,
            script: script.map(str::to_owned),
        });
        child
    }

    fn record_mut(&mut self, entity: Entity) -> &mut EntityRecord {
        self.entities.entry(entity).or_insert_with(|| {
            log::warn!("script touched unknown entity {:?}", entity);
            EntityRecord::default()
        })
    }

    fn ensure_transform(&mut self, entity: Entity) -> TransformComponent {
        let record = self.record_mut(entity);
        if record.transform.is_none() {
            record.transform = Some((Vec3::ZERO, Quat::IDENTITY));
            self.commands.push(HostCommand::AddTransform(entity));
        }
        TransformComponent(entity.0)
    }

    fn ensure_point_light(&mut self, entity: Entity) -> PointLightComponent {
        let record = self.record_mut(entity);
        if record.point_light.is_none() {
            record.point_light = Some([1.0, 1.0, 1.0]);
            self.commands.push(HostCommand::AddPointLight(entity));
        }
        PointLightComponent(entity.0)
    }

    fn transform_of(&self, transform: TransformComponent) -> (Vec3, Quat) {
        self.entities
            .get(&Entity(transform.0))
            .and_then(|record| record.transform)
            .unwrap_or((Vec3::ZERO, Quat::IDENTITY))
    }

    fn style_mut(&mut self, style: GlyphStyle) -> Option<&mut GlyphRecord> {
        let record = self.styles.get_mut(&style);
        if record.is_none() {
            log::warn!("script touched unknown glyph style {:?}", style);
        }
        record
    }
}

impl HostApi for RecordingHost {
    fn spawn_child(&mut self, parent: Entity) -> Entity {
        self.spawn(parent, None, None)
    }

    fn spawn_child_at(&mut self, parent: Entity, x: f64, y: f64, z: f64) -> Entity {
        self.spawn(parent, Some(Vec3::new(x, y, z)), None)
    }

    fn spawn_scripted_child(&mut self, parent: Entity, script_impl: &str) -> Entity {
        self.spawn(parent, None, Some(script_impl))
    }

    fn spawn_scripted_child_at(&mut self, parent: Entity, script_impl: &str, x: f64, y: f64, z: f64) -> Entity {
        self.spawn(parent, Some(Vec3::new(x, y, z)), Some(script_impl))
    }

    fn has_transform(&self, entity: Entity) -> bool {
        self.entities.get(&entity).is_some_and(|r| r.transform.is_some())
    }

    fn add_transform(&mut self, entity: Entity) -> TransformComponent {
        self.ensure_transform(entity)
    }

    fn get_transform(&mut self, entity: Entity) -> TransformComponent {
        self.ensure_transform(entity)
    }

    fn has_point_light(&self, entity: Entity) -> bool {
        self.entities.get(&entity).is_some_and(|r| r.point_light.is_some())
    }

    fn add_point_light(&mut self, entity: Entity) -> PointLightComponent {
        self.ensure_point_light(entity)
    }

    fn get_point_light(&mut self, entity: Entity) -> PointLightComponent {
        self.ensure_point_light(entity)
    }

    fn transform_get_x(&self, transform: TransformComponent) -> f64 {
        self.transform_of(transform).0.x
    }

    fn transform_get_y(&self, transform: TransformComponent) -> f64 {
        self.transform_of(transform).0.y
    }

    fn transform_get_z(&self, transform: TransformComponent) -> f64 {
        self.transform_of(transform).0.z
    }

    fn transform_set_position(&mut self, transform: TransformComponent, x: f64, y: f64, z: f64) {
        let entity = Entity(transform.0);
        let position = Vec3::new(x, y, z);
        let record = self.record_mut(entity);
        let rotation = record.transform.map(|(_, r)| r).unwrap_or(Quat::IDENTITY);
        record.transform = Some((position, rotation));
        self.commands.push(HostCommand::SetPosition { entity, position });
    }

    fn transform_get_rotation(&self, transform: TransformComponent) -> [f64; 4] {
        self.transform_of(transform).1.to_array()
    }

    fn transform_set_rotation(&mut self, transform: TransformComponent, w: f64, x: f64, y: f64, z: f64) {
        let entity = Entity(transform.0);
        let rotation = Quat::new(w, x, y, z);
        let record = self.record_mut(entity);
        let position = record.transform.map(|(p, _)| p).unwrap_or(Vec3::ZERO);
        record.transform = Some((position, rotation));
        self.commands.push(HostCommand::SetRotation { entity, rotation });
    }

    fn point_light_set_intensity(&mut self, light: PointLightComponent, r: f64, g: f64, b: f64) {
        let entity = Entity(light.0);
        self.record_mut(entity).point_light = Some([r, g, b]);
        self.commands.push(HostCommand::SetIntensity {
            entity,
            intensity: [r, g, b],
        });
    }

    fn panel_get_width(&self, panel: UiPanel) -> f64 {
        self.panels.get(&panel).map_or(0.0, |p| p.size.x)
    }

    fn panel_get_height(&self, panel: UiPanel) -> f64 {
        self.panels.get(&panel).map_or(0.0, |p| p.size.y)
    }

    fn panel_set_size(&mut self, panel: UiPanel, width: f64, height: f64) {
        let size = Vec2::new(width, height);
        if let Some(record) = self.panels.get_mut(&panel) {
            record.size = size;
        }
        self.commands.push(HostCommand::SetPanelSize { panel, size });
    }

    fn panel_set_color(&mut self, panel: UiPanel, r: f64, g: f64, b: f64, a: f64) {
        let color = Color::new(r, g, b, a);
        if let Some(record) = self.panels.get_mut(&panel) {
            record.color = color;
        }
        self.commands.push(HostCommand::SetPanelColor { panel, color });
    }

    fn panel_create_glyph_style(&mut self, panel: UiPanel) -> GlyphStyle {
        let style = GlyphStyle(self.allocate_key());
        self.styles.insert(
            style,
            GlyphRecord {
                panel,
                text: String::new(),
                color: Color::WHITE,
                offset: Vec2::ZERO,
                scale: 1.0,
            },
        );
        self.commands.push(HostCommand::CreateGlyphStyle { panel, style });
        style
    }

    fn panel_draw_triangle(&mut self, panel: UiPanel, points: [Vec2; 3], r: f64, g: f64, b: f64, a: f64) {
        self.commands.push(HostCommand::DrawTriangle {
            panel,
            points,
            color: Color::new(r, g, b, a),
        });
    }

    fn panel_draw_circle(&mut self, panel: UiPanel, x: f64, y: f64, radius: f64, r: f64, g: f64, b: f64, a: f64) {
        self.commands.push(HostCommand::DrawCircle {
            panel,
            center: Vec2::new(x, y),
            radius,
            color: Color::new(r, g, b, a),
        });
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
        self.commands.push(HostCommand::DrawRing {
            panel,
            center: Vec2::new(x, y),
            inner_radius,
            outer_radius,
            color: Color::new(r, g, b, a),
        });
    }

    fn glyph_set_text(&mut self, style: GlyphStyle, text: &str) {
        if let Some(record) = self.style_mut(style) {
            record.text = text.to_owned();
        }
        self.commands.push(HostCommand::SetGlyphText {
            style,
            text: text.to_owned(),
        });
    }

    fn glyph_set_color(&mut self, style: GlyphStyle, r: f64, g: f64, b: f64, a: f64) {
        let color = Color::new(r, g, b, a);
        if let Some(record) = self.style_mut(style) {
            record.color = color;
        }
        self.commands.push(HostCommand::SetGlyphColor { style, color });
    }

    fn glyph_set_offset(&mut self, style: GlyphStyle, x: f64, y: f64) {
        let offset = Vec2::new(x, y);
        if let Some(record) = self.style_mut(style) {
            record.offset = offset;
        }
        self.commands.push(HostCommand::SetGlyphOffset { style, offset });
    }

    fn glyph_set_scale(&mut self, style: GlyphStyle, scale: f64) {
        if let Some(record) = self.style_mut(style) {
            record.scale = scale;
        }
        self.commands.push(HostCommand::SetGlyphScale { style, scale });
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        self.commands.push(HostCommand::Log {
            level,
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_child_at_records_transform() {
        let mut host = RecordingHost::new();
        let root = host.spawn_root_at(Vec3::ZERO);

        let child = host.spawn_child_at(root, 1.0, 2.0, 3.0);

        assert_eq!(host.position_of(child), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(host.children_of(root), vec![child]);
        assert!(host.has_transform(child));
        assert!(!host.has_point_light(child));
    }

    #[test]
    fn test_get_component_adds_once() {
        let mut host = RecordingHost::new();
        let root = host.spawn_root_at(Vec3::ZERO);
        let child = host.spawn_child(root);
        host.drain_commands();

        let t1 = host.get_transform(child);
        let t2 = host.get_transform(child);
        assert_eq!(t1, t2);
        assert_eq!(t1.raw(), child.raw());

        host.get_point_light(child);
        host.add_point_light(child);

        let commands = host.drain_commands();
        assert_eq!(
            commands,
            vec![HostCommand::AddTransform(child), HostCommand::AddPointLight(child)]
        );
    }

    #[test]
    fn test_transform_round_trip() {
        let mut host = RecordingHost::new();
        let root = host.spawn_root_at(Vec3::new(4.0, 5.0, 6.0));
        let transform = root.transform(&mut host);

        assert_eq!(transform.position(&host), Vec3::new(4.0, 5.0, 6.0));

        transform.set_position(&mut host, Vec3::new(-1.0, 0.5, 2.0));
        let q = Quat::from_rotation_y(0.5);
        transform.set_rotation(&mut host, q);

        assert_eq!(transform.position(&host), Vec3::new(-1.0, 0.5, 2.0));
        assert_eq!(transform.rotation(&host), q);
    }

    #[test]
    fn test_glyph_style_state() {
        let mut host = RecordingHost::new();
        let panel = host.create_panel(1.6, 1.0);
        let style = panel.create_glyph_style(&mut host);

        style.set_text(&mut host, "hello");
        style.set_offset(&mut host, Vec2::new(-0.45, 0.1));
        style.set_color(&mut host, Color::WHITE.with_alpha(0.5));
        host.glyph_set_scale(style, 2.0);

        let record = host.glyph(style).expect("style exists");
        assert_eq!(record.text, "hello");
        assert_eq!(record.offset, Vec2::new(-0.45, 0.1));
        assert_eq!(record.color.a, 0.5);
        assert_eq!(record.scale, 2.0);
        assert_eq!(host.styles_of(panel), vec![style]);
    }

    #[test]
    fn test_panel_size_and_draws() {
        let mut host = RecordingHost::new();
        let panel = host.create_panel(1.6, 1.0);
        assert_eq!(panel.size(&host), Vec2::new(1.6, 1.0));

        panel.set_size(&mut host, Vec2::new(2.0, 1.5));
        panel.draw_circle(&mut host, Vec2::new(0.1, 0.2), 0.05, Color::MAGENTA);

        assert_eq!(host.panel(panel).map(|p| p.size), Some(Vec2::new(2.0, 1.5)));
        let draws: Vec<_> = host.commands().iter().filter(|c| c.is_draw()).collect();
        assert_eq!(draws.len(), 1);
    }

    #[test]
    fn test_despawn_removes_descendants() {
        let mut host = RecordingHost::new();
        let root = host.spawn_root_at(Vec3::ZERO);
        let child = host.spawn_child(root);
        let grandchild = host.spawn_scripted_child(child, "Firefly");
        assert_eq!(host.entity(grandchild).and_then(|r| r.script.as_deref()), Some("Firefly"));

        host.despawn(child);

        assert!(host.entity(child).is_none());
        assert!(host.entity(grandchild).is_none());
        assert_eq!(host.entity_count(), 1);
    }
}
