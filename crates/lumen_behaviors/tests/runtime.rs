//! Scene-level tests driving the runtime against a recording host

use lumen_behaviors::prelude::*;
use lumen_bindings::HostCommand;

fn runtime() -> ScriptRuntime<RecordingHost> {
    ScriptRuntime::new(RecordingHost::new(), BehaviorConfig::default()).unwrap()
}

/// Instantiate a Firefly for every scripted child the swarm spawned
fn populate_swarm(runtime: &mut ScriptRuntime<RecordingHost>, root: Entity) -> Vec<InstanceId> {
    let children = runtime.host().children_of(root);
    children
        .into_iter()
        .map(|child| {
            let script = runtime.host().entity(child).unwrap().script.clone().unwrap();
            runtime.instantiate(&script, child.raw()).unwrap()
        })
        .collect()
}

#[test]
fn test_swarm_comes_alive() {
    let mut runtime = runtime();
    let root = runtime.host_mut().spawn_root_at(Vec3::ZERO);

    runtime.instantiate_component("Fireflies", root).unwrap();
    let fireflies = populate_swarm(&mut runtime, root);
    assert_eq!(fireflies.len(), 10);
    assert_eq!(runtime.instance_count(), 11);

    let children = runtime.host().children_of(root);
    let before: Vec<_> = children.iter().map(|c| runtime.host().position_of(*c).unwrap()).collect();

    runtime.host_mut().drain_commands();
    runtime.update_all(0.5);

    let moves = runtime
        .host()
        .commands()
        .iter()
        .filter(|c| matches!(c, HostCommand::SetPosition { .. }))
        .count();
    assert_eq!(moves, 10);

    let after: Vec<_> = children.iter().map(|c| runtime.host().position_of(*c).unwrap()).collect();
    assert_ne!(before, after);
}

#[test]
fn test_same_seed_same_scene() {
    let run = || {
        let mut runtime = runtime();
        let root = runtime.host_mut().spawn_root_at(Vec3::ZERO);
        runtime.instantiate_component("Fireflies", root).unwrap();
        populate_swarm(&mut runtime, root);
        for _ in 0..10 {
            runtime.update_all(1.0 / 60.0);
        }
        runtime.host_mut().drain_commands()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_messages_reach_every_panel() {
    let mut runtime = runtime();
    let log_panel = runtime.host_mut().create_panel(1.0, 1.0);
    let other_panel = runtime.host_mut().create_panel(1.0, 1.0);
    let light = runtime.host_mut().spawn_root_at(Vec3::ZERO);

    runtime.instantiate_panel("MessageLog", log_panel).unwrap();
    runtime.instantiate_panel("PolkaDots", other_panel).unwrap();
    runtime.instantiate_component("SlidingLight", light).unwrap();

    assert_eq!(runtime.handle_message("hello"), 2);

    let styles = runtime.host().styles_of(log_panel);
    assert_eq!(styles.len(), 1);
    assert_eq!(runtime.host().glyph(styles[0]).unwrap().text, "hello");
}

#[test]
fn test_input_routing() {
    let mut runtime = runtime();
    let panel = runtime.host_mut().create_panel(1.0, 1.0);
    let light = runtime.host_mut().spawn_root_at(Vec3::ZERO);

    let dots = runtime.instantiate("PolkaDots", panel.raw()).unwrap();
    let slider = runtime.instantiate("SlidingLight", light.raw()).unwrap();

    runtime.on_select(dots, 0.0, 0.0).unwrap();
    runtime.on_drag(dots, 0.5, 0.0).unwrap();
    runtime.on_deselect(dots, 0.5, 0.0).unwrap();

    runtime.host_mut().drain_commands();
    runtime.update(dots, 0.5).unwrap();
    let circles = runtime
        .host()
        .commands()
        .iter()
        .filter(|c| matches!(c, HostCommand::DrawCircle { .. }))
        .count();
    assert_eq!(circles, 2);

    let err = runtime.on_hover(slider, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, ScriptError::WrongKind { expected: ScriptKind::Ui, .. }));
}

#[test]
fn test_lookup_and_errors() {
    let mut runtime = runtime();
    let panel = runtime.host_mut().create_panel(1.0, 1.0);
    let entity = runtime.host_mut().spawn_root_at(Vec3::ZERO);

    let err = runtime.instantiate("Dragon", entity.raw()).unwrap_err();
    assert!(matches!(err, ScriptError::UnknownImplementation(name) if name == "Dragon"));

    let err = runtime.instantiate_component("PulsingPanel", entity).unwrap_err();
    assert!(matches!(err, ScriptError::KindMismatch { expected: ScriptKind::Component, .. }));

    let id = runtime.instantiate_panel("PulsingPanel", panel).unwrap();
    assert_eq!(runtime.describe(id), Some(("PulsingPanel", ScriptKind::Ui)));
    assert_eq!(runtime.instance_for_panel(panel), Some(id));
    assert_eq!(runtime.instance_for_entity(entity), None);

    runtime.destroy(id).unwrap();
    assert!(!runtime.contains(id));
    assert!(matches!(runtime.update(id, 0.1), Err(ScriptError::InstanceNotFound(_))));
    assert!(matches!(runtime.destroy(id), Err(ScriptError::InstanceNotFound(_))));
}

#[test]
fn test_ring_light_recolors_each_frame() {
    let mut runtime = runtime();
    let entity = runtime.host_mut().spawn_root_at(Vec3::ZERO);
    let ring = runtime.instantiate_component("RingLight", entity).unwrap();
    let lights = runtime.host().children_of(entity);

    runtime.host_mut().drain_commands();
    runtime.update(ring, 0.1).unwrap();

    let recolored = runtime
        .host()
        .commands()
        .iter()
        .filter(|c| matches!(c, HostCommand::SetIntensity { .. }))
        .count();
    assert_eq!(recolored, lights.len());
}

#[test]
fn test_config_swap_applies_to_new_instances() {
    let mut runtime = runtime();
    let mut config = BehaviorConfig::default();
    config.fireflies.count = 3;
    runtime.set_config(config).unwrap();

    let root = runtime.host_mut().spawn_root_at(Vec3::ZERO);
    runtime.instantiate_component("Fireflies", root).unwrap();
    assert_eq!(runtime.host().children_of(root).len(), 3);

    let mut bad = BehaviorConfig::default();
    bad.sliding_light.speed = -1.0;
    assert!(runtime.set_config(bad).is_err());
    assert_eq!(runtime.config().fireflies.count, 3);
}
