//! Script instance table
//!
//! The host creates one instance per scripted entity or panel and addresses
//! it by [`InstanceId`] afterwards. Implementations are looked up by the
//! name the scene or a spawning script asked for.

use crate::config::BehaviorConfig;
use crate::error::{Result, ScriptError};
use crate::firefly::{Fireflies, Firefly};
use crate::lights::{RingLight, SlidingLight};
use crate::message_log::MessageLog;
use crate::polka_dots::PolkaDots;
use crate::pulsing_panel::PulsingPanel;
use crate::script::{ComponentScript, UiScript};
use lumen_bindings::{Entity, HostApi, UiPanel};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::fmt;

/// Script instance identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a script is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Component,
    Ui,
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => f.write_str("component"),
            Self::Ui => f.write_str("ui"),
        }
    }
}

/// Every implementation name the runtime can instantiate
pub const IMPLEMENTATIONS: &[(&str, ScriptKind)] = &[
    ("Firefly", ScriptKind::Component),
    ("Fireflies", ScriptKind::Component),
    ("SlidingLight", ScriptKind::Component),
    ("RingLight", ScriptKind::Component),
    ("MessageLog", ScriptKind::Ui),
    ("PulsingPanel", ScriptKind::Ui),
    ("PolkaDots", ScriptKind::Ui),
];

impl ScriptKind {
    /// Kind of a registered implementation
    pub fn of(script_impl: &str) -> Option<Self> {
        IMPLEMENTATIONS
            .iter()
            .find(|(name, _)| *name == script_impl)
            .map(|(_, kind)| *kind)
    }
}

enum Script<H: HostApi> {
    Component {
        entity: Entity,
        script: Box<dyn ComponentScript<H>>,
    },
    Ui {
        panel: UiPanel,
        script: Box<dyn UiScript<H>>,
    },
}

struct Instance<H: HostApi> {
    name: &'static str,
    script: Script<H>,
}

impl<H: HostApi> Instance<H> {
    fn kind(&self) -> ScriptKind {
        match self.script {
            Script::Component { .. } => ScriptKind::Component,
            Script::Ui { .. } => ScriptKind::Ui,
        }
    }
}

/// Owns the host and every live script instance
pub struct ScriptRuntime<H: HostApi + 'static> {
    host: H,
    config: BehaviorConfig,
    rng: SmallRng,
    instances: BTreeMap<InstanceId, Instance<H>>,
    next_id: u32,
}

impl<H: HostApi + 'static> ScriptRuntime<H> {
    pub fn new(host: H, config: BehaviorConfig) -> Result<Self> {
        config.validate()?;
        let rng = SmallRng::seed_from_u64(config.seed);
        Ok(Self {
            host,
            config,
            rng,
            instances: BTreeMap::new(),
            next_id: 1,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Replace the config for instances created from now on
    ///
    /// Live instances keep the values they were created with. The RNG is
    /// reseeded from the new config.
    pub fn set_config(&mut self, config: BehaviorConfig) -> Result<()> {
        config.validate()?;
        self.rng = SmallRng::seed_from_u64(config.seed);
        self.config = config;
        Ok(())
    }

    fn allocate_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        id
    }

    fn registered_name(script_impl: &str) -> Result<&'static str> {
        IMPLEMENTATIONS
            .iter()
            .find(|(name, _)| *name == script_impl)
            .map(|(name, _)| *name)
            .ok_or_else(|| ScriptError::UnknownImplementation(script_impl.to_string()))
    }

    /// Create an instance from a raw handle, dispatching on the kind
    pub fn instantiate(&mut self, script_impl: &str, handle: i32) -> Result<InstanceId> {
        match ScriptKind::of(script_impl) {
            Some(ScriptKind::Component) => self.instantiate_component(script_impl, Entity::from_raw(handle)),
            Some(ScriptKind::Ui) => self.instantiate_panel(script_impl, UiPanel::from_raw(handle)),
            None => Err(ScriptError::UnknownImplementation(script_impl.to_string())),
        }
    }

    /// Attach a component script to `entity`
    pub fn instantiate_component(&mut self, script_impl: &str, entity: Entity) -> Result<InstanceId> {
        let name = Self::registered_name(script_impl)?;
        // Each instance gets its own stream so creation order does not
        // couple their motion.
        let mut rng = SmallRng::seed_from_u64(self.rng.gen());
        let host = &mut self.host;
        let config = &self.config;

        let script: Box<dyn ComponentScript<H>> = match name {
            "Firefly" => Box::new(Firefly::new(host, entity, &config.firefly, &mut rng)),
            "Fireflies" => Box::new(Fireflies::new(
                host,
                entity,
                &config.fireflies,
                config.firefly.roam_bounds,
                &mut rng,
            )),
            "SlidingLight" => Box::new(SlidingLight::new(host, entity, &config.sliding_light)),
            "RingLight" => Box::new(RingLight::new(host, entity, &config.ring_light)),
            _ => {
                return Err(ScriptError::KindMismatch {
                    script_impl: name.to_string(),
                    expected: ScriptKind::Component,
                })
            }
        };

        let id = self.allocate_id();
        self.instances.insert(
            id,
            Instance {
                name,
                script: Script::Component { entity, script },
            },
        );
        log::info!("instantiated {} {} on {:?}", name, id, entity);
        Ok(id)
    }

    /// Bind a UI script to `panel`
    pub fn instantiate_panel(&mut self, script_impl: &str, panel: UiPanel) -> Result<InstanceId> {
        let name = Self::registered_name(script_impl)?;
        let host = &mut self.host;
        let config = &self.config;

        let script: Box<dyn UiScript<H>> = match name {
            "MessageLog" => Box::new(MessageLog::new(panel, &config.message_log)),
            "PulsingPanel" => Box::new(PulsingPanel::new(host, panel, &config.pulsing_panel)),
            "PolkaDots" => Box::new(PolkaDots::new(panel, &config.polka_dots)),
            _ => {
                return Err(ScriptError::KindMismatch {
                    script_impl: name.to_string(),
                    expected: ScriptKind::Ui,
                })
            }
        };

        let id = self.allocate_id();
        self.instances.insert(
            id,
            Instance {
                name,
                script: Script::Ui { panel, script },
            },
        );
        log::info!("instantiated {} {} on {:?}", name, id, panel);
        Ok(id)
    }

    /// Advance one instance by `dt` seconds
    pub fn update(&mut self, id: InstanceId, dt: f64) -> Result<()> {
        let instance = self.instances.get_mut(&id).ok_or(ScriptError::InstanceNotFound(id))?;
        match &mut instance.script {
            Script::Component { script, .. } => script.update(&mut self.host, dt),
            Script::Ui { script, .. } => script.update(&mut self.host, dt),
        }
        Ok(())
    }

    /// Advance every instance in creation order
    pub fn update_all(&mut self, dt: f64) {
        for instance in self.instances.values_mut() {
            match &mut instance.script {
                Script::Component { script, .. } => script.update(&mut self.host, dt),
                Script::Ui { script, .. } => script.update(&mut self.host, dt),
            }
        }
    }

    fn ui_script(&mut self, id: InstanceId) -> Result<(&mut H, &mut Box<dyn UiScript<H>>)> {
        let instance = self.instances.get_mut(&id).ok_or(ScriptError::InstanceNotFound(id))?;
        match &mut instance.script {
            Script::Ui { script, .. } => Ok((&mut self.host, script)),
            Script::Component { .. } => Err(ScriptError::WrongKind {
                id,
                expected: ScriptKind::Ui,
            }),
        }
    }

    pub fn on_hover(&mut self, id: InstanceId, x: f64, y: f64) -> Result<()> {
        let (host, script) = self.ui_script(id)?;
        script.on_hover(host, x, y);
        Ok(())
    }

    pub fn on_select(&mut self, id: InstanceId, x: f64, y: f64) -> Result<()> {
        let (host, script) = self.ui_script(id)?;
        script.on_select(host, x, y);
        Ok(())
    }

    pub fn on_drag(&mut self, id: InstanceId, x: f64, y: f64) -> Result<()> {
        let (host, script) = self.ui_script(id)?;
        script.on_drag(host, x, y);
        Ok(())
    }

    pub fn on_deselect(&mut self, id: InstanceId, x: f64, y: f64) -> Result<()> {
        let (host, script) = self.ui_script(id)?;
        script.on_deselect(host, x, y);
        Ok(())
    }

    /// Deliver a message to every UI script; returns how many received it
    pub fn handle_message(&mut self, message: &str) -> usize {
        let mut delivered = 0;
        for instance in self.instances.values_mut() {
            if let Script::Ui { script, .. } = &mut instance.script {
                script.handle_message(&mut self.host, message);
                delivered += 1;
            }
        }
        delivered
    }

    /// Drop an instance, letting component scripts react first
    pub fn destroy(&mut self, id: InstanceId) -> Result<()> {
        let mut instance = self.instances.remove(&id).ok_or(ScriptError::InstanceNotFound(id))?;
        if let Script::Component { script, .. } = &mut instance.script {
            script.on_destroy(&mut self.host);
        }
        log::info!("destroyed {} {}", instance.name, id);
        Ok(())
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Implementation name and kind of an instance
    pub fn describe(&self, id: InstanceId) -> Option<(&'static str, ScriptKind)> {
        self.instances.get(&id).map(|i| (i.name, i.kind()))
    }

    /// Instance attached to `entity`, if any
    pub fn instance_for_entity(&self, entity: Entity) -> Option<InstanceId> {
        self.instances.iter().find_map(|(id, instance)| match instance.script {
            Script::Component { entity: e, .. } if e == entity => Some(*id),
            _ => None,
        })
    }

    /// Instance bound to `panel`, if any
    pub fn instance_for_panel(&self, panel: UiPanel) -> Option<InstanceId> {
        self.instances.iter().find_map(|(id, instance)| match instance.script {
            Script::Ui { panel: p, .. } if p == panel => Some(*id),
            _ => None,
        })
    }
}
