//! Lumen Behaviors - scripted entities and panels
//!
//! Every behavior is generic over [`HostApi`](lumen_bindings::HostApi), so
//! the same code drives the engine from inside a WASM module and runs
//! natively against a [`RecordingHost`](lumen_bindings::RecordingHost).
//!
//! # Behaviors
//!
//! - Fireflies - spawner plus wandering point lights
//! - Sliding light - ping-pong along the x axis
//! - Ring light - hue-cycling circle of lights
//! - Message log - stacking, fading lines of text
//! - Pulsing panel - breathing panel that highlights under the pointer
//! - Polka dots - paint fading dots with the pointer
//!
//! # Example
//!
//! ```ignore
//! use lumen_behaviors::prelude::*;
//!
//! let mut runtime = ScriptRuntime::new(RecordingHost::new(), BehaviorConfig::default())?;
//! let panel = runtime.host_mut().create_panel(1.0, 0.5);
//! let log = runtime.instantiate_panel("MessageLog", panel)?;
//! runtime.handle_message("hello");
//! runtime.update_all(1.0 / 90.0);
//! ```

pub mod config;
pub mod error;
pub mod firefly;
pub mod lights;
pub mod message_log;
pub mod polka_dots;
pub mod pulsing_panel;
pub mod runtime;
pub mod script;
pub mod timer;

pub use error::{Result, ScriptError};

pub mod prelude {
    pub use crate::config::BehaviorConfig;
    pub use crate::error::{Result, ScriptError};
    pub use crate::firefly::{Fireflies, Firefly};
    pub use crate::lights::{RingLight, SlidingLight};
    pub use crate::message_log::MessageLog;
    pub use crate::polka_dots::PolkaDots;
    pub use crate::pulsing_panel::PulsingPanel;
    pub use crate::runtime::{InstanceId, ScriptKind, ScriptRuntime, IMPLEMENTATIONS};
    pub use crate::script::{ComponentScript, UiScript};
    pub use crate::timer::{Envelope, Lifespan};
    pub use lumen_bindings::prelude::*;
    pub use lumen_bindings::RecordingHost;
}
