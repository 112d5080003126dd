//! # Lumen Bindings
//!
//! Guest-side view of the functions the engine exposes to scripts.
//!
//! ## Overview
//!
//! Scripts run inside a WASM module the engine loads next to a scene. All
//! scene state lives in the engine; a script only holds opaque handles
//! ([`Entity`], [`TransformComponent`], [`UiPanel`], ...) and calls back into
//! the host through [`HostApi`].
//!
//! Two hosts implement the trait:
//! - `WasmHost` (wasm32 only) - forwards every call to an `env` import such
//!   as `Entity_getTransform` or `UiPanel_drawCircle`
//! - [`RecordingHost`] - in-memory stand-in for native builds and tests that
//!   records each call as a [`HostCommand`]
//!
//! ## Example
//!
//! ```ignore
//! use lumen_bindings::prelude::*;
//!
//! fn follow(host: &mut impl HostApi, entity: Entity, target: Vec3) {
//!     let transform = entity.transform(host);
//!     let position = transform.position(host).lerp(target, 0.1);
//!     transform.set_position(host, position);
//! }
//! ```

mod api;
mod error;
mod handles;
mod logger;
pub mod manifest;
pub mod memory;
mod recording;

#[cfg(target_arch = "wasm32")]
pub mod ffi;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use api::{HostApi, HostCommand, LogLevel};
pub use error::{BindingError, Result};
pub use handles::{Entity, GlyphStyle, PointLightComponent, TransformComponent, UiPanel};
pub use logger::{init_logger, HostLogger};
pub use recording::{EntityRecord, GlyphRecord, PanelRecord, RecordingHost};

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmHost;

pub mod prelude {
    pub use crate::api::{HostApi, LogLevel};
    pub use crate::handles::{Entity, GlyphStyle, PointLightComponent, TransformComponent, UiPanel};
    pub use lumen_math::prelude::*;
}
