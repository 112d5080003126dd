//! Entry points the host drives

use lumen_bindings::HostApi;

/// Script attached to an entity
///
/// Called once per rendered frame with the elapsed time in seconds.
pub trait ComponentScript<H: HostApi>: Send {
    fn update(&mut self, host: &mut H, dt: f64);

    /// The host is destroying the entity; handles are still valid
    fn on_destroy(&mut self, _host: &mut H) {}
}

/// Script bound to a UI panel
///
/// Input callbacks receive panel-space coordinates.
pub trait UiScript<H: HostApi>: Send {
    fn update(&mut self, host: &mut H, dt: f64);

    fn on_hover(&mut self, _host: &mut H, _x: f64, _y: f64) {}

    fn on_select(&mut self, _host: &mut H, _x: f64, _y: f64) {}

    fn on_drag(&mut self, _host: &mut H, _x: f64, _y: f64) {}

    fn on_deselect(&mut self, _host: &mut H, _x: f64, _y: f64) {}

    /// Text message broadcast by the host
    fn handle_message(&mut self, _host: &mut H, _message: &str) {}
}
