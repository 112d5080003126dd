//! # Lumen Scripts
//!
//! The WASM module the engine loads next to a scene. It exports a flat C ABI
//! the host calls into:
//!
//! | Export | Purpose |
//! |--------|---------|
//! | `lumen_alloc` / `lumen_free` | buffers for strings the host passes in |
//! | `lumen_configure` | apply a JSON [`BehaviorConfig`] |
//! | `lumen_instantiate` | attach an implementation to an entity or panel |
//! | `lumen_update` / `lumen_update_all` | per-frame tick |
//! | `lumen_on_hover` ... `lumen_on_deselect` | panel input |
//! | `lumen_handle_message` | broadcast text to UI scripts |
//! | `lumen_destroy` / `lumen_reset` | teardown |
//!
//! Calls returning `i32` use `-1` for failure; the cause goes to the log.
//! Exports are not re-entrant: one called while another is still running
//! (from inside a host import) fails instead of blocking, so hosts queue
//! `lumen_instantiate` for spawned scripted children until the current
//! export returns.
//! Off wasm the same exports run against a [`RecordingHost`] so they can be
//! exercised natively.

use lumen_behaviors::config::BehaviorConfig;
use lumen_behaviors::runtime::{InstanceId, ScriptRuntime};
use lumen_behaviors::ScriptError;
use lumen_bindings::memory::{alloc_buffer, free_buffer, str_from_raw};
use lumen_bindings::{init_logger, BindingError};
use parking_lot::Mutex;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use lumen_bindings::WasmHost as GuestHost;
#[cfg(not(target_arch = "wasm32"))]
use lumen_bindings::RecordingHost as GuestHost;

/// Status returned by exports on success
pub const STATUS_OK: i32 = 0;
/// Status returned by exports on failure
pub const STATUS_ERROR: i32 = -1;

#[derive(Debug, Error)]
enum GuestError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error("runtime is busy; export re-entered from a host call")]
    Reentered,

    #[error("instance id {0} does not fit in an i32 status")]
    IdOverflow(u32),
}

type Result<T> = std::result::Result<T, GuestError>;

static RUNTIME: Mutex<Option<ScriptRuntime<GuestHost>>> = parking_lot::const_mutex(None);

/// Run `f` against the runtime, creating it with default config on first use
fn with_runtime<T>(
    f: impl FnOnce(&mut ScriptRuntime<GuestHost>) -> std::result::Result<T, ScriptError>,
) -> Result<T> {
    let mut guard = RUNTIME.try_lock().ok_or(GuestError::Reentered)?;
    let runtime = match guard.take() {
        Some(runtime) => runtime,
        None => ScriptRuntime::new(GuestHost::default(), BehaviorConfig::default())?,
    };
    let runtime = guard.insert(runtime);
    Ok(f(runtime)?)
}

/// Instance id as an export result, or `-1`
fn instance_status(result: Result<InstanceId>) -> i32 {
    let result = result.and_then(|id| i32::try_from(id.0).map_err(|_| GuestError::IdOverflow(id.0)));
    match result {
        Ok(id) => id,
        Err(err) => {
            log::error!("lumen_instantiate failed: {}", err);
            STATUS_ERROR
        }
    }
}

fn status(result: Result<()>, call: &str) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => {
            log::error!("{} failed: {}", call, err);
            STATUS_ERROR
        }
    }
}

/// Allocate `len` bytes the host can write a string into
#[no_mangle]
pub extern "C" fn lumen_alloc(len: usize) -> *mut u8 {
    alloc_buffer(len)
}

/// Release a buffer from [`lumen_alloc`]
///
/// # Safety
/// `ptr` and `len` must come from a single `lumen_alloc` call.
#[no_mangle]
pub unsafe extern "C" fn lumen_free(ptr: *mut u8, len: usize) {
    free_buffer(ptr, len)
}

/// Apply a JSON config and the log level it names
///
/// Instances created afterwards use the new values.
///
/// # Safety
/// `ptr..ptr + len` must be readable for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn lumen_configure(ptr: *const u8, len: usize) -> i32 {
    let result = str_from_raw(ptr, len).map_err(GuestError::from).and_then(|json| {
        let config = BehaviorConfig::from_json(json)?;
        let level = config.level_filter()?;
        if init_logger(level).is_err() {
            log::debug!("logger already installed, level set to {}", level);
        }

        let mut guard = RUNTIME.try_lock().ok_or(GuestError::Reentered)?;
        match guard.as_mut() {
            Some(runtime) => runtime.set_config(config)?,
            None => *guard = Some(ScriptRuntime::new(GuestHost::default(), config)?),
        }
        Ok(())
    });
    status(result, "lumen_configure")
}

/// Attach the named implementation to an entity or panel handle
///
/// Returns the new instance id, or `-1`.
///
/// # Safety
/// `impl_ptr..impl_ptr + impl_len` must be readable for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn lumen_instantiate(impl_ptr: *const u8, impl_len: usize, handle: i32) -> i32 {
    let result = str_from_raw(impl_ptr, impl_len)
        .map_err(GuestError::from)
        .and_then(|script_impl| with_runtime(|runtime| runtime.instantiate(script_impl, handle)));
    instance_status(result)
}

#[no_mangle]
pub extern "C" fn lumen_update(id: u32, dt: f64) -> i32 {
    status(with_runtime(|runtime| runtime.update(InstanceId(id), dt)), "lumen_update")
}

#[no_mangle]
pub extern "C" fn lumen_update_all(dt: f64) -> i32 {
    status(
        with_runtime(|runtime| {
            runtime.update_all(dt);
            Ok(())
        }),
        "lumen_update_all",
    )
}

#[no_mangle]
pub extern "C" fn lumen_on_hover(id: u32, x: f64, y: f64) -> i32 {
    status(with_runtime(|runtime| runtime.on_hover(InstanceId(id), x, y)), "lumen_on_hover")
}

#[no_mangle]
pub extern "C" fn lumen_on_select(id: u32, x: f64, y: f64) -> i32 {
    status(with_runtime(|runtime| runtime.on_select(InstanceId(id), x, y)), "lumen_on_select")
}

#[no_mangle]
pub extern "C" fn lumen_on_drag(id: u32, x: f64, y: f64) -> i32 {
    status(with_runtime(|runtime| runtime.on_drag(InstanceId(id), x, y)), "lumen_on_drag")
}

#[no_mangle]
pub extern "C" fn lumen_on_deselect(id: u32, x: f64, y: f64) -> i32 {
    status(with_runtime(|runtime| runtime.on_deselect(InstanceId(id), x, y)), "lumen_on_deselect")
}

/// Broadcast a message to every UI script
///
/// Returns how many instances received it, or `-1`.
///
/// # Safety
/// `ptr..ptr + len` must be readable for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn lumen_handle_message(ptr: *const u8, len: usize) -> i32 {
    let result = str_from_raw(ptr, len)
        .map_err(GuestError::from)
        .and_then(|message| with_runtime(|runtime| Ok(runtime.handle_message(message))));

    match result {
        Ok(delivered) => i32::try_from(delivered).unwrap_or(i32::MAX),
        Err(err) => {
            log::error!("lumen_handle_message failed: {}", err);
            STATUS_ERROR
        }
    }
}

#[no_mangle]
pub extern "C" fn lumen_destroy(id: u32) -> i32 {
    status(with_runtime(|runtime| runtime.destroy(InstanceId(id))), "lumen_destroy")
}

/// Drop every instance and the config, as before a scene reload
#[no_mangle]
pub extern "C" fn lumen_reset() {
    match RUNTIME.try_lock() {
        Some(mut guard) => {
            if let Some(runtime) = guard.take() {
                log::info!("reset with {} live instances", runtime.instance_count());
            }
        }
        None => log::error!("lumen_reset failed: {}", GuestError::Reentered),
    }
}
