//! `log` backend for scripts
//!
//! Inside the engine records go to the host's `env.log` import so they land
//! in the engine log next to host messages. Native builds print to stderr.

use crate::api::LogLevel;
use crate::error::{BindingError, Result};
use log::{LevelFilter, Log, Metadata, Record};

/// Logger that forwards records to the host
pub struct HostLogger;

static LOGGER: HostLogger = HostLogger;

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = LogLevel::from(record.level());
        let message = format!("[{}] {}", record.target(), record.args());
        emit(level, &message);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, message: &str) {
    // SAFETY: the host copies the message before returning.
    unsafe { crate::ffi::log(level.as_i32(), message.as_ptr(), message.len()) }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, message: &str) {
    eprintln!("{:?} {}", level, message);
}

/// Install [`HostLogger`] as the global logger.
///
/// Calling this twice fails with [`BindingError::LoggerInstalled`]; the
/// maximum level is updated either way.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    log::set_max_level(level);
    log::set_logger(&LOGGER).map_err(|_| BindingError::LoggerInstalled)
}
