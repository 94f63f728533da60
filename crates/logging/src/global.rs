//! crates/logging/src/global.rs
//! The process-global dispatch core and the one-call initializer.

use std::io;
use std::sync::{Mutex, PoisonError};

use chanlog_core::{Record, Severity};

use crate::config::ConsoleConfig;
use crate::core::Core;

static CORE: Mutex<Core> = Mutex::new(Core::new());

/// Runs `f` with exclusive access to the global core.
///
/// A poisoned lock is recovered rather than propagated: logging state stays
/// usable even if a panicking thread held the lock mid-write.
pub fn with_core<R>(f: impl FnOnce(&mut Core) -> R) -> R {
    let mut guard = CORE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Configures the global core for console logging.
///
/// Reads the `LOG` environment variable for an optional coarse threshold,
/// registers the five color-coded console sinks writing to stderr, and
/// enables common attribute stamping. Expected to be called once during
/// process startup, before concurrent logging begins; calling it again
/// registers a second set of sinks and every record then renders twice.
pub fn init() {
    let config = ConsoleConfig::from_env();
    with_core(|core| config.install(core, || Box::new(io::stderr())));
}

/// Submits a record to the global core.
pub fn submit(record: Record) {
    with_core(|core| core.submit(record));
}

/// Reports whether a record of `severity` would pass the global threshold.
///
/// Used by the logging macros to skip message formatting for records the
/// coarse gate would drop anyway.
#[must_use]
pub fn enabled(severity: Severity) -> bool {
    with_core(|core| core.passes_threshold(severity))
}

/// Returns the number of sinks registered on the global core.
#[must_use]
pub fn installed_sinks() -> usize {
    with_core(|core| core.sink_count())
}
