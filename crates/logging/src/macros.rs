//! crates/logging/src/macros.rs
//! Convenience macros for channel-tagged logging.
//!
//! Each macro takes a channel name followed by `format!`-style arguments
//! and routes the record through the global core. The global threshold is
//! consulted first so messages below the coarse gate are never formatted.

/// Log at trace severity.
///
/// # Example
/// ```ignore
/// log_trace!("Net", "probe sent to {addr}");
/// ```
#[macro_export]
macro_rules! log_trace {
    ($channel:expr, $($arg:tt)*) => {
        if $crate::enabled($crate::Severity::Trace) {
            $crate::submit($crate::Record::new(
                $crate::Severity::Trace,
                ::std::string::ToString::to_string(&$channel),
                ::std::format!($($arg)*),
            ));
        }
    };
}

/// Log at debug severity.
///
/// # Example
/// ```ignore
/// log_debug!("Worker", "picked up task {id}");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($channel:expr, $($arg:tt)*) => {
        if $crate::enabled($crate::Severity::Debug) {
            $crate::submit($crate::Record::new(
                $crate::Severity::Debug,
                ::std::string::ToString::to_string(&$channel),
                ::std::format!($($arg)*),
            ));
        }
    };
}

/// Log at info severity.
///
/// # Example
/// ```ignore
/// log_info!("Startup", "listening on {addr}");
/// ```
#[macro_export]
macro_rules! log_info {
    ($channel:expr, $($arg:tt)*) => {
        if $crate::enabled($crate::Severity::Info) {
            $crate::submit($crate::Record::new(
                $crate::Severity::Info,
                ::std::string::ToString::to_string(&$channel),
                ::std::format!($($arg)*),
            ));
        }
    };
}

/// Log at warning severity.
///
/// # Example
/// ```ignore
/// log_warning!("Disk", "{percent}% full");
/// ```
#[macro_export]
macro_rules! log_warning {
    ($channel:expr, $($arg:tt)*) => {
        if $crate::enabled($crate::Severity::Warning) {
            $crate::submit($crate::Record::new(
                $crate::Severity::Warning,
                ::std::string::ToString::to_string(&$channel),
                ::std::format!($($arg)*),
            ));
        }
    };
}

/// Log at error severity.
///
/// # Example
/// ```ignore
/// log_error!("Worker", "task {id} failed: {err}");
/// ```
#[macro_export]
macro_rules! log_error {
    ($channel:expr, $($arg:tt)*) => {
        if $crate::enabled($crate::Severity::Error) {
            $crate::submit($crate::Record::new(
                $crate::Severity::Error,
                ::std::string::ToString::to_string(&$channel),
                ::std::format!($($arg)*),
            ));
        }
    };
}

/// Log at critical severity.
///
/// # Example
/// ```ignore
/// log_critical!("Runtime", "out of memory");
/// ```
#[macro_export]
macro_rules! log_critical {
    ($channel:expr, $($arg:tt)*) => {
        if $crate::enabled($crate::Severity::Critical) {
            $crate::submit($crate::Record::new(
                $crate::Severity::Critical,
                ::std::string::ToString::to_string(&$channel),
                ::std::format!($($arg)*),
            ));
        }
    };
}
