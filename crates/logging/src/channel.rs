//! crates/logging/src/channel.rs
//! Per-subsystem logging handles.

use std::borrow::Cow;

use chanlog_core::{Record, Severity};

use crate::global;

/// A cheap per-subsystem logging handle.
///
/// A channel holds only its name; every call builds a [`Record`] and routes
/// it through the global core, so handles can be created freely, cloned,
/// or kept in struct fields.
///
/// # Examples
///
/// ```no_run
/// use chanlog::{Channel, Severity};
///
/// chanlog::init();
///
/// let worker = Channel::new("Worker");
/// worker.info("task started");
/// worker.log(Severity::Critical, "out of memory");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Channel {
    name: Cow<'static, str>,
}

impl Channel {
    /// Creates a handle with the given channel name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the channel name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Submits a record with the given severity through the global core.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        global::submit(Record::new(severity, self.name.clone(), message));
    }

    /// Logs at trace severity.
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Severity::Trace, message);
    }

    /// Logs at debug severity.
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    /// Logs at info severity.
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    /// Logs at warning severity.
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    /// Logs at error severity.
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    /// Logs at critical severity.
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }
}
