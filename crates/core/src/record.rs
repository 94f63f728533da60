//! crates/core/src/record.rs
//! The log record passed from call sites to sinks.

use std::borrow::Cow;

use time::OffsetDateTime;

use crate::severity::Severity;

/// A single log record.
///
/// Records are ephemeral: a call site builds one, the dispatch core stamps
/// the common attributes, matching sinks render it, and the value is
/// dropped. Nothing here is persisted.
///
/// The timestamp, process id, and thread label start out unset and are
/// filled in by the dispatch core when common attribute population is
/// enabled; a record rendered without them simply omits the timestamp field.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    severity: Severity,
    channel: Cow<'static, str>,
    message: String,
    timestamp: Option<OffsetDateTime>,
    pid: Option<u32>,
    thread: Option<String>,
}

impl Record {
    /// Creates a record with no stamped attributes.
    #[must_use]
    pub fn new(
        severity: Severity,
        channel: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            channel: channel.into(),
            message: message.into(),
            timestamp: None,
            pid: None,
            thread: None,
        }
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the channel tag identifying the emitting subsystem.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the stamped timestamp, if common attributes were populated.
    #[must_use]
    pub const fn timestamp(&self) -> Option<OffsetDateTime> {
        self.timestamp
    }

    /// Returns the stamped process id, if common attributes were populated.
    #[must_use]
    pub const fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Returns the stamped thread label, if common attributes were populated.
    #[must_use]
    pub fn thread(&self) -> Option<&str> {
        self.thread.as_deref()
    }

    /// Stamps the common attributes onto the record.
    ///
    /// Called by the dispatch core before sinks render the record. Stamping
    /// twice overwrites the previous values; the core only stamps once per
    /// submission.
    pub fn stamp(&mut self, timestamp: OffsetDateTime, pid: u32, thread: impl Into<String>) {
        self.timestamp = Some(timestamp);
        self.pid = Some(pid);
        self.thread = Some(thread.into());
    }
}
