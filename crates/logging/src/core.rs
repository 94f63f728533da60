//! crates/logging/src/core.rs
//! The record dispatch core.

use std::io::Write;
use std::process;
use std::thread;

use chanlog_core::{Record, Severity};
use time::OffsetDateTime;

use crate::sink::ConsoleSink;

/// A console sink whose writer has been erased behind a boxed trait object,
/// letting one core mix stderr sinks with in-memory test writers.
pub type BoxedSink = ConsoleSink<Box<dyn Write + Send>>;

/// Dispatches submitted records to registered sinks.
///
/// The core applies the optional coarse threshold before any sink filter,
/// stamps common attributes when enabled, and then offers the record to
/// every sink in registration order. Registration is append-only; adding
/// the console table twice means every record matching a band is rendered
/// twice.
#[derive(Default)]
pub struct Core {
    threshold: Option<Severity>,
    sinks: Vec<BoxedSink>,
    common_attributes: bool,
}

impl Core {
    /// Creates an empty core: no threshold, no sinks, stamping disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: None,
            sinks: Vec::new(),
            common_attributes: false,
        }
    }

    /// Sets or clears the coarse severity threshold.
    pub fn set_threshold(&mut self, threshold: Option<Severity>) {
        self.threshold = threshold;
    }

    /// Returns the configured threshold, if any.
    #[must_use]
    pub const fn threshold(&self) -> Option<Severity> {
        self.threshold
    }

    /// Appends a console sink. Duplicates are permitted.
    pub fn add_console_sink(&mut self, sink: BoxedSink) {
        self.sinks.push(sink);
    }

    /// Returns the number of registered sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Enables stamping of common attributes (timestamp, process id, thread
    /// label) on every subsequent submission.
    pub fn enable_common_attributes(&mut self) {
        self.common_attributes = true;
    }

    /// Reports whether submissions are stamped with common attributes.
    #[must_use]
    pub const fn stamps_records(&self) -> bool {
        self.common_attributes
    }

    /// Reports whether a record of `severity` passes the coarse threshold.
    #[must_use]
    pub fn passes_threshold(&self, severity: Severity) -> bool {
        self.threshold.is_none_or(|minimum| severity >= minimum)
    }

    /// Routes `record` through the threshold gate and on to matching sinks.
    ///
    /// Sink write failures are not surfaced to logging call sites; a broken
    /// console stream drops the line and nothing else.
    pub fn submit(&mut self, mut record: Record) {
        if !self.passes_threshold(record.severity()) {
            return;
        }
        if self.common_attributes {
            record.stamp(local_now(), process::id(), thread_label());
        }
        for sink in &mut self.sinks {
            if sink.accepts(record.severity()) {
                let _ = sink.write_record(&record);
            }
        }
    }
}

/// Local wall-clock time; falls back to UTC when the local offset cannot be
/// determined (the usual case in multi-threaded processes on Unix).
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn thread_label() -> String {
    let current = thread::current();
    current
        .name()
        .map_or_else(|| format!("{:?}", current.id()), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SeverityBand;
    use chanlog_core::Severity;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf-8")
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn core_with_sink(band: SeverityBand) -> (Core, SharedBuf) {
        let buf = SharedBuf::default();
        let mut core = Core::new();
        core.add_console_sink(ConsoleSink::new(Box::new(buf.clone()), band, ""));
        (core, buf)
    }

    #[test]
    fn empty_core_has_no_threshold_and_no_sinks() {
        let core = Core::new();
        assert_eq!(core.threshold(), None);
        assert_eq!(core.sink_count(), 0);
        assert!(!core.stamps_records());
    }

    #[test]
    fn without_threshold_every_severity_passes() {
        let core = Core::new();
        for level in Severity::ALL {
            assert!(core.passes_threshold(level));
        }
    }

    #[test]
    fn threshold_gates_lower_severities() {
        let mut core = Core::new();
        core.set_threshold(Some(Severity::Warning));

        assert!(!core.passes_threshold(Severity::Trace));
        assert!(!core.passes_threshold(Severity::Info));
        assert!(core.passes_threshold(Severity::Warning));
        assert!(core.passes_threshold(Severity::Critical));
    }

    #[test]
    fn submit_drops_records_below_threshold() {
        let (mut core, buf) = core_with_sink(SeverityBand::Exactly(Severity::Info));
        core.set_threshold(Some(Severity::Warning));

        core.submit(Record::new(Severity::Info, "Net", "suppressed"));
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn submit_reaches_matching_sinks_only() {
        let (mut core, buf) = core_with_sink(SeverityBand::Exactly(Severity::Info));

        core.submit(Record::new(Severity::Info, "Net", "up"));
        core.submit(Record::new(Severity::Error, "Net", "down"));

        let output = buf.contents();
        assert!(output.contains("up"));
        assert!(!output.contains("down"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn submit_stamps_when_common_attributes_enabled() {
        let (mut core, buf) = core_with_sink(SeverityBand::Exactly(Severity::Info));
        core.enable_common_attributes();

        core.submit(Record::new(Severity::Info, "Net", "up"));

        // Stamped line leads with the 19-character timestamp and a space.
        let output = buf.contents();
        let line = output.lines().next().expect("one line");
        assert_eq!(line.as_bytes()[4], b'-');
        assert_eq!(line.as_bytes()[19], b' ');
        assert_eq!(line.as_bytes()[20], b'|');
    }

    #[test]
    fn submit_without_common_attributes_leaves_records_unstamped() {
        let (mut core, buf) = core_with_sink(SeverityBand::Exactly(Severity::Info));

        core.submit(Record::new(Severity::Info, "Net", "up"));

        assert!(buf.contents().starts_with('|'));
    }

    #[test]
    fn duplicate_sinks_render_duplicate_lines() {
        let buf = SharedBuf::default();
        let mut core = Core::new();
        for _ in 0..2 {
            core.add_console_sink(ConsoleSink::new(
                Box::new(buf.clone()),
                SeverityBand::Exactly(Severity::Info),
                "",
            ));
        }

        core.submit(Record::new(Severity::Info, "Net", "up"));

        let output = buf.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn thread_label_is_never_empty() {
        assert!(!thread_label().is_empty());
    }
}
