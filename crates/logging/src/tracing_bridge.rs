//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and chanlog's console sinks.
//!
//! This module provides a tracing subscriber layer that forwards tracing
//! events to the global dispatch core as channel-tagged records. It lets
//! code written against the standard tracing macros (trace!, debug!,
//! info!, warn!, error!) share the console output, threshold, and color
//! table configured through [`init`](crate::init).
//!
//! # Usage
//!
//! ```rust,ignore
//! chanlog::init();
//! chanlog::init_tracing();
//!
//! // Events land in the console sinks, tagged by target.
//! tracing::info!(target: "net", "connected");
//! tracing::warn!(target: "disk", "nearly full");
//! ```

use chanlog_core::{Record, Severity};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::global;

/// A tracing layer that forwards events to the global dispatch core.
///
/// The event target becomes the channel name, the tracing level maps onto a
/// [`Severity`], and the event's `message` field becomes the record text.
/// Events below the global threshold are dropped before their message is
/// collected. `critical` has no tracing counterpart and is only reachable
/// through chanlog's own call surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChannelLayer;

impl ChannelLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a tracing level to a chanlog severity.
    fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Trace,
        }
    }
}

impl<S> Layer<S> for ChannelLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());
        if !global::enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            global::submit(Record::new(severity, metadata.target().to_owned(), message));
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs [`ChannelLayer`] as the global tracing subscriber.
///
/// Call [`init`](crate::init) (or install a console configuration on the
/// global core) first so forwarded events have sinks to land in.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(ChannelLayer::new()).init();
}

/// Installs [`ChannelLayer`] together with an additional tracing filter.
///
/// Allows combining chanlog's coarse threshold with standard tracing
/// filters (such as `EnvFilter`) for finer control over which events are
/// forwarded.
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(ChannelLayer::new())
        .init();
}
