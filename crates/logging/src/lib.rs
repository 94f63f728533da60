#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `chanlog` renders channel-tagged log records to the console: five
//! color-coded sinks (one per severity band), a fixed line format
//! (`timestamp |channel |severity |message`), and an optional coarse
//! severity threshold read from the `LOG` environment variable.
//!
//! # Design
//!
//! Filtering happens in two layers. The dispatch [`Core`] applies the coarse
//! threshold first: a record below the configured minimum severity is
//! dropped before any sink sees it. Records that pass are offered to every
//! registered sink, and each [`ConsoleSink`] admits exactly one severity
//! band — trace, debug, info, and warning each have their own sink, while
//! error and critical share one. The five bands differ only in color, so
//! the two layers overlap deliberately: the threshold is optional and
//! coarse, the band filters are fixed and exhaustive.
//!
//! The core is an ordinary owned object, so tests can drive one against
//! in-memory writers. The process-global instance behind [`init`] preserves
//! the usual "configure once, log everywhere" usage.
//!
//! # Invariants
//!
//! - Sink registration is append-only: applying the console configuration
//!   twice registers ten sinks, and a single record then produces duplicate
//!   output lines. [`init`] is expected to run once per process, before
//!   concurrent logging begins; nothing enforces this.
//! - The `LOG` variable is matched case-sensitively against
//!   `debug|info|warning|error|critical`. Any other value — including
//!   `trace` — silently leaves the threshold unset.
//!
//! # Errors
//!
//! Sink writes surface [`std::io::Error`] from the underlying writer when
//! called directly. Dispatch through [`Core::submit`] swallows write
//! failures: a broken console stream never reaches logging call sites.
//!
//! # Examples
//!
//! Drive an owned core against an in-memory writer:
//!
//! ```
//! use chanlog::{ConsoleConfig, Core, Record, Severity};
//!
//! let mut core = Core::new();
//! ConsoleConfig::default().install(&mut core, || Box::new(Vec::<u8>::new()));
//! assert_eq!(core.sink_count(), 5);
//!
//! core.submit(Record::new(Severity::Info, "Startup", "ready"));
//! ```
//!
//! Configure the global core once and log through a channel handle:
//!
//! ```no_run
//! use chanlog::Channel;
//!
//! chanlog::init();
//!
//! let net = Channel::new("Net");
//! net.info("listening on :8080");
//! net.error("connection reset");
//! ```

mod channel;
mod config;
mod core;
mod format;
mod global;
mod macros;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use chanlog_core::{RawSeverity, Record, Severity, ansi};

pub use channel::Channel;
pub use config::{ConsoleConfig, LOG_ENV_VAR, threshold_from_name};
pub use self::core::{BoxedSink, Core};
pub use global::{enabled, init, installed_sinks, submit, with_core};
pub use sink::{ColorMode, ConsoleSink, SeverityBand};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{ChannelLayer, init_tracing, init_tracing_with_filter};
