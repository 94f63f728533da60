#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `chanlog-core` provides the data model shared across the chanlog
//! workspace: the ordered [`Severity`] enumeration, the [`Record`] value
//! carried from logging call sites to console sinks, and the
//! [`ansi`] escape-sequence palette used when coloring output.
//!
//! # Design
//!
//! Records are plain owned values. A call site constructs a [`Record`] with
//! a severity, a channel tag, and a message; the dispatch core in the
//! `chanlog` crate stamps common attributes (timestamp, process and thread
//! identifiers) before handing the record to sinks. Keeping the stamping
//! step out of the constructor means records built in tests compare
//! deterministically.
//!
//! # Invariants
//!
//! - [`Severity`] is totally ordered by declaration order; `Trace` is the
//!   least severe and `Critical` the most severe.
//! - A record's channel and message are never mutated after construction;
//!   only the stamped attributes are filled in later.
//!
//! # Examples
//!
//! ```
//! use chanlog_core::{Record, Severity};
//!
//! let record = Record::new(Severity::Warning, "Worker", "queue is full");
//! assert_eq!(record.severity(), Severity::Warning);
//! assert_eq!(record.channel(), "Worker");
//! assert!(record.timestamp().is_none());
//! ```

pub mod ansi;
mod record;
mod severity;

pub use record::Record;
pub use severity::{RawSeverity, Severity};
