//! crates/logging/src/sink.rs
//! Console sinks: a band filter, a color, and a writer.

use std::io::{self, Write};

use is_terminal::IsTerminal;

use chanlog_core::{Record, Severity};

use crate::format;

/// Severity filter attached to a single sink.
///
/// The console table uses [`Exactly`](Self::Exactly) for trace through
/// warning and one inclusive [`Range`](Self::Range) covering error and
/// critical, which share a sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeverityBand {
    /// Admits records of exactly this severity.
    Exactly(Severity),
    /// Admits records between the two severities, inclusive.
    Range(Severity, Severity),
}

impl SeverityBand {
    /// Reports whether `severity` falls inside the band.
    #[must_use]
    pub const fn contains(self, severity: Severity) -> bool {
        match self {
            Self::Exactly(level) => severity.repr() == level.repr(),
            Self::Range(low, high) => {
                severity.repr() >= low.repr() && severity.repr() <= high.repr()
            }
        }
    }
}

/// When a sink wraps the severity field in color escapes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
    /// Always emit escape sequences (matches the historical behavior).
    #[default]
    Always,
    /// Emit escape sequences only when stderr is a terminal.
    Auto,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Resolves the policy against the standard diagnostic stream.
    #[must_use]
    pub fn resolve(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => io::stderr().is_terminal(),
            Self::Never => false,
        }
    }
}

/// A console sink: a [`SeverityBand`] filter, a color, and a writer.
///
/// Each accepted record is rendered as one newline-terminated line in the
/// fixed console layout. The color policy is resolved once at construction,
/// so a sink's output is stable for its lifetime.
#[derive(Clone, Debug)]
pub struct ConsoleSink<W> {
    writer: W,
    band: SeverityBand,
    color: &'static str,
    colored: bool,
}

impl<W> ConsoleSink<W> {
    /// Creates a sink that always colors output.
    #[must_use]
    pub fn new(writer: W, band: SeverityBand, color: &'static str) -> Self {
        Self::with_color_mode(writer, band, color, ColorMode::Always)
    }

    /// Creates a sink with an explicit [`ColorMode`].
    #[must_use]
    pub fn with_color_mode(
        writer: W,
        band: SeverityBand,
        color: &'static str,
        mode: ColorMode,
    ) -> Self {
        Self {
            writer,
            band,
            color,
            colored: mode.resolve(),
        }
    }

    /// Returns the sink's band filter.
    #[must_use]
    pub const fn band(&self) -> SeverityBand {
        self.band
    }

    /// Reports whether the sink emits escape sequences.
    #[must_use]
    pub const fn is_colored(&self) -> bool {
        self.colored
    }

    /// Reports whether the sink admits records of `severity`.
    #[must_use]
    pub const fn accepts(&self, severity: Severity) -> bool {
        self.band.contains(severity)
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ConsoleSink<W>
where
    W: Write,
{
    /// Renders `record` as one console line, regardless of the band filter.
    ///
    /// Callers dispatching through a [`Core`](crate::Core) never reach this
    /// for records outside the band; the check lives in
    /// [`accepts`](Self::accepts) so the two concerns stay separable.
    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        format::render_line(&mut self.writer, record, self.color, self.colored)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
