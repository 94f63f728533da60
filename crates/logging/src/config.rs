//! crates/logging/src/config.rs
//! Console configuration: the band/color table and the `LOG` threshold.

use std::env;
use std::io::Write;

use chanlog_core::{Severity, ansi};

use crate::core::Core;
use crate::sink::{ColorMode, ConsoleSink, SeverityBand};

/// Environment variable holding the minimum severity name.
pub const LOG_ENV_VAR: &str = "LOG";

/// Recognized threshold names, in ascending severity order.
///
/// `trace` is deliberately absent: `LOG=trace` (like any unrecognized
/// value) leaves the coarse threshold unset, so every severity passes the
/// global gate and only the per-sink band filters apply.
const THRESHOLD_NAMES: [(&str, Severity); 5] = [
    ("debug", Severity::Debug),
    ("info", Severity::Info),
    ("warning", Severity::Warning),
    ("error", Severity::Error),
    ("critical", Severity::Critical),
];

/// The five console sinks: one band and one color each.
///
/// Trace through warning get dedicated sinks; error and critical share the
/// red one. The info entry is uncolored but its sink still writes the reset
/// sequence after the severity field.
const CONSOLE_BANDS: [(SeverityBand, &str); 5] = [
    (SeverityBand::Exactly(Severity::Trace), ansi::GREEN),
    (SeverityBand::Exactly(Severity::Debug), ansi::CYAN),
    (SeverityBand::Exactly(Severity::Info), ""),
    (SeverityBand::Exactly(Severity::Warning), ansi::YELLOW),
    (
        SeverityBand::Range(Severity::Error, Severity::Critical),
        ansi::RED,
    ),
];

/// Looks up a threshold name from the recognized five.
///
/// Matching is exact and case-sensitive; anything else yields `None` and
/// the caller falls back to "no threshold". This is the silent-fallback
/// contract: a misspelled `LOG` value is not an error.
#[must_use]
pub fn threshold_from_name(name: &str) -> Option<Severity> {
    THRESHOLD_NAMES
        .into_iter()
        .find_map(|(candidate, level)| (candidate == name).then_some(level))
}

/// Console configuration applied to a [`Core`].
///
/// Carries the two knobs the console layer exposes: the optional coarse
/// threshold and the color policy. [`install`](Self::install) turns the
/// configuration into registered sinks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsoleConfig {
    /// Coarse minimum severity; `None` admits everything.
    pub threshold: Option<Severity>,
    /// Color policy resolved per sink at installation time.
    pub color: ColorMode,
}

impl ConsoleConfig {
    /// Builds a configuration from the `LOG` environment variable.
    ///
    /// An absent or unrecognized value leaves the threshold unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            threshold: env::var(LOG_ENV_VAR)
                .ok()
                .as_deref()
                .and_then(threshold_from_name),
            color: ColorMode::Always,
        }
    }

    /// Returns the configuration with the given threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Option<Severity>) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the configuration with the given color policy.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Applies the configuration to `core`.
    ///
    /// Sets the threshold (only when one is configured — an unset threshold
    /// leaves whatever the core already had), registers the five console
    /// sinks from the band table with writers produced by `make_writer`,
    /// and enables common attribute stamping. Installing twice registers
    /// ten sinks and duplicates every output line; nothing guards against
    /// that.
    pub fn install<F>(&self, core: &mut Core, mut make_writer: F)
    where
        F: FnMut() -> Box<dyn Write + Send>,
    {
        if let Some(level) = self.threshold {
            core.set_threshold(Some(level));
        }
        for (band, color) in CONSOLE_BANDS {
            core.add_console_sink(ConsoleSink::with_color_mode(
                make_writer(),
                band,
                color,
                self.color,
            ));
        }
        core.enable_common_attributes();
    }
}
