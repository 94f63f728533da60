//! crates/core/src/severity.rs
//! Ordered severity levels and their display forms.

use std::fmt;

/// Severity of a log record.
///
/// Variants are ordered from least to most severe; the derived [`Ord`]
/// implementation follows declaration order, so threshold comparisons read
/// naturally (`record.severity() >= Severity::Warning`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Fine-grained tracing output.
    Trace = 0,
    /// Diagnostic output useful during development.
    Debug = 1,
    /// Routine informational output.
    Info = 2,
    /// Something unexpected that does not stop the program.
    Warning = 3,
    /// An operation failed.
    Error = 4,
    /// The program cannot continue.
    Critical = 5,
}

impl Severity {
    /// All severities, in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the lowercase display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Parses an exact lowercase severity name.
    ///
    /// Matching is case-sensitive; `"Warning"` or `"WARN"` yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }

    /// Returns the numeric representation (0 for trace through 5 for critical).
    #[must_use]
    pub const fn repr(self) -> u8 {
        self as u8
    }

    /// Converts a numeric representation back into a severity.
    #[must_use]
    pub const fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    /// Writes the lowercase name, honoring width and alignment flags so the
    /// console formatter can left-justify the field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display wrapper for a raw severity value of unknown validity.
///
/// In-range values render as their lowercase name; anything else falls back
/// to the decimal integer instead of failing.
///
/// # Examples
///
/// ```
/// use chanlog_core::RawSeverity;
///
/// assert_eq!(RawSeverity(3).to_string(), "warning");
/// assert_eq!(RawSeverity(42).to_string(), "42");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawSeverity(pub u8);

impl fmt::Display for RawSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Severity::from_repr(self.0) {
            Some(level) => f.pad(level.as_str()),
            None => f.pad(&self.0.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_totally_ordered() {
        for window in Severity::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
        assert!(Severity::Trace < Severity::Critical);
        assert!(Severity::Warning >= Severity::Warning);
    }

    #[test]
    fn as_str_yields_lowercase_names() {
        let names: Vec<&str> = Severity::ALL.iter().map(|level| level.as_str()).collect();
        assert_eq!(
            names,
            ["trace", "debug", "info", "warning", "error", "critical"]
        );
    }

    #[test]
    fn display_matches_as_str() {
        for level in Severity::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn display_honors_width_and_alignment() {
        assert_eq!(format!("{:<8}", Severity::Info), "info    ");
        assert_eq!(format!("{:<8}", Severity::Critical), "critical");
        assert_eq!(format!("{:>10}", Severity::Error), "     error");
    }

    #[test]
    fn from_name_is_exact_and_case_sensitive() {
        assert_eq!(Severity::from_name("warning"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("trace"), Some(Severity::Trace));
        assert_eq!(Severity::from_name("Warning"), None);
        assert_eq!(Severity::from_name("WARN"), None);
        assert_eq!(Severity::from_name(""), None);
    }

    #[test]
    fn repr_round_trips() {
        for level in Severity::ALL {
            assert_eq!(Severity::from_repr(level.repr()), Some(level));
        }
        assert_eq!(Severity::from_repr(6), None);
        assert_eq!(Severity::from_repr(255), None);
    }

    #[test]
    fn raw_severity_renders_names_in_range() {
        for level in Severity::ALL {
            assert_eq!(RawSeverity(level.repr()).to_string(), level.as_str());
        }
    }

    #[test]
    fn raw_severity_falls_back_to_decimal() {
        assert_eq!(RawSeverity(6).to_string(), "6");
        assert_eq!(RawSeverity(42).to_string(), "42");
        assert_eq!(RawSeverity(255).to_string(), "255");
    }

    #[test]
    fn raw_severity_fallback_honors_width() {
        assert_eq!(format!("{:<8}", RawSeverity(42)), "42      ");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn severity_serde_round_trip() {
            for level in Severity::ALL {
                let json = serde_json::to_string(&level).unwrap();
                let decoded: Severity = serde_json::from_str(&json).unwrap();
                assert_eq!(level, decoded);
            }
        }
    }
}
