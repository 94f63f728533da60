//! crates/core/src/ansi.rs
//! ANSI escape sequences used by the console color table.
//!
//! Kept as plain string constants: sinks concatenate them around the
//! severity field, and tests match on the literal sequences.

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold intensity.
pub const BOLD: &str = "\x1b[1m";
/// Foreground red (used for error and critical records).
pub const RED: &str = "\x1b[0;31m";
/// Foreground green (used for trace records).
pub const GREEN: &str = "\x1b[32m";
/// Foreground yellow (used for warning records).
pub const YELLOW: &str = "\x1b[33m";
/// Foreground blue.
pub const BLUE: &str = "\x1b[34m";
/// Foreground magenta.
pub const MAGENTA: &str = "\x1b[35m";
/// Foreground cyan (used for debug records).
pub const CYAN: &str = "\x1b[36m";
/// Foreground white.
pub const WHITE: &str = "\x1b[37m";
