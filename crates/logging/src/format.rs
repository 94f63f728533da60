//! crates/logging/src/format.rs
//! Console line rendering.
//!
//! Every sink emits the same layout and differs only in the color wrapped
//! around the severity field:
//!
//! ```text
//! 2024-05-01 12:30:00 |Worker          |error   |task failed
//! ```
//!
//! The channel field is left-justified and padded to 16 characters, the
//! severity field to 8; neither is truncated. A record without a stamped
//! timestamp (common attributes disabled) omits the timestamp and its
//! trailing space, so the line starts with `|`.

use std::io::{self, Write};

use chanlog_core::{Record, ansi};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Timestamp layout for the leading field (`YYYY-MM-DD HH:MM:SS`).
pub(crate) const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Renders one newline-terminated console line for `record`.
///
/// When `colored` is set, the severity field is wrapped in `color` and
/// [`ansi::RESET`]. The reset sequence is written even when `color` is the
/// empty string, so the uncolored info band still carries a trailing reset.
pub(crate) fn render_line<W: Write>(
    out: &mut W,
    record: &Record,
    color: &str,
    colored: bool,
) -> io::Result<()> {
    if let Some(timestamp) = record.timestamp() {
        let stamp = timestamp
            .format(TIMESTAMP_FORMAT)
            .map_err(io::Error::other)?;
        write!(out, "{stamp} ")?;
    }
    write!(out, "|{:<16}|", record.channel())?;
    if colored {
        write!(out, "{color}{:<8}{}", record.severity(), ansi::RESET)?;
    } else {
        write!(out, "{:<8}", record.severity())?;
    }
    writeln!(out, "|{}", record.message())
}
