//! Combat log file naming.
//!
//! The game client names each log after the moment the session started, e.g.
//! `combat_2016-01-15_20_37_08_109597.txt`. Lines only carry a time of day, so
//! the file name is the only source of the calendar date.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

const PREFIX: &str = "combat_";
const SUFFIX: &str = ".txt";
const STAMP_FORMAT: &str = "%Y-%m-%d_%H_%M_%S_%6f";
/// `9` marks a digit, anything else must match literally.
const STAMP_SHAPE: &[u8] = b"9999-99-99_99_99_99_999999";

/// Parse the session start time out of a combat log file name.
///
/// Both the `combat_` prefix and the `.txt` extension are required, and every
/// field must be zero-padded to its full width.
pub fn parse_log_filename(path: &Path) -> Option<NaiveDateTime> {
    let name = path.file_name()?.to_str()?;
    let stamp = name.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
    if !has_stamp_shape(stamp) {
        return None;
    }
    NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()
}

fn has_stamp_shape(stamp: &str) -> bool {
    let bytes = stamp.as_bytes();
    bytes.len() == STAMP_SHAPE.len()
        && bytes.iter().zip(STAMP_SHAPE).all(|(&b, &s)| match s {
            b'9' => b.is_ascii_digit(),
            _ => b == s,
        })
}

/// Calendar date of a combat log, taken from its file name.
pub fn log_date(path: &Path) -> Option<NaiveDate> {
    parse_log_filename(path).map(|dt| dt.date())
}
