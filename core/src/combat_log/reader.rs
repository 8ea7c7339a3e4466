use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use encoding_rs::WINDOWS_1252;
use memchr::memchr_iter;

use super::{CombatEvent, parse_line};
use crate::context::log_date;
use crate::error::LogError;

/// Parse every line of a combat log file.
///
/// The calendar date comes from the file name. A name that doesn't follow the
/// `combat_<date>_<HH>_<mm>_<ss>_<ffffff>.txt` pattern yields `Ok(None)`
/// without the file being opened. Lines that fail to parse are skipped.
pub fn read_log_file(path: &Path) -> Result<Option<Vec<CombatEvent>>, LogError> {
    let Some(date) = log_date(path) else {
        tracing::debug!(path = %path.display(), "Not a combat log file name, skipping");
        return Ok(None);
    };

    let bytes = fs::read(path).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Client writes Windows-1252
    let (text, _, had_errors) = WINDOWS_1252.decode(&bytes);
    if had_errors {
        tracing::warn!(path = %path.display(), "Combat log contained undecodable bytes");
    }

    let events = parse_log_lines(&text, date);
    tracing::debug!(path = %path.display(), count = events.len(), "Parsed combat log");
    Ok(Some(events))
}

/// Parse already-loaded log text, one event per parseable line, in line order.
pub fn parse_log_lines(text: &str, date: NaiveDate) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in lines(text).enumerate() {
        let line_number = idx as u64 + 1;
        match parse_line(line_number, line, date) {
            Some(event) => events.push(event),
            None => {
                tracing::trace!(line_number, "Skipping unparseable line");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped unparseable lines");
    }
    events
}

/// Split on `\n`, dropping a trailing `\r` from each line. A final line without
/// a terminator still counts; the empty remainder after a final `\n` does not.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut ends = memchr_iter(b'\n', bytes);

    std::iter::from_fn(move || {
        let end = match ends.next() {
            Some(end) => end,
            None if start < bytes.len() => bytes.len(),
            None => return None,
        };
        let line = &text[start..end];
        start = end + 1;
        Some(line.strip_suffix('\r').unwrap_or(line))
    })
}
