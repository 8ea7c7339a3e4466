use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use memchr::memchr;

use super::CombatEvent;

/// Number of bracket-delimited fields in a well-formed line.
const FIELD_COUNT: usize = 6;

/// Strip the `{id}` suffix from an ability or effect name.
///
/// Everything from the first `{` onwards is dropped and the rest is trimmed:
/// `"Laser Cannon {3290928496246784}"` becomes `"Laser Cannon"`.
pub fn remove_id_number(s: &str) -> &str {
    match memchr(b'{', s.as_bytes()) {
        Some(pos) => s[..pos].trim(),
        None => s.trim(),
    }
}

/// Parse one combat log line, using `date` for the calendar part of the timestamp.
///
/// Returns `None` for anything that isn't a six-field line with a valid time,
/// a `type: name` effect field and a numeric (or empty) amount.
pub fn parse_line(line_number: u64, line: &str, date: NaiveDate) -> Option<CombatEvent> {
    let [time, source, target, ability, effect, details] = split_fields(line)?;

    let timestamp = NaiveDateTime::new(date, parse_time(time)?);
    let (effect_type, effect_name) = parse_effect(effect)?;
    let (amount, is_critical) = parse_amount(details)?;

    Some(CombatEvent {
        line_number,
        raw_line: line.to_string(),
        timestamp,
        source_id: source.to_string(),
        target_id: target.to_string(),
        ability_name: remove_id_number(ability).to_string(),
        effect_type: effect_type.to_string(),
        effect_name: effect_name.to_string(),
        amount,
        is_critical,
    })
}

/// Split on `]`, trimming each piece and dropping one leading `[`.
/// The trailing amount field is whatever follows the fifth `]`.
fn split_fields(line: &str) -> Option<[&str; FIELD_COUNT]> {
    let mut fields = [""; FIELD_COUNT];
    let mut count = 0;

    for piece in line.split(']') {
        if count == FIELD_COUNT {
            return None;
        }
        let piece = piece.trim();
        fields[count] = piece.strip_prefix('[').unwrap_or(piece);
        count += 1;
    }

    (count == FIELD_COUNT).then_some(fields)
}

/// `HH:MM:SS.fff`, `HH:MM:SS` or `HH:MM`, zero-padded. No leap seconds.
fn parse_time(input: &str) -> Option<NaiveTime> {
    let b = input.as_bytes();
    let two_digits = |at: usize| b[at].is_ascii_digit() && b[at + 1].is_ascii_digit();

    if b.len() < 5 || !two_digits(0) || b[2] != b':' || !two_digits(3) {
        return None;
    }
    if b.len() == 5 {
        return NaiveTime::parse_from_str(input, "%H:%M").ok();
    }

    if b.len() < 8 || b[5] != b':' || !two_digits(6) || b[6] >= b'6' {
        return None;
    }
    if let Some(fraction) = input.get(8..).filter(|f| !f.is_empty()) {
        let digits = fraction.strip_prefix('.')?;
        if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    NaiveTime::parse_from_str(input, "%H:%M:%S%.f").ok()
}

// [Event {836045448945472}: Damage {836045448945501}]
fn parse_effect(segment: &str) -> Option<(&str, &str)> {
    let mut parts = segment.split(':');
    let effect_type = parts.next()?;
    let effect_name = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((remove_id_number(effect_type), remove_id_number(effect_name)))
}

// (1534* energy {836045448940874})
fn parse_amount(segment: &str) -> Option<(u32, bool)> {
    let inner = segment
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(segment);

    let token = inner.split(' ').next().unwrap_or_default();
    let is_critical = memchr(b'*', token.as_bytes()).is_some();
    let digits = token.replace('*', "");

    if digits.is_empty() {
        return Some((0, is_critical));
    }
    let amount = digits.parse::<u32>().ok()?;
    Some((amount, is_critical))
}
