use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::is_gsf_event;
use crate::combat_log::CombatEvent;

/// A run of consecutive GSF events. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Match {
    events: Vec<CombatEvent>,
}

impl Match {
    fn new(events: Vec<CombatEvent>) -> Self {
        debug_assert!(!events.is_empty());
        Self { events }
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<CombatEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.events.first().map(|e| e.timestamp)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.events.last().map(|e| e.timestamp)
    }

    /// Time between the first and last event.
    pub fn duration(&self) -> TimeDelta {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => end.signed_duration_since(start),
            _ => TimeDelta::zero(),
        }
    }
}

/// Single-pass splitter that groups GSF events into matches.
///
/// A match is only emitted once a non-GSF event closes it. Events still
/// pending when [`finish`](Self::finish) is called are dropped, so a log that
/// ends in the middle of a match loses that match.
#[derive(Debug, Default)]
pub struct MatchSplitter {
    in_match: bool,
    current: Vec<CombatEvent>,
    completed: Vec<Match>,
}

impl MatchSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, event: CombatEvent) {
        if is_gsf_event(&event) {
            self.current.push(event);
            self.in_match = true;
        } else if self.in_match {
            self.close_current();
        }
    }

    fn close_current(&mut self) {
        let events = std::mem::take(&mut self.current);
        tracing::trace!(count = events.len(), "Closing match");
        self.completed.push(Match::new(events));
        self.in_match = false;
    }

    /// Events of the match that hasn't been closed yet.
    pub fn pending(&self) -> &[CombatEvent] {
        &self.current
    }

    /// Matches closed so far, in closing order. Pending events are discarded.
    pub fn finish(self) -> Vec<Match> {
        if !self.current.is_empty() {
            tracing::debug!(
                count = self.current.len(),
                "Discarding unclosed match at end of log"
            );
        }
        self.completed
    }
}

/// Split an ordered event sequence into matches.
pub fn split_events<I>(events: I) -> Vec<Match>
where
    I: IntoIterator<Item = CombatEvent>,
{
    let mut splitter = MatchSplitter::new();
    for event in events {
        splitter.process(event);
    }
    splitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(line_number: u64, source: &str, target: &str) -> CombatEvent {
        let timestamp = NaiveDate::from_ymd_opt(2016, 1, 15)
            .unwrap()
            .and_hms_opt(20, 0, line_number as u32)
            .unwrap();
        CombatEvent {
            line_number,
            raw_line: format!("line {line_number}"),
            timestamp,
            source_id: source.to_string(),
            target_id: target.to_string(),
            ability_name: "Laser Cannon".to_string(),
            effect_type: "Event".to_string(),
            effect_name: "Damage".to_string(),
            amount: 100,
            is_critical: false,
        }
    }

    fn gsf(line_number: u64) -> CombatEvent {
        event(line_number, "3032002300086", "3032011811004")
    }

    fn ground(line_number: u64) -> CombatEvent {
        event(line_number, "@Galen Ayder", "@Galen Ayder")
    }

    fn line_numbers(m: &Match) -> Vec<u64> {
        m.events().iter().map(|e| e.line_number).collect()
    }

    #[test]
    fn test_is_gsf_event() {
        assert!(is_gsf_event(&gsf(1)));
        assert!(!is_gsf_event(&ground(1)));
        assert!(!is_gsf_event(&event(1, "3032002300086", "@Galen Ayder")));
        assert!(!is_gsf_event(&event(1, "Raina Temple@Galen", "3032002300086")));
        assert!(is_gsf_event(&event(1, "", "")));
    }

    #[test]
    fn test_split_closes_on_non_gsf_and_drops_trailing() {
        let events = vec![gsf(1), gsf(2), ground(3), gsf(4), ground(5), gsf(6)];
        let matches = split_events(events);

        assert_eq!(matches.len(), 2);
        assert_eq!(line_numbers(&matches[0]), vec![1, 2]);
        assert_eq!(line_numbers(&matches[1]), vec![4]);
    }

    #[test]
    fn test_split_is_deterministic() {
        let events = vec![ground(1), gsf(2), gsf(3), ground(4), ground(5), gsf(6), ground(7)];
        let first = split_events(events.clone());
        let second = split_events(events);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(line_numbers(&first[0]), vec![2, 3]);
        assert_eq!(line_numbers(&first[1]), vec![6]);
    }

    #[test]
    fn test_split_edge_cases() {
        assert!(split_events(Vec::new()).is_empty());
        assert!(split_events(vec![ground(1), ground(2)]).is_empty());
        assert!(split_events(vec![gsf(1), gsf(2)]).is_empty());
    }

    #[test]
    fn test_splitter_pending() {
        let mut splitter = MatchSplitter::new();
        splitter.process(gsf(1));
        splitter.process(ground(2));
        splitter.process(gsf(3));
        splitter.process(gsf(4));

        assert_eq!(splitter.pending().len(), 2);
        let matches = splitter.finish();
        assert_eq!(matches.len(), 1);
        assert_eq!(line_numbers(&matches[0]), vec![1]);
    }

    #[test]
    fn test_match_times() {
        let matches = split_events(vec![gsf(1), gsf(5), gsf(9), ground(10)]);
        let m = &matches[0];

        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
        assert_eq!(m.start_time(), Some(gsf(1).timestamp));
        assert_eq!(m.end_time(), Some(gsf(9).timestamp));
        assert_eq!(m.duration(), TimeDelta::seconds(8));
    }
}
