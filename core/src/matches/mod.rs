//! Galactic Starfighter match segmentation.
//!
//! GSF events are logged with bare numeric ids for both source and target,
//! while ground combat always involves an `@`-qualified player or companion.
//! A match is a run of consecutive GSF events, closed by the first non-GSF
//! event that follows it.

mod players;
mod splitter;

pub use players::player_ids;
pub use splitter::{Match, MatchSplitter, split_events};

use std::path::Path;

use crate::combat_log::{CombatEvent, read_log_file};
use crate::error::LogError;

/// Neither side of the event is an `@`-qualified actor.
pub fn is_gsf_event(event: &CombatEvent) -> bool {
    !event.source_id.contains('@') && !event.target_id.contains('@')
}

/// Read a combat log and split it into matches.
///
/// `Ok(None)` when the file name isn't a combat log name.
pub fn split_log_file(path: &Path) -> Result<Option<Vec<Match>>, LogError> {
    let Some(events) = read_log_file(path)? else {
        return Ok(None);
    };
    let matches = split_events(events);
    tracing::debug!(path = %path.display(), count = matches.len(), "Split combat log into matches");
    Ok(Some(matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
[20:37:01.000] [@Galen Ayder] [@Galen Ayder] [Quick Travel {1}] [Event {2}: AbilityActivate {3}] ()
[20:38:12.441] [3032002300086] [3032011811004] [Laser Cannon {3290928496246784}] [Event {836045448945472}: Damage {836045448945501}] (1534* energy {836045448940874})
[20:38:13.100] [3032002300086] [3032002300086] [Power Shunt {4}] [Event {2}: AbilityActivate {3}] ()
[20:45:00.000] [@Galen Ayder] [@Galen Ayder] [Safe Login {5}] [Event {2}: AbilityActivate {3}] ()
[20:50:00.000] [3032002300099] [3032011811004] [Laser Cannon {3290928496246784}] [Event {836045448945472}: Damage {836045448945501}] (200 energy {836045448940874})
";

    #[test]
    fn test_split_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combat_2016-01-15_20_37_08_109597.txt");
        std::fs::write(&path, LOG).unwrap();

        let matches = split_log_file(&path).unwrap().expect("Should parse");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].len(), 2);
        assert_eq!(matches[0].events()[0].ability_name, "Laser Cannon");

        let events: Vec<CombatEvent> = matches.into_iter().flat_map(Match::into_events).collect();
        let ids = player_ids(&events);
        assert_eq!(ids.len(), 1);
        assert!(ids.contains("3032002300086"));
    }

    #[test]
    fn test_split_log_file_bad_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("random.txt");
        std::fs::write(&path, LOG).unwrap();
        assert!(split_log_file(&path).unwrap().is_none());
    }
}
