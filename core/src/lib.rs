pub mod combat_log;
pub mod context;
pub mod error;
pub mod matches;

// Re-exports for convenience
pub use combat_log::{CombatEvent, parse_line, parse_log_lines, read_log_file, remove_id_number};
pub use context::{log_date, parse_log_filename};
pub use error::LogError;
pub use matches::{
    Match, MatchSplitter, is_gsf_event, player_ids, split_events, split_log_file,
};
