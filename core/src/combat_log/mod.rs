//! Combat log event model and parsing.
//!
//! A combat log line looks like
//!
//! ```text
//! [20:38:12.441] [3032002300086] [3032011811004] [Laser Cannon {3290928496246784}] [Event {836045448945472}: Damage {836045448945501}] (1534* energy {836045448940874})
//! ```
//!
//! [`parse_line`] turns one such line into a [`CombatEvent`], and
//! [`read_log_file`] does the same for every line of a file, taking the
//! calendar date from the file name.

mod event;
mod parser;
mod reader;

pub use event::CombatEvent;
pub use parser::{parse_line, remove_id_number};
pub use reader::{parse_log_lines, read_log_file};
