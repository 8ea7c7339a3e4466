use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// A single parsed combat log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatEvent {
    /// 1-based position of the line within its file (0 when parsed standalone).
    pub line_number: u64,
    /// The line exactly as read, without its line terminator.
    pub raw_line: String,
    pub timestamp: NaiveDateTime,
    pub source_id: String,
    pub target_id: String,
    pub ability_name: String,
    pub effect_type: String,
    pub effect_name: String,
    pub amount: u32,
    pub is_critical: bool,
}

impl CombatEvent {
    /// Source and target are the same actor.
    pub fn is_self_targeted(&self) -> bool {
        self.source_id == self.target_id
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} [{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.source_id,
            self.target_id,
            self.ability_name,
            self.effect_type,
            self.effect_name,
        )?;
        if self.amount > 0 || self.is_critical {
            write!(f, " {}", self.amount)?;
            if self.is_critical {
                f.write_str("*")?;
            }
        }
        Ok(())
    }
}
