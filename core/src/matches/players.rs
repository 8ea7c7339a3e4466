use std::collections::HashSet;

use crate::combat_log::CombatEvent;

/// Ids of the log owner's own actors.
///
/// An actor targeting itself (ability activations, self-buffs) is almost always
/// the player whose client wrote the log. Empty ids are ignored.
pub fn player_ids<'a, I>(events: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a CombatEvent>,
{
    events
        .into_iter()
        .filter(|e| e.is_self_targeted() && !e.source_id.is_empty())
        .map(|e| e.source_id.clone())
        .collect()
}
