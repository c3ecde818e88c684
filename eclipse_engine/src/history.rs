//! History recording.
//!
//! Every resolved choice leaves exactly one [`HistoryRecord`] in the session, giving an
//! auditable trail of how the player moved through the graph.
use crate::session::{HistoryRecord, SessionState};

use log::info;
use time::OffsetDateTime;

/// Append a transition record stamped with the current UTC time and return the
/// confirmation line shown to the player.
pub fn record_history(from_scene: &str, action: &str, to_scene: &str, state: &mut SessionState) -> String {
    record_history_at(from_scene, action, to_scene, OffsetDateTime::now_utc(), state)
}

/// As [`record_history`], with an explicit timestamp.
pub fn record_history_at(
    from_scene: &str,
    action: &str,
    to_scene: &str,
    time: OffsetDateTime,
    state: &mut SessionState,
) -> String {
    state.push_history(HistoryRecord::new(from_scene, action, to_scene, time));
    info!(
        "session {}: {from_scene} --{action}--> {to_scene} (record #{})",
        state.session_id(),
        state.history().len()
    );
    confirmation(action)
}

/// Short confirmation text for a resolved choice.
pub fn confirmation(action: &str) -> String {
    format!("Action confirmed: {action}.")
}
