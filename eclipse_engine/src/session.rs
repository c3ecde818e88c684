//! Session -- one player's mutable progress through the story graph.
//!
//! A [`SessionState`] is owned by whatever hosts the conversation (the REPL, a voice agent,
//! a chat room handler). Core functions borrow it mutably for the length of one turn and
//! never keep a copy.
use crate::Id;
use crate::idgen::new_session_id;

use serde::{Serialize, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// One resolved transition. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    from: Id,
    action: Id,
    to: Id,
    #[serde(serialize_with = "serialize_rfc3339")]
    time: OffsetDateTime,
}
impl HistoryRecord {
    pub fn new(from: impl Into<Id>, action: impl Into<Id>, to: impl Into<Id>, time: OffsetDateTime) -> Self {
        Self {
            from: from.into(),
            action: action.into(),
            to: to.into(),
            time,
        }
    }

    /// Scene the player was in when the choice was made.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Key of the choice that was resolved.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Scene the choice led to.
    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn time(&self) -> OffsetDateTime {
        self.time
    }

    /// RFC 3339 rendering of the record's UTC timestamp.
    pub fn timestamp(&self) -> String {
        self.time
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.time.unix_timestamp().to_string())
    }
}

fn serialize_rfc3339<S: Serializer>(time: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    let text = time.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

/// Mutable per-player state.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub player_name: Option<String>,
    pub current_scene: Id,
    pub inventory: Vec<String>,
    pub journal: Vec<String>,
    history: Vec<HistoryRecord>,
    session_id: String,
}
impl SessionState {
    /// Create a fresh session positioned at `start_scene`.
    pub fn new(start_scene: impl Into<Id>) -> Self {
        Self {
            player_name: None,
            current_scene: start_scene.into(),
            inventory: Vec::new(),
            journal: Vec::new(),
            history: Vec::new(),
            session_id: new_session_id(),
        }
    }

    /// Opaque id generated at creation; stable for the session's lifetime.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Transition records in the order they happened.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// The most recent transition, if any.
    pub fn last_record(&self) -> Option<&HistoryRecord> {
        self.history.last()
    }

    pub(crate) fn push_history(&mut self, record: HistoryRecord) {
        self.history.push(record);
    }

    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
    }
}
