//! ** idgen module **
//! Helpers for generating opaque session identifiers.
//! Session ids are the leading hex digits of a random (v4) UUID: short enough to read aloud
//! or quote in a log line, unique enough for a single host process.
use uuid::Uuid;

/// Number of characters kept from the UUID.
pub const SESSION_ID_LEN: usize = 8;

/// Generate a new random session id.
pub fn new_session_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SESSION_ID_LEN);
    id
}
