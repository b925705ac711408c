//! Share links.
//!
//! A share link is the configured base URL with the note id appended as a
//! path segment. It is built locally and nothing registers it anywhere; it
//! only resolves if whatever serves the base URL knows about the note.

use crate::model::NoteId;
use serde::Serialize;

/// Outcome of a share action, handed back to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub note_id: NoteId,
    pub url: String,
    /// Whether the clipboard accepted the url.
    pub copied: bool,
}

pub fn share_url(base: &str, id: &NoteId) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}
