//! # Domain Model
//!
//! A [`Note`] is the only entity: an opaque [`NoteId`], a free-form title and
//! body, and the timestamp of its last write.
//!
//! Notes are plain values. They are never constructed half-way: the store
//! builds them in `create` and replaces title, content and date together in
//! `update`. Nothing here enforces uniqueness or ordering; that is the
//! store's job (see [`crate::store`]).
//!
//! ## Dates
//!
//! The timestamp is kept in UTC so it orders correctly and serializes
//! unambiguously. Shells show it in the local timezone through
//! [`Note::date_label`].

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used by [`Note::date_label`].
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Opaque, session-unique note identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl Note {
    pub fn new(id: NoteId, title: String, content: String, date: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            content,
            date,
        }
    }

    /// The note's date rendered in the session's local timezone.
    pub fn date_label(&self) -> String {
        self.date
            .with_timezone(&Local)
            .format(DATE_LABEL_FORMAT)
            .to_string()
    }

    /// First line of the content, used as a one-line preview on cards.
    pub fn preview(&self) -> &str {
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}
