//! Note id generation.
//!
//! Ids only need to be unique for one session. [`UuidIds`] is the default;
//! [`SequentialIds`] produces short, predictable ids (`note-1`, `note-2`, ...)
//! that are easier to type in the terminal and to assert on in tests.

use crate::model::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub trait IdGenerator {
    fn next_id(&mut self) -> NoteId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> NoteId {
        (**self).next_id()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> NoteId {
        NoteId::new(Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("note-")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NoteId {
        let id = NoteId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Which generator a session uses. Chosen through configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStyle {
    #[default]
    Uuid,
    Sequential,
}

impl IdStyle {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStyle::Uuid => Box::new(UuidIds),
            IdStyle::Sequential => Box::new(SequentialIds::default()),
        }
    }
}

impl fmt::Display for IdStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStyle::Uuid => write!(f, "uuid"),
            IdStyle::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for IdStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStyle::Uuid),
            "sequential" | "seq" => Ok(IdStyle::Sequential),
            other => Err(format!(
                "Invalid id style: {} (expected uuid or sequential)",
                other
            )),
        }
    }
}
