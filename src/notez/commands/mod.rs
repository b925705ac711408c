//! # Command Layer
//!
//! One submodule per user action. Each command runs against a
//! [`NoteStore`](crate::store::NoteStore) and returns a [`CmdResult`]: the
//! notes it touched, the notes to show, and leveled messages.
//!
//! Commands never print. The messages are what a shell turns into toasts or
//! terminal lines; the shell decides how (or whether) to show them.
//!
//! ## Testing Strategy
//!
//! Command tests use the deterministic store from
//! [`crate::store::fixtures`] and check both the store state and the
//! returned `CmdResult`.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note
//! - [`get`]: List and view notes
//! - [`edit`]: Begin and cancel editing
//! - [`update`]: Rewrite a note, or save the editor draft
//! - [`delete`]: Remove notes
//! - [`share`]: Build a share link and copy it
//! - [`config`]: Read and change configuration
//! - [`helpers`]: Selector resolution

use crate::config::NotezConfig;
use crate::index::DisplayNote;
use crate::share::ShareLink;
use serde::Serialize;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod get;
pub mod helpers;
pub mod share;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub share: Option<ShareLink>,
    pub config: Option<NotezConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_share(mut self, share: ShareLink) -> Self {
        self.share = Some(share);
        self
    }

    pub fn with_config(mut self, config: NotezConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
