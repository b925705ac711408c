//! # API Facade
//!
//! The single entry point a shell uses. It owns the session's
//! [`NoteStore`], the clipboard and the share base URL, turns user selectors
//! into note ids and dispatches to [`crate::commands`].
//!
//! The facade does not hold business logic and never prints. Every method
//! returns `Result<CmdResult>`; selector syntax errors come back as
//! [`NotezError::Api`].
//!
//! ## Generic Over Sources
//!
//! `NotezApi<C, G, K>` is generic over the clock, the id generator and the
//! clipboard:
//! - Terminal session: `SystemClock`, the configured generator, the system
//!   clipboard
//! - Tests: `ManualClock`, `SequentialIds`, `MemoryClipboard`

use crate::clipboard::Clipboard;
use crate::clock::Clock;
use crate::commands;
use crate::error::{NotezError, Result};
use crate::ids::IdGenerator;
use crate::index::{parse_selector, parse_selectors, DisplayNote, NoteSelector};
use crate::store::NoteStore;

pub struct NotezApi<C: Clock, G: IdGenerator, K: Clipboard> {
    store: NoteStore<C, G>,
    clipboard: K,
    share_base_url: String,
}

impl<C: Clock, G: IdGenerator, K: Clipboard> NotezApi<C, G, K> {
    pub fn new(store: NoteStore<C, G>, clipboard: K, share_base_url: impl Into<String>) -> Self {
        Self {
            store,
            clipboard,
            share_base_url: share_base_url.into(),
        }
    }

    pub fn create_note(&mut self, title: String, content: String) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::get::list(&self.store)
    }

    pub fn view_notes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse(selectors)?;
        commands::get::view(&self.store, &selectors)
    }

    pub fn begin_edit(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let selector = parse_single(selector)?;
        commands::edit::begin(&mut self.store, &selector)
    }

    pub fn cancel_edit(&mut self) -> Result<commands::CmdResult> {
        commands::edit::cancel(&mut self.store)
    }

    pub fn update_note(
        &mut self,
        selector: &str,
        title: String,
        content: String,
    ) -> Result<commands::CmdResult> {
        let selector = parse_single(selector)?;
        commands::update::run(&mut self.store, &selector, title, content)
    }

    pub fn save_draft(&mut self, title: String, content: String) -> Result<commands::CmdResult> {
        commands::update::save(&mut self.store, title, content)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn share_note(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let selector = parse_single(selector)?;
        commands::share::run(
            &self.store,
            &mut self.clipboard,
            &self.share_base_url,
            &selector,
        )
    }

    /// The note currently being edited, with its position.
    pub fn editing(&self) -> Option<DisplayNote> {
        let id = self.store.editing_id()?;
        commands::helpers::display_note(&self.store, id)
    }

    pub fn store(&self) -> &NoteStore<C, G> {
        &self.store
    }

    pub fn clipboard(&self) -> &K {
        &self.clipboard
    }
}

fn parse<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    if inputs.is_empty() {
        return Err(NotezError::Api("No notes selected".to_string()));
    }
    parse_selectors(inputs).map_err(NotezError::Api)
}

fn parse_single(input: &str) -> Result<NoteSelector> {
    match parse_selector(input).map_err(NotezError::Api)? {
        NoteSelector::Range(..) => Err(NotezError::Api(format!(
            "Expected a single note, got {}",
            input
        ))),
        selector => Ok(selector),
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
