use crate::clock::Clock;
use crate::commands::{create, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::index::{DisplayNote, NoteSelector};
use crate::store::NoteStore;

use super::helpers::resolve_selector;

pub fn run<C: Clock, G: IdGenerator>(
    store: &mut NoteStore<C, G>,
    selector: &NoteSelector,
    title: String,
    content: String,
) -> Result<CmdResult> {
    let (index, id) = resolve_selector(store, selector)?;
    let note = store.update(&id, title, content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Note updated successfully"));
    // Updates keep the note where it was
    result.affected_notes.push(DisplayNote { index, note });
    Ok(result)
}

/// Saves the editor draft: rewrites the note being edited, or creates a new
/// note when nothing is being edited.
pub fn save<C: Clock, G: IdGenerator>(
    store: &mut NoteStore<C, G>,
    title: String,
    content: String,
) -> Result<CmdResult> {
    match store.editing_id().cloned() {
        Some(id) => run(store, &NoteSelector::Id(id), title, content),
        None => create::run(store, title, content),
    }
}
