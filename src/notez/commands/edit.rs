use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::index::{DisplayNote, NoteSelector};
use crate::store::NoteStore;

use super::helpers::resolve_selector;

pub fn begin<C: Clock, G: IdGenerator>(
    store: &mut NoteStore<C, G>,
    selector: &NoteSelector,
) -> Result<CmdResult> {
    let (index, id) = resolve_selector(store, selector)?;
    let note = store.begin_edit(&id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Editing note {}: {}",
        index, note.title
    )));
    result.affected_notes.push(DisplayNote { index, note });
    Ok(result)
}

pub fn cancel<C: Clock, G: IdGenerator>(store: &mut NoteStore<C, G>) -> Result<CmdResult> {
    let was_editing = store.editing_id().is_some();
    store.cancel_edit();

    let mut result = CmdResult::default();
    if was_editing {
        result.add_message(CmdMessage::info("Edit cancelled"));
    }
    Ok(result)
}
