use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::index::DisplayNote;
use crate::store::NoteStore;

pub fn run<C: Clock, G: IdGenerator>(
    store: &mut NoteStore<C, G>,
    title: String,
    content: String,
) -> Result<CmdResult> {
    let note = store.create(title, content);

    let mut result = CmdResult::default();
    // New notes are always first in the list
    result.affected_notes.push(DisplayNote { index: 1, note });
    result.add_message(CmdMessage::success("Note created successfully"));
    Ok(result)
}
