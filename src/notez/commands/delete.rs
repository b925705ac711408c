use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::index::{DisplayNote, NoteSelector};
use crate::store::NoteStore;

use super::helpers::resolve_selectors;

/// Removes every selected note. All selectors are resolved before anything is
/// removed, so one bad selector removes nothing.
pub fn run<C: Clock, G: IdGenerator>(
    store: &mut NoteStore<C, G>,
    selectors: &[NoteSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        let removed = store.remove(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted successfully ({}): {}",
            index, removed.note.title
        )));
        result.affected_notes.push(DisplayNote {
            index,
            note: removed.note,
        });
    }

    Ok(result)
}
