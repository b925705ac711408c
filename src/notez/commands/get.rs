use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::index::{index_notes, DisplayNote, NoteSelector};
use crate::store::NoteStore;

use super::helpers::resolve_selectors;

/// Every note, most recent first.
pub fn list<C: Clock, G: IdGenerator>(store: &NoteStore<C, G>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_notes(index_notes(store.notes()));
    if store.is_empty() {
        result.add_message(CmdMessage::info(
            "No notes yet. Create your first note with `new`.",
        ));
    }
    Ok(result)
}

/// The selected notes, in selector order.
pub fn view<C: Clock, G: IdGenerator>(
    store: &NoteStore<C, G>,
    selectors: &[NoteSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let notes = resolved
        .into_iter()
        .filter_map(|(index, id)| {
            store.get(&id).map(|note| DisplayNote {
                index,
                note: note.clone(),
            })
        })
        .collect();
    Ok(CmdResult::default().with_listed_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteId;
    use crate::store::fixtures::{test_store, StoreFixture};

    #[test]
    fn list_is_most_recent_first() {
        let store = StoreFixture::new().with_notes(3).store;
        let result = list(&store).unwrap();
        let titles: Vec<_> = result
            .listed_notes
            .iter()
            .map(|dn| (dn.index, dn.note.title.as_str()))
            .collect();
        assert_eq!(
            titles,
            vec![(1, "Test Note 3"), (2, "Test Note 2"), (3, "Test Note 1")]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_list_has_hint() {
        let store = test_store();
        let result = list(&store).unwrap();
        assert!(result.listed_notes.is_empty());
        assert!(result.messages[0].content.contains("No notes yet"));
    }

    #[test]
    fn view_returns_selected_notes() {
        let store = StoreFixture::new().with_notes(3).store;
        let result = view(
            &store,
            &[
                NoteSelector::Index(3),
                NoteSelector::Id(NoteId::new("note-3")),
            ],
        )
        .unwrap();
        assert_eq!(result.listed_notes.len(), 2);
        assert_eq!(result.listed_notes[0].note.title, "Test Note 1");
        assert_eq!(result.listed_notes[1].index, 1);
    }

    #[test]
    fn view_unknown_index_fails() {
        let store = StoreFixture::new().with_notes(1).store;
        assert!(view(&store, &[NoteSelector::Index(2)]).is_err());
    }
}
