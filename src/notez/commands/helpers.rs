use crate::clock::Clock;
use crate::error::{NotezError, Result};
use crate::ids::IdGenerator;
use crate::index::{DisplayNote, NoteSelector};
use crate::model::NoteId;
use crate::store::NoteStore;
use std::collections::HashSet;

/// Resolves selectors against the current list, returning `(position, id)`
/// pairs in selector order, each note once. Fails on the first selector that
/// matches nothing.
pub fn resolve_selectors<C: Clock, G: IdGenerator>(
    store: &NoteStore<C, G>,
    selectors: &[NoteSelector],
) -> Result<Vec<(usize, NoteId)>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();
    for selector in selectors {
        match selector {
            NoteSelector::Range(start, end) => {
                if *end > store.len() {
                    return Err(NotezError::Api(format!("Index {} not found", end)));
                }
                for index in *start..=*end {
                    resolved.push(resolve_selector(store, &NoteSelector::Index(index))?);
                }
            }
            single => resolved.push(resolve_selector(store, single)?),
        }
    }
    // A position and an id may name the same note
    resolved.retain(|(_, id)| seen.insert(id.clone()));
    Ok(resolved)
}

pub fn resolve_selector<C: Clock, G: IdGenerator>(
    store: &NoteStore<C, G>,
    selector: &NoteSelector,
) -> Result<(usize, NoteId)> {
    match selector {
        NoteSelector::Index(index) => store
            .notes()
            .get(index.wrapping_sub(1))
            .map(|note| (*index, note.id.clone()))
            .ok_or_else(|| NotezError::Api(format!("Index {} not found", index))),
        NoteSelector::Range(..) => Err(NotezError::Api(format!(
            "Expected a single note, got {}",
            selector
        ))),
        NoteSelector::Id(id) => store
            .position(id)
            .map(|pos| (pos + 1, id.clone()))
            .ok_or_else(|| NotezError::NoteNotFound(id.clone())),
    }
}

/// Current display entry for a note id, if it is still in the list.
pub fn display_note<C: Clock, G: IdGenerator>(
    store: &NoteStore<C, G>,
    id: &NoteId,
) -> Option<DisplayNote> {
    let position = store.position(id)?;
    Some(DisplayNote {
        index: position + 1,
        note: store.notes()[position].clone(),
    })
}
