//! # NoteStore
//!
//! The state container behind every shell: an ordered list of notes plus an
//! optional edit target. It is the only place notes are created, changed or
//! dropped.
//!
//! ## Ordering
//!
//! The list is most-recent-first. `create` inserts at index 0, `update`
//! rewrites in place and `remove` takes exactly one element out without
//! touching the relative order of the others.
//!
//! ## Identity
//!
//! Ids come from the injected [`IdGenerator`]. The store remembers every id
//! it has handed out during the session, so an id is never reused even if
//! the note was removed or the generator repeats itself.
//!
//! ## Edit target
//!
//! At most one note is being edited. The target is an id that always refers
//! to a note in the list: `create` and `update` clear it, and removing the
//! edited note clears it too.
//!
//! ## Missing ids
//!
//! `update`, `remove` and `begin_edit` on an unknown id return
//! [`NotezError::NoteNotFound`] and leave the store untouched.

use crate::clock::{Clock, SystemClock};
use crate::error::{NotezError, Result};
use crate::ids::{IdGenerator, UuidIds};
use crate::model::{Note, NoteId};
use std::collections::HashSet;
use tracing::debug;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

/// How many fresh ids to ask the generator for before disambiguating a
/// repeated one ourselves.
const MAX_ID_ATTEMPTS: usize = 8;

/// A note that was taken out of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub note: Note,
    /// Zero-based position the note occupied before removal.
    pub position: usize,
}

pub struct NoteStore<C = SystemClock, G = UuidIds> {
    notes: Vec<Note>,
    editing: Option<NoteId>,
    issued: HashSet<NoteId>,
    clock: C,
    ids: G,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::with_sources(SystemClock, UuidIds)
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, G: IdGenerator> NoteStore<C, G> {
    pub fn with_sources(clock: C, ids: G) -> Self {
        Self {
            notes: Vec::new(),
            editing: None,
            issued: HashSet::new(),
            clock,
            ids,
        }
    }

    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> Note {
        let id = self.fresh_id();
        let note = Note::new(id, title.into(), content.into(), self.clock.now());
        self.notes.insert(0, note.clone());
        self.editing = None;
        debug!(id = %note.id, count = self.notes.len(), "note created");
        note
    }

    pub fn update(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Note> {
        let position = self.require_position(id)?;
        let date = self.clock.now();
        let note = &mut self.notes[position];
        note.title = title.into();
        note.content = content.into();
        note.date = date;
        let updated = note.clone();
        self.editing = None;
        debug!(id = %id, position, "note updated");
        Ok(updated)
    }

    pub fn remove(&mut self, id: &NoteId) -> Result<Removed> {
        let position = self.require_position(id)?;
        let note = self.notes.remove(position);
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
        debug!(id = %id, position, count = self.notes.len(), "note removed");
        Ok(Removed { note, position })
    }

    pub fn begin_edit(&mut self, id: &NoteId) -> Result<Note> {
        let position = self.require_position(id)?;
        self.editing = Some(id.clone());
        debug!(id = %id, "editing note");
        Ok(self.notes[position].clone())
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(id = %id, "edit cancelled");
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| &note.id == id)
    }

    pub fn editing_id(&self) -> Option<&NoteId> {
        self.editing.as_ref()
    }

    pub fn editing(&self) -> Option<&Note> {
        self.editing.as_ref().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn require_position(&self, id: &NoteId) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| NotezError::NoteNotFound(id.clone()))
    }

    fn fresh_id(&mut self) -> NoteId {
        let mut candidate = self.ids.next_id();
        let mut attempts = 1;
        while self.issued.contains(&candidate) && attempts < MAX_ID_ATTEMPTS {
            candidate = self.ids.next_id();
            attempts += 1;
        }

        if self.issued.contains(&candidate) {
            let base = candidate.as_str().to_string();
            let mut suffix = 2;
            loop {
                candidate = NoteId::new(format!("{}-{}", base, suffix));
                if !self.issued.contains(&candidate) {
                    break;
                }
                suffix += 1;
            }
        }

        self.issued.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{test_store, TestStore};
    use super::*;
    use crate::clock::ManualClock;

    fn titles(store: &TestStore) -> Vec<&str> {
        store.notes().iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn create_prepends_and_grows_by_one() {
        let mut store = test_store();
        for i in 0..5 {
            let note = store.create(format!("Note {}", i), "");
            assert_eq!(store.len(), i + 1);
            assert_eq!(store.notes()[0].id, note.id);
        }
        assert_eq!(
            titles(&store),
            vec!["Note 4", "Note 3", "Note 2", "Note 1", "Note 0"]
        );
    }

    #[test]
    fn create_single_note() {
        let mut store = test_store();
        store.create("Groceries", "Milk, eggs");
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "Groceries");
        assert_eq!(store.notes()[0].content, "Milk, eggs");
    }

    #[test]
    fn newest_note_comes_first() {
        let mut store = test_store();
        let a = store.create("A", "");
        let b = store.create("B", "");
        let ids: Vec<_> = store.notes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[test]
    fn create_accepts_empty_text() {
        let mut store = test_store();
        let note = store.create("", "");
        assert_eq!(note.title, "");
        assert_eq!(note.content, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_clears_edit_target() {
        let mut store = test_store();
        let a = store.create("A", "");
        store.begin_edit(&a.id).unwrap();
        store.create("B", "");
        assert!(store.editing().is_none());
    }

    #[test]
    fn update_rewrites_in_place() {
        let mut store = test_store();
        let a = store.create("A", "a");
        let b = store.create("B", "b");
        let c = store.create("C", "c");

        let updated = store.update(&b.id, "New Title", "New body").unwrap();

        assert_eq!(updated.id, b.id);
        assert_eq!(store.len(), 3);
        assert_eq!(store.position(&b.id), Some(1));
        assert_eq!(store.notes()[0], c);
        assert_eq!(store.notes()[2], a);
        assert_eq!(store.notes()[1].title, "New Title");
        assert_eq!(store.notes()[1].content, "New body");
    }

    #[test]
    fn update_refreshes_date() {
        let mut store = test_store();
        let a = store.create("A", "");
        let updated = store.update(&a.id, "New Title", "New body").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(updated.title, "New Title");
        assert!(updated.date > a.date);
    }

    #[test]
    fn update_clears_edit_target() {
        let mut store = test_store();
        let a = store.create("A", "");
        store.begin_edit(&a.id).unwrap();
        store.update(&a.id, "A2", "").unwrap();
        assert!(store.editing_id().is_none());
    }

    #[test]
    fn update_missing_id_changes_nothing() {
        let mut store = test_store();
        let a = store.create("A", "body");
        store.begin_edit(&a.id).unwrap();
        let before = store.notes().to_vec();

        let err = store
            .update(&NoteId::new("nonexistent-id"), "x", "y")
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.notes(), before.as_slice());
        assert_eq!(store.editing_id(), Some(&a.id));
    }

    #[test]
    fn remove_takes_out_exactly_one() {
        let mut store = test_store();
        let a = store.create("A", "");
        let b = store.create("B", "");

        let removed = store.remove(&a.id).unwrap();

        assert_eq!(removed.note, a);
        assert_eq!(removed.position, 1);
        assert_eq!(store.notes(), &[b]);
        assert!(store.get(&a.id).is_none());
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = test_store();
        let a = store.create("A", "");
        let b = store.create("B", "");
        let c = store.create("C", "");
        store.remove(&b.id).unwrap();
        assert_eq!(store.notes(), &[c, a]);
    }

    #[test]
    fn second_remove_signals_not_found() {
        let mut store = test_store();
        let a = store.create("A", "");
        assert!(store.remove(&a.id).is_ok());
        let err = store.remove(&a.id).unwrap_err();
        assert!(matches!(err, NotezError::NoteNotFound(ref id) if id == &a.id));
    }

    #[test]
    fn removing_edited_note_clears_edit_target() {
        let mut store = test_store();
        let a = store.create("A", "");
        let b = store.create("B", "");
        store.begin_edit(&a.id).unwrap();

        store.remove(&b.id).unwrap();
        assert_eq!(store.editing_id(), Some(&a.id));

        store.remove(&a.id).unwrap();
        assert!(store.editing_id().is_none());
    }

    #[test]
    fn begin_then_cancel_leaves_collection_identical() {
        let mut store = test_store();
        let a = store.create("A", "a");
        store.create("B", "b");
        let before = store.notes().to_vec();

        let editing = store.begin_edit(&a.id).unwrap();
        assert_eq!(editing, a);
        assert_eq!(store.editing(), Some(&a));
        store.cancel_edit();

        assert_eq!(store.notes(), before.as_slice());
        assert!(store.editing().is_none());
    }

    #[test]
    fn begin_edit_switches_single_target() {
        let mut store = test_store();
        let a = store.create("A", "");
        let b = store.create("B", "");
        store.begin_edit(&a.id).unwrap();
        store.begin_edit(&b.id).unwrap();
        assert_eq!(store.editing_id(), Some(&b.id));
    }

    #[test]
    fn begin_edit_missing_id_keeps_previous_target() {
        let mut store = test_store();
        let a = store.create("A", "");
        store.begin_edit(&a.id).unwrap();
        assert!(store.begin_edit(&NoteId::new("ghost")).unwrap_err().is_not_found());
        assert_eq!(store.editing_id(), Some(&a.id));
    }

    #[test]
    fn cancel_without_target_is_noop() {
        let mut store = test_store();
        store.create("A", "");
        store.cancel_edit();
        assert!(store.editing().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = test_store();
        let a = store.create("A", "");
        store.remove(&a.id).unwrap();
        let b = store.create("B", "");
        assert_ne!(a.id, b.id);
    }

    struct StuckIds;

    impl IdGenerator for StuckIds {
        fn next_id(&mut self) -> NoteId {
            NoteId::new("same")
        }
    }

    #[test]
    fn repeated_generator_ids_are_disambiguated() {
        let mut store = NoteStore::with_sources(ManualClock::ticking(), StuckIds);
        let a = store.create("A", "");
        let b = store.create("B", "");
        let c = store.create("C", "");
        assert_eq!(a.id.as_str(), "same");
        assert_eq!(b.id.as_str(), "same-2");
        assert_eq!(c.id.as_str(), "same-3");
    }

    #[test]
    fn dates_come_from_the_clock() {
        let clock = ManualClock::ticking();
        let expected = clock.peek();
        let mut store = NoteStore::with_sources(clock, crate::ids::SequentialIds::default());
        let note = store.create("A", "");
        assert_eq!(note.date, expected);
        assert_eq!(note.id.as_str(), "note-1");
    }
}
