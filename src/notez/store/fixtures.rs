use super::NoteStore;
use crate::clock::ManualClock;
use crate::ids::SequentialIds;

/// Deterministic store: `note-N` ids and a clock ticking one second per read.
pub type TestStore = NoteStore<ManualClock, SequentialIds>;

pub fn test_store() -> TestStore {
    NoteStore::with_sources(ManualClock::ticking(), SequentialIds::default())
}

pub struct StoreFixture {
    pub store: TestStore,
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            store: test_store(),
        }
    }

    /// Creates `count` notes titled "Test Note 1".."Test Note N", oldest first,
    /// so "Test Note N" ends up at position 1.
    pub fn with_notes(mut self, count: usize) -> Self {
        for i in 0..count {
            self.store.create(
                format!("Test Note {}", i + 1),
                format!("Content for note {}", i + 1),
            );
        }
        self
    }

    pub fn with_note(mut self, title: &str, content: &str) -> Self {
        self.store.create(title, content);
        self
    }
}
