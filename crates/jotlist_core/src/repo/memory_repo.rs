//! In-memory note slot.
//!
//! # Responsibility
//! - Provide a slot implementation with no filesystem dependency, for tests
//!   and embedding hosts that manage persistence elsewhere.
//!
//! # Invariants
//! - Behaves exactly like the file slot: absent until first save, then
//!   wholesale overwritten on every save.

use crate::model::note::Note;
use crate::repo::note_repo::{NoteRepository, RepoResult};

/// Memory-backed note slot.
#[derive(Debug, Default)]
pub struct MemoryNoteRepository {
    slot: Option<Vec<Note>>,
}

impl MemoryNoteRepository {
    /// Creates an empty slot (never written).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with an already-persisted list.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { slot: Some(notes) }
    }

    /// Returns the last saved list, if any save happened.
    pub fn snapshot(&self) -> Option<&[Note]> {
        self.slot.as_deref()
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn load(&self) -> RepoResult<Option<Vec<Note>>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        self.slot = Some(notes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryNoteRepository;
    use crate::model::note::Note;
    use crate::repo::note_repo::NoteRepository;

    #[test]
    fn empty_slot_loads_none_until_first_save() {
        let mut repo = MemoryNoteRepository::new();
        assert!(repo.load().unwrap().is_none());

        repo.save(&[]).unwrap();
        assert_eq!(repo.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn seeded_slot_loads_seed() {
        let seed = vec![Note::new("a", "b")];
        let repo = MemoryNoteRepository::with_notes(seed.clone());
        assert_eq!(repo.load().unwrap(), Some(seed));
    }
}
