//! Note store: the single owner of the in-memory note list.
//!
//! # Responsibility
//! - Hold the authoritative ordered note list for the process lifetime.
//! - Apply all mutations (add/update/toggle/delete) and re-persist the whole
//!   list through the injected slot after each effective change.
//!
//! # Invariants
//! - Ids are pairwise unique: inserts always generate fresh ids and ids are
//!   immutable afterwards.
//! - Insertion order is display order; mutations never reorder.
//! - Load and save failures are logged and swallowed; the in-memory list
//!   stays authoritative and no failure reaches the caller.
//! - Unknown-id update/toggle is a silent no-op and writes nothing.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use log::{debug, info, warn};
use std::collections::HashSet;

/// Note store facade over a slot repository.
///
/// The store is single-threaded by contract: it is driven from one UI event
/// stream and holds no internal locking.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Opens a store over the given slot, performing the one-time load.
    ///
    /// An absent slot yields an empty list. An unreadable slot is logged and
    /// also yields an empty list; opening never fails.
    pub fn open(repo: R) -> Self {
        let notes = match repo.load() {
            Ok(Some(notes)) => {
                info!(
                    "event=notes_loaded module=store status=ok count={}",
                    notes.len()
                );
                notes
            }
            Ok(None) => {
                info!("event=notes_slot_absent module=store status=ok");
                Vec::new()
            }
            Err(err) => {
                warn!("event=notes_load_failed module=store status=error detail={err}");
                Vec::new()
            }
        };
        Self { repo, notes }
    }

    /// Read-only snapshot of the list, in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the list.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a new note with a fresh id and `is_completed = false`.
    ///
    /// No validation happens at this layer; title and content may be any
    /// text, including empty. Returns a clone of the stored note.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> Note {
        let note = Note::new(title, content);
        self.notes.push(note.clone());
        self.persist();
        note
    }

    /// Replaces title and content of the first note matching `id`.
    ///
    /// Id and completion flag stay untouched. Unknown id is a silent no-op.
    pub fn update(&mut self, id: &NoteId, title: impl Into<String>, content: impl Into<String>) {
        match self.notes.iter_mut().find(|note| note.id == *id) {
            Some(note) => {
                note.title = title.into();
                note.content = content.into();
                self.persist();
            }
            None => {
                debug!("event=note_update_skipped module=store status=ok reason=not_found");
            }
        }
    }

    /// Flips the completion flag of the note matching `id`.
    ///
    /// Unknown id is a silent no-op.
    pub fn toggle_completion(&mut self, id: &NoteId) {
        match self.notes.iter_mut().find(|note| note.id == *id) {
            Some(note) => {
                note.toggle_completion();
                self.persist();
            }
            None => {
                debug!("event=note_toggle_skipped module=store status=ok reason=not_found");
            }
        }
    }

    /// Removes the notes at the given positions in one batch.
    ///
    /// Positions are resolved against the list as it was when the call
    /// started, so removing several positions never shifts the meaning of
    /// the remaining ones. Out-of-range positions are ignored.
    pub fn delete(&mut self, positions: &HashSet<usize>) {
        if positions.is_empty() {
            return;
        }
        let before = self.notes.len();
        let mut index = 0;
        self.notes.retain(|_| {
            let keep = !positions.contains(&index);
            index += 1;
            keep
        });
        if self.notes.len() != before {
            self.persist();
        }
    }

    /// Rewrites the whole slot from the current list.
    ///
    /// Failures are logged and swallowed; the slot may stay stale until the
    /// next successful save, but the in-memory list remains authoritative.
    fn persist(&mut self) {
        if let Err(err) = self.repo.save(&self.notes) {
            warn!("event=notes_persist_failed module=store status=error detail={err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::repo::memory_repo::MemoryNoteRepository;

    #[test]
    fn open_over_empty_slot_starts_empty() {
        let store = NoteStore::open(MemoryNoteRepository::new());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_reflects_in_len_and_snapshot() {
        let mut store = NoteStore::open(MemoryNoteRepository::new());
        let note = store.add("T", "C");
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0], note);
    }
}
