//! Note slot contract and JSON file implementation.
//!
//! # Responsibility
//! - Provide the `NoteRepository` port injected into `NoteStore`.
//! - Persist the whole note list as one JSON-encoded array in a single file.
//!
//! # Invariants
//! - `save` overwrites the entire slot; there is no partial/delta write.
//! - `load` distinguishes "slot absent" (`Ok(None)`) from "slot unreadable"
//!   (`Err`), so the store can treat the first silently and log the second.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage error for slot read/write operations.
#[derive(Debug)]
pub enum RepoError {
    /// Filesystem failure while reading or writing the slot.
    Io(io::Error),
    /// JSON encode/decode failure.
    Encoding(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot io failure: {err}"),
            Self::Encoding(err) => write!(f, "slot encoding failure: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err),
        }
    }
}

impl From<io::Error> for RepoError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encoding(value)
    }
}

/// Storage port for the persisted note slot.
pub trait NoteRepository {
    /// Reads the whole slot. `Ok(None)` means the slot was never written.
    fn load(&self) -> RepoResult<Option<Vec<Note>>>;
    /// Overwrites the whole slot with the given list.
    fn save(&mut self, notes: &[Note]) -> RepoResult<()>;
}

/// File-backed note slot holding one JSON array of notes.
pub struct JsonFileNoteRepository {
    path: PathBuf,
}

impl JsonFileNoteRepository {
    /// Creates a repository over the given slot path.
    ///
    /// The file is not touched until the first `load`/`save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the slot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteRepository for JsonFileNoteRepository {
    fn load(&self) -> RepoResult<Option<Vec<Note>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RepoError::Io(err)),
        };
        let notes = serde_json::from_str(&raw)?;
        Ok(Some(notes))
    }

    fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let encoded = serde_json::to_string(notes)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonFileNoteRepository, NoteRepository, RepoError};
    use crate::model::note::{Note, NoteId};

    #[test]
    fn load_of_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileNoteRepository::new(dir.path().join("notes.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = JsonFileNoteRepository::new(dir.path().join("nested/slot/notes.json"));
        repo.save(&[Note::new("a", "b")]).unwrap();
        assert_eq!(repo.load().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn load_of_corrupt_slot_is_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "not json at all").unwrap();
        let repo = JsonFileNoteRepository::new(path);
        match repo.load() {
            Err(RepoError::Encoding(_)) => {}
            other => panic!("expected encoding error, got {other:?}"),
        }
    }

    #[test]
    fn slot_round_trips_field_for_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = JsonFileNoteRepository::new(dir.path().join("notes.json"));
        let mut second = Note::with_id(NoteId::from_raw("2"), "B", "body");
        second.toggle_completion();
        let notes = vec![Note::with_id(NoteId::from_raw("1"), "A", ""), second];

        repo.save(&notes).unwrap();
        assert_eq!(repo.load().unwrap().unwrap(), notes);
    }
}
