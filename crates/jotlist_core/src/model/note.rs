//! Note domain model.
//!
//! # Responsibility
//! - Define the single record type persisted by the note slot.
//! - Provide lifecycle helpers for completion toggling.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `is_completed` starts as `false` and only changes via explicit toggle.
//! - The serialized shape is exactly `id`, `title`, `content`, `isCompleted`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable opaque identifier for one note.
///
/// Kept as a string newtype rather than a `Uuid` field: freshly generated
/// ids are UUIDv4 text, but the persisted contract only requires an opaque
/// unique string, so externally written slots with other id shapes decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an id that already exists externally.
    ///
    /// Used by import/restore paths where identity was assigned elsewhere.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One user-authored note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id assigned at creation, immutable thereafter.
    pub id: NoteId,
    /// Short user-editable title.
    pub title: String,
    /// Free-form body text, may be empty.
    pub content: String,
    /// Completion flag. Serialized as `isCompleted` to match the slot schema.
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Note {
    /// Creates a new note with a generated stable id.
    ///
    /// # Invariants
    /// - `is_completed` starts as `false`.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(NoteId::generate(), title, content)
    }

    /// Creates a note with a caller-provided stable id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            is_completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteId};

    #[test]
    fn new_note_starts_uncompleted() {
        let note = Note::new("Milk", "Buy milk");
        assert_eq!(note.title, "Milk");
        assert_eq!(note.content, "Buy milk");
        assert!(!note.is_completed);
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(NoteId::generate(), NoteId::generate());
    }

    #[test]
    fn toggle_completion_flips_and_restores() {
        let mut note = Note::new("t", "c");
        note.toggle_completion();
        assert!(note.is_completed);
        note.toggle_completion();
        assert!(!note.is_completed);
    }

    #[test]
    fn serialized_shape_uses_camel_case_completion_key() {
        let note = Note::with_id(NoteId::from_raw("1"), "Milk", "Buy milk");
        let encoded = serde_json::to_string(&note).unwrap();
        assert_eq!(
            encoded,
            r#"{"id":"1","title":"Milk","content":"Buy milk","isCompleted":false}"#
        );
    }

    #[test]
    fn decodes_external_id_shapes() {
        let decoded: Note =
            serde_json::from_str(r#"{"id":"1","title":"A","content":"","isCompleted":true}"#)
                .unwrap();
        assert_eq!(decoded.id, NoteId::from_raw("1"));
        assert!(decoded.is_completed);
    }
}
