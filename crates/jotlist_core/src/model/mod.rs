//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the canonical note record shared by store and storage layers.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned at creation.
//! - Ids are unique within one note list; the store enforces this by only
//!   ever generating fresh ids on insert.

pub mod note;
