//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate slot access into the note store API consumed by the UI.
//! - Keep presentation layers decoupled from storage details.

pub mod note_store;
