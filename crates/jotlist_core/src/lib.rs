//! Core domain logic for Jotlist, a single-screen note list.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use repo::memory_repo::MemoryNoteRepository;
pub use repo::note_repo::{JsonFileNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::note_store::NoteStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
