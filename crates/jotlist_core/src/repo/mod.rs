//! Storage-port layer for the persisted note slot.
//!
//! # Responsibility
//! - Define the load/save contract the note store depends on.
//! - Isolate file and JSON details from store orchestration.
//!
//! # Invariants
//! - A repository holds exactly one slot: the whole list is written on every
//!   save and read back wholesale on load.
//! - Repositories never mutate the list they are handed.

pub mod memory_repo;
pub mod note_repo;
