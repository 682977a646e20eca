//! Domain model for notes.
//!
//! # Responsibility
//! - Define the canonical note entity and its edit payload.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Title and content are never empty once a note exists.

pub mod note;
