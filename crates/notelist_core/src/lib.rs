//! In-memory note management core.
//! All note and list invariants are enforced inside this crate.

pub mod confirm;
pub mod logging;
pub mod model;
pub mod store;

pub use confirm::{AutoConfirm, EditGate};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId, NoteKind, NoteUpdate, NoteValidationError};
pub use store::todo_list::{ListError, ListResult, TodoList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
