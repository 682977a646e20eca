//! Aggregate layer owning the note collection.
//!
//! # Responsibility
//! - Provide CRUD, search, sort and count operations over the note list.
//! - Keep the uncompleted counter consistent with collection state.
//!
//! # Invariants
//! - Every public operation returns with the counter equal to the true
//!   count of uncompleted notes.

pub mod todo_list;
