//! Todo list aggregate.
//!
//! # Responsibility
//! - Own the ordered note collection and all command/query operations.
//! - Maintain the uncompleted-note counter incrementally instead of
//!   recomputing it per query.
//!
//! # Invariants
//! - `uncompleted_count` equals the true count of uncompleted notes after
//!   every public operation returns.
//! - Note ids are pairwise distinct at all times.
//! - Insertion order is canonical; only deletion removes entries, and
//!   query/sort operations never reorder the backing collection.

use crate::confirm::{AutoConfirm, EditGate};
use crate::model::note::{Note, NoteId, NoteKind, NoteUpdate, NoteValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Aggregate error for list commands.
///
/// Lookup queries return `Option` instead; an absent note is an expected
/// outcome for a query, not a command failure.
#[derive(Debug)]
pub enum ListError {
    /// Title or content empty on create or on an explicit edit field.
    Validation(NoteValidationError),
    /// Command references an id not present in the list.
    NotFound(NoteId),
    /// The edit gate refused an edit to a confirm-before-edit note.
    EditDeclined(NoteId),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::EditDeclined(id) => write!(f, "edit declined by confirmation gate: {id}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::EditDeclined(_) => None,
        }
    }
}

impl From<NoteValidationError> for ListError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owning aggregate for all notes and their derived counts.
///
/// The generic gate decides confirm-before-edit approvals; plain lists use
/// the default [`AutoConfirm`].
#[derive(Debug)]
pub struct TodoList<G: EditGate = AutoConfirm> {
    notes: Vec<Note>,
    uncompleted_count: usize,
    edit_gate: G,
}

impl TodoList<AutoConfirm> {
    /// Creates an empty list with the auto-approving edit gate.
    pub fn new() -> Self {
        Self::with_edit_gate(AutoConfirm)
    }
}

impl Default for TodoList<AutoConfirm> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: EditGate> TodoList<G> {
    /// Creates an empty list consulting `edit_gate` for guarded edits.
    pub fn with_edit_gate(edit_gate: G) -> Self {
        Self {
            notes: Vec::new(),
            uncompleted_count: 0,
            edit_gate,
        }
    }

    /// Creates a plain note and appends it to the end of the list.
    ///
    /// # Errors
    /// - `Validation` when title or content is empty; the list and counter
    ///   stay unchanged.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> ListResult<NoteId> {
        let note = Note::new(title, content)?;
        Ok(self.push_note(note))
    }

    /// Creates a note with an explicit edit policy and appends it.
    ///
    /// # Errors
    /// - `Validation` when title or content is empty; the list and counter
    ///   stay unchanged.
    pub fn create_note_with_kind(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        kind: NoteKind,
    ) -> ListResult<NoteId> {
        let note = Note::with_kind(title, content, kind)?;
        Ok(self.push_note(note))
    }

    fn push_note(&mut self, note: Note) -> NoteId {
        let id = note.id;
        // New notes always start uncompleted.
        self.notes.push(note);
        self.uncompleted_count += 1;
        debug!(
            "event=note_created module=store status=ok id={id} total={} uncompleted={}",
            self.notes.len(),
            self.uncompleted_count
        );
        id
    }

    /// Removes the note with `id` and returns it.
    ///
    /// # Errors
    /// - `NotFound` when no note has that id; the list and counter stay
    ///   unchanged.
    pub fn delete_note(&mut self, id: NoteId) -> ListResult<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(ListError::NotFound(id))?;

        let note = self.notes.remove(index);
        if !note.is_completed {
            self.uncompleted_count -= 1;
        }
        debug!(
            "event=note_deleted module=store status=ok id={id} total={} uncompleted={}",
            self.notes.len(),
            self.uncompleted_count
        );
        Ok(note)
    }

    /// Applies a partial edit to the note with `id` and returns it.
    ///
    /// Validation precedes both the gate prompt and any mutation, so a
    /// failed call never leaves a half-applied edit. Completion state is
    /// never part of an edit; use [`Self::toggle_completed`].
    ///
    /// # Errors
    /// - `NotFound` when no note has that id.
    /// - `Validation` when a supplied payload field is empty.
    /// - `EditDeclined` when the gate refuses a confirm-before-edit note.
    pub fn update_note(&mut self, id: NoteId, update: &NoteUpdate) -> ListResult<&Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(ListError::NotFound(id))?;
        update.validate()?;

        let note = &self.notes[index];
        if note.requires_confirmation() && !self.edit_gate.confirm_edit(note, update) {
            debug!("event=note_edit_declined module=store status=rejected id={id}");
            return Err(ListError::EditDeclined(id));
        }

        self.notes[index].apply(update)?;
        debug!("event=note_updated module=store status=ok id={id}");
        Ok(&self.notes[index])
    }

    /// Flips completion state and returns the new value.
    ///
    /// The counter adjustment happens in the same step as the flip; there is
    /// no observable intermediate state.
    ///
    /// # Errors
    /// - `NotFound` when no note has that id.
    pub fn toggle_completed(&mut self, id: NoteId) -> ListResult<bool> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(ListError::NotFound(id))?;

        let completed = !note.is_completed;
        note.set_completed(completed);
        if completed {
            self.uncompleted_count -= 1;
        } else {
            self.uncompleted_count += 1;
        }
        debug!(
            "event=note_toggled module=store status=ok id={id} completed={completed} uncompleted={}",
            self.uncompleted_count
        );
        Ok(completed)
    }

    /// Gets one note by id. Absent ids yield `None`, not an error.
    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Read-only view of all notes in canonical (insertion) order.
    pub fn list_notes(&self) -> &[Note] {
        &self.notes
    }

    /// Uncompleted notes in canonical order.
    pub fn list_uncompleted(&self) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| !note.is_completed)
            .collect()
    }

    /// Notes whose title or content contains `query`, in canonical order.
    ///
    /// Matching is case-sensitive exact substring; the empty query matches
    /// every note.
    pub fn search_notes(&self, query: &str) -> Vec<&Note> {
        self.notes.iter().filter(|note| note.matches(query)).collect()
    }

    /// Stable sort with uncompleted notes before completed ones.
    ///
    /// Ties keep canonical order; the backing collection is not reordered.
    pub fn sorted_by_status(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by_key(|note| note.is_completed);
        sorted
    }

    /// Stable sort ascending by creation time.
    ///
    /// The backing collection is not reordered.
    pub fn sorted_by_created_at(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by_key(|note| note.created_at);
        sorted
    }

    /// Current number of notes in the list.
    pub fn total_notes(&self) -> usize {
        self.notes.len()
    }

    /// Maintained count of uncompleted notes. O(1), never recomputed.
    pub fn uncompleted_count(&self) -> usize {
        self.uncompleted_count
    }
}
