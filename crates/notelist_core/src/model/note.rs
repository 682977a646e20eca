//! Note domain model.
//!
//! # Responsibility
//! - Define the note entity and the partial edit payload applied to it.
//! - Enforce the non-empty title/content invariant on every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` and `content` are never empty after construction or edit.
//! - `updated_at` moves only on successful edits; completion flips leave it
//!   untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Edit policy attached to a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Plain note; edits apply directly.
    #[default]
    Default,
    /// Edits must be approved by the list's edit gate before applying.
    ConfirmBeforeEdit,
}

/// A single title/content record with timestamps and completion status.
///
/// A note holds no reference to the list that owns it; counter bookkeeping
/// belongs exclusively to the owning [`crate::store::todo_list::TodoList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id assigned at creation, immutable afterwards.
    pub id: NoteId,
    /// Non-empty display title.
    pub title: String,
    /// Non-empty body text.
    pub content: String,
    /// Edit policy for this note.
    pub kind: NoteKind,
    /// Completion flag; starts `false`.
    pub is_completed: bool,
    /// Fixed at construction.
    pub created_at: DateTime<Utc>,
    /// Bumped on every successful edit.
    pub updated_at: DateTime<Utc>,
}

/// Partial edit payload for title and/or content.
///
/// `None` leaves the existing value untouched; a supplied field replaces it
/// and must not be empty. Completion state is never part of an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    /// Checks that every supplied field is non-empty.
    ///
    /// Whitespace-only text counts as empty.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(NoteValidationError::EmptyTitle);
            }
        }
        if let Some(content) = &self.content {
            if content.trim().is_empty() {
                return Err(NoteValidationError::EmptyContent);
            }
        }
        Ok(())
    }
}

/// Validation error for note construction and edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::EmptyContent => write!(f, "note content must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates an uncompleted plain note with a generated stable id.
    ///
    /// # Errors
    /// - Rejects empty (or whitespace-only) title or content.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        Self::with_kind(title, content, NoteKind::Default)
    }

    /// Creates an uncompleted note with an explicit edit policy.
    ///
    /// # Errors
    /// - Rejects empty (or whitespace-only) title or content.
    pub fn with_kind(
        title: impl Into<String>,
        content: impl Into<String>,
        kind: NoteKind,
    ) -> Result<Self, NoteValidationError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        if content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            kind,
            is_completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial edit and bumps `updated_at`.
    ///
    /// Validation happens before any field changes, so a rejected payload
    /// leaves the note untouched. Completion state is never affected.
    ///
    /// # Errors
    /// - Rejects a supplied empty title or content.
    pub fn apply(&mut self, update: &NoteUpdate) -> Result<(), NoteValidationError> {
        update.validate()?;

        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Sets the completion flag.
    ///
    /// Completion is tracked separately from edit staleness, so `updated_at`
    /// stays put.
    pub fn set_completed(&mut self, completed: bool) {
        self.is_completed = completed;
    }

    /// Returns whether this note's edits require gate approval.
    pub fn requires_confirmation(&self) -> bool {
        self.kind == NoteKind::ConfirmBeforeEdit
    }

    /// Case-sensitive substring match on title OR content.
    ///
    /// The empty query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.content.contains(query)
    }
}
