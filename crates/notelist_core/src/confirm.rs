//! Edit confirmation gate for confirm-before-edit notes.
//!
//! The list consults the gate before applying edits to notes that carry the
//! `ConfirmBeforeEdit` policy. The gate only decides; a declined edit leaves
//! the note untouched. Implementations supply the actual confirmation UX
//! (prompt, policy engine, automation).

use crate::model::note::{Note, NoteUpdate};

/// Decides whether a pending edit to a confirm-before-edit note may apply.
pub trait EditGate {
    /// Returns `true` to let the edit proceed.
    fn confirm_edit(&self, note: &Note, update: &NoteUpdate) -> bool;
}

/// Gate that approves every edit.
///
/// Default collaborator for lists that carry no confirm-before-edit notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl EditGate for AutoConfirm {
    fn confirm_edit(&self, _note: &Note, _update: &NoteUpdate) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoConfirm, EditGate};
    use crate::model::note::{Note, NoteKind, NoteUpdate};

    #[test]
    fn auto_confirm_approves_every_edit() {
        let note = Note::with_kind("guarded", "body", NoteKind::ConfirmBeforeEdit)
            .expect("note should be valid");
        let update = NoteUpdate {
            title: Some("renamed".to_string()),
            content: None,
        };

        assert!(AutoConfirm.confirm_edit(&note, &update));
    }
}
