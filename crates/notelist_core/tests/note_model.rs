use notelist_core::{Note, NoteKind, NoteUpdate, NoteValidationError};

#[test]
fn note_new_sets_defaults() {
    let note = Note::new("groceries", "milk and eggs").unwrap();

    assert!(!note.id.is_nil());
    assert_eq!(note.title, "groceries");
    assert_eq!(note.content, "milk and eggs");
    assert_eq!(note.kind, NoteKind::Default);
    assert!(!note.is_completed);
    assert_eq!(note.created_at, note.updated_at);
}

#[test]
fn note_new_rejects_empty_fields() {
    let err = Note::new("", "body").unwrap_err();
    assert_eq!(err, NoteValidationError::EmptyTitle);

    let err = Note::new("title", "").unwrap_err();
    assert_eq!(err, NoteValidationError::EmptyContent);
}

#[test]
fn note_new_rejects_whitespace_only_fields() {
    let err = Note::new("   ", "body").unwrap_err();
    assert_eq!(err, NoteValidationError::EmptyTitle);

    let err = Note::new("title", "\t\n").unwrap_err();
    assert_eq!(err, NoteValidationError::EmptyContent);
}

#[test]
fn apply_replaces_only_supplied_fields_and_bumps_updated_at() {
    let mut note = Note::new("draft", "first version").unwrap();
    let created_at = note.created_at;
    let updated_before = note.updated_at;

    note.apply(&NoteUpdate {
        title: Some("final".to_string()),
        content: None,
    })
    .unwrap();

    assert_eq!(note.title, "final");
    assert_eq!(note.content, "first version");
    assert_eq!(note.created_at, created_at);
    assert!(note.updated_at >= updated_before);
}

#[test]
fn apply_with_empty_payload_still_counts_as_an_edit() {
    let mut note = Note::new("draft", "body").unwrap();

    note.apply(&NoteUpdate::default()).unwrap();

    assert_eq!(note.title, "draft");
    assert_eq!(note.content, "body");
}

#[test]
fn apply_rejects_explicit_empty_field_and_leaves_note_unchanged() {
    let mut note = Note::new("draft", "body").unwrap();
    let before = note.clone();

    let err = note
        .apply(&NoteUpdate {
            title: Some("renamed".to_string()),
            content: Some("  ".to_string()),
        })
        .unwrap_err();

    assert_eq!(err, NoteValidationError::EmptyContent);
    assert_eq!(note, before);
}

#[test]
fn set_completed_does_not_touch_updated_at() {
    let mut note = Note::new("chore", "take out trash").unwrap();
    let updated_before = note.updated_at;

    note.set_completed(true);
    assert!(note.is_completed);
    assert_eq!(note.updated_at, updated_before);

    note.set_completed(false);
    assert!(!note.is_completed);
    assert_eq!(note.updated_at, updated_before);
}

#[test]
fn matches_is_case_sensitive_substring_on_title_or_content() {
    let note = Note::new("Category", "about dogs").unwrap();

    assert!(note.matches("Cat"));
    assert!(note.matches("dogs"));
    assert!(note.matches(""));
    assert!(!note.matches("cat"));
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let mut note = Note::with_kind("wire", "shape", NoteKind::ConfirmBeforeEdit).unwrap();
    note.set_completed(true);

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note.id.to_string());
    assert_eq!(json["title"], "wire");
    assert_eq!(json["content"], "shape");
    assert_eq!(json["kind"], "confirm_before_edit");
    assert_eq!(json["is_completed"], true);
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}
