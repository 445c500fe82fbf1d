//! NoteStore behaviour: lazy creation, ordering, sentinels, trimming.

use std::fs;

use tempfile::TempDir;

use user_notes::{NoteStore, NOTE_SAVED, NO_NOTES_FOUND, NO_NOTE_FOUND};

fn fresh_store() -> (TempDir, NoteStore) {
    let dir = TempDir::new().unwrap();
    let store = NoteStore::new(dir.path().join("MY_NOTES.txt"));
    (dir, store)
}

// ==================== Lazy Creation ====================

#[test]
fn test_ensure_exists_creates_empty_file() {
    let (_dir, store) = fresh_store();
    assert!(!store.path().exists());

    store.ensure_exists().unwrap();
    assert!(store.path().exists());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
}

#[test]
fn test_ensure_exists_is_idempotent() {
    let (_dir, store) = fresh_store();
    store.append("keep me").unwrap();

    store.ensure_exists().unwrap();
    store.ensure_exists().unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "keep me\n");
}

#[test]
fn test_ensure_exists_on_preexisting_file() {
    let (_dir, store) = fresh_store();
    fs::write(store.path(), "written elsewhere\n").unwrap();

    store.ensure_exists().unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "written elsewhere\n"
    );
}

#[test]
fn test_every_read_creates_the_file() {
    let (_dir, store) = fresh_store();
    store.read_all().unwrap();
    assert!(store.path().exists());

    let (_dir, store) = fresh_store();
    store.read_latest().unwrap();
    assert!(store.path().exists());

    let (_dir, store) = fresh_store();
    store.summarize().unwrap();
    assert!(store.path().exists());
}

// ==================== Append ====================

#[test]
fn test_append_returns_confirmation() {
    let (_dir, store) = fresh_store();
    assert_eq!(store.append("hello").unwrap(), NOTE_SAVED);
}

#[test]
fn test_append_writes_message_and_newline() {
    let (_dir, store) = fresh_store();
    store.append("first").unwrap();
    store.append("second").unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "first\nsecond\n"
    );
}

#[test]
fn test_append_never_rewrites_existing_content() {
    let (_dir, store) = fresh_store();
    fs::write(store.path(), "  old content without newline").unwrap();

    store.append("new").unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "  old content without newlinenew\n"
    );
}

#[test]
fn test_append_accepts_empty_and_unicode() {
    let (_dir, store) = fresh_store();
    store.append("").unwrap();
    store.append("café ☕").unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "\ncafé ☕\n");
}

#[test]
fn test_append_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let store = NoteStore::new(dir.path().join("missing").join("notes.txt"));
    let err = store.append("lost").unwrap_err();
    assert!(matches!(err, user_notes::NotesError::Io(_)));
}

// ==================== Read All ====================

#[test]
fn test_read_all_in_call_order() {
    let (_dir, store) = fresh_store();
    let messages = ["alpha", "beta", "gamma", "delta"];
    for m in messages {
        store.append(m).unwrap();
    }
    assert_eq!(store.read_all().unwrap(), "alpha\nbeta\ngamma\ndelta");
}

#[test]
fn test_read_all_trims_whole_content_only() {
    let (_dir, store) = fresh_store();
    store.append("   indented").unwrap();
    store.append("middle  ").unwrap();
    store.append("last   ").unwrap();
    assert_eq!(store.read_all().unwrap(), "indented\nmiddle  \nlast");
}

#[test]
fn test_read_all_whitespace_only_is_sentinel() {
    let (_dir, store) = fresh_store();
    store.append("   ").unwrap();
    store.append("\t").unwrap();
    assert_eq!(store.read_all().unwrap(), NO_NOTE_FOUND);
}

// ==================== Read Latest ====================

#[test]
fn test_read_latest_keeps_trailing_newline() {
    let (_dir, store) = fresh_store();
    store.append("one").unwrap();
    store.append("two").unwrap();
    assert_eq!(store.read_latest().unwrap(), "two\n");
}

#[test]
fn test_read_latest_is_untrimmed_unlike_read_all() {
    let (_dir, store) = fresh_store();
    store.append("  padded  ").unwrap();
    assert_eq!(store.read_latest().unwrap(), "  padded  \n");
    assert_eq!(store.read_all().unwrap(), "padded");
}

#[test]
fn test_read_latest_blank_last_line() {
    let (_dir, store) = fresh_store();
    store.append("note").unwrap();
    store.append("").unwrap();
    assert_eq!(store.read_latest().unwrap(), "\n");
}

#[test]
fn test_read_latest_without_final_newline() {
    let (_dir, store) = fresh_store();
    fs::write(store.path(), "a\nb").unwrap();
    assert_eq!(store.read_latest().unwrap(), "b");
}

// ==================== Summarize ====================

#[test]
fn test_summarize_contains_trimmed_content() {
    let (_dir, store) = fresh_store();
    store.append("Ship the release").unwrap();
    store.append("Write the changelog").unwrap();

    let request = store.summarize().unwrap();
    assert!(request.contains("Ship the release\nWrite the changelog"));
    assert!(request.starts_with("Summarize the major points on these notes"));
    assert!(!request.ends_with('\n'));
}

// ==================== Empty Store ====================

#[test]
fn test_empty_store_sentinels() {
    let (_dir, store) = fresh_store();
    assert_eq!(store.read_all().unwrap(), "No note found!");
    assert_eq!(store.read_latest().unwrap(), "No notes found");
    assert_eq!(store.summarize().unwrap(), "No note found!");
    assert_eq!(store.note_count().unwrap(), 0);
}

// ==================== Scenarios ====================

#[test]
fn test_buy_milk_call_sam() {
    let (_dir, store) = fresh_store();
    store.append("Buy milk").unwrap();
    store.append("Call Sam").unwrap();

    assert_eq!(store.read_all().unwrap(), "Buy milk\nCall Sam");
    assert_eq!(store.read_latest().unwrap(), "Call Sam\n");
    assert_eq!(store.note_count().unwrap(), 2);
}

#[test]
fn test_two_handles_share_the_file() {
    let (_dir, store) = fresh_store();
    let other = NoteStore::new(store.path());

    store.append("from first").unwrap();
    other.append("from second").unwrap();

    assert_eq!(store.read_all().unwrap(), "from first\nfrom second");
    assert_eq!(other.read_latest().unwrap(), "from second\n");
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let (_dir, store) = fresh_store();
    fs::write(store.path(), [0xff, 0xfe, b'\n']).unwrap();
    assert!(store.read_all().is_err());
}
