// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use tempfile::TempDir;

use super::{Document, FindFlags, FindOutcome, Selection};
use crate::codec::{CodePage, Encoding, Transcoder};
use crate::error::{DocumentError, PadError};
use crate::search::{Direction, SearchMatch};

fn transcoder() -> Transcoder {
    Transcoder::new(CodePage::windows_1252())
}

fn document(text: &str) -> Document {
    let mut doc = Document::new(Encoding::Utf8);
    doc.set_text(text);
    doc.set_modified(false);
    doc
}

// =============================================================================
// FindFlags / Selection
// =============================================================================

#[test]
fn test_find_flags_default_is_down() {
    let flags = FindFlags::default();
    assert_eq!(flags.direction(), Direction::Down);
    assert!(!flags.match_case());
}

#[test]
fn test_find_flags_new() {
    let flags = FindFlags::new(true, Direction::Up);
    assert_eq!(flags, FindFlags::MATCH_CASE);
    assert_eq!(flags.direction(), Direction::Up);
}

#[test]
fn test_selection_is_clamped_and_ordered() {
    let mut doc = document("hello");
    doc.set_selection(4, 1);
    assert_eq!(doc.selection(), Selection { start: 1, end: 4 });
    doc.set_selection(2, 99);
    assert_eq!(doc.selection(), Selection { start: 2, end: 5 });
    doc.set_selection(50, 60);
    assert!(doc.selection().is_caret());
}

// =============================================================================
// Title and state
// =============================================================================

#[test]
fn test_new_document_title() {
    let doc = Document::new(Encoding::Utf8);
    assert_eq!(doc.title(), "Untitled - retropad");
    assert!(!doc.is_modified());
    assert!(doc.path().is_none());
}

#[test]
fn test_modified_title_has_marker() {
    let mut doc = Document::new(Encoding::Utf8);
    doc.set_text("x");
    assert_eq!(doc.title(), "*Untitled - retropad");
}

#[test]
fn test_cursor_position() {
    let mut doc = document("ab\ncd\r\nef");
    doc.set_selection(4, 4);
    assert_eq!(doc.cursor_position(), (2, 2));
    doc.set_selection(7, 7);
    assert_eq!(doc.cursor_position(), (3, 1));
    assert_eq!(doc.line_count(), 3);
}

// =============================================================================
// find_next / replace_next / replace_all
// =============================================================================

#[test]
fn test_find_next_without_term() {
    let mut doc = document("abc");
    assert_eq!(doc.find_next(false).unwrap(), FindOutcome::NoSearchTerm);
    assert_eq!(doc.replace_next().unwrap(), FindOutcome::NoSearchTerm);
}

#[test]
fn test_find_next_walks_and_wraps() {
    let mut doc = document("one two one two");
    doc.set_search("two", "", FindFlags::DOWN);

    assert_eq!(
        doc.find_next(false).unwrap(),
        FindOutcome::Found(SearchMatch { start: 4, end: 7 })
    );
    assert_eq!(
        doc.find_next(false).unwrap(),
        FindOutcome::Found(SearchMatch { start: 12, end: 15 })
    );
    // wraps back to the first hit
    assert_eq!(
        doc.find_next(false).unwrap(),
        FindOutcome::Found(SearchMatch { start: 4, end: 7 })
    );
    assert_eq!(doc.selection(), Selection { start: 4, end: 7 });
}

#[test]
fn test_find_next_reverse() {
    let mut doc = document("one two one two");
    doc.set_search("one", "", FindFlags::DOWN);
    doc.set_selection(12, 12);
    assert_eq!(
        doc.find_next(true).unwrap(),
        FindOutcome::Found(SearchMatch { start: 8, end: 11 })
    );
    assert_eq!(
        doc.find_next(true).unwrap(),
        FindOutcome::Found(SearchMatch { start: 0, end: 3 })
    );
}

#[test]
fn test_find_next_not_found_keeps_selection() {
    let mut doc = document("abc");
    doc.set_search("zzz", "", FindFlags::DOWN);
    doc.set_selection(1, 2);
    assert_eq!(doc.find_next(false).unwrap(), FindOutcome::NotFound);
    assert_eq!(doc.selection(), Selection { start: 1, end: 2 });
}

#[test]
fn test_empty_find_text_keeps_previous_term() {
    let mut doc = document("abc");
    doc.set_search("b", "x", FindFlags::DOWN);
    doc.set_search("", "y", FindFlags::MATCH_CASE);
    let settings = doc.search_settings();
    assert_eq!(settings.find_text().to_string(), "b");
    assert_eq!(settings.replace_text().to_string(), "y");
    assert_eq!(settings.flags(), FindFlags::MATCH_CASE);
}

#[test]
fn test_replace_next() {
    let mut doc = document("cat Cat cat");
    doc.set_search("cat", "dog", FindFlags::DOWN | FindFlags::MATCH_CASE);
    doc.set_selection(1, 1);

    assert_eq!(
        doc.replace_next().unwrap(),
        FindOutcome::Found(SearchMatch { start: 8, end: 11 })
    );
    assert_eq!(doc.text().to_string(), "cat Cat dog");
    assert_eq!(doc.selection(), Selection::caret(11));
    assert!(doc.is_modified());
}

#[test]
fn test_replace_all_counts_and_marks_modified() {
    let mut doc = document("foo FOO bar");
    doc.set_search("Foo", "X", FindFlags::DOWN);
    assert_eq!(doc.replace_all().unwrap(), 2);
    assert_eq!(doc.text().to_string(), "X X bar");
    assert!(doc.is_modified());
}

#[test]
fn test_replace_all_without_matches_is_unmodified() {
    let mut doc = document("foo");
    doc.set_search("bar", "baz", FindFlags::DOWN);
    assert_eq!(doc.replace_all().unwrap(), 0);
    assert_eq!(doc.text().to_string(), "foo");
    assert!(!doc.is_modified());
}

#[test]
fn test_replace_all_without_term() {
    let mut doc = document("foo");
    assert_eq!(doc.replace_all().unwrap(), 0);
}

// =============================================================================
// go_to_line
// =============================================================================

#[test]
fn test_go_to_line() {
    let mut doc = document("first\r\nsecond\nthird");
    assert_eq!(doc.go_to_line(2).unwrap(), 7);
    assert_eq!(doc.selection(), Selection::caret(7));
    assert_eq!(doc.go_to_line(1).unwrap(), 0);
}

#[test]
fn test_go_to_line_clamps_to_last() {
    let mut doc = document("a\nb\nc");
    assert_eq!(doc.go_to_line(1000).unwrap(), 4);
}

#[test]
fn test_go_to_line_zero_is_invalid() {
    let mut doc = document("a");
    let err = doc.go_to_line(0).unwrap_err();
    assert!(matches!(
        err,
        PadError::Document(ref inner) if matches!(**inner, DocumentError::InvalidLine(0))
    ));
}

// =============================================================================
// open / save
// =============================================================================

#[test]
fn test_open_empty_file_is_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, b"").unwrap();

    let doc = Document::open(&path, &transcoder()).unwrap();
    assert!(doc.text().is_empty());
    assert_eq!(doc.encoding(), Encoding::Utf8);
    assert_eq!(doc.title(), "empty.txt - retropad");
}

#[test]
fn test_open_detects_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.txt");
    fs::write(&path, [b'c', b'a', b'f', 0xE9]).unwrap();

    let doc = Document::open(&path, &transcoder()).unwrap();
    assert_eq!(doc.encoding(), Encoding::Ansi);
    assert_eq!(doc.text().to_string(), "café");
    assert!(!doc.is_modified());
}

#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Document::open(dir.path().join("missing.txt"), &transcoder()).unwrap_err();
    assert!(matches!(
        err,
        PadError::Document(ref inner) if matches!(**inner, DocumentError::Read { .. })
    ));
}

#[test]
fn test_reload_failure_keeps_document() {
    let dir = TempDir::new().unwrap();
    let mut doc = document("keep me");
    doc.set_search("me", "", FindFlags::DOWN);

    assert!(doc.reload_from(dir.path().join("missing.txt"), &transcoder()).is_err());
    assert_eq!(doc.text().to_string(), "keep me");
}

#[test]
fn test_reload_keeps_search_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("next.txt");
    fs::write(&path, "next file").unwrap();
    let mut doc = document("old");
    doc.set_search("file", "", FindFlags::DOWN);

    doc.reload_from(&path, &transcoder()).unwrap();
    assert_eq!(doc.text().to_string(), "next file");
    assert_eq!(doc.search_settings().find_text().to_string(), "file");
}

#[test]
fn test_save_without_path() {
    let mut doc = Document::new(Encoding::Utf8);
    let err = doc.save(&transcoder(), None, None).unwrap_err();
    assert!(matches!(
        err,
        PadError::Document(ref inner) if matches!(**inner, DocumentError::NoPath)
    ));
}

#[test]
fn test_save_as_records_path_and_clears_modified() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let mut doc = Document::new(Encoding::Utf8);
    doc.set_text("hi");

    let used = doc.save(&transcoder(), Some(path.as_path()), None).unwrap();
    assert_eq!(used, Encoding::Utf8);
    assert_eq!(fs::read(&path).unwrap(), vec![0xEF, 0xBB, 0xBF, b'h', b'i']);
    assert_eq!(doc.path(), Some(path.as_path()));
    assert!(!doc.is_modified());
    assert_eq!(doc.title(), "out.txt - retropad");
}

#[test]
fn test_save_utf16be_reports_downgrade() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("be.txt");
    fs::write(&path, [0xFE, 0xFF, 0x00, b'A']).unwrap();

    let mut doc = Document::open(&path, &transcoder()).unwrap();
    assert_eq!(doc.encoding(), Encoding::Utf16Be);
    assert_eq!(doc.save(&transcoder(), None, None).unwrap(), Encoding::Utf8);
    assert_eq!(doc.encoding(), Encoding::Utf8);
    assert_eq!(fs::read(&path).unwrap(), vec![0xEF, 0xBB, 0xBF, b'A']);
}

#[test]
fn test_save_failure_keeps_state() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("no-such-dir").join("out.txt");
    let mut doc = Document::new(Encoding::Utf8);
    doc.set_text("unsaved");

    let err = doc.save(&transcoder(), Some(target.as_path()), None).unwrap_err();
    assert!(matches!(
        err,
        PadError::Document(ref inner) if matches!(**inner, DocumentError::Write { .. })
    ));
    assert!(doc.is_modified());
    assert!(doc.path().is_none());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    fs::write(&path, "a much longer original body").unwrap();

    let mut doc = Document::open(&path, &transcoder()).unwrap();
    doc.set_text("short");
    doc.save(&transcoder(), None, Some(Encoding::Ansi)).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"short".to_vec());
    assert_eq!(doc.encoding(), Encoding::Ansi);
}

#[cfg(unix)]
#[test]
fn test_save_through_symlink_updates_target() {
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("real.txt");
    let link = dir.path().join("link.txt");
    fs::write(&real, "original").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut doc = Document::open(&link, &transcoder()).unwrap();
    doc.set_text("changed");
    doc.save(&transcoder(), None, Some(Encoding::Ansi)).unwrap();

    assert_eq!(fs::read(&real).unwrap(), b"changed".to_vec());
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(doc.path(), Some(link.as_path()));
}

#[test]
fn test_save_refuses_read_only_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locked.txt");
    fs::write(&path, "keep").unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&path, permissions.clone()).unwrap();

    let mut doc = Document::open(&path, &transcoder()).unwrap();
    doc.set_text("overwrite");
    let err = doc.save(&transcoder(), None, None).unwrap_err();

    assert!(matches!(
        err,
        PadError::Document(ref inner) if matches!(
            **inner,
            DocumentError::Write { ref source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied
        )
    ));
    assert!(doc.is_modified());
    assert_eq!(fs::read(&path).unwrap(), b"keep".to_vec());

    permissions.set_readonly(false);
    fs::set_permissions(&path, permissions).unwrap();
}

#[test]
fn test_set_encoding_applies_to_plain_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    fs::write(&path, "ab").unwrap();

    let mut doc = Document::open(&path, &transcoder()).unwrap();
    assert_eq!(doc.encoding(), Encoding::Utf8);
    doc.set_encoding(Encoding::Utf16Le);
    assert_eq!(doc.save(&transcoder(), None, None).unwrap(), Encoding::Utf16Le);
    assert_eq!(
        fs::read(&path).unwrap(),
        vec![0xFF, 0xFE, b'a', 0, b'b', 0]
    );
}
