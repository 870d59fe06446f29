// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{find_in_file, replace_in_document, replaced_message, resolve_flags, run_replace_command};
use crate::cli::search::ReplaceArgs;
use crate::codec::{Encoding, Transcoder};
use crate::config::Config;
use crate::document::{Document, FindFlags};
use crate::search::Direction;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_resolve_flags_combines_config() {
    let mut config = Config::default();
    assert_eq!(resolve_flags(false, false, &config), FindFlags::DOWN);
    assert_eq!(
        resolve_flags(true, true, &config),
        FindFlags::MATCH_CASE
    );

    config.search.match_case = true;
    config.search.direction = Direction::Up;
    assert_eq!(
        resolve_flags(false, false, &config),
        FindFlags::MATCH_CASE
    );
}

#[test]
fn test_find_in_file_reports_line_and_column() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "alpha\nbeta Gamma\n");

    let report = find_in_file(&path, "gamma", FindFlags::DOWN, 0, &Transcoder::default())
        .unwrap()
        .unwrap();
    assert_eq!((report.start, report.end), (11, 16));
    assert_eq!((report.line, report.column), (2, 6));
}

#[test]
fn test_find_in_file_wraps_and_misses() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "abc abc");
    let transcoder = Transcoder::default();

    let wrapped = find_in_file(&path, "abc", FindFlags::DOWN, 5, &transcoder)
        .unwrap()
        .unwrap();
    assert_eq!(wrapped.start, 0);

    let up = find_in_file(&path, "abc", FindFlags::empty(), 7, &transcoder)
        .unwrap()
        .unwrap();
    assert_eq!(up.start, 4);

    assert!(
        find_in_file(&path, "xyz", FindFlags::DOWN, 0, &transcoder)
            .unwrap()
            .is_none()
    );
    assert!(find_in_file(&path, "", FindFlags::DOWN, 0, &transcoder).is_err());
}

#[test]
fn test_replace_in_document() {
    let mut document = Document::default();
    document.set_text("Foo foo FOO");
    document.set_modified(false);

    let count = replace_in_document(&mut document, "foo", "bar", FindFlags::DOWN).unwrap();
    assert_eq!(count, 3);
    assert_eq!(document.text().to_string(), "bar bar bar");
    assert!(document.is_modified());

    assert!(replace_in_document(&mut Document::default(), "", "x", FindFlags::DOWN).is_err());
}

#[test]
fn test_replaced_message() {
    assert_eq!(replaced_message(0), "Replaced 0 occurrences.");
    assert_eq!(replaced_message(1), "Replaced 1 occurrence.");
    assert_eq!(replaced_message(2), "Replaced 2 occurrences.");
}

#[test]
fn test_replace_command_keeps_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.txt");
    std::fs::write(&path, [0xFF, 0xFE, b'a', 0, b'b', 0, b'a', 0]).unwrap();

    let args = ReplaceArgs {
        file: path.clone(),
        needle: "a".into(),
        replacement: "c".into(),
        match_case: false,
        output: None,
        encoding: None,
        dry_run: false,
    };
    run_replace_command(&args, &Config::default()).unwrap();

    assert_eq!(
        std::fs::read(&path).unwrap(),
        vec![0xFF, 0xFE, b'c', 0, b'b', 0, b'c', 0]
    );
}

#[test]
fn test_replace_command_dry_run_leaves_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "one two one");

    let args = ReplaceArgs {
        file: path.clone(),
        needle: "one".into(),
        replacement: "1".into(),
        match_case: true,
        output: None,
        encoding: Some(Encoding::Utf16Le),
        dry_run: true,
    };
    run_replace_command(&args, &Config::default()).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one two one");
}
