// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{WideText, to_lowercase_units, try_with_capacity};

#[test]
fn test_embedded_nul_is_content() {
    let text = WideText::from("a\0b");
    assert_eq!(text.len(), 3);
    assert_eq!(text.to_nul_terminated(), vec![0x61, 0, 0x62, 0]);
}

#[test]
fn test_lowercase_preserves_length() {
    // U+0130 lowercases to two chars and must stay untouched.
    let input = WideText::from("ÀBÇ İ 😀 Ω");
    let lowered = to_lowercase_units(input.as_units()).unwrap();
    assert_eq!(lowered.len(), input.len());
    assert_eq!(String::from_utf16_lossy(&lowered), "àbç İ 😀 ω");
}

#[test]
fn test_lowercase_keeps_lone_surrogate() {
    let lowered = to_lowercase_units(&[0xD800, 0x0041]).unwrap();
    assert_eq!(lowered, vec![0xD800, 0x0061]);
}

#[test]
fn test_line_navigation() {
    let text = WideText::from("first\r\nsecond\nthird");
    assert_eq!(text.line_count(), 3);
    assert_eq!(text.line_start(0), Some(0));
    assert_eq!(text.line_start(1), Some(7));
    assert_eq!(text.line_start(2), Some(14));
    assert_eq!(text.line_start(3), None);
    assert_eq!(text.line_of(8), 1);
    assert_eq!(text.line_of(usize::MAX), 2);
    assert_eq!(
        text.line(0).map(String::from_utf16_lossy).as_deref(),
        Some("first")
    );
    assert_eq!(
        text.line(2).map(String::from_utf16_lossy).as_deref(),
        Some("third")
    );
}

#[test]
fn test_empty_text_has_one_line() {
    let text = WideText::new();
    assert_eq!(text.line_count(), 1);
    assert_eq!(text.line(0), Some(&[][..]));
}

#[test]
fn test_splice_clamps_range() {
    let mut text = WideText::from("hello");
    let inserted = text.splice(3..99, &WideText::from("p!").into_units());
    assert_eq!(text.to_string(), "help!");
    assert_eq!(inserted, 3..5);
}

#[test]
fn test_debug_shows_text() {
    insta::assert_snapshot!(format!("{:?}", WideText::from("hi")), @r#"WideText("hi")"#);
}

#[test]
fn test_try_with_capacity_overflow_is_error() {
    let err = try_with_capacity::<u16>(usize::MAX).unwrap_err();
    assert_eq!(err.requested, usize::MAX);
}
