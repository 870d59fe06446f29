// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CodecError, ConfigError, DocumentError, PadError, PadResult};
use crate::codec::Encoding;

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "codec".to_string(),
        key: "ansi_code_page".to_string(),
        message: "unknown label 'klingon'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'ansi_code_page' in section '[codec]': unknown label 'klingon'"
    );
}

#[test]
fn test_codec_error_display() {
    let err = CodecError::Decode {
        encoding: Encoding::Utf16Be,
        reason: "input shorter than one code unit",
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"unable to decode UTF-16 BE data: input shorter than one code unit"
    );
}

#[test]
fn test_boxed_conversion_keeps_variant() {
    let err: PadError = DocumentError::InvalidLine(0).into();
    assert!(matches!(err, PadError::Document(ref inner) if matches!(**inner, DocumentError::InvalidLine(0))));
    insta::assert_snapshot!(
        err.to_string(),
        @"document error: invalid line number 0, enter a value of 1 or more"
    );
}

#[test]
fn test_pad_error_size() {
    // every variant is a thin Box; discriminant + alignment = 16 bytes
    let size = std::mem::size_of::<PadError>();
    assert!(size <= 16, "PadError is {size} bytes, expected <= 16");
}

#[test]
fn test_pad_result_size() {
    let size = std::mem::size_of::<PadResult<()>>();
    assert!(size <= 16, "PadResult<()> is {size} bytes, expected <= 16");
}
