// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use retropad_rs::codec::Encoding;
use retropad_rs::config::Config;
use retropad_rs::document::FindFlags;
use std::io::Write;
use tempfile::NamedTempFile;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 3
log_file = "logs/retropad.log"

[codec]
ansi_code_page = "windows-1251"
new_file_encoding = "utf16le"

[search]
match_case = true
direction = "up"
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_yaml_snapshot!(config, @r"
    global:
      output_log_level: 3
      file_log_level: 5
      log_file: logs/retropad.log
    codec:
      ansi_code_page: windows-1251
      new_file_encoding: utf16le
    search:
      match_case: true
      direction: up
    ");
}

#[test]
fn config_parse_empty_is_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.codec.new_file_encoding, Encoding::Utf8);
    assert_eq!(config.search.flags(), FindFlags::DOWN);
    assert!(config.global.log_file.is_none());
}

#[test]
fn config_rejects_bad_values() {
    assert!(Config::parse("[search]\ndirection = \"sideways\"").is_err());
    assert!(Config::parse("[codec]\nansi_code_page = \"not-a-charset\"").is_err());
    // UTF-16 labels cannot be used as a single-byte code page
    assert!(Config::parse("[codec]\nansi_code_page = \"utf-16le\"").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn later_files_override_earlier_ones() {
    let mut base = NamedTempFile::new().unwrap();
    writeln!(base, "[search]\nmatch_case = true\ndirection = \"up\"").unwrap();
    let mut local = NamedTempFile::new().unwrap();
    writeln!(local, "[search]\ndirection = \"down\"").unwrap();

    let loader = Config::builder()
        .add_toml_file(base.path())
        .add_toml_file(local.path());
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.search.flags(), FindFlags::DOWN | FindFlags::MATCH_CASE);
}

#[test]
fn set_overrides_files() {
    let config = Config::builder()
        .add_toml_str("[codec]\nnew_file_encoding = \"ansi\"")
        .set("codec.new_file_encoding", "utf8")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.codec.new_file_encoding, Encoding::Utf8);
}
