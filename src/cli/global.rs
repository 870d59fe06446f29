// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE           ← Additional config files (can repeat)
//! --log-level N        ← Console verbosity (0-5)
//! --file-log-level N   ← File verbosity (defaults to --log-level)
//! --log-file FILE      ← global.log_file override
//! --ansi-code-page L   ← codec.ansi_code_page override
//! --set KEY=VAL        ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > retropad.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Legacy code page for ANSI files, `system` or a label such as `windows-1251`.
    #[arg(long = "ansi-code-page", value_name = "LABEL")]
    pub ansi_code_page: Option<String>,

    /// Sets an option, such as 'search.match_case=true' or 'codec/ansi_code_page=koi8-r'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", value_parser = parse_override, action = clap::ArgAction::Append)]
    pub options: Vec<(String, String)>,

    /// Disables auto loading of `retropad.toml`, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` values come first so dedicated flags win over them.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".to_string(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        if let Some(ref label) = self.ansi_code_page {
            overrides.push(("codec.ansi_code_page".to_string(), label.clone()));
        }

        overrides
    }
}

/// Parses a `section.key=value` (or `section/key=value`) override.
///
/// # Errors
///
/// Returns a message for clap if there is no `=` or the key has no section.
pub fn parse_override(option: &str) -> Result<(String, String), String> {
    let (key, value) = option
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{option}'"))?;
    let key = key.trim().replace('/', ".");
    match key.split_once('.') {
        Some((section, name)) if !section.is_empty() && !name.is_empty() => {
            Ok((key.clone(), value.trim().to_string()))
        }
        _ => Err(format!("expected 'section.key' before '=', got '{key}'")),
    }
}
