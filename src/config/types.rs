// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]  output_log_level, file_log_level, log_file
//! [codec]   ansi_code_page ("system" | label), new_file_encoding
//! [search]  match_case, direction
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::codec::{CodePage, Encoding, SYSTEM_LABEL, Transcoder};
use crate::document::FindFlags;
use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::search::Direction;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Encoding options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Legacy code page for ANSI files: `"system"` or an encoding label.
    pub ansi_code_page: String,
    /// Encoding remembered by new, never-saved documents.
    pub new_file_encoding: Encoding,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            ansi_code_page: SYSTEM_LABEL.to_string(),
            new_file_encoding: Encoding::Utf8,
        }
    }
}

impl CodecConfig {
    /// Resolves `ansi_code_page`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown or unusable label.
    pub fn code_page(&self) -> Result<CodePage, ConfigError> {
        CodePage::from_label(&self.ansi_code_page)
    }

    /// Transcoder using the configured code page.
    ///
    /// # Errors
    ///
    /// Same as [`CodecConfig::code_page`].
    pub fn transcoder(&self) -> Result<Transcoder, ConfigError> {
        self.code_page().map(Transcoder::new)
    }
}

/// Default search options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub match_case: bool,
    pub direction: Direction,
}

impl SearchConfig {
    #[must_use]
    pub fn flags(&self) -> FindFlags {
        FindFlags::new(self.match_case, self.direction)
    }
}
