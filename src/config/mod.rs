// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for retropad-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. retropad.toml (cwd)
//! 3. --ini FILE (in order given)
//! 4. RETROPAD_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RETROPAD_GLOBAL__OUTPUT_LOG_LEVEL=4      → global.output_log_level = 4
//! RETROPAD_CODEC__ANSI_CODE_PAGE=koi8-r    → codec.ansi_code_page = "koi8-r"
//! RETROPAD_SEARCH__MATCH_CASE=true         → search.match_case = true
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{CodecConfig, GlobalConfig, SearchConfig};

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "retropad.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "RETROPAD";

/// Section names of [`Config`], as they appear in TOML and env variables.
pub const SECTIONS: [&str; 3] = ["global", "codec", "search"];

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Encoding options.
    pub codec: CodecConfig,
    /// Default search options.
    pub search: SearchConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retropad_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("retropad.toml")
    ///     .with_env_prefix("RETROPAD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns an error if `codec.ansi_code_page` does not name a usable
    /// code page.
    pub fn validate(&self) -> Result<()> {
        self.codec.code_page()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_codec_options(&mut options);
        self.format_search_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_codec_options(&self, options: &mut BTreeMap<String, String>) {
        let code_page = match self.codec.code_page() {
            Ok(resolved) if resolved.name() != self.codec.ansi_code_page => {
                format!("{} ({resolved})", self.codec.ansi_code_page)
            }
            _ => self.codec.ansi_code_page.clone(),
        };
        options.insert("codec.ansi_code_page".into(), code_page);
        options.insert(
            "codec.new_file_encoding".into(),
            self.codec.new_file_encoding.as_str().to_string(),
        );
    }

    fn format_search_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "search.match_case".into(),
            self.search.match_case.to_string(),
        );
        options.insert(
            "search.direction".into(),
            self.search.direction.to_string(),
        );
    }
}
