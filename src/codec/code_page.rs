// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy ("ANSI") code page selection.
//!
//! ```text
//! "system" --> GetACP() --> Windows code page number --> encoding_rs
//!              (non-Windows: windows-1252)
//! "<label>" --> encoding_rs::Encoding::for_label()
//! ```

use std::fmt;

use encoding_rs::{
    BIG5, EUC_KR, GBK, IBM866, KOI8_R, SHIFT_JIS, UTF_8, WINDOWS_874, WINDOWS_1250, WINDOWS_1251,
    WINDOWS_1252, WINDOWS_1253, WINDOWS_1254, WINDOWS_1255, WINDOWS_1256, WINDOWS_1257,
    WINDOWS_1258,
};

use crate::error::ConfigError;

/// Label that selects the active system code page.
pub const SYSTEM_LABEL: &str = "system";

/// The legacy code page used for [`Encoding::Ansi`](super::Encoding::Ansi).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CodePage(&'static encoding_rs::Encoding);

impl CodePage {
    /// Western European code page, the fallback when nothing else is known.
    #[must_use]
    pub fn windows_1252() -> Self {
        Self(WINDOWS_1252)
    }

    /// Active code page of the running system.
    #[cfg(windows)]
    #[must_use]
    pub fn system() -> Self {
        // SAFETY: GetACP has no preconditions and only reads process state.
        let acp = unsafe { windows::Win32::Globalization::GetACP() };
        Self::from_windows_code_page(acp).unwrap_or_else(Self::windows_1252)
    }

    /// Active code page of the running system.
    ///
    /// Non-Windows systems have no ANSI code page, so windows-1252 is used.
    #[cfg(not(windows))]
    #[must_use]
    pub fn system() -> Self {
        Self::windows_1252()
    }

    /// Maps a Windows code page identifier to a supported encoding.
    #[must_use]
    pub fn from_windows_code_page(code_page: u32) -> Option<Self> {
        let encoding = match code_page {
            866 => IBM866,
            874 => WINDOWS_874,
            932 => SHIFT_JIS,
            936 => GBK,
            949 => EUC_KR,
            950 => BIG5,
            1250 => WINDOWS_1250,
            1251 => WINDOWS_1251,
            1252 => WINDOWS_1252,
            1253 => WINDOWS_1253,
            1254 => WINDOWS_1254,
            1255 => WINDOWS_1255,
            1256 => WINDOWS_1256,
            1257 => WINDOWS_1257,
            1258 => WINDOWS_1258,
            20866 => KOI8_R,
            65001 => UTF_8,
            _ => return None,
        };
        Some(Self(encoding))
    }

    /// Resolves a configuration label.
    ///
    /// `"system"` selects [`CodePage::system`]; anything else is looked up as
    /// a WHATWG encoding label (e.g. `"windows-1251"`, `"shift_jis"`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unknown labels and for
    /// encodings that cannot be written back byte-for-byte (UTF-16, replacement).
    pub fn from_label(label: &str) -> Result<Self, ConfigError> {
        let label = label.trim();
        if label.eq_ignore_ascii_case(SYSTEM_LABEL) {
            return Ok(Self::system());
        }
        let invalid = |message: String| ConfigError::InvalidValue {
            section: "codec".to_string(),
            key: "ansi_code_page".to_string(),
            message,
        };
        let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
            .ok_or_else(|| invalid(format!("unknown encoding label '{label}'")))?;
        if encoding.output_encoding() != encoding {
            return Err(invalid(format!(
                "'{}' cannot be used as a legacy code page",
                encoding.name()
            )));
        }
        Ok(Self(encoding))
    }

    /// The `encoding_rs` encoding backing this code page.
    #[must_use]
    pub const fn encoding(self) -> &'static encoding_rs::Encoding {
        self.0
    }

    /// Canonical WHATWG name, e.g. `windows-1252`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }
}

impl Default for CodePage {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CodePage").field(&self.name()).finish()
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
