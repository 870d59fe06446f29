// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Encoding detection and transcoding between file bytes and [`WideText`].
//!
//! ```text
//!                 detect()
//! file bytes ---------------> Encoding
//!     |                          |
//!     +------(decode)------------+--> WideText (UTF-16 code units)
//!
//! WideText --(encode)--> Encoded { bytes, encoding }
//!   Utf8     EF BB BF + UTF-8
//!   Utf16Le  FF FE + code units
//!   Utf16Be  saved as Utf8 (reported back to caller)
//!   Ansi     legacy code page, unmappable -> '?'
//! ```
//!
//! Uses `encoding_rs` for the UTF-8 and legacy code page conversions.
//!
//! [`WideText`]: crate::text::WideText

mod code_page;
mod transcode;


use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ConfigError;

pub use code_page::{CodePage, SYSTEM_LABEL};
pub use transcode::{Encoded, Transcoder, decode, encode};

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
/// UTF-16 little endian byte order mark.
pub const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
/// UTF-16 big endian byte order mark.
pub const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// File encodings understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8, with or without BOM on load, always with BOM on save.
    #[default]
    Utf8,
    /// UTF-16 little endian.
    Utf16Le,
    /// UTF-16 big endian (load only, saved as UTF-8).
    Utf16Be,
    /// Legacy system code page.
    Ansi,
}

impl Encoding {
    /// Get the byte order mark (BOM) for this encoding if it has one.
    #[must_use]
    pub const fn bom(self) -> Option<&'static [u8]> {
        match self {
            Self::Utf8 => Some(UTF8_BOM),
            Self::Utf16Le => Some(UTF16LE_BOM),
            Self::Utf16Be => Some(UTF16BE_BOM),
            Self::Ansi => None,
        }
    }

    /// Short lowercase identifier, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16Le => "utf16le",
            Self::Utf16Be => "utf16be",
            Self::Ansi => "ansi",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf16Le => write!(f, "UTF-16 LE"),
            Self::Utf16Be => write!(f, "UTF-16 BE"),
            Self::Ansi => write!(f, "ANSI"),
        }
    }
}

impl std::str::FromStr for Encoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf16le" | "utf-16le" | "unicode" => Ok(Self::Utf16Le),
            "utf16be" | "utf-16be" => Ok(Self::Utf16Be),
            "ansi" | "acp" => Ok(Self::Ansi),
            _ => Err(ConfigError::InvalidValue {
                section: "codec".to_string(),
                key: "encoding".to_string(),
                message: format!("expected 'utf8', 'utf16le', 'utf16be' or 'ansi', got '{s}'"),
            }),
        }
    }
}

/// Classifies raw file bytes.
///
/// Checks run in a fixed order: UTF-16 LE BOM, UTF-16 BE BOM, UTF-8 BOM,
/// then strict UTF-8 validation of the whole buffer. Anything else is
/// [`Encoding::Ansi`]. An incomplete multi-byte sequence at the end of the
/// buffer fails validation. The empty buffer is valid UTF-8.
#[must_use]
pub fn detect(bytes: &[u8]) -> Encoding {
    let encoding = if bytes.starts_with(UTF16LE_BOM) {
        Encoding::Utf16Le
    } else if bytes.starts_with(UTF16BE_BOM) {
        Encoding::Utf16Be
    } else if bytes.starts_with(UTF8_BOM)
        || encoding_rs::Encoding::utf8_valid_up_to(bytes) == bytes.len()
    {
        Encoding::Utf8
    } else {
        Encoding::Ansi
    };
    trace!(len = bytes.len(), %encoding, "detected encoding");
    encoding
}
