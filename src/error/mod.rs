// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           PadError (16 bytes)
//!                  |
//!   +--------+-----+-----+----------+
//!   |        |           |          |
//!   v        v           v          v
//! Codec    Alloc     Document    Config
//!  Box      Box        Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Codec     Decode, Encode, Alloc
//!   Document  InvalidLine, TooLarge, Read, Write, NoPath
//!   Config    InvalidValue
//!
//! A search miss is `None`, never an error.
//! ```

use std::collections::TryReserveError;

use thiserror::Error;

use crate::codec::Encoding;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PadError`].
pub type PadResult<T> = std::result::Result<T, PadError>;

/// Result type for transcoding operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum PadError {
    /// Decoding or encoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] Box<CodecError>),

    /// A text buffer could not be allocated.
    #[error("allocation error: {0}")]
    Alloc(#[from] Box<AllocationError>),

    /// Document operation failed.
    #[error("document error: {0}")]
    Document(#[from] Box<DocumentError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PadError {
                fn from(err: $error) -> Self {
                    PadError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    CodecError => Codec,
    AllocationError => Alloc,
    DocumentError => Document,
    ConfigError => Config,
}

// --- Allocation Errors ---

/// A buffer reservation was refused by the allocator.
#[derive(Debug, Error)]
#[error("failed to reserve {requested} elements")]
pub struct AllocationError {
    /// Number of elements requested.
    pub requested: usize,
    /// Underlying reservation failure.
    #[source]
    pub source: TryReserveError,
}

// --- Codec Errors ---

/// Transcoding errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input bytes cannot be decoded in the declared encoding.
    #[error("unable to decode {encoding} data: {reason}")]
    Decode {
        encoding: Encoding,
        reason: &'static str,
    },

    /// Text cannot be encoded at all in the requested encoding.
    #[error("unable to encode text as {encoding}: {reason}")]
    Encode {
        encoding: Encoding,
        reason: &'static str,
    },

    /// Output buffer allocation failed.
    #[error(transparent)]
    Alloc(#[from] AllocationError),
}

// --- Document Errors ---

/// Errors raised by the document host context.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Line numbers start at 1.
    #[error("invalid line number {0}, enter a value of 1 or more")]
    InvalidLine(usize),

    /// File exceeds the supported size.
    #[error("unsupported file size for '{path}': {size} bytes")]
    TooLarge { path: String, size: u64 },

    /// Failed to read the file.
    #[error("failed reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the file.
    #[error("failed writing '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Save requested for a document that has never been given a path.
    #[error("document has no file path")]
    NoPath,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
