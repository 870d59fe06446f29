// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File command arguments.
//!
//! # Commands
//!
//! ```text
//! detect a.txt b.txt [--json]   → encoding per file
//! cat a.txt                     → decoded text on stdout
//! new a.txt [--encoding utf16le] [--force]
//! convert a.txt --to utf8 [-o b.txt]
//! goto a.txt 12                 → line 12 and its caret offset
//! ```

use crate::codec::Encoding;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Args)]
pub struct DetectArgs {
    /// Files to inspect.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Prints one JSON object per file.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `cat` command.
#[derive(Debug, Clone, Args)]
pub struct CatArgs {
    /// File to decode.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// File to create.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Encoding of the new file, defaults to codec.new_file_encoding.
    #[arg(short = 'e', long = "encoding", value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Overwrites the file if it already exists.
    #[arg(short = 'f', long)]
    pub force: bool,
}

/// Arguments for the `convert` command.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// File to convert.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target encoding (utf8, utf16le, utf16be, ansi).
    #[arg(short = 't', long = "to", value_name = "ENCODING")]
    pub to: Encoding,

    /// Writes to this path instead of overwriting FILE.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `goto` command.
#[derive(Debug, Clone, Args)]
pub struct GotoArgs {
    /// File to open.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// One-based line number, clamped to the last line.
    #[arg(value_name = "LINE")]
    pub line: usize,
}
