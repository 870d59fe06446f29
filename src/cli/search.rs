// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Search command arguments.
//!
//! `--match-case` and `--up` are OR-ed with the `[search]` config section,
//! so a config default can be tightened from the command line but not undone.

use crate::codec::Encoding;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `find` command.
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// File to search.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Text to find.
    #[arg(value_name = "NEEDLE")]
    pub needle: String,

    /// Matches case exactly.
    #[arg(short = 'c', long = "match-case")]
    pub match_case: bool,

    /// Searches backward from --from.
    #[arg(short = 'u', long)]
    pub up: bool,

    /// UTF-16 offset to start from.
    #[arg(long = "from", value_name = "OFFSET", default_value_t = 0)]
    pub from: usize,

    /// Prints the match as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `replace` command.
#[derive(Debug, Clone, Args)]
pub struct ReplaceArgs {
    /// File to edit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Text to find.
    #[arg(value_name = "NEEDLE")]
    pub needle: String,

    /// Replacement text, may be empty.
    #[arg(value_name = "REPLACEMENT")]
    pub replacement: String,

    /// Matches case exactly.
    #[arg(short = 'c', long = "match-case")]
    pub match_case: bool,

    /// Writes to this path instead of overwriting FILE.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Saves in this encoding instead of the detected one.
    #[arg(short = 'e', long = "encoding", value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Counts replacements without saving.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}
