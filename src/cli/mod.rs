// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for retropad-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! retropad [global options] <command>
//! version | options | inis
//! detect <FILE>... [--json]
//! cat <FILE>
//! new <FILE> [--encoding ENC] [--force]
//! convert <FILE> --to <ENC> [-o OUT]
//! find <FILE> <NEEDLE> [-c] [--up] [--from N] [--json]
//! replace <FILE> <NEEDLE> <REPLACEMENT> [-c] [-o OUT] [--encoding ENC] [--dry-run]
//! goto <FILE> <LINE>
//! ```

pub mod file;
pub mod global;
pub mod search;


use crate::cli::file::{CatArgs, ConvertArgs, DetectArgs, GotoArgs, NewArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::search::{FindArgs, ReplaceArgs};
use clap::{Parser, Subcommand};

/// retropad - plain-text editor core
///
/// Encoding-aware load, save, search and replace from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "retropad",
    author,
    version,
    about = "Plain-text editor core",
    long_about = "retropad-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Loads text files in UTF-8, UTF-16 LE/BE or the legacy ANSI code\n\
                  page, and searches, replaces and re-saves them the way the\n\
                  retropad editor does. See `retropad <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  retropad reads `retropad.toml` from the current directory if it\n\
                  exists, then every file given with --ini, in order. RETROPAD_*\n\
                  environment variables (e.g. RETROPAD_CODEC__ANSI_CODE_PAGE) and\n\
                  --set options override values from files. Use --no-default-inis\n\
                  to skip `retropad.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by retropad.
    Inis,

    /// Prints the detected encoding of files.
    Detect(DetectArgs),

    /// Prints a decoded file as UTF-8.
    Cat(CatArgs),

    /// Creates an empty document.
    New(NewArgs),

    /// Re-saves a file in another encoding.
    Convert(ConvertArgs),

    /// Finds the next occurrence of a string.
    Find(FindArgs),

    /// Replaces every occurrence of a string.
    Replace(ReplaceArgs),

    /// Prints a line and its caret position.
    Goto(GotoArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
