// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Find and replace commands.
//!
//! Both drive a [`Document`] the way the find and replace prompts do: the
//! needle and flags are recorded with `set_search`, then `find_next` or
//! `replace_all` runs against them.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use anyhow::bail;
use serde::Serialize;
use tracing::info;

use crate::cli::search::{FindArgs, ReplaceArgs};
use crate::cmd::file::{open_document, report_downgrade, save_document};
use crate::codec::Transcoder;
use crate::config::Config;
use crate::document::{Document, FindFlags, FindOutcome};
use crate::error::Result;
use crate::search::Direction;

/// Message shown when neither the scan nor its wrap finds the needle.
pub const NOT_FOUND_MESSAGE: &str = "Cannot find the text.";

/// Location of a match, with one-based line and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindReport {
    pub path: PathBuf,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

/// Resolves command-line switches against the `[search]` defaults.
#[must_use]
pub fn resolve_flags(match_case: bool, up: bool, config: &Config) -> FindFlags {
    let direction = if up {
        Direction::Up
    } else {
        config.search.direction
    };
    FindFlags::new(match_case || config.search.match_case, direction)
}

/// Finds the first match starting at the UTF-16 offset `from`.
///
/// Returns `Ok(None)` when the needle does not occur anywhere.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the needle is empty, or
/// the search buffers cannot be allocated.
pub fn find_in_file(
    path: &Path,
    needle: &str,
    flags: FindFlags,
    from: usize,
    transcoder: &Transcoder,
) -> Result<Option<FindReport>> {
    let mut document = open_document(path, transcoder)?;
    document.set_search(needle, "", flags);
    document.set_selection(from, from);
    match document.find_next(false)? {
        FindOutcome::Found(found) => {
            let (line, column) = document.cursor_position();
            Ok(Some(FindReport {
                path: path.to_path_buf(),
                start: found.start,
                end: found.end,
                line,
                column,
            }))
        }
        FindOutcome::NotFound => Ok(None),
        FindOutcome::NoSearchTerm => bail!("Enter the text to find."),
    }
}

/// Replaces every occurrence of `needle` in `document` and returns the count.
///
/// # Errors
///
/// Returns an error if the needle is empty or the new text cannot be
/// allocated.
pub fn replace_in_document(
    document: &mut Document,
    needle: &str,
    replacement: &str,
    flags: FindFlags,
) -> Result<usize> {
    document.set_search(needle, replacement, flags);
    if !document.has_search_term() {
        bail!("Enter the text to find.");
    }
    Ok(document.replace_all()?)
}

/// "Replaced N occurrence(s)." with the plural matching `count`.
#[must_use]
pub fn replaced_message(count: usize) -> String {
    let noun = if count == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    format!("Replaced {count} {noun}.")
}

/// Run the find command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, or with
/// [`NOT_FOUND_MESSAGE`] if there is no match.
pub fn run_find_command(args: &FindArgs, config: &Config) -> Result<()> {
    let flags = resolve_flags(args.match_case, args.up, config);
    let Some(report) = find_in_file(
        &args.file,
        &args.needle,
        flags,
        args.from,
        &config.codec.transcoder()?,
    )?
    else {
        bail!(NOT_FOUND_MESSAGE);
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "{}:{}:{}: {}..{}",
            report.path.display(),
            report.line,
            report.column,
            report.start,
            report.end
        );
    }
    Ok(())
}

/// Run the replace command.
///
/// Nothing is written for a dry run or when there was nothing to replace.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, encoded or written.
pub fn run_replace_command(args: &ReplaceArgs, config: &Config) -> Result<()> {
    let transcoder = config.codec.transcoder()?;
    let mut document = open_document(&args.file, &transcoder)?;
    let flags = resolve_flags(args.match_case, false, config);
    let count = replace_in_document(&mut document, &args.needle, &args.replacement, flags)?;
    println!("{}", replaced_message(count));

    if args.dry_run || count == 0 {
        info!(count, dry_run = args.dry_run, "nothing saved");
        return Ok(());
    }

    let requested = args.encoding.unwrap_or_else(|| document.encoding());
    let saved = save_document(
        &mut document,
        &transcoder,
        args.output.as_deref(),
        Some(requested),
    )?;
    report_downgrade(requested, saved);
    Ok(())
}
