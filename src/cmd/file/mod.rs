// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File commands: detect, cat, new, convert and goto.
//!
//! ```text
//! path --> Document::open --> report / stdout
//!                 |
//!                 +--> Document::save (new, convert)
//! ```


use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Serialize;

use crate::cli::file::{CatArgs, ConvertArgs, DetectArgs, GotoArgs, NewArgs};
use crate::codec::{Encoding, Transcoder};
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;

/// Encoding report for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectReport {
    pub path: PathBuf,
    pub encoding: Encoding,
    pub bytes: u64,
    pub lines: usize,
}

/// Where `goto` put the caret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GotoReport {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub text: String,
}

/// Detects the encoding of `path` and counts its lines.
///
/// Empty files report UTF-8, the encoding they are saved back in.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn detect_file(path: &Path, transcoder: &Transcoder) -> Result<DetectReport> {
    let document = open_document(path, transcoder)?;
    let bytes = std::fs::metadata(path)
        .with_context(|| format!("Unable to open file '{}'", path.display()))?
        .len();
    Ok(DetectReport {
        path: path.to_path_buf(),
        encoding: document.encoding(),
        bytes,
        lines: document.line_count(),
    })
}

/// Moves the caret of the document at `path` to the one-based `line`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or `line` is 0.
pub fn goto_line(path: &Path, line: usize, transcoder: &Transcoder) -> Result<GotoReport> {
    let mut document = open_document(path, transcoder)?;
    let offset = document.go_to_line(line)?;
    let (line, column) = document.cursor_position();
    let text = document
        .text()
        .line(line - 1)
        .map(String::from_utf16_lossy)
        .unwrap_or_default();
    Ok(GotoReport {
        line,
        column,
        offset,
        text,
    })
}

/// Run the detect command.
///
/// # Errors
///
/// Returns an error if any file cannot be read or decoded, or if a report
/// cannot be serialized.
pub fn run_detect_command(args: &DetectArgs, config: &Config) -> Result<()> {
    let transcoder = config.codec.transcoder()?;
    for path in &args.files {
        let report = detect_file(path, &transcoder)?;
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "{}: {} ({} bytes, {} lines)",
                report.path.display(),
                report.encoding,
                report.bytes,
                report.lines
            );
        }
    }
    Ok(())
}

/// Run the cat command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn run_cat_command(args: &CatArgs, config: &Config) -> Result<()> {
    let document = open_document(&args.file, &config.codec.transcoder()?)?;
    print!("{}", document.text());
    Ok(())
}

/// Run the new command.
///
/// # Errors
///
/// Returns an error if the file exists and `--force` was not given, or if it
/// cannot be written.
pub fn run_new_command(args: &NewArgs, config: &Config) -> Result<()> {
    if args.file.exists() && !args.force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            args.file.display()
        );
    }
    let requested = args.encoding.unwrap_or(config.codec.new_file_encoding);
    let mut document = Document::new(requested);
    let saved = save_document(
        &mut document,
        &config.codec.transcoder()?,
        Some(args.file.as_path()),
        None,
    )?;
    report_downgrade(requested, saved);
    println!("Created {} ({saved})", args.file.display());
    Ok(())
}

/// Run the convert command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, encoded or written.
pub fn run_convert_command(args: &ConvertArgs, config: &Config) -> Result<()> {
    let transcoder = config.codec.transcoder()?;
    let mut document = open_document(&args.file, &transcoder)?;
    let from = document.encoding();
    let saved = save_document(
        &mut document,
        &transcoder,
        args.output.as_deref(),
        Some(args.to),
    )?;
    report_downgrade(args.to, saved);
    let target = document.path().unwrap_or(args.file.as_path());
    println!("Converted {}: {from} -> {saved}", target.display());
    Ok(())
}

/// Run the goto command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the line is 0.
pub fn run_goto_command(args: &GotoArgs, config: &Config) -> Result<()> {
    let report = goto_line(&args.file, args.line, &config.codec.transcoder()?)?;
    println!(
        "Ln {}, Col {} (offset {}): {}",
        report.line, report.column, report.offset, report.text
    );
    Ok(())
}

pub(crate) fn open_document(path: &Path, transcoder: &Transcoder) -> Result<Document> {
    Document::open(path, transcoder)
        .with_context(|| format!("Unable to open file '{}'", path.display()))
}

pub(crate) fn save_document(
    document: &mut Document,
    transcoder: &Transcoder,
    path: Option<&Path>,
    encoding: Option<Encoding>,
) -> Result<Encoding> {
    let target = path
        .or_else(|| document.path())
        .map(Path::to_path_buf)
        .unwrap_or_default();
    document
        .save(transcoder, path, encoding)
        .with_context(|| format!("Failed writing file '{}'", target.display()))
}

pub(crate) fn report_downgrade(requested: Encoding, saved: Encoding) {
    if requested != saved {
        eprintln!("{requested} is not supported for saving, wrote {saved} instead");
    }
}
