// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The open document and the editor state around it.
//!
//! ```text
//!             open / reload_from                save
//! file ---> read_bytes -> detect -> decode   encode -> write_atomically ---> file
//!                                |           ^
//!                                v           |
//!                    +-------------------------------+
//!                    | Document                      |
//!                    |   text       WideText         |
//!                    |   path       Option<PathBuf>  |
//!                    |   encoding   Encoding         |
//!                    |   modified   bool             |
//!                    |   selection  Selection        |
//!                    |   search     SearchSettings   |
//!                    +-------------------------------+
//!                      find_next / replace_next / replace_all / go_to_line
//! ```
//!
//! Every operation either completes or leaves the document as it was. A
//! failed load keeps the previous document, a failed save keeps both the
//! file on disk and the modified flag.

mod file;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use bitflags::bitflags;
use tracing::{debug, info};

use crate::codec::{Encoding, Transcoder, detect};
use crate::error::{DocumentError, PadResult};
use crate::search::{self, Direction, SearchMatch, SearchQuery};
use crate::text::WideText;

/// Application name shown in window titles and messages.
pub const APP_TITLE: &str = "retropad";

/// Display name of a document that has never been saved.
pub const UNTITLED_NAME: &str = "Untitled";

/// Largest file accepted by [`Document::open`], in bytes.
pub const MAX_FILE_SIZE: u64 = 0xFFFF_FFFF;

bitflags! {
    /// Options recorded by the last find or replace prompt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FindFlags: u32 {
        /// Search towards the end of the document.
        const DOWN = 0x01;
        /// Compare code units exactly instead of case-folded.
        const MATCH_CASE = 0x04;
    }
}

impl Default for FindFlags {
    fn default() -> Self {
        Self::DOWN
    }
}

impl FindFlags {
    #[must_use]
    pub fn new(match_case: bool, direction: Direction) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::MATCH_CASE, match_case);
        flags.set(Self::DOWN, direction == Direction::Down);
        flags
    }

    #[must_use]
    pub const fn match_case(self) -> bool {
        self.contains(Self::MATCH_CASE)
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        if self.contains(Self::DOWN) {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Selected range in code units; an empty range is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[must_use]
    pub const fn is_caret(self) -> bool {
        self.start == self.end
    }
}

impl From<SearchMatch> for Selection {
    fn from(found: SearchMatch) -> Self {
        Self {
            start: found.start,
            end: found.end,
        }
    }
}

/// Last search term, replacement and options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSettings {
    find_text: WideText,
    replace_text: WideText,
    flags: FindFlags,
}

impl SearchSettings {
    #[must_use]
    pub const fn find_text(&self) -> &WideText {
        &self.find_text
    }

    #[must_use]
    pub const fn replace_text(&self) -> &WideText {
        &self.replace_text
    }

    #[must_use]
    pub const fn flags(&self) -> FindFlags {
        self.flags
    }
}

/// Result of [`Document::find_next`] and [`Document::replace_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// The match is now the selection.
    Found(SearchMatch),
    /// Neither the scan nor its wrap found the term.
    NotFound,
    /// No term has been recorded yet; the host should prompt for one.
    NoSearchTerm,
}

/// Explicit editor state passed to every host operation.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: WideText,
    path: Option<PathBuf>,
    encoding: Encoding,
    modified: bool,
    selection: Selection,
    search: SearchSettings,
}

impl Document {
    /// Creates an empty, unmodified "Untitled" document.
    #[must_use]
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    /// Loads a document from disk.
    ///
    /// An empty file opens as empty UTF-8 text; anything else goes through
    /// [`detect`] and [`Transcoder::decode`].
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Read` or `DocumentError::TooLarge` when the
    /// file cannot be read, and a codec error when it cannot be decoded.
    pub fn open(path: impl AsRef<Path>, transcoder: &Transcoder) -> PadResult<Self> {
        let path = path.as_ref();
        let bytes = file::read_bytes(path)?;
        let (text, encoding) = if bytes.is_empty() {
            (WideText::new(), Encoding::Utf8)
        } else {
            let encoding = detect(&bytes);
            (transcoder.decode(&bytes, encoding)?, encoding)
        };
        info!(
            path = %path.display(),
            %encoding,
            units = text.len(),
            "opened document"
        );
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
            encoding,
            ..Self::default()
        })
    }

    /// Replaces this document with the file at `path`, keeping search settings.
    ///
    /// # Errors
    ///
    /// Same as [`Document::open`]; on error `self` is unchanged.
    pub fn reload_from(&mut self, path: impl AsRef<Path>, transcoder: &Transcoder) -> PadResult<()> {
        let mut loaded = Self::open(path, transcoder)?;
        loaded.search = std::mem::take(&mut self.search);
        *self = loaded;
        Ok(())
    }

    /// Writes the document and returns the encoding actually used.
    ///
    /// `path` and `encoding` override the remembered ones ("save as"). On
    /// success both are remembered and the modified flag is cleared. A UTF-16
    /// BE request comes back as [`Encoding::Utf8`].
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NoPath` for a never-saved document without an
    /// explicit path, a codec error if encoding fails, and
    /// `DocumentError::Write` if the file cannot be written.
    pub fn save(
        &mut self,
        transcoder: &Transcoder,
        path: Option<&Path>,
        encoding: Option<Encoding>,
    ) -> PadResult<Encoding> {
        let target = path
            .map(Path::to_path_buf)
            .or_else(|| self.path.clone())
            .ok_or(DocumentError::NoPath)?;
        let requested = encoding.unwrap_or(self.encoding);
        let encoded = transcoder.encode(&self.text, requested)?;
        file::write_atomically(&target, &encoded.bytes)?;

        info!(
            path = %target.display(),
            encoding = %encoded.encoding,
            bytes = encoded.bytes.len(),
            "saved document"
        );
        self.path = Some(target);
        self.encoding = encoded.encoding;
        self.modified = false;
        Ok(encoded.encoding)
    }

    #[must_use]
    pub const fn text(&self) -> &WideText {
        &self.text
    }

    /// Replaces the whole text as a user edit would, marking the document modified.
    pub fn set_text(&mut self, text: impl Into<WideText>) {
        self.text = text.into();
        self.modified = true;
        self.selection = Selection::caret(0);
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Encoding used by the next plain save.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub const fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    pub const fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// File name without directories, or "Untitled".
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(
                || UNTITLED_NAME.to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Window title, e.g. `*notes.txt - retropad`.
    #[must_use]
    pub fn title(&self) -> String {
        let marker = if self.modified { "*" } else { "" };
        format!("{marker}{} - {APP_TITLE}", self.display_name())
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Sets the selection, clamping both ends to the text length.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.text.len();
        let (start, end) = (start.min(len), end.min(len));
        self.selection = Selection {
            start: start.min(end),
            end: start.max(end),
        };
    }

    /// One-based line and column of the selection start.
    #[must_use]
    pub fn cursor_position(&self) -> (usize, usize) {
        let offset = self.selection.start;
        let line = self.text.line_of(offset);
        let line_start = self.text.line_start(line).unwrap_or(0);
        (line + 1, offset - line_start + 1)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.line_count()
    }

    #[must_use]
    pub const fn search_settings(&self) -> &SearchSettings {
        &self.search
    }

    #[must_use]
    pub fn has_search_term(&self) -> bool {
        !self.search.find_text.is_empty()
    }

    /// Records the prompt's input.
    ///
    /// An empty `find_text` keeps the previously recorded term.
    pub fn set_search(
        &mut self,
        find_text: impl Into<WideText>,
        replace_text: impl Into<WideText>,
        flags: FindFlags,
    ) {
        let find_text = find_text.into();
        if !find_text.is_empty() {
            self.search.find_text = find_text;
        }
        self.search.replace_text = replace_text.into();
        self.search.flags = flags;
    }

    /// Searches for the recorded term and selects the hit.
    ///
    /// Down searches start at the selection end, up searches at the
    /// selection start. `reverse` flips the recorded direction.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the search buffers cannot be allocated.
    pub fn find_next(&mut self, reverse: bool) -> PadResult<FindOutcome> {
        if !self.has_search_term() {
            return Ok(FindOutcome::NoSearchTerm);
        }
        let mut direction = self.search.flags.direction();
        if reverse {
            direction = direction.reversed();
        }
        let start = match direction {
            Direction::Down => self.selection.end,
            Direction::Up => self.selection.start,
        };
        let outcome = match self.search_from(start, direction)? {
            Some(found) => {
                self.selection = found.into();
                FindOutcome::Found(found)
            }
            None => FindOutcome::NotFound,
        };
        debug!(%direction, start, ?outcome, "find next");
        Ok(outcome)
    }

    /// Replaces the next match at or after the selection start.
    ///
    /// The caret ends up after the inserted replacement.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the search buffers cannot be allocated.
    pub fn replace_next(&mut self) -> PadResult<FindOutcome> {
        if !self.has_search_term() {
            return Ok(FindOutcome::NoSearchTerm);
        }
        let direction = self.search.flags.direction();
        let Some(found) = self.search_from(self.selection.start, direction)? else {
            return Ok(FindOutcome::NotFound);
        };
        let inserted = self
            .text
            .splice(found.range(), self.search.replace_text.as_units());
        self.selection = Selection::caret(inserted.end);
        self.modified = true;
        debug!(start = found.start, end = found.end, "replaced selection");
        Ok(FindOutcome::Found(found))
    }

    /// Replaces every occurrence of the recorded term and returns the count.
    ///
    /// The document is only marked modified when something was replaced.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the comparison copies or the new text
    /// cannot be allocated; the document is unchanged in that case.
    pub fn replace_all(&mut self) -> PadResult<usize> {
        let result = search::replace_all(
            self.text.as_units(),
            self.search.find_text.as_units(),
            self.search.replace_text.as_units(),
            self.search.flags.match_case(),
        )?;
        let count = result.count;
        if count > 0 {
            let text = result.into_text();
            self.text = text;
            self.selection = Selection::caret(0);
            self.modified = true;
        }
        Ok(count)
    }

    /// Moves the caret to the start of the one-based `line`.
    ///
    /// Lines past the end go to the last line. Returns the caret offset.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidLine` for line 0.
    pub fn go_to_line(&mut self, line: usize) -> PadResult<usize> {
        if line == 0 {
            return Err(DocumentError::InvalidLine(line).into());
        }
        let line = line.min(self.text.line_count());
        let offset = self.text.line_start(line - 1).unwrap_or(0);
        self.selection = Selection::caret(offset);
        debug!(line, offset, "go to line");
        Ok(offset)
    }

    fn search_from(&self, start: usize, direction: Direction) -> PadResult<Option<SearchMatch>> {
        let query = SearchQuery::builder()
            .needle(self.search.find_text.clone())
            .with_match_case(self.search.flags.match_case())
            .with_direction(direction)
            .with_start(start)
            .build();
        Ok(search::find(self.text.as_units(), &query)?)
    }
}
