// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Literal substring search and replace over UTF-16 code units.
//!
//! ```text
//! find (Down)                         find (Up)
//!   [start .. len)  first match         [0 .. start)   last match
//!   miss && start > 0                   miss && start < len
//!   [0 .. len)      first match         [start .. len) last match
//!
//! replace_all
//!   pass 1: count non-overlapping matches in the comparison copy
//!   pass 2: allocate exact length, copy original spans + replacement
//! ```
//!
//! Case-insensitive matching compares lowercased copies of the haystack and
//! needle. The copies have the same length as their originals, so match
//! offsets found in a copy address the original text directly.


use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AllocationError, ConfigError};
use crate::text::{WideText, to_lowercase_units, try_with_capacity};

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the end of the text, wrapping to the start.
    #[default]
    Down,
    /// Towards the start of the text, wrapping to the end.
    Up,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "down" | "forward" => Ok(Self::Down),
            "up" | "backward" => Ok(Self::Up),
            _ => Err(ConfigError::InvalidValue {
                section: "search".to_string(),
                key: "direction".to_string(),
                message: format!("expected 'down' or 'up', got '{s}'"),
            }),
        }
    }
}

/// One search request.
#[derive(Debug, Clone, Builder)]
pub struct SearchQuery {
    /// Text to look for; an empty needle never matches.
    #[builder(into)]
    needle: WideText,
    #[builder(setters(name = with_match_case), default = false)]
    match_case: bool,
    #[builder(setters(name = with_direction), default)]
    direction: Direction,
    /// Code unit offset the search starts from, clamped to the text length.
    #[builder(setters(name = with_start), default = 0)]
    start: usize,
}

impl SearchQuery {
    #[must_use]
    pub const fn needle(&self) -> &WideText {
        &self.needle
    }

    #[must_use]
    pub const fn match_case(&self) -> bool {
        self.match_case
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }
}

/// Half-open code unit range of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchMatch {
    pub start: usize,
    pub end: usize,
}

impl SearchMatch {
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Outcome of [`replace_all`].
///
/// When nothing matched, `text` borrows the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceResult<'a> {
    pub count: usize,
    pub text: Cow<'a, [u16]>,
}

impl ReplaceResult<'_> {
    #[must_use]
    pub fn into_text(self) -> WideText {
        WideText::from_units(self.text.into_owned())
    }
}

/// Finds the next occurrence of the query's needle in `text`.
///
/// Returns `Ok(None)` when there is no match, including for an empty needle.
///
/// # Errors
///
/// Returns an [`AllocationError`] if a case-folded comparison copy cannot be
/// allocated.
pub fn find(text: &[u16], query: &SearchQuery) -> Result<Option<SearchMatch>, AllocationError> {
    let needle = query.needle.as_units();
    if needle.is_empty() {
        return Ok(None);
    }
    let start = query.start.min(text.len());
    let haystack = comparison_copy(text, query.match_case)?;
    let needle = comparison_copy(needle, query.match_case)?;

    let position = match query.direction {
        Direction::Down => {
            first_at_or_after(&haystack, &needle, start).or_else(|| {
                (start > 0)
                    .then(|| first_at_or_after(&haystack, &needle, 0))
                    .flatten()
            })
        }
        Direction::Up => last_before(&haystack, &needle, start).or_else(|| {
            (start < haystack.len())
                .then(|| last_at_or_after(&haystack, &needle, start))
                .flatten()
        }),
    };

    let found = position.map(|start| SearchMatch {
        start,
        end: start + needle.len(),
    });
    debug!(
        direction = %query.direction,
        match_case = query.match_case,
        start,
        ?found,
        "find"
    );
    Ok(found)
}

/// Replaces every non-overlapping occurrence of `needle`, scanning left to right.
///
/// Unmatched spans are copied from `text` as is, so their casing survives a
/// case-insensitive replace. An empty needle replaces nothing.
///
/// # Errors
///
/// Returns an [`AllocationError`] if a comparison copy or the output buffer
/// cannot be allocated.
pub fn replace_all<'a>(
    text: &'a [u16],
    needle: &[u16],
    replacement: &[u16],
    match_case: bool,
) -> Result<ReplaceResult<'a>, AllocationError> {
    let unchanged = ReplaceResult {
        count: 0,
        text: Cow::Borrowed(text),
    };
    if needle.is_empty() {
        return Ok(unchanged);
    }
    let haystack = comparison_copy(text, match_case)?;
    let needle = comparison_copy(needle, match_case)?;

    let count = NonOverlapping::new(&haystack, &needle).count();
    if count == 0 {
        debug!(match_case, "replace all: no occurrences");
        return Ok(unchanged);
    }

    // Overflow saturates so the reservation below fails instead of wrapping.
    let output_len = (text.len() - count * needle.len())
        .saturating_add(count.saturating_mul(replacement.len()));
    let mut output = try_with_capacity(output_len)?;

    let mut copied = 0;
    for position in NonOverlapping::new(&haystack, &needle) {
        output.extend_from_slice(&text[copied..position]);
        output.extend_from_slice(replacement);
        copied = position + needle.len();
    }
    output.extend_from_slice(&text[copied..]);
    debug_assert_eq!(output.len(), output_len);

    debug!(match_case, count, len = output.len(), "replace all");
    Ok(ReplaceResult {
        count,
        text: Cow::Owned(output),
    })
}

fn comparison_copy(units: &[u16], match_case: bool) -> Result<Cow<'_, [u16]>, AllocationError> {
    if match_case {
        Ok(Cow::Borrowed(units))
    } else {
        to_lowercase_units(units).map(Cow::Owned)
    }
}

fn first_at_or_after(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    haystack
        .windows(needle.len())
        .skip(from)
        .position(|window| window == needle)
        .map(|offset| offset + from)
}

fn last_at_or_after(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    haystack
        .windows(needle.len())
        .skip(from)
        .rposition(|window| window == needle)
        .map(|offset| offset + from)
}

fn last_before(haystack: &[u16], needle: &[u16], before: usize) -> Option<usize> {
    haystack
        .windows(needle.len())
        .take(before)
        .rposition(|window| window == needle)
}

/// Left-to-right match positions, resuming after each match.
struct NonOverlapping<'a> {
    haystack: &'a [u16],
    needle: &'a [u16],
    cursor: usize,
}

impl<'a> NonOverlapping<'a> {
    const fn new(haystack: &'a [u16], needle: &'a [u16]) -> Self {
        Self {
            haystack,
            needle,
            cursor: 0,
        }
    }
}

impl Iterator for NonOverlapping<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let position = first_at_or_after(self.haystack, self.needle, self.cursor)?;
        self.cursor = position + self.needle.len();
        Some(position)
    }
}
