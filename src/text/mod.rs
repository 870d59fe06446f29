// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Canonical in-memory text.
//!
//! ```text
//! file bytes --(codec::decode)--> WideText --(codec::encode)--> file bytes
//!                                    |
//!                     search::find / search::replace_all
//!                     document (selection, line navigation)
//! ```
//!
//! A `WideText` is a flat buffer of UTF-16 code units. Its length is tracked
//! by the buffer itself, so embedded NULs are ordinary content.

use std::fmt;
use std::ops::Range;

use crate::error::AllocationError;

const LINE_FEED: u16 = 0x000A;
const CARRIAGE_RETURN: u16 = 0x000D;

/// Owned document text as UTF-16 code units.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct WideText {
    units: Vec<u16>,
}

impl WideText {
    /// Creates an empty text.
    #[must_use]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Wraps existing code units without copying.
    #[must_use]
    pub const fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    #[must_use]
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Length in code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns a copy with a trailing NUL terminator, for hosts that want one.
    #[must_use]
    pub fn to_nul_terminated(&self) -> Vec<u16> {
        let mut units = Vec::with_capacity(self.units.len() + 1);
        units.extend_from_slice(&self.units);
        units.push(0);
        units
    }

    /// Converts to a Rust string, replacing unpaired surrogates with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Replaces `range` with `replacement` and returns the range it now occupies.
    ///
    /// The range is clamped to the text length first.
    pub fn splice(&mut self, range: Range<usize>, replacement: &[u16]) -> Range<usize> {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        self.units.splice(start..end, replacement.iter().copied());
        start..start + replacement.len()
    }

    /// Number of lines; an empty text still has one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        1 + self.units.iter().filter(|&&unit| unit == LINE_FEED).count()
    }

    /// Offset of the first code unit of the zero-based `line`.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return Some(0);
        }
        self.units
            .iter()
            .enumerate()
            .filter(|&(_, &unit)| unit == LINE_FEED)
            .nth(line - 1)
            .map(|(index, _)| index + 1)
    }

    /// Zero-based line containing `offset` (clamped to the text length).
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        let end = offset.min(self.units.len());
        self.units[..end]
            .iter()
            .filter(|&&unit| unit == LINE_FEED)
            .count()
    }

    /// Content of the zero-based `line` without its `\n` or `\r\n` terminator.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&[u16]> {
        let start = self.line_start(line)?;
        let rest = &self.units[start..];
        let mut content = rest
            .iter()
            .position(|&unit| unit == LINE_FEED)
            .map_or(rest, |end| &rest[..end]);
        if let [head @ .., CARRIAGE_RETURN] = content {
            content = head;
        }
        Some(content)
    }
}

impl From<&str> for WideText {
    fn from(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }
}

impl From<String> for WideText {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<Vec<u16>> for WideText {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl From<&[u16]> for WideText {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units.to_vec())
    }
}

impl AsRef<[u16]> for WideText {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl fmt::Display for WideText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for WideText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WideText")
            .field(&self.to_string_lossy())
            .finish()
    }
}

/// Allocates an empty vector with exactly `capacity` slots reserved.
///
/// # Errors
///
/// Returns an [`AllocationError`] if the allocator refuses the reservation.
pub(crate) fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>, AllocationError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|source| AllocationError {
            requested: capacity,
            source,
        })?;
    Ok(buffer)
}

/// Lowercases every code unit independently.
///
/// The result always has the same length as the input: a unit whose
/// lowercase form is not a single BMP character is kept as is, and
/// surrogates are never touched. Offsets into the copy are therefore valid
/// offsets into the original.
///
/// # Errors
///
/// Returns an [`AllocationError`] if the copy cannot be allocated.
pub fn to_lowercase_units(units: &[u16]) -> Result<Vec<u16>, AllocationError> {
    let mut lowered = try_with_capacity(units.len())?;
    lowered.extend(units.iter().map(|&unit| lowercase_unit(unit)));
    Ok(lowered)
}

fn lowercase_unit(unit: u16) -> u16 {
    if let Ok(byte) = u8::try_from(unit)
        && byte.is_ascii()
    {
        return u16::from(byte.to_ascii_lowercase());
    }
    let Some(ch) = char::from_u32(u32::from(unit)) else {
        return unit;
    };
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => u16::try_from(u32::from(single)).unwrap_or(unit),
        _ => unit,
    }
}

#[cfg(test)]
mod tests;
