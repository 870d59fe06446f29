// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Byte <-> code unit conversion.
//!
//! ```text
//! decode                              encode
//!   Utf16Le  skip FF FE, LE pairs       Utf8     EF BB BF + encoder
//!   Utf16Be  skip FE FF, swap pairs     Utf16Le  FF FE + LE pairs
//!   Utf8     skip EF BB BF, decoder     Utf16Be  --> Utf8 (warn)
//!   Ansi     code page decoder          Ansi     encoder, '?' substitution
//! ```
//!
//! Odd trailing bytes of UTF-16 input are dropped. Malformed UTF-8 and
//! unmappable legacy bytes decode to U+FFFD.

use encoding_rs::{CoderResult, EncoderResult, UTF_8};
use tracing::{debug, trace, warn};

use super::{CodePage, Encoding, UTF8_BOM, UTF16LE_BOM};
use crate::error::{AllocationError, CodecError, CodecResult};
use crate::text::{WideText, try_with_capacity};

/// Byte written for characters the legacy code page cannot represent.
const SUBSTITUTE: u8 = b'?';

/// Encoded file contents and the encoding actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Bytes ready to be written, including any BOM.
    pub bytes: Vec<u8>,
    /// Final encoding; differs from the request when UTF-16 BE was downgraded.
    pub encoding: Encoding,
}

/// Stateless converter between file bytes and [`WideText`].
///
/// The only setting is the legacy code page used for [`Encoding::Ansi`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transcoder {
    code_page: CodePage,
}

impl Transcoder {
    #[must_use]
    pub const fn new(code_page: CodePage) -> Self {
        Self { code_page }
    }

    #[must_use]
    pub const fn code_page(&self) -> CodePage {
        self.code_page
    }

    /// Decodes file bytes in the given encoding.
    ///
    /// A leading BOM matching `encoding` is skipped. Empty input after the
    /// BOM yields an empty text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Decode` for UTF-16 input shorter than two bytes
    /// or a conversion that produces nothing, and `CodecError::Alloc` if the
    /// output buffer cannot be reserved.
    pub fn decode(&self, bytes: &[u8], encoding: Encoding) -> CodecResult<WideText> {
        let text = match encoding {
            Encoding::Utf16Le => decode_utf16(bytes, encoding, u16::from_le_bytes)?,
            Encoding::Utf16Be => decode_utf16(bytes, encoding, u16::from_be_bytes)?,
            Encoding::Utf8 => {
                let payload = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                decode_multibyte(payload, UTF_8, encoding)?
            }
            Encoding::Ansi => decode_multibyte(bytes, self.code_page.encoding(), encoding)?,
        };
        debug!(
            %encoding,
            bytes = bytes.len(),
            units = text.len(),
            "decoded text"
        );
        Ok(text)
    }

    /// Encodes text for writing.
    ///
    /// UTF-16 BE is never written: such requests are saved as UTF-8 with a
    /// BOM and [`Encoded::encoding`] reports [`Encoding::Utf8`].
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Encode` if a non-empty text converts to nothing,
    /// and `CodecError::Alloc` if the output buffer cannot be reserved.
    pub fn encode(&self, text: &WideText, requested: Encoding) -> CodecResult<Encoded> {
        let units = text.as_units();
        let (bytes, encoding) = match requested {
            Encoding::Utf8 => (encode_multibyte(units, UTF_8, UTF8_BOM, requested)?, requested),
            Encoding::Utf16Be => {
                warn!("UTF-16 BE is not written, saving as UTF-8 with BOM instead");
                (
                    encode_multibyte(units, UTF_8, UTF8_BOM, Encoding::Utf8)?,
                    Encoding::Utf8,
                )
            }
            Encoding::Utf16Le => (encode_utf16le(units)?, requested),
            Encoding::Ansi => (
                encode_multibyte(units, self.code_page.encoding(), &[], requested)?,
                requested,
            ),
        };
        debug!(
            %requested,
            %encoding,
            units = units.len(),
            bytes = bytes.len(),
            "encoded text"
        );
        Ok(Encoded { bytes, encoding })
    }
}

/// Decodes with the system code page for [`Encoding::Ansi`].
///
/// # Errors
///
/// See [`Transcoder::decode`].
pub fn decode(bytes: &[u8], encoding: Encoding) -> CodecResult<WideText> {
    Transcoder::default().decode(bytes, encoding)
}

/// Encodes with the system code page for [`Encoding::Ansi`].
///
/// # Errors
///
/// See [`Transcoder::encode`].
pub fn encode(text: &WideText, encoding: Encoding) -> CodecResult<Encoded> {
    Transcoder::default().encode(text, encoding)
}

fn decode_utf16(
    bytes: &[u8],
    encoding: Encoding,
    from_bytes: fn([u8; 2]) -> u16,
) -> CodecResult<WideText> {
    if bytes.len() < 2 {
        return Err(CodecError::Decode {
            encoding,
            reason: "input shorter than one code unit",
        });
    }
    let bom = encoding.bom().unwrap_or_default();
    let payload = bytes.strip_prefix(bom).unwrap_or(bytes);
    let pairs = payload.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        trace!(%encoding, "dropping trailing odd byte");
    }

    let mut units = try_with_capacity(payload.len() / 2)?;
    units.extend(pairs.map(|pair| from_bytes([pair[0], pair[1]])));
    Ok(WideText::from_units(units))
}

fn decode_multibyte(
    bytes: &[u8],
    source: &'static encoding_rs::Encoding,
    encoding: Encoding,
) -> CodecResult<WideText> {
    if bytes.is_empty() {
        return Ok(WideText::new());
    }

    let mut decoder = source.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf16_buffer_length(bytes.len())
        .ok_or(CodecError::Decode {
            encoding,
            reason: "input too large",
        })?;
    let mut units = try_with_capacity(capacity)?;
    units.resize(capacity, 0);

    let (result, _read, written, had_replacements) = decoder.decode_to_utf16(bytes, &mut units, true);
    units.truncate(written);
    if had_replacements {
        trace!(%encoding, "malformed or unmappable bytes replaced");
    }
    if matches!(result, CoderResult::OutputFull) || units.is_empty() {
        return Err(CodecError::Decode {
            encoding,
            reason: "conversion produced no output",
        });
    }
    Ok(WideText::from_units(units))
}

fn encode_utf16le(units: &[u16]) -> CodecResult<Vec<u8>> {
    let mut bytes = try_with_capacity(UTF16LE_BOM.len() + units.len() * 2)?;
    bytes.extend_from_slice(UTF16LE_BOM);
    bytes.extend(units.iter().flat_map(|unit| unit.to_le_bytes()));
    Ok(bytes)
}

fn encode_multibyte(
    units: &[u16],
    target: &'static encoding_rs::Encoding,
    bom: &[u8],
    encoding: Encoding,
) -> CodecResult<Vec<u8>> {
    let too_large = CodecError::Encode {
        encoding,
        reason: "input too large",
    };
    let mut encoder = target.new_encoder();
    let estimate = encoder
        .max_buffer_length_from_utf16_without_replacement(units.len())
        .ok_or(too_large)?;

    let mut bytes = try_with_capacity(bom.len() + estimate)?;
    bytes.extend_from_slice(bom);
    bytes.resize(bom.len() + estimate, 0);
    let mut filled = bom.len();
    let mut remaining = units;
    let mut substituted = 0usize;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf16_without_replacement(remaining, &mut bytes[filled..], true);
        remaining = &remaining[read..];
        filled += written;
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {
                let more = encoder
                    .max_buffer_length_from_utf16_without_replacement(remaining.len())
                    .ok_or(CodecError::Encode {
                        encoding,
                        reason: "input too large",
                    })?;
                grow(&mut bytes, more)?;
            }
            EncoderResult::Unmappable(_) => {
                if filled == bytes.len() {
                    grow(&mut bytes, 1)?;
                }
                bytes[filled] = SUBSTITUTE;
                filled += 1;
                substituted += 1;
            }
        }
    }
    bytes.truncate(filled);

    if substituted > 0 {
        debug!(%encoding, substituted, "unrepresentable characters replaced");
    }
    if !units.is_empty() && filled == bom.len() {
        return Err(CodecError::Encode {
            encoding,
            reason: "conversion produced no output",
        });
    }
    Ok(bytes)
}

/// Extends `bytes` with `additional` zeroed slots.
fn grow(bytes: &mut Vec<u8>, additional: usize) -> Result<(), AllocationError> {
    bytes
        .try_reserve_exact(additional)
        .map_err(|source| AllocationError {
            requested: additional,
            source,
        })?;
    bytes.resize(bytes.len() + additional, 0);
    Ok(())
}
