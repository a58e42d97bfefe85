//! Whole-buffer decode and encode.
//!
//! These functions drive a state machine over one complete buffer, apply the
//! byte order mark and error mode policies, and collect the output. Nothing is
//! kept between calls.
use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

use crate::{
    decoder::{Step, Utf8Decoder},
    encoder::{EncodeStep, Utf8Encoder},
    error::{MalformedKind, TranscodeError},
    options::ErrorMode,
    stream::TokenStream,
};

/// U+FEFF, stripped when it is the first decoded code point.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Decodes a complete UTF-8 buffer.
///
/// A single leading U+FEFF is removed. In [`ErrorMode::Replacement`] each
/// malformed unit becomes one U+FFFD; in [`ErrorMode::Fatal`] the first one
/// aborts the call.
///
/// # Errors
///
/// In fatal mode, returns [`TranscodeError::MalformedSequence`] or
/// [`TranscodeError::TruncatedSequence`] for the first malformed unit.
///
/// # Examples
///
/// ```rust
/// use utf8modem::{ErrorMode, decode};
///
/// assert_eq!(decode(&[0xE2, 0x82, 0xAC], ErrorMode::Fatal).unwrap(), "€");
/// assert_eq!(decode(&[0x80, 0x41], ErrorMode::Replacement).unwrap(), "\u{FFFD}A");
/// assert!(decode(&[0xC0, 0x80], ErrorMode::Fatal).is_err());
/// ```
pub fn decode(bytes: &[u8], mode: ErrorMode) -> Result<String, TranscodeError> {
    let mut stream = TokenStream::new(bytes);
    let mut decoder = Utf8Decoder::new();
    let mut output = String::with_capacity(bytes.len());
    let mut at_start = true;
    let mut unit_start = 0;

    loop {
        if decoder.state().is_idle() {
            unit_start = stream.position();
        }

        match decoder.step(&mut stream) {
            Step::Continue => {}
            Step::Finished => return Ok(output),
            Step::Emit(code_point) => {
                let ch = scalar(code_point);
                if core::mem::take(&mut at_start) && ch == BYTE_ORDER_MARK {
                    tracing::debug!("stripped leading byte order mark");
                    continue;
                }
                output.push(ch);
            }
            Step::Error(kind) => {
                let unit = &bytes[unit_start..stream.position()];
                match mode {
                    ErrorMode::Fatal => {
                        tracing::debug!(
                            offset = unit_start,
                            %kind,
                            unit = ?unit.as_bstr(),
                            "aborting decode on malformed input"
                        );
                        return Err(malformed(unit_start, kind));
                    }
                    ErrorMode::Replacement => {
                        tracing::trace!(
                            offset = unit_start,
                            %kind,
                            unit = ?unit.as_bstr(),
                            "replaced malformed unit"
                        );
                        at_start = false;
                        output.push(char::REPLACEMENT_CHARACTER);
                    }
                }
            }
        }
    }
}

/// The decoder only emits Unicode scalar values.
fn scalar(code_point: u32) -> char {
    debug_assert!(char::from_u32(code_point).is_some(), "{code_point:#X}");
    char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn malformed(offset: usize, kind: MalformedKind) -> TranscodeError {
    match kind {
        MalformedKind::Truncated => TranscodeError::TruncatedSequence { offset },
        kind => TranscodeError::MalformedSequence { offset, kind },
    }
}

/// Encodes host text. Every `char` is a scalar value, so this cannot fail.
///
/// ```rust
/// assert_eq!(utf8modem::encode("€"), [0xE2, 0x82, 0xAC]);
/// ```
#[must_use]
pub fn encode(text: &str) -> Vec<u8> {
    let encoder = Utf8Encoder::new();
    let mut output = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match encoder.handle(Some(u32::from(ch))) {
            EncodeStep::Emit(bytes) => output.extend_from_slice(&bytes),
            EncodeStep::Error(_) | EncodeStep::Finished => {
                unreachable!("char is always within the Unicode range")
            }
        }
    }
    output
}

/// Encodes a sequence of code points.
///
/// Surrogate code points are encoded by range like any other value below
/// U+10000.
///
/// # Errors
///
/// Returns [`TranscodeError::CodePointOutOfRange`] for the first value above
/// U+10FFFF. No partial output is returned.
///
/// # Examples
///
/// ```rust
/// use utf8modem::encode_code_points;
///
/// assert_eq!(encode_code_points(&[0x10FFFF]).unwrap(), [0xF4, 0x8F, 0xBF, 0xBF]);
/// assert!(encode_code_points(&[0x110000]).is_err());
/// ```
pub fn encode_code_points(code_points: &[u32]) -> Result<Vec<u8>, TranscodeError> {
    let mut stream = TokenStream::new(code_points);
    let encoder = Utf8Encoder::new();
    let mut output = Vec::with_capacity(code_points.len());

    loop {
        let index = stream.position();
        match encoder.step(&mut stream) {
            EncodeStep::Emit(bytes) => output.extend_from_slice(&bytes),
            EncodeStep::Finished => return Ok(output),
            EncodeStep::Error(code_point) => {
                tracing::trace!(index, code_point, "code point out of range");
                return Err(TranscodeError::CodePointOutOfRange { code_point, index });
            }
        }
    }
}

/// Progress reported by [`encode_into`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeIntoResult {
    /// Source text consumed, in UTF-16 code units.
    pub read: usize,
    /// Bytes written to the destination.
    pub written: usize,
}

/// Encodes as much of `text` as fits into `destination`.
///
/// Only whole code points are written. `read` counts UTF-16 code units, so a
/// character outside the Basic Multilingual Plane advances it by two.
///
/// ```rust
/// use utf8modem::{EncodeIntoResult, encode_into};
///
/// let mut buf = [0u8; 4];
/// let result = encode_into("a€b", &mut buf);
/// assert_eq!(result, EncodeIntoResult { read: 2, written: 4 });
/// assert_eq!(buf, [b'a', 0xE2, 0x82, 0xAC]);
/// ```
pub fn encode_into(text: &str, destination: &mut [u8]) -> EncodeIntoResult {
    let encoder = Utf8Encoder::new();
    let mut result = EncodeIntoResult::default();
    for ch in text.chars() {
        let EncodeStep::Emit(bytes) = encoder.handle(Some(u32::from(ch))) else {
            unreachable!("char is always within the Unicode range")
        };
        let Some(slot) = destination.get_mut(result.written..result.written + bytes.len()) else {
            break;
        };
        slot.copy_from_slice(&bytes);
        result.written += bytes.len();
        result.read += ch.len_utf16();
    }
    result
}
