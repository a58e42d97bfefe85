//! UTF-8 encoder state machine.
//!
//! Encoding carries no state between code points; the machine shape is kept
//! so that the driver loop mirrors decoding.
use core::ops::Deref;

use crate::stream::TokenStream;

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// One to four bytes produced for a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedBytes {
    bytes: [u8; 4],
    len: u8,
}

impl EncodedBytes {
    fn one(b0: u8) -> Self {
        Self {
            bytes: [b0, 0, 0, 0],
            len: 1,
        }
    }

    fn many(bytes: [u8; 4], len: u8) -> Self {
        Self { bytes, len }
    }
}

impl Deref for EncodedBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

/// What happened after feeding one more input into the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStep {
    /// The encoded form of one code point.
    Emit(EncodedBytes),
    /// The value is above [`MAX_CODE_POINT`].
    Error(u32),
    /// End of input.
    Finished,
}

/// Code-point-to-byte state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Encoder;

impl Utf8Encoder {
    /// Creates an encoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Feeds one code point, or `None` for end of input.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::unused_self)]
    pub fn handle(&self, input: Option<u32>) -> EncodeStep {
        let Some(cp) = input else {
            return EncodeStep::Finished;
        };

        let continuation = |shift: u32| 0x80 | ((cp >> shift) & 0x3F) as u8;
        let encoded = match cp {
            0x00..=0x7F => EncodedBytes::one(cp as u8),
            0x80..=0x7FF => EncodedBytes::many([0xC0 | (cp >> 6) as u8, continuation(0), 0, 0], 2),
            0x800..=0xFFFF => EncodedBytes::many(
                [0xE0 | (cp >> 12) as u8, continuation(6), continuation(0), 0],
                3,
            ),
            0x1_0000..=MAX_CODE_POINT => EncodedBytes::many(
                [
                    0xF0 | (cp >> 18) as u8,
                    continuation(12),
                    continuation(6),
                    continuation(0),
                ],
                4,
            ),
            _ => return EncodeStep::Error(cp),
        };
        EncodeStep::Emit(encoded)
    }

    /// Reads one code point from `stream` and feeds it.
    pub fn step(&self, stream: &mut TokenStream<'_, u32>) -> EncodeStep {
        self.handle(stream.read())
    }
}
