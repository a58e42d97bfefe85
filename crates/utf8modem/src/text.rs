//! Host-facing decoder and encoder objects.
//!
//! [`TextDecoder`] validates its configuration once, at construction, and then
//! decodes complete buffers. [`TextEncoder`] has no configuration at all.
use alloc::{string::String, vec::Vec};

use crate::{
    error::{TranscodeError, UnsupportedConfiguration},
    options::{DecodeOptions, DecoderOptions, ErrorMode},
    transcode::{self, EncodeIntoResult},
};

/// Canonical name of the only supported encoding.
pub const ENCODING: &str = "utf-8";

/// Labels that name UTF-8, compared ASCII case-insensitively.
const UTF8_LABELS: [&str; 3] = ["unicode-1-1-utf-8", "utf-8", "utf8"];

/// A configured UTF-8 decoder.
///
/// ```rust
/// use utf8modem::{DecodeOptions, DecoderOptions, TextDecoder};
///
/// let decoder = TextDecoder::new(" UTF8 ", DecoderOptions::default()).unwrap();
/// assert_eq!(decoder.encoding(), "utf-8");
/// let text = decoder.decode(b"\xEF\xBB\xBFhi\xFF", DecodeOptions::default()).unwrap();
/// assert_eq!(text, "hi\u{FFFD}");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextDecoder {
    mode: ErrorMode,
}

impl TextDecoder {
    /// Creates a decoder for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::UnsupportedConfiguration`] when `label` does
    /// not name UTF-8 or when `options.ignore_bom` is set.
    pub fn new(label: &str, options: DecoderOptions) -> Result<Self, TranscodeError> {
        let trimmed = label.trim_matches(|c: char| c.is_ascii_whitespace());
        if !UTF8_LABELS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(trimmed))
        {
            tracing::debug!(label, "rejected encoding label");
            return Err(UnsupportedConfiguration::Label(String::from(label)).into());
        }
        if options.ignore_bom {
            tracing::debug!("rejected ignore_bom");
            return Err(UnsupportedConfiguration::IgnoreBom.into());
        }
        Ok(Self {
            mode: options.error_mode(),
        })
    }

    /// Always [`ENCODING`].
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        ENCODING
    }

    /// Whether malformed input aborts decoding.
    #[must_use]
    pub fn fatal(&self) -> bool {
        self.mode == ErrorMode::Fatal
    }

    /// Always `false`: a leading byte order mark is stripped.
    #[must_use]
    pub fn ignore_bom(&self) -> bool {
        false
    }

    /// Decodes a complete buffer.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedConfiguration::Stream`] when `options.stream` is
    /// set, and a malformed-input error in fatal mode.
    pub fn decode(&self, bytes: &[u8], options: DecodeOptions) -> Result<String, TranscodeError> {
        if options.stream {
            tracing::debug!("rejected streaming decode");
            return Err(UnsupportedConfiguration::Stream.into());
        }
        transcode::decode(bytes, self.mode)
    }
}

/// A UTF-8 encoder.
///
/// ```rust
/// use utf8modem::TextEncoder;
///
/// let encoder = TextEncoder::new();
/// assert_eq!(encoder.encode("é"), [0xC3, 0xA9]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextEncoder;

impl TextEncoder {
    /// Creates an encoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Always [`ENCODING`].
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        ENCODING
    }

    /// See [`encode`](crate::encode).
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        transcode::encode(text)
    }

    /// See [`encode_code_points`](crate::encode_code_points).
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::CodePointOutOfRange`] for values above
    /// U+10FFFF.
    pub fn encode_code_points(&self, code_points: &[u32]) -> Result<Vec<u8>, TranscodeError> {
        transcode::encode_code_points(code_points)
    }

    /// See [`encode_into`](crate::encode_into).
    pub fn encode_into(&self, text: &str, destination: &mut [u8]) -> EncodeIntoResult {
        transcode::encode_into(text, destination)
    }
}
