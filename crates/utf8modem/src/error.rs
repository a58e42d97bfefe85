use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by the transcoder.
///
/// Malformed and truncated input are only surfaced in
/// [`ErrorMode::Fatal`](crate::ErrorMode::Fatal); in replacement mode they are
/// recovered locally. Out-of-range code points and unsupported configuration
/// are always surfaced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// A byte that cannot start or continue a UTF-8 sequence at this point.
    #[error("malformed UTF-8 sequence at byte {offset}: {kind}")]
    MalformedSequence {
        /// Offset of the first byte of the failed unit.
        offset: usize,
        /// Why the unit was rejected.
        kind: MalformedKind,
    },
    /// The input ended in the middle of a multi-byte sequence.
    #[error("truncated UTF-8 sequence at byte {offset}")]
    TruncatedSequence {
        /// Offset of the lead byte of the incomplete sequence.
        offset: usize,
    },
    /// The encoder was handed a value above U+10FFFF.
    #[error("code point {code_point:#X} at index {index} is outside the Unicode range")]
    CodePointOutOfRange {
        /// The rejected value.
        code_point: u32,
        /// Position of the value in the encoder input.
        index: usize,
    },
    /// The caller asked for something this transcoder does not do.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(#[from] UnsupportedConfiguration),
}

impl TranscodeError {
    /// Flattens the error into a [`ErrorKind`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranscodeError::MalformedSequence { .. } => ErrorKind::MalformedSequence,
            TranscodeError::TruncatedSequence { .. } => ErrorKind::TruncatedSequence,
            TranscodeError::CodePointOutOfRange { .. } => ErrorKind::CodePointOutOfRange,
            TranscodeError::UnsupportedConfiguration(_) => ErrorKind::UnsupportedConfiguration,
        }
    }

    /// Whether this error came from malformed input. Truncation counts as
    /// malformed.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            TranscodeError::MalformedSequence { .. } | TranscodeError::TruncatedSequence { .. }
        )
    }

    /// Byte offset into the decoder input, for decode errors.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            TranscodeError::MalformedSequence { offset, .. }
            | TranscodeError::TruncatedSequence { offset } => Some(*offset),
            _ => None,
        }
    }
}

/// Flat, `Copy` classification of [`TranscodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ErrorKind {
    /// See [`TranscodeError::MalformedSequence`].
    MalformedSequence,
    /// See [`TranscodeError::TruncatedSequence`].
    TruncatedSequence,
    /// See [`TranscodeError::CodePointOutOfRange`].
    CodePointOutOfRange,
    /// See [`TranscodeError::UnsupportedConfiguration`].
    UnsupportedConfiguration,
}

/// The reason a byte was rejected by the decoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum MalformedKind {
    /// A continuation byte (0x80-0xBF) where a lead byte was expected.
    #[error("unexpected continuation byte")]
    UnexpectedContinuation,
    /// 0xC0 or 0xC1, which can only start an overlong two-byte sequence.
    #[error("overlong lead byte")]
    OverlongLead,
    /// 0xF5-0xFF, which can only start a sequence above U+10FFFF.
    #[error("lead byte beyond U+10FFFF")]
    OutOfRangeLead,
    /// A byte outside 0x80-0xBF inside a multi-byte sequence.
    #[error("invalid continuation byte")]
    InvalidContinuation,
    /// A continuation byte that would make the sequence overlong.
    #[error("overlong encoding")]
    Overlong,
    /// A continuation byte that would encode a surrogate code point.
    #[error("surrogate code point")]
    Surrogate,
    /// A continuation byte that would encode a value above U+10FFFF.
    #[error("code point beyond U+10FFFF")]
    OutOfRange,
    /// The input ended inside a multi-byte sequence.
    #[error("truncated sequence")]
    Truncated,
}

/// Configuration the transcoder refuses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedConfiguration {
    /// An encoding label other than one of the UTF-8 labels.
    #[error("encoding label '{0}' is not supported")]
    Label(String),
    /// Decoding while keeping a leading byte order mark.
    #[error("ignoring the byte order mark is not supported")]
    IgnoreBom,
    /// Incremental decoding across calls.
    #[error("streaming decode is not supported")]
    Stream,
}
