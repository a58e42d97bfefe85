/// How the decoder reacts to malformed input.
///
/// # Default
///
/// [`ErrorMode::Replacement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ErrorMode {
    /// Substitute U+FFFD for every malformed unit and keep going.
    #[default]
    Replacement,
    /// Abort on the first malformed unit and return no output.
    Fatal,
}

impl From<bool> for ErrorMode {
    /// Maps a `fatal` flag onto an error mode.
    fn from(fatal: bool) -> Self {
        if fatal {
            ErrorMode::Fatal
        } else {
            ErrorMode::Replacement
        }
    }
}

/// Construction options for [`TextDecoder`](crate::TextDecoder).
///
/// # Examples
///
/// ```rust
/// use utf8modem::{DecoderOptions, TextDecoder};
///
/// let decoder = TextDecoder::new(
///     "utf-8",
///     DecoderOptions {
///         fatal: true,
///         ..Default::default()
///     },
/// )
/// .unwrap();
/// assert!(decoder.fatal());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DecoderOptions {
    /// Whether malformed input aborts decoding instead of being replaced
    /// with U+FFFD.
    ///
    /// # Default
    ///
    /// `false`
    pub fatal: bool,

    /// Whether a leading byte order mark should be kept in the output.
    ///
    /// Only `false` is supported: exactly one leading U+FEFF is always
    /// stripped. Requesting `true` fails with
    /// [`UnsupportedConfiguration::IgnoreBom`](crate::UnsupportedConfiguration::IgnoreBom).
    ///
    /// # Default
    ///
    /// `false`
    pub ignore_bom: bool,
}

impl DecoderOptions {
    /// The error mode selected by [`fatal`](Self::fatal).
    #[must_use]
    pub fn error_mode(&self) -> ErrorMode {
        ErrorMode::from(self.fatal)
    }
}

/// Per-call options for [`TextDecoder::decode`](crate::TextDecoder::decode).
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DecodeOptions {
    /// Whether more input will follow in a later call.
    ///
    /// Only `false` is supported; every call must carry a complete buffer.
    ///
    /// # Default
    ///
    /// `false`
    pub stream: bool,
}
