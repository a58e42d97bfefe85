//! Strict UTF-8 transcoding on explicit state machines.
//!
//! Bytes are decoded by [`Utf8Decoder`], a resumable machine that rejects
//! overlong forms, surrogates and values above U+10FFFF, and that hands a
//! rejected continuation byte back to its [`TokenStream`] so it can start the
//! next sequence. [`Utf8Encoder`] mirrors it for code points.
//!
//! [`decode`] and [`encode`] drive those machines over one complete buffer:
//!
//! ```rust
//! use utf8modem::{ErrorMode, decode, encode};
//!
//! let bytes = encode("\u{FEFF}Grüße");
//! assert_eq!(decode(&bytes, ErrorMode::Fatal).unwrap(), "Grüße");
//! assert_eq!(decode(b"a\xC0b", ErrorMode::Replacement).unwrap(), "a\u{FFFD}b");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoder;
mod error;
mod options;
mod stream;
mod text;
mod transcode;

#[cfg(test)]
mod tests;

pub use decoder::{
    DEFAULT_LOWER_BOUNDARY, DEFAULT_UPPER_BOUNDARY, DecoderState, Step, Transition, Utf8Decoder,
};
pub use encoder::{EncodeStep, EncodedBytes, MAX_CODE_POINT, Utf8Encoder};
pub use error::{ErrorKind, MalformedKind, TranscodeError, UnsupportedConfiguration};
pub use options::{DecodeOptions, DecoderOptions, ErrorMode};
pub use stream::TokenStream;
pub use text::{ENCODING, TextDecoder, TextEncoder};
pub use transcode::{
    BYTE_ORDER_MARK, EncodeIntoResult, decode, encode, encode_code_points, encode_into,
};
