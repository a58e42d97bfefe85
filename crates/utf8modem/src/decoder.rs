//! UTF-8 decoder state machine.
//!
//! The machine is fed one byte at a time (or `None` for end of input) and
//! answers with a [`Step`]. Its whole state is the [`DecoderState`] value, so
//! a caller can stop after any byte, keep the state, and resume later.
//!
//! Boundary rules follow the well-formed byte sequence table of the Unicode
//! Standard: the first continuation byte after `E0`, `ED`, `F0` and `F4` has a
//! narrowed range so that overlong forms, surrogates and values above
//! U+10FFFF are never produced.
//!
//! A continuation byte that falls outside its allowed range is handed back to
//! the stream: it may well be the start of the next, independent sequence.
use core::mem;

use crate::{error::MalformedKind, stream::TokenStream};

/// Lowest byte accepted as a continuation byte, unless narrowed.
pub const DEFAULT_LOWER_BOUNDARY: u8 = 0x80;
/// Highest byte accepted as a continuation byte, unless narrowed.
pub const DEFAULT_UPPER_BOUNDARY: u8 = 0xBF;

/// Everything the decoder needs to resume mid-sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// At a sequence boundary; the next byte is a lead byte.
    #[default]
    Idle,
    /// Inside a multi-byte sequence.
    InSequence {
        /// Continuation bytes the current sequence requires (1 to 3).
        bytes_needed: u8,
        /// Continuation bytes accepted so far; always below `bytes_needed`.
        bytes_seen: u8,
        /// Bits accumulated from the lead byte and accepted continuations.
        code_point: u32,
        /// Lowest byte allowed as the next continuation byte.
        lower_boundary: u8,
        /// Highest byte allowed as the next continuation byte.
        upper_boundary: u8,
    },
}

/// What happened after feeding one more input into the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A complete code point.
    Emit(u32),
    /// The byte was accepted but the sequence is not finished yet.
    Continue,
    /// The current unit is malformed. The machine is back at
    /// [`DecoderState::Idle`].
    Error(MalformedKind),
    /// End of input at a sequence boundary. Nothing more will be produced.
    Finished,
}

/// Result of [`DecoderState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State to continue from.
    pub state: DecoderState,
    /// Signal for the driver.
    pub step: Step,
    /// A byte that must be read again before any further input.
    pub reconsume: Option<u8>,
}

impl Transition {
    fn idle(step: Step) -> Self {
        Self {
            state: DecoderState::Idle,
            step,
            reconsume: None,
        }
    }
}

impl DecoderState {
    /// Computes the next state for `input` without touching any stream.
    ///
    /// `None` stands for end of input.
    #[must_use]
    pub fn transition(self, input: Option<u8>) -> Transition {
        match (self, input) {
            (DecoderState::Idle, None) => Transition::idle(Step::Finished),
            (DecoderState::InSequence { .. }, None) => {
                Transition::idle(Step::Error(MalformedKind::Truncated))
            }
            (DecoderState::Idle, Some(byte)) => Self::lead(byte),
            (
                DecoderState::InSequence {
                    bytes_needed,
                    bytes_seen,
                    code_point,
                    lower_boundary,
                    upper_boundary,
                },
                Some(byte),
            ) => {
                if !(lower_boundary..=upper_boundary).contains(&byte) {
                    return Transition {
                        state: DecoderState::Idle,
                        step: Step::Error(classify_rejected(byte, lower_boundary, upper_boundary)),
                        reconsume: Some(byte),
                    };
                }

                let code_point = (code_point << 6) | u32::from(byte & 0x3F);
                let bytes_seen = bytes_seen + 1;
                if bytes_seen == bytes_needed {
                    return Transition::idle(Step::Emit(code_point));
                }

                Transition {
                    state: DecoderState::InSequence {
                        bytes_needed,
                        bytes_seen,
                        code_point,
                        lower_boundary: DEFAULT_LOWER_BOUNDARY,
                        upper_boundary: DEFAULT_UPPER_BOUNDARY,
                    },
                    step: Step::Continue,
                    reconsume: None,
                }
            }
        }
    }

    fn lead(byte: u8) -> Transition {
        let (bytes_needed, code_point) = match byte {
            0x00..=0x7F => return Transition::idle(Step::Emit(u32::from(byte))),
            0x80..=0xBF => {
                return Transition::idle(Step::Error(MalformedKind::UnexpectedContinuation));
            }
            0xC0 | 0xC1 => return Transition::idle(Step::Error(MalformedKind::OverlongLead)),
            0xC2..=0xDF => (1, byte & 0x1F),
            0xE0..=0xEF => (2, byte & 0x0F),
            0xF0..=0xF4 => (3, byte & 0x07),
            0xF5..=0xFF => return Transition::idle(Step::Error(MalformedKind::OutOfRangeLead)),
        };

        let (lower_boundary, upper_boundary) = match byte {
            0xE0 => (0xA0, DEFAULT_UPPER_BOUNDARY),
            0xED => (DEFAULT_LOWER_BOUNDARY, 0x9F),
            0xF0 => (0x90, DEFAULT_UPPER_BOUNDARY),
            0xF4 => (DEFAULT_LOWER_BOUNDARY, 0x8F),
            _ => (DEFAULT_LOWER_BOUNDARY, DEFAULT_UPPER_BOUNDARY),
        };

        Transition {
            state: DecoderState::InSequence {
                bytes_needed,
                bytes_seen: 0,
                code_point: u32::from(code_point),
                lower_boundary,
                upper_boundary,
            },
            step: Step::Continue,
            reconsume: None,
        }
    }

    /// Whether the machine sits at a sequence boundary.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, DecoderState::Idle)
    }
}

/// Names the rule a rejected continuation byte broke. Only called for bytes
/// outside `lower_boundary..=upper_boundary`.
fn classify_rejected(byte: u8, lower_boundary: u8, upper_boundary: u8) -> MalformedKind {
    if !(DEFAULT_LOWER_BOUNDARY..=DEFAULT_UPPER_BOUNDARY).contains(&byte) {
        MalformedKind::InvalidContinuation
    } else if byte < lower_boundary {
        MalformedKind::Overlong
    } else if upper_boundary == 0x8F {
        MalformedKind::OutOfRange
    } else {
        MalformedKind::Surrogate
    }
}

/// Byte-to-code-point state machine that pushes rejected bytes back onto the
/// stream it reads from.
#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    state: DecoderState,
}

impl Utf8Decoder {
    /// A decoder at a sequence boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a previously saved state.
    #[must_use]
    pub fn from_state(state: DecoderState) -> Self {
        Self { state }
    }

    /// Current state, for pausing the machine.
    #[must_use]
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Feeds `input`, which the caller has just read from `stream`.
    ///
    /// A rejected continuation byte is prepended to `stream` so that the next
    /// read yields it again as a candidate lead byte.
    pub fn handle(&mut self, stream: &mut TokenStream<'_, u8>, input: Option<u8>) -> Step {
        let Transition {
            state,
            step,
            reconsume,
        } = mem::take(&mut self.state).transition(input);
        self.state = state;
        if let Some(byte) = reconsume {
            stream.prepend(byte);
        }
        step
    }

    /// Reads one token from `stream` and feeds it.
    pub fn step(&mut self, stream: &mut TokenStream<'_, u8>) -> Step {
        let input = stream.read();
        self.handle(stream, input)
    }
}
