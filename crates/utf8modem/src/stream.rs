//! Pull-style token stream with front pushback.
//!
//! A [`TokenStream`] walks a borrowed slice with an index cursor. Tokens that a
//! consumer rejects can be handed back with [`TokenStream::prepend`]; they are
//! kept on a small stack and are read again before the cursor advances.
//!
//! The same type serves bytes on decode and code points on encode.
//!
//! ```
//! use utf8modem::TokenStream;
//!
//! let mut stream = TokenStream::new(&[0xE2_u8, 0x41]);
//! assert_eq!(stream.read(), Some(0xE2));
//! assert_eq!(stream.read(), Some(0x41));
//! stream.prepend(0x41);
//! assert_eq!(stream.read(), Some(0x41));
//! assert_eq!(stream.read(), None);
//! ```
use alloc::vec::Vec;

/// An ordered cursor over `&[T]` that supports re-inserting tokens at the
/// front of the remaining input.
///
/// `read` returns `None` once both the pushback stack and the underlying slice
/// are exhausted, and keeps returning `None` on every later call.
#[derive(Debug, Clone)]
pub struct TokenStream<'src, T: Copy> {
    tokens: &'src [T],
    cursor: usize,
    /// Last element is the next token to be read.
    pushed_back: Vec<T>,
}

impl<'src, T: Copy> TokenStream<'src, T> {
    /// Creates a stream over `tokens` without copying them.
    #[must_use]
    pub fn new(tokens: &'src [T]) -> Self {
        Self {
            tokens,
            cursor: 0,
            pushed_back: Vec::new(),
        }
    }

    /// Consumes and returns the next token, or `None` at end of input.
    #[inline]
    pub fn read(&mut self) -> Option<T> {
        if let Some(token) = self.pushed_back.pop() {
            return Some(token);
        }
        let token = self.tokens.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(token)
    }

    /// Re-inserts a single token so that it is the next one returned by
    /// [`read`](Self::read).
    #[inline]
    pub fn prepend(&mut self, token: T) {
        self.pushed_back.push(token);
    }

    /// Re-inserts `tokens` at the front of the stream, preserving their order:
    /// `tokens[0]` is read first.
    pub fn prepend_slice(&mut self, tokens: &[T]) {
        self.pushed_back.extend(tokens.iter().rev().copied());
    }

    /// Number of tokens consumed from the underlying slice, minus those that
    /// are currently pushed back.
    ///
    /// Pushing back a token that never came from this stream can make the
    /// logical position smaller than the number of pushed tokens; the result
    /// saturates at zero in that case.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.saturating_sub(self.pushed_back.len())
    }

    /// Whether the next [`read`](Self::read) will return `None`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pushed_back.is_empty() && self.cursor >= self.tokens.len()
    }
}

impl<T: Copy> Iterator for TokenStream<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TokenStream;

    #[test]
    fn reads_in_order_then_stays_exhausted() {
        let mut stream = TokenStream::new(&[1u8, 2, 3]);
        assert_eq!(stream.read(), Some(1));
        assert_eq!(stream.read(), Some(2));
        assert_eq!(stream.read(), Some(3));
        assert_eq!(stream.read(), None);
        assert_eq!(stream.read(), None);
        assert!(stream.is_empty());
    }

    #[test]
    fn empty_input_is_immediately_exhausted() {
        let mut stream = TokenStream::<u8>::new(&[]);
        assert!(stream.is_empty());
        assert_eq!(stream.read(), None);
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn prepend_is_read_before_the_cursor_advances() {
        let mut stream = TokenStream::new(&[0xE2u8, 0x41, 0x42]);
        assert_eq!(stream.read(), Some(0xE2));
        let rejected = stream.read().unwrap();
        stream.prepend(rejected);
        assert_eq!(stream.position(), 1);
        assert!(!stream.is_empty());
        assert_eq!(stream.read(), Some(0x41));
        assert_eq!(stream.read(), Some(0x42));
        assert_eq!(stream.read(), None);
    }

    #[test]
    fn prepend_after_exhaustion_revives_the_stream() {
        let mut stream = TokenStream::new(&[7u32]);
        assert_eq!(stream.read(), Some(7));
        assert_eq!(stream.read(), None);
        stream.prepend(7);
        assert!(!stream.is_empty());
        assert_eq!(stream.read(), Some(7));
        assert_eq!(stream.read(), None);
    }

    #[test]
    fn prepend_slice_preserves_order() {
        let mut stream = TokenStream::new(&[9u32]);
        stream.prepend_slice(&[1, 2, 3]);
        let all: Vec<u32> = stream.by_ref().collect();
        assert_eq!(all, [1, 2, 3, 9]);
    }

    #[test]
    fn nested_pushback_is_last_in_first_out() {
        let mut stream = TokenStream::new(&[1u8, 2]);
        let a = stream.read().unwrap();
        let b = stream.read().unwrap();
        stream.prepend(b);
        stream.prepend(a);
        assert_eq!(stream.position(), 0);
        assert_eq!(stream.read(), Some(1));
        assert_eq!(stream.read(), Some(2));
    }

    #[test]
    fn position_saturates_for_foreign_tokens() {
        let mut stream = TokenStream::new(&[1u8]);
        stream.prepend(0);
        stream.prepend(0);
        assert_eq!(stream.position(), 0);
    }
}
