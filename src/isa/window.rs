//! Bounds-checked instruction windows.
//!
//! A basic instruction can consume up to two trailing words, so decoding
//! always inspects a fixed window of [`MIN_WINDOW`] words, even when the
//! instruction turns out shorter. Callers slice that window out of their
//! image, zero-padding at the end of the stream if necessary.

use crate::isa::Word;

/// The number of words a decode window must hold: the instruction word
/// plus up to two trailing words.
pub const MIN_WINDOW: usize = 3;

/// A bounds-checked view of an instruction word and the words after it.
#[derive(Debug, Clone, Copy)]
pub struct WordWindow<'a> {
    words: &'a [Word],
}

impl<'a> WordWindow<'a> {
    /// Wrap a slice as a decode window.
    ///
    /// # Panics
    /// Panics if the slice holds fewer than [`MIN_WINDOW`] words; a short
    /// window is a bug in the caller, not a decodable condition.
    pub fn new(words: &'a [Word]) -> Self {
        assert!(
            words.len() >= MIN_WINDOW,
            "Decode window of {} words is too short (need {})",
            words.len(),
            MIN_WINDOW
        );
        Self { words }
    }

    /// The instruction word itself.
    #[inline]
    pub fn instruction_word(&self) -> Word {
        self.words[0]
    }

    /// The `index`-th word after the instruction word.
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    pub fn trailing(&self, index: usize) -> Word {
        assert!(
            index < MIN_WINDOW - 1,
            "Trailing word index {} out of range (0-{})",
            index,
            MIN_WINDOW - 2
        );
        self.words[1 + index]
    }
}
