//! Operand (value) decoding for the DCPU-16.
//!
//! Each basic instruction carries two 6-bit operand codes. A code selects
//! a register, a memory reference, a stack operation, a special register,
//! or a literal; codes 0x10-0x17, 0x1E and 0x1F pull one extra word from
//! the instruction stream.

use serde::{Serialize, Deserialize};

use crate::isa::registers::Register;
use crate::isa::Word;

/// Mask for a 6-bit operand code.
pub const CODE_MASK: Word = 0x3F;

/// A decoded operand.
///
/// The twelve classes cover the whole 6-bit code space:
///
/// | Codes     | Operand                  |
/// |-----------|--------------------------|
/// | 0x00-0x07 | register                 |
/// | 0x08-0x0F | \[register\]             |
/// | 0x10-0x17 | \[next word + register\] |
/// | 0x18-0x1A | POP, PEEK, PUSH          |
/// | 0x1B-0x1D | SP, PC, O                |
/// | 0x1E      | \[next word\]            |
/// | 0x1F      | next word (literal)      |
/// | 0x20-0x3F | inline literal 0x00-0x1F |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// A register by itself: `A`
    Register(Register),
    /// Memory at a register: `[A]`
    Indirect(Register),
    /// Memory at a register plus a trailing-word offset: `[0x0123+A]`
    Indexed { offset: Word, register: Register },
    /// Pop from the stack.
    Pop,
    /// Top of the stack.
    Peek,
    /// Push onto the stack.
    Push,
    /// The stack pointer itself.
    Sp,
    /// The program counter itself.
    Pc,
    /// The overflow register.
    Overflow,
    /// Memory at a trailing-word address: `[0x0123]`
    IndirectLiteral(Word),
    /// A full-word literal held in a trailing word: `0x0123`
    Literal(Word),
    /// A 5-bit literal packed into the code itself: `0x00` to `0x1f`
    SmallLiteral(Word),
}

impl Operand {
    /// Decode a 6-bit operand code.
    ///
    /// `next` is the word following the current decode position; it is
    /// captured into the operand for the three classes that consume a
    /// trailing word and ignored otherwise. Only the low six bits of
    /// `code` are significant, so the mapping is total.
    pub fn decode(code: Word, next: Word) -> Self {
        let code = code & CODE_MASK;
        match code {
            0x00..=0x07 => Operand::Register(Register::from_index(code)),
            0x08..=0x0F => Operand::Indirect(Register::from_index(code - 0x08)),
            0x10..=0x17 => Operand::Indexed {
                offset: next,
                register: Register::from_index(code - 0x10),
            },
            0x18 => Operand::Pop,
            0x19 => Operand::Peek,
            0x1A => Operand::Push,
            0x1B => Operand::Sp,
            0x1C => Operand::Pc,
            0x1D => Operand::Overflow,
            0x1E => Operand::IndirectLiteral(next),
            0x1F => Operand::Literal(next),
            // 0x20-0x3F after masking
            _ => Operand::SmallLiteral(code - 0x20),
        }
    }

    /// How many trailing words this operand consumed (0 or 1).
    #[inline]
    pub const fn trailing_words(&self) -> usize {
        match self {
            Operand::Indexed { .. } | Operand::IndirectLiteral(_) | Operand::Literal(_) => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_register_classes() {
        assert_eq!(Operand::decode(0x00, 0), Operand::Register(Register::A));
        assert_eq!(Operand::decode(0x07, 0), Operand::Register(Register::J));
        assert_eq!(Operand::decode(0x08, 0), Operand::Indirect(Register::A));
        assert_eq!(Operand::decode(0x0F, 0), Operand::Indirect(Register::J));
    }

    #[test]
    fn test_indexed_captures_offset() {
        assert_eq!(
            Operand::decode(0x10, 0x1234),
            Operand::Indexed { offset: 0x1234, register: Register::A }
        );
        assert_eq!(
            Operand::decode(0x17, 0xFFFF),
            Operand::Indexed { offset: 0xFFFF, register: Register::J }
        );
    }

    #[test]
    fn test_stack_and_specials() {
        assert_eq!(Operand::decode(0x18, 0), Operand::Pop);
        assert_eq!(Operand::decode(0x19, 0), Operand::Peek);
        assert_eq!(Operand::decode(0x1A, 0), Operand::Push);
        assert_eq!(Operand::decode(0x1B, 0), Operand::Sp);
        assert_eq!(Operand::decode(0x1C, 0), Operand::Pc);
        assert_eq!(Operand::decode(0x1D, 0), Operand::Overflow);
    }

    #[test]
    fn test_literal_classes() {
        assert_eq!(Operand::decode(0x1E, 0xBEEF), Operand::IndirectLiteral(0xBEEF));
        assert_eq!(Operand::decode(0x1F, 0xBEEF), Operand::Literal(0xBEEF));
        assert_eq!(Operand::decode(0x20, 0xBEEF), Operand::SmallLiteral(0x00));
        assert_eq!(Operand::decode(0x3F, 0), Operand::SmallLiteral(0x1F));
    }

    #[test]
    fn test_trailing_word_classes() {
        for code in 0x00..0x40 {
            let expected = matches!(code, 0x10..=0x17 | 0x1E | 0x1F) as usize;
            assert_eq!(
                Operand::decode(code, 0).trailing_words(),
                expected,
                "code 0x{:02x}",
                code
            );
        }
    }

    proptest! {
        #[test]
        fn test_decode_ignores_bits_above_the_field(code: u16, next: u16) {
            prop_assert_eq!(
                Operand::decode(code, next),
                Operand::decode(code & CODE_MASK, next)
            );
        }

        #[test]
        fn test_small_literals_cover_the_top_half(code in 0x20u16..0x40, next: u16) {
            prop_assert_eq!(Operand::decode(code, next), Operand::SmallLiteral(code - 0x20));
        }

        #[test]
        fn test_next_word_only_matters_for_trailing_classes(code in 0u16..0x40) {
            let a = Operand::decode(code, 0x0000);
            let b = Operand::decode(code, 0xFFFF);
            if a.trailing_words() == 0 {
                prop_assert_eq!(a, b);
            } else {
                prop_assert_ne!(a, b);
            }
        }
    }
}
