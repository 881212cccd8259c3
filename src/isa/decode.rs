//! Instruction decoder for the DCPU-16.
//!
//! An instruction word packs three fields, low bits first:
//!
//! ```text
//! bbbbbb aaaaaa oooo
//! ```
//!
//! `oooo` is a basic opcode and `aaaaaa`/`bbbbbb` are the operand codes
//! for the first and second operand. Opcode 0x0 escapes to the non-basic
//! form, where `aaaaaa` holds an extended opcode and `bbbbbb` its raw
//! operand field.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::isa::opcode::{BasicOp, ExtendedOp};
use crate::isa::operand::{Operand, CODE_MASK};
use crate::isa::window::WordWindow;
use crate::isa::Word;

/// Extract the basic opcode field (bits 0-3).
#[inline]
const fn opcode_field(word: Word) -> Word {
    word & 0xF
}

/// Extract the first operand field (bits 4-9).
#[inline]
const fn a_field(word: Word) -> Word {
    (word >> 4) & CODE_MASK
}

/// Extract the second operand field (bits 10-15).
#[inline]
const fn b_field(word: Word) -> Word {
    (word >> 10) & CODE_MASK
}

/// A decoded DCPU-16 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// A two-operand instruction, `SET a, b` through `IFB a, b`.
    Basic { op: BasicOp, a: Operand, b: Operand },

    /// A non-basic instruction.
    ///
    /// The operand field is kept raw rather than decoded as an
    /// [`Operand`]: extended instructions render it as a plain literal
    /// and never consume trailing words.
    Extended { op: ExtendedOp, operand: Word },
}

impl Instruction {
    /// Total width in words, counting the instruction word itself.
    pub fn width(&self) -> usize {
        match self {
            Instruction::Basic { a, b, .. } => 1 + a.trailing_words() + b.trailing_words(),
            Instruction::Extended { .. } => 1,
        }
    }
}

/// Decode the instruction at the start of `words`.
///
/// `words` must hold at least [`MIN_WINDOW`](crate::isa::MIN_WINDOW)
/// words so that both potential trailing words are addressable; the
/// slice is not read beyond the decoded width.
///
/// # Panics
/// Panics if `words` is shorter than the minimum window.
pub fn decode(words: &[Word]) -> Result<Instruction, DecodeError> {
    let window = WordWindow::new(words);
    let word = window.instruction_word();

    match opcode_field(word) {
        0x0 => {
            let code = a_field(word);
            let op = ExtendedOp::from_code(code)
                .ok_or(DecodeError::InvalidExtendedOpcode(code))?;
            Ok(Instruction::Extended { op, operand: b_field(word) })
        }
        code => {
            let op = BasicOp::from_code(code)
                .ok_or(DecodeError::InvalidBasicOpcode(code))?;
            // Operand a resolves against the first trailing word; b
            // against whatever a left unconsumed.
            let a = Operand::decode(a_field(word), window.trailing(0));
            let b = Operand::decode(b_field(word), window.trailing(a.trailing_words()));
            Ok(Instruction::Basic { op, a, b })
        }
    }
}

/// Errors that can occur during instruction decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 4-bit opcode field has no assigned basic instruction.
    #[error("invalid basic opcode: 0x{0:x}")]
    InvalidBasicOpcode(Word),

    /// The non-basic escape carries an unassigned extended opcode.
    #[error("invalid extended opcode: 0x{0:02x}")]
    InvalidExtendedOpcode(Word),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::registers::Register;
    use proptest::prelude::*;

    /// Pack an instruction word from its three fields.
    fn pack(op: Word, a: Word, b: Word) -> Word {
        (op & 0xF) | ((a & 0x3F) << 4) | ((b & 0x3F) << 10)
    }

    #[test]
    fn test_decode_basic_registers() {
        let instr = decode(&[pack(0x1, 0x00, 0x01), 0, 0]).unwrap();
        assert_eq!(
            instr,
            Instruction::Basic {
                op: BasicOp::Set,
                a: Operand::Register(Register::A),
                b: Operand::Register(Register::B),
            }
        );
        assert_eq!(instr.width(), 1);
    }

    #[test]
    fn test_decode_trailing_word_order() {
        // Operand a takes the first trailing word, b the second.
        let instr = decode(&[pack(0x1, 0x10, 0x11), 0x0123, 0x4567]).unwrap();
        assert_eq!(
            instr,
            Instruction::Basic {
                op: BasicOp::Set,
                a: Operand::Indexed { offset: 0x0123, register: Register::A },
                b: Operand::Indexed { offset: 0x4567, register: Register::B },
            }
        );
        assert_eq!(instr.width(), 3);
    }

    #[test]
    fn test_decode_b_reads_first_trailing_when_a_is_short() {
        let instr = decode(&[pack(0x2, 0x03, 0x1F), 0xBEEF, 0]).unwrap();
        assert_eq!(
            instr,
            Instruction::Basic {
                op: BasicOp::Add,
                a: Operand::Register(Register::X),
                b: Operand::Literal(0xBEEF),
            }
        );
        assert_eq!(instr.width(), 2);
    }

    #[test]
    fn test_decode_jsr() {
        let instr = decode(&[pack(0x0, 0x01, 0x23), 0, 0]).unwrap();
        assert_eq!(instr, Instruction::Extended { op: ExtendedOp::Jsr, operand: 0x23 });
        assert_eq!(instr.width(), 1);
    }

    #[test]
    fn test_decode_unknown_extended_opcode() {
        assert_eq!(
            decode(&[pack(0x0, 0x02, 0x00), 0, 0]),
            Err(DecodeError::InvalidExtendedOpcode(0x02))
        );
        assert_eq!(
            decode(&[0x0000, 0, 0]),
            Err(DecodeError::InvalidExtendedOpcode(0x00))
        );
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn test_decode_short_window_panics() {
        let _ = decode(&[0x7C01, 0x0030]);
    }

    proptest! {
        #[test]
        fn test_width_counts_trailing_words(
            op in 0x1u16..=0xF,
            a in 0u16..0x40,
            b in 0u16..0x40,
        ) {
            let instr = decode(&[pack(op, a, b), 0x1111, 0x2222]).unwrap();
            let expected = 1
                + Operand::decode(a, 0).trailing_words()
                + Operand::decode(b, 0).trailing_words();
            prop_assert_eq!(instr.width(), expected);
        }

        #[test]
        fn test_extended_width_is_always_one(a in 0u16..0x40, b in 0u16..0x40) {
            let words = [pack(0x0, a, b), 0x1111, 0x2222];
            if let Ok(instr) = decode(&words) {
                prop_assert_eq!(instr.width(), 1);
            }
        }
    }
}
