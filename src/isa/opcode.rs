//! Opcode tables for the DCPU-16.
//!
//! Basic instructions use opcodes 0x1-0xF in the low four bits of the
//! instruction word. Opcode 0x0 escapes to the non-basic form, where the
//! `a` field carries an extended opcode; only 0x01 (JSR) is assigned.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::isa::Word;

/// A basic (two-operand) opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum BasicOp {
    /// a = b
    Set = 0x1,

    // ==================== Arithmetic ====================

    /// a = a + b, overflow into O
    Add = 0x2,
    /// a = a - b, underflow into O
    Sub = 0x3,
    /// a = a * b, high bits into O
    Mul = 0x4,
    /// a = a / b
    Div = 0x5,
    /// a = a % b
    Mod = 0x6,
    /// a = a << b
    Shl = 0x7,
    /// a = a >> b
    Shr = 0x8,

    // ==================== Bitwise ====================

    /// a = a & b
    And = 0x9,
    /// a = a | b
    Bor = 0xA,
    /// a = a ^ b
    Xor = 0xB,

    // ==================== Conditional ====================

    /// Perform next instruction only if a == b
    Ife = 0xC,
    /// Perform next instruction only if a != b
    Ifn = 0xD,
    /// Perform next instruction only if a > b
    Ifg = 0xE,
    /// Perform next instruction only if (a & b) != 0
    Ifb = 0xF,
}

impl BasicOp {
    /// All basic opcodes in numeric order.
    pub const ALL: [BasicOp; 15] = [
        BasicOp::Set,
        BasicOp::Add,
        BasicOp::Sub,
        BasicOp::Mul,
        BasicOp::Div,
        BasicOp::Mod,
        BasicOp::Shl,
        BasicOp::Shr,
        BasicOp::And,
        BasicOp::Bor,
        BasicOp::Xor,
        BasicOp::Ife,
        BasicOp::Ifn,
        BasicOp::Ifg,
        BasicOp::Ifb,
    ];

    /// Look up a basic opcode by its 4-bit code.
    ///
    /// Returns `None` for 0x0 (the non-basic escape) and for anything
    /// above 0xF.
    #[inline]
    pub fn from_code(code: Word) -> Option<Self> {
        match code {
            0x1 => Some(BasicOp::Set),
            0x2 => Some(BasicOp::Add),
            0x3 => Some(BasicOp::Sub),
            0x4 => Some(BasicOp::Mul),
            0x5 => Some(BasicOp::Div),
            0x6 => Some(BasicOp::Mod),
            0x7 => Some(BasicOp::Shl),
            0x8 => Some(BasicOp::Shr),
            0x9 => Some(BasicOp::And),
            0xA => Some(BasicOp::Bor),
            0xB => Some(BasicOp::Xor),
            0xC => Some(BasicOp::Ife),
            0xD => Some(BasicOp::Ifn),
            0xE => Some(BasicOp::Ifg),
            0xF => Some(BasicOp::Ifb),
            _ => None,
        }
    }

    /// The numeric opcode.
    #[inline]
    pub const fn code(self) -> Word {
        self as Word
    }

    /// The assembly mnemonic.
    #[inline]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            BasicOp::Set => "SET",
            BasicOp::Add => "ADD",
            BasicOp::Sub => "SUB",
            BasicOp::Mul => "MUL",
            BasicOp::Div => "DIV",
            BasicOp::Mod => "MOD",
            BasicOp::Shl => "SHL",
            BasicOp::Shr => "SHR",
            BasicOp::And => "AND",
            BasicOp::Bor => "BOR",
            BasicOp::Xor => "XOR",
            BasicOp::Ife => "IFE",
            BasicOp::Ifn => "IFN",
            BasicOp::Ifg => "IFG",
            BasicOp::Ifb => "IFB",
        }
    }
}

impl fmt::Display for BasicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// An extended (single-operand) opcode, reached through basic opcode 0x0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ExtendedOp {
    /// Push the address of the next instruction, then jump: JSR a
    Jsr = 0x01,
}

impl ExtendedOp {
    /// Look up an extended opcode by its 6-bit code.
    #[inline]
    pub fn from_code(code: Word) -> Option<Self> {
        match code {
            0x01 => Some(ExtendedOp::Jsr),
            _ => None,
        }
    }

    /// The numeric opcode.
    #[inline]
    pub const fn code(self) -> Word {
        self as Word
    }

    /// The assembly mnemonic.
    #[inline]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            ExtendedOp::Jsr => "JSR",
        }
    }
}

impl fmt::Display for ExtendedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for op in BasicOp::ALL {
            assert_eq!(BasicOp::from_code(op.code()), Some(op));
        }
    }

    #[test]
    fn test_mnemonics_in_numeric_order() {
        let names: Vec<&str> = BasicOp::ALL.iter().map(|op| op.mnemonic()).collect();
        assert_eq!(
            names,
            ["SET", "ADD", "SUB", "MUL", "DIV", "MOD", "SHL", "SHR", "AND", "BOR", "XOR",
             "IFE", "IFN", "IFG", "IFB"]
        );
    }

    #[test]
    fn test_nonbasic_escape_has_no_entry() {
        assert_eq!(BasicOp::from_code(0x0), None);
        assert_eq!(BasicOp::from_code(0x10), None);
    }

    #[test]
    fn test_extended_codes() {
        assert_eq!(ExtendedOp::from_code(0x01), Some(ExtendedOp::Jsr));
        assert_eq!(ExtendedOp::from_code(0x00), None);
        assert_eq!(ExtendedOp::from_code(0x02), None);
    }
}
