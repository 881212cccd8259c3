//! DCPU-16 general-purpose registers.
//!
//! The machine has eight 16-bit general registers named A, B, C, X, Y, Z,
//! I and J. Operand codes refer to them by index in that order.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::isa::Word;

/// One of the eight general-purpose registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    A = 0,
    B = 1,
    C = 2,
    X = 3,
    Y = 4,
    Z = 5,
    I = 6,
    J = 7,
}

impl Register {
    /// All registers in operand-code order: A, B, C, X, Y, Z, I, J.
    pub const ALL: [Register; 8] = [
        Register::A,
        Register::B,
        Register::C,
        Register::X,
        Register::Y,
        Register::Z,
        Register::I,
        Register::J,
    ];

    /// Create a register from its operand-code index.
    ///
    /// # Panics
    /// Panics if index is not in 0-7.
    #[inline]
    pub fn from_index(index: Word) -> Self {
        match index {
            0 => Register::A,
            1 => Register::B,
            2 => Register::C,
            3 => Register::X,
            4 => Register::Y,
            5 => Register::Z,
            6 => Register::I,
            7 => Register::J,
            _ => panic!("Invalid register index: {} (must be 0-7)", index),
        }
    }

    /// The operand-code index of this register.
    #[inline]
    pub const fn index(self) -> Word {
        self as Word
    }

    /// The assembly name of this register.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::X => "X",
            Register::Y => "Y",
            Register::Z => "Z",
            Register::I => "I",
            Register::J => "J",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for r in Register::ALL {
            assert_eq!(Register::from_index(r.index()), r);
        }
    }

    #[test]
    fn test_names_in_code_order() {
        let names: Vec<&str> = Register::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["A", "B", "C", "X", "Y", "Z", "I", "J"]);
    }

    #[test]
    #[should_panic(expected = "Invalid register index")]
    fn test_from_index_out_of_range() {
        Register::from_index(8);
    }
}
