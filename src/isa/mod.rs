//! DCPU-16 instruction set description.
//!
//! This module models the encoding side of the machine:
//! - [`Register`] - the eight general-purpose registers
//! - [`BasicOp`] / [`ExtendedOp`] - the opcode tables
//! - [`Operand`] - the 6-bit operand code space
//! - [`WordWindow`] - bounds-checked decode windows
//! - [`decode`] - instruction words to [`Instruction`]

pub mod registers;
pub mod opcode;
pub mod operand;
pub mod window;
pub mod decode;

/// A 16-bit machine word, the unit of memory and instruction encoding.
pub type Word = u16;

pub use registers::Register;
pub use opcode::{BasicOp, ExtendedOp};
pub use operand::Operand;
pub use window::{WordWindow, MIN_WINDOW};
pub use decode::{decode, Instruction, DecodeError};
