//! # DCPU-16 Disassembler
//!
//! A disassembler for the DCPU-16, the 16-bit CPU of Mojang's cancelled
//! game 0x10c (revision 1.1 of the instruction set).
//!
//! The machine uses fixed 16-bit words. A basic instruction packs an
//! opcode and two 6-bit operand codes into one word and may pull up to
//! two extra words from the stream; this crate turns such word sequences
//! back into assembly text.

pub mod isa;
pub mod disasm;
pub mod image;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use isa::{decode, BasicOp, DecodeError, ExtendedOp, Instruction, Operand, Register, Word, WordWindow, MIN_WINDOW};
pub use disasm::{decode_instruction, decode_value, disassemble, disassemble_entries, DecodedInstruction, DecodedOperand, ListingEntry};
pub use image::{load_image, ByteOrder, Image, ImageError};
