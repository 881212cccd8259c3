//! WebAssembly bindings for the disassembler.
//!
//! This module provides JavaScript-friendly wrappers around the core
//! decoder.

use wasm_bindgen::prelude::*;

use crate::disasm::{decode_instruction, disassemble};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Disassemble a whole image of machine words to listing text.
#[wasm_bindgen]
pub fn wasm_disassemble(words: &[u16]) -> String {
    disassemble(words)
}

/// Decode one instruction from up to three words.
///
/// Returns the assembly text, or `??? ; <reason>` if the word does not
/// decode.
#[wasm_bindgen]
pub fn wasm_decode(word: u16, next1: u16, next2: u16) -> String {
    match decode_instruction(&[word, next1, next2]) {
        Ok(decoded) => decoded.text,
        Err(e) => format!("??? ; {}", e),
    }
}

/// The width in words of the instruction starting at `word`.
///
/// Returns 0 if the word does not decode.
#[wasm_bindgen]
pub fn wasm_width(word: u16, next1: u16, next2: u16) -> usize {
    decode_instruction(&[word, next1, next2])
        .map(|decoded| decoded.width)
        .unwrap_or(0)
}
