//! Disassembler for DCPU-16 programs.
//!
//! Converts binary machine words back to readable assembly. The two
//! entry points mirror the two decoding layers: [`decode_instruction`]
//! for whole instructions and [`decode_value`] for single operand codes.

use serde::{Serialize, Deserialize};

use crate::isa::{decode, DecodeError, Instruction, Operand, Word, MIN_WINDOW};

/// A decoded instruction: how many words it spans and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedInstruction {
    /// Total words consumed, including the instruction word.
    pub width: usize,
    /// Assembly text, e.g. `SET A, 0x0030`.
    pub text: String,
}

/// A decoded operand: its text and the trailing words it used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedOperand {
    /// Assembly text, e.g. `[0x0123+A]`.
    pub text: String,
    /// Trailing words consumed (0 or 1).
    pub trailing_words: usize,
}

/// One line of a disassembly listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Word address of the instruction.
    pub address: usize,
    /// The raw words the instruction spans.
    pub words: Vec<Word>,
    /// Assembly text, or `???` if the word does not decode.
    pub text: String,
}

/// Decode and format the instruction at the start of `words`.
///
/// # Panics
/// Panics if `words` holds fewer than [`MIN_WINDOW`] words.
pub fn decode_instruction(words: &[Word]) -> Result<DecodedInstruction, DecodeError> {
    let instr = decode(words)?;
    Ok(DecodedInstruction {
        width: instr.width(),
        text: format_instruction(&instr),
    })
}

/// Decode and format a single 6-bit operand code.
///
/// `next` is the word that would follow the instruction word; the result
/// reports whether the operand actually consumed it.
pub fn decode_value(code: Word, next: Word) -> DecodedOperand {
    let operand = Operand::decode(code, next);
    DecodedOperand {
        text: format_operand(&operand),
        trailing_words: operand.trailing_words(),
    }
}

/// Disassemble a whole image into listing entries.
///
/// The cursor advances by each instruction's width. Words that do not
/// decode produce a `???` entry and advance by one word, so the walk
/// always terminates. Trailing words past the end of the image read as
/// zero.
pub fn disassemble_entries(words: &[Word]) -> Vec<ListingEntry> {
    let mut entries = Vec::new();
    let mut address = 0;

    while address < words.len() {
        let (width, text) = match decode_at(words, address) {
            Ok(decoded) => (decoded.width, decoded.text),
            Err(_) => (1, "???".to_string()),
        };

        let end = (address + width).min(words.len());
        entries.push(ListingEntry {
            address,
            words: words[address..end].to_vec(),
            text,
        });
        address += width;
    }

    entries
}

/// Disassemble a whole image to listing text.
///
/// One line per instruction: `0xAAAA: TEXT  ; RAW...`
pub fn disassemble(words: &[Word]) -> String {
    let mut output = String::new();

    for entry in disassemble_entries(words) {
        let raw: Vec<String> = entry.words.iter().map(|w| format!("{:04x}", w)).collect();
        output.push_str(&format!(
            "{:#06x}: {}  ; {}\n",
            entry.address,
            entry.text,
            raw.join(" ")
        ));
    }

    output
}

/// Decode at an offset, zero-padding the window at the end of the image.
fn decode_at(words: &[Word], address: usize) -> Result<DecodedInstruction, DecodeError> {
    let rest = &words[address..];
    if rest.len() >= MIN_WINDOW {
        decode_instruction(rest)
    } else {
        let mut window = [0; MIN_WINDOW];
        window[..rest.len()].copy_from_slice(rest);
        decode_instruction(&window)
    }
}

/// Format a decoded instruction as assembly text.
fn format_instruction(instr: &Instruction) -> String {
    match instr {
        Instruction::Basic { op, a, b } => {
            format!("{} {}, {}", op.mnemonic(), format_operand(a), format_operand(b))
        }
        // The extended operand field is a raw literal, not an operand
        // code, and renders in two hex digits.
        Instruction::Extended { op, operand } => {
            format!("{} 0x{:02x}", op.mnemonic(), operand)
        }
    }
}

/// Format a decoded operand as assembly text.
fn format_operand(operand: &Operand) -> String {
    match operand {
        Operand::Register(r) => r.name().to_string(),
        Operand::Indirect(r) => format!("[{}]", r.name()),
        Operand::Indexed { offset, register } => format!("[0x{:04x}+{}]", offset, register.name()),
        Operand::Pop => "POP".to_string(),
        Operand::Peek => "PEEK".to_string(),
        Operand::Push => "PUSH".to_string(),
        Operand::Sp => "SP".to_string(),
        Operand::Pc => "PC".to_string(),
        Operand::Overflow => "O".to_string(),
        Operand::IndirectLiteral(addr) => format!("[0x{:04x}]", addr),
        Operand::Literal(value) => format!("0x{:04x}", value),
        Operand::SmallLiteral(value) => format!("0x{:02x}", value),
    }
}
