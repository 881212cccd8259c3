//! Binary program images.
//!
//! A program image is a flat file of 16-bit words with no header. The
//! only choices are byte order (both conventions circulate among the
//! assemblers out there) and the requirement that the file hold a whole
//! number of words and fit the address space.

use std::path::Path;
use thiserror::Error;

use crate::isa::Word;

/// Number of words in the machine's address space.
pub const MEMORY_WORDS: usize = 0x10000;

/// Byte order of a program image on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Low byte first (the common choice for tool output).
    Little,
    /// High byte first.
    Big,
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::Little
    }
}

/// A loaded program image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// The program words, starting at address 0.
    pub words: Vec<Word>,
}

impl Image {
    /// Decode an image from raw bytes.
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, ImageError> {
        if bytes.len() % 2 != 0 {
            return Err(ImageError::OddLength(bytes.len()));
        }
        if bytes.len() / 2 > MEMORY_WORDS {
            return Err(ImageError::TooLarge { words: bytes.len() / 2 });
        }

        let words = bytes
            .chunks_exact(2)
            .map(|pair| match order {
                ByteOrder::Little => Word::from_le_bytes([pair[0], pair[1]]),
                ByteOrder::Big => Word::from_be_bytes([pair[0], pair[1]]),
            })
            .collect();

        Ok(Self { words })
    }

    /// The number of words in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load a program image from disk.
pub fn load_image<P: AsRef<Path>>(path: P, order: ByteOrder) -> Result<Image, ImageError> {
    let bytes = std::fs::read(path.as_ref())
        .map_err(|e| ImageError::IoError(e.to_string()))?;
    Image::from_bytes(&bytes, order)
}

/// Errors that can occur while loading a program image.
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("image is {0} bytes, not a whole number of 16-bit words")]
    OddLength(usize),

    #[error("image of {words} words exceeds the 0x10000-word address space")]
    TooLarge { words: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_little_endian() {
        let image = Image::from_bytes(&[0x01, 0x7C, 0x30, 0x00], ByteOrder::Little).unwrap();
        assert_eq!(image.words, [0x7C01, 0x0030]);
    }

    #[test]
    fn test_from_bytes_big_endian() {
        let image = Image::from_bytes(&[0x7C, 0x01, 0x00, 0x30], ByteOrder::Big).unwrap();
        assert_eq!(image.words, [0x7C01, 0x0030]);
    }

    #[test]
    fn test_odd_length_rejected() {
        assert!(matches!(
            Image::from_bytes(&[0x01, 0x02, 0x03], ByteOrder::Little),
            Err(ImageError::OddLength(3))
        ));
    }

    #[test]
    fn test_oversized_image_rejected() {
        let bytes = vec![0; (MEMORY_WORDS + 1) * 2];
        assert!(matches!(
            Image::from_bytes(&bytes, ByteOrder::Little),
            Err(ImageError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_image() {
        let image = Image::from_bytes(&[], ByteOrder::Little).unwrap();
        assert!(image.is_empty());
        assert_eq!(image.len(), 0);
    }
}
