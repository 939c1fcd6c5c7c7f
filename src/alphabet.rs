use serde::{Deserialize, Serialize};

use crate::{HuffmanError, Result, Symbol};

pub const BYTE_ALPHABET_SIZE: usize = 256;
/// Every Unicode code point.
pub const MAX_ALPHABET_SIZE: usize = 0x11_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    size: usize,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::bytes()
    }
}

impl Alphabet {
    /// Creates an alphabet of symbols `0..size`, with `size` in `1..=MAX_ALPHABET_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_ALPHABET_SIZE {
            return Err(HuffmanError::InvalidAlphabet { size });
        }

        Ok(Self { size })
    }

    pub fn bytes() -> Self {
        Self { size: BYTE_ALPHABET_SIZE }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn contains<S: Symbol>(&self, symbol: S) -> bool {
        symbol.index() < self.size
    }

    #[inline(always)]
    pub fn index_of<S: Symbol>(&self, symbol: S) -> Result<usize> {
        let index = symbol.index();
        if index >= self.size {
            return Err(HuffmanError::SymbolOutOfAlphabet { symbol: index, alphabet_size: self.size });
        }

        Ok(index)
    }
}

#[test]
fn test_byte_alphabet_contains_every_byte() {
    let alphabet = Alphabet::bytes();

    assert_eq!(alphabet.size(), 256);
    assert!(alphabet.contains(0u8));
    assert!(alphabet.contains(255u8));
    assert_eq!(alphabet.index_of(b'A').unwrap(), 65);
}

#[test]
fn test_narrow_alphabet_rejects_symbols() {
    let ascii = Alphabet::new(128).unwrap();

    assert!(!ascii.contains(200u8));
    assert_eq!(
        ascii.index_of(200u8),
        Err(HuffmanError::SymbolOutOfAlphabet { symbol: 200, alphabet_size: 128 })
    );
}

#[test]
fn test_empty_alphabet_is_invalid() {
    assert_eq!(Alphabet::new(0), Err(HuffmanError::InvalidAlphabet { size: 0 }));
}

#[test]
fn test_oversized_alphabet_is_invalid() {
    assert!(Alphabet::new(MAX_ALPHABET_SIZE).is_ok());
    assert_eq!(
        Alphabet::new(MAX_ALPHABET_SIZE + 1),
        Err(HuffmanError::InvalidAlphabet { size: MAX_ALPHABET_SIZE + 1 })
    );
    assert_eq!(Alphabet::new(usize::MAX / 4), Err(HuffmanError::InvalidAlphabet { size: usize::MAX / 4 }));
}
