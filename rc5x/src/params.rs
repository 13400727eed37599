//======================================================================
// rc5x/src/params.rs
// Cipher parameters: word size, round count and raw key.
//======================================================================

use crate::consts::{DEFAULT_KEY, DEFAULT_ROUNDS};
use crate::error::{Error, Result};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Supported RC5 word widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordSize {
    W16,
    W32,
    W64,
}

impl WordSize {
    pub const ALL: [WordSize; 3] = [WordSize::W16, WordSize::W32, WordSize::W64];

    /// Word width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            WordSize::W16 => 16,
            WordSize::W32 => 32,
            WordSize::W64 => 64,
        }
    }

    pub const fn word_bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// A block is two words.
    pub const fn block_bytes(self) -> usize {
        2 * self.word_bytes()
    }
}

impl TryFrom<u32> for WordSize {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            16 => Ok(WordSize::W16),
            32 => Ok(WordSize::W32),
            64 => Ok(WordSize::W64),
            other => Err(Error::UnsupportedWordSize(other)),
        }
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// RC5-w/R/b parameters. Immutable once built.
///
/// The default is the reference configuration RC5-32/12 keyed with
/// `b"default-key"`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Rc5Params {
    #[zeroize(skip)]
    word_size: WordSize,
    #[zeroize(skip)]
    rounds: u8,
    key: Vec<u8>,
}

impl Rc5Params {
    /// Validates `word_bits` and captures the parameters.
    pub fn new(word_bits: u32, rounds: u8, key: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::with_word_size(WordSize::try_from(word_bits)?, rounds, key))
    }

    pub fn with_word_size(word_size: WordSize, rounds: u8, key: impl Into<Vec<u8>>) -> Self {
        Self {
            word_size,
            rounds,
            key: key.into(),
        }
    }

    pub fn word_size(&self) -> WordSize {
        self.word_size
    }

    pub fn rounds(&self) -> u8 {
        self.rounds
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// `2 * (w / 8)`.
    pub fn block_bytes(&self) -> usize {
        self.word_size.block_bytes()
    }

    /// Number of round keys, `T = 2 * (R + 1)`.
    pub fn round_key_count(&self) -> usize {
        2 * (usize::from(self.rounds) + 1)
    }
}

impl Default for Rc5Params {
    fn default() -> Self {
        Self {
            word_size: WordSize::W32,
            rounds: DEFAULT_ROUNDS,
            key: DEFAULT_KEY.to_vec(),
        }
    }
}

// Keys stay out of debug output.
impl fmt::Debug for Rc5Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rc5Params")
            .field("word_size", &self.word_size)
            .field("rounds", &self.rounds)
            .field("key_len", &self.key.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_WORD_BITS;

    #[test]
    fn word_size_validation() {
        assert_eq!(WordSize::try_from(16).unwrap(), WordSize::W16);
        assert_eq!(WordSize::try_from(64).unwrap().block_bytes(), 16);
        assert!(matches!(
            WordSize::try_from(24),
            Err(Error::UnsupportedWordSize(24))
        ));
        assert!(Rc5Params::new(8, 12, Vec::new()).is_err());
    }

    #[test]
    fn defaults_match_reference_configuration() {
        let params = Rc5Params::default();
        assert_eq!(params.word_size().bits(), DEFAULT_WORD_BITS);
        assert_eq!(params.rounds(), 12);
        assert_eq!(params.key(), b"default-key");
        assert_eq!(params.block_bytes(), 4 * 2);
        assert_eq!(params.round_key_count(), 26);
    }

    #[test]
    fn debug_output_hides_key() {
        let params = Rc5Params::new(32, 12, b"hunter2".to_vec()).unwrap();
        let rendered = format!("{:?}", params);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("key_len: 7"));
    }
}
