//======================================================================
// rc5x/src/block.rs
// Statically typed RC5 engine. The word type fixes `w`; the round count
// and key are runtime values.
//======================================================================

use crate::backends;
use crate::error::{Error, Result};
use crate::schedule::KeySchedule;
use crate::word::Word;
use cipher::{
    Block, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser,
};
use core::fmt;

/// RC5 on words of type `W`, holding its expanded key schedule.
///
/// The engine implements the `cipher` block traits, so it plugs into anything
/// written against `BlockEncrypt` / `BlockDecrypt`:
///
/// ```
/// use rc5x::Rc5_32;
/// use rc5x::cipher::{Block, BlockDecrypt, BlockEncrypt};
///
/// let rc5 = Rc5_32::new(12, b"default-key");
/// let mut block = Block::<Rc5_32>::default();
/// rc5.encrypt_block(&mut block);
/// assert_ne!(block.as_slice(), &[0u8; 8]);
/// rc5.decrypt_block(&mut block);
/// assert_eq!(block.as_slice(), &[0u8; 8]);
/// ```
#[derive(Clone)]
pub struct Rc5Core<W: Word> {
    schedule: KeySchedule<W>,
}

impl<W: Word> Rc5Core<W> {
    /// Expands `key` for `rounds` rounds. Any key length is accepted.
    pub fn new(rounds: u8, key: &[u8]) -> Self {
        Self {
            schedule: KeySchedule::new(rounds, key),
        }
    }

    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// Block length in bytes.
    pub const fn block_bytes() -> usize {
        2 * W::BYTES
    }

    #[inline]
    pub(crate) fn round_keys(&self) -> &[W] {
        self.schedule.words()
    }

    /// Encrypts one block given as a byte slice, in place.
    pub fn encrypt_bytes(&self, block: &mut [u8]) -> Result<()> {
        let block = Self::as_block(block)?;
        self.encrypt_block(block);
        Ok(())
    }

    /// Decrypts one block given as a byte slice, in place.
    pub fn decrypt_bytes(&self, block: &mut [u8]) -> Result<()> {
        let block = Self::as_block(block)?;
        self.decrypt_block(block);
        Ok(())
    }

    fn as_block(bytes: &mut [u8]) -> Result<&mut Block<Self>> {
        if bytes.len() != Self::block_bytes() {
            return Err(Error::InvalidBlockLength {
                expected: Self::block_bytes(),
                actual: bytes.len(),
            });
        }
        Ok(Block::<Self>::from_mut_slice(bytes))
    }
}

impl<W: Word> BlockSizeUser for Rc5Core<W> {
    type BlockSize = W::BlockSize;
}

impl<W: Word> BlockCipher for Rc5Core<W> {}

impl<W: Word> BlockEncrypt for Rc5Core<W> {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::Encryptor(self));
    }
}

impl<W: Word> BlockDecrypt for Rc5Core<W> {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::Decryptor(self));
    }
}

impl<W: Word> fmt::Debug for Rc5Core<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rc5Core")
            .field("word_bits", &W::BITS)
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}
