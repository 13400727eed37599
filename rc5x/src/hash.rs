//======================================================================
// rc5x/src/hash.rs
// One-way hash: Merkle-Damgard padding, then a Davies-Meyer compression
// step per block with RC5 keyed by the message block itself.
//======================================================================

use crate::block::Rc5Core;
use crate::consts::{LENGTH_FIELD_BYTES, PAD_MARKER};
use crate::error::{Error, Result};
use crate::params::WordSize;
use crate::rc5::Rc5;
use crate::word::Word;
use cipher::{Block, BlockEncrypt};
use std::path::Path;

/// Appends `0x80`, zeros up to `len + 8 ≡ 0 (mod block_bytes)`, then the
/// original length in bits as a little-endian `u64`.
///
/// The result is always a non-empty multiple of `block_bytes`.
pub fn md_pad(data: &[u8], block_bytes: usize) -> Vec<u8> {
    let bit_len = (data.len() as u64).wrapping_mul(8);
    let zeros = (block_bytes - (data.len() + 1 + LENGTH_FIELD_BYTES) % block_bytes) % block_bytes;

    let mut padded = Vec::with_capacity(data.len() + 1 + zeros + LENGTH_FIELD_BYTES);
    padded.extend_from_slice(data);
    padded.push(PAD_MARKER);
    padded.resize(padded.len() + zeros, 0);
    padded.extend_from_slice(&bit_len.to_le_bytes());
    padded
}

/// Davies-Meyer step: `E_{key_block}(chaining) ^ chaining`.
///
/// The key schedule for `key_block` lives only for this call.
pub fn compress(
    word_size: WordSize,
    rounds: u8,
    key_block: &[u8],
    chaining: &[u8],
) -> Result<Vec<u8>> {
    let expected = word_size.block_bytes();
    if chaining.len() != expected {
        return Err(Error::InvalidBlockLength {
            expected,
            actual: chaining.len(),
        });
    }
    let mut h = chaining.to_vec();
    match word_size {
        WordSize::W16 => compress_in_place::<u16>(rounds, key_block, &mut h),
        WordSize::W32 => compress_in_place::<u32>(rounds, key_block, &mut h),
        WordSize::W64 => compress_in_place::<u64>(rounds, key_block, &mut h),
    }
    Ok(h)
}

/// Hashes `data` with RC5-`word_size`/`rounds` as the compression function.
///
/// `digest_size` truncates the digest; `None` or anything larger than one
/// block returns the whole block.
pub fn digest(word_size: WordSize, rounds: u8, data: &[u8], digest_size: Option<usize>) -> Vec<u8> {
    let mut h = match word_size {
        WordSize::W16 => chain::<u16>(rounds, data),
        WordSize::W32 => chain::<u32>(rounds, data),
        WordSize::W64 => chain::<u64>(rounds, data),
    };
    if let Some(size) = digest_size {
        h.truncate(size);
    }
    h
}

fn chain<W: Word>(rounds: u8, data: &[u8]) -> Vec<u8> {
    let block_bytes = Rc5Core::<W>::block_bytes();
    let mut h = vec![0u8; block_bytes];
    for m in md_pad(data, block_bytes).chunks_exact(block_bytes) {
        compress_in_place::<W>(rounds, m, &mut h);
    }
    h
}

/// `h` must be exactly one block long.
fn compress_in_place<W: Word>(rounds: u8, key_block: &[u8], h: &mut [u8]) {
    let engine = Rc5Core::<W>::new(rounds, key_block);
    let mut e = Block::<Rc5Core<W>>::clone_from_slice(h);
    engine.encrypt_block(&mut e);
    for (byte, mask) in h.iter_mut().zip(e.iter()) {
        *byte ^= mask;
    }
}

impl Rc5 {
    /// Hashes `data` with this instance's word size and round count. The
    /// instance key plays no part: each block is keyed by its own bytes.
    ///
    /// ```
    /// use rc5x::Rc5;
    ///
    /// let rc5 = Rc5::default();
    /// let full = rc5.hash_bytes(b"abc", None);
    /// assert_eq!(full.len(), 4 * 2);
    /// assert_eq!(rc5.hash_bytes(b"abc", Some(3)), &full[..3]);
    /// ```
    pub fn hash_bytes(&self, data: &[u8], digest_size: Option<usize>) -> Vec<u8> {
        digest(self.word_size(), self.rounds(), data, digest_size)
    }

    /// Reads the whole file and hashes it.
    pub fn hash_file(&self, path: impl AsRef<Path>, digest_size: Option<usize>) -> Result<Vec<u8>> {
        let data = std::fs::read(path)?;
        Ok(self.hash_bytes(&data, digest_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_layout() {
        let padded = md_pad(b"abc", 8);
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[..4], b"abc\x80");
        assert_eq!(&padded[4..8], &[0u8; 4]);
        assert_eq!(&padded[8..], &24u64.to_le_bytes());
    }

    #[test]
    fn padding_of_empty_input() {
        for block_bytes in [4, 8, 16] {
            let padded = md_pad(&[], block_bytes);
            assert_eq!(padded.len() % block_bytes, 0);
            assert_eq!(padded[0], 0x80);
            assert_eq!(&padded[padded.len() - 8..], &[0u8; 8]);
        }
        assert_eq!(md_pad(&[], 16).len(), 16);
        assert_eq!(md_pad(&[], 4).len(), 12);
    }

    #[test]
    fn padding_lengths_are_block_multiples() {
        for block_bytes in [4usize, 8, 16] {
            for len in 0..64usize {
                let data = vec![0xA5u8; len];
                let padded = md_pad(&data, block_bytes);
                assert!(!padded.is_empty());
                assert_eq!(padded.len() % block_bytes, 0, "len {len}, block {block_bytes}");
                // Marker plus length always fit, with less than one block of zeros.
                assert!(padded.len() >= len + 9);
                assert!(padded.len() < len + 9 + block_bytes);
                let tail: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
                assert_eq!(u64::from_le_bytes(tail), (len * 8) as u64);
            }
        }
    }

    #[test]
    fn compress_is_encrypt_xor_chaining() {
        let key_block = b"\x01\x02\x03\x04\x05\x06\x07\x08";
        let chaining = b"\x10\x20\x30\x40\x50\x60\x70\x80";

        let out = compress(WordSize::W32, 12, key_block, chaining).unwrap();

        let rc5 = Rc5::new(32, 12, key_block).unwrap();
        let e = rc5.encrypt_block(chaining).unwrap();
        let expected: Vec<u8> = e.iter().zip(chaining).map(|(a, b)| a ^ b).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn compress_rejects_wrong_chaining_length() {
        let err = compress(WordSize::W16, 4, b"abcd", b"abc").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBlockLength {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn digest_folds_compress_over_padded_blocks() {
        let data = b"hello world";
        let mut h = vec![0u8; 8];
        for m in md_pad(data, 8).chunks(8) {
            h = compress(WordSize::W32, 12, m, &h).unwrap();
        }
        assert_eq!(digest(WordSize::W32, 12, data, None), h);
    }

    #[test]
    fn zero_digest_size_yields_empty_digest() {
        assert!(digest(WordSize::W64, 12, b"x", Some(0)).is_empty());
        assert_eq!(digest(WordSize::W64, 12, b"x", Some(99)).len(), 16);
    }
}
