//======================================================================
// rc5x/src/diffusion.rs
// Avalanche check: flip one input bit, hash both inputs, count the
// digest bits that changed.
//======================================================================

use crate::error::{Error, Result};
use crate::rc5::Rc5;
use core::fmt;

/// Outcome of a single-bit avalanche comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvalancheReport {
    /// Lowercase hex digest of the input as given.
    pub original_hex: String,
    /// Lowercase hex digest of the input with one bit flipped.
    pub modified_hex: String,
    /// Hamming distance between the two digests.
    pub differing_bits: u32,
    /// Length of the original digest in bytes.
    pub digest_len: usize,
}

impl AvalancheReport {
    /// Share of digest bits that flipped, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.digest_len == 0 {
            return 0.0;
        }
        f64::from(self.differing_bits) / (self.digest_len * 8) as f64
    }
}

impl fmt::Display for AvalancheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "original:       {}", self.original_hex)?;
        writeln!(f, "modified:       {}", self.modified_hex)?;
        writeln!(
            f,
            "differing bits: {} / {}",
            self.differing_bits,
            self.digest_len * 8
        )?;
        write!(f, "digest length:  {} bytes", self.digest_len)
    }
}

/// Returns `data` with bit `bit_index % 8` of byte `byte_index % len`
/// flipped. Empty input becomes `byte_index + 1` zero bytes with the bit
/// flipped in the last one.
///
/// Fails with `ByteIndexTooLarge` when that buffer cannot be allocated,
/// including `byte_index == usize::MAX`.
pub fn flip_bit(data: &[u8], byte_index: usize, bit_index: u32) -> Result<Vec<u8>> {
    let mask = 1u8 << (bit_index % 8);
    if data.is_empty() {
        let len = byte_index
            .checked_add(1)
            .ok_or(Error::ByteIndexTooLarge(byte_index))?;
        let mut modified = Vec::new();
        modified
            .try_reserve_exact(len)
            .map_err(|_| Error::ByteIndexTooLarge(byte_index))?;
        modified.resize(len, 0);
        modified[byte_index] ^= mask;
        return Ok(modified);
    }
    let mut modified = data.to_vec();
    modified[byte_index % data.len()] ^= mask;
    Ok(modified)
}

/// Number of differing bits; the shorter digest is treated as zero-extended.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            (x ^ y).count_ones()
        })
        .sum()
}

/// Runs the avalanche comparison with an arbitrary hash function.
pub fn compare<H>(
    hash: H,
    data: &[u8],
    byte_index: usize,
    bit_index: u32,
) -> Result<AvalancheReport>
where
    H: Fn(&[u8]) -> Vec<u8>,
{
    let flipped = flip_bit(data, byte_index, bit_index)?;
    let original = hash(data);
    let modified = hash(&flipped);
    Ok(AvalancheReport {
        original_hex: hex::encode(&original),
        modified_hex: hex::encode(&modified),
        differing_bits: hamming_distance(&original, &modified),
        digest_len: original.len(),
    })
}

impl Rc5 {
    /// Avalanche comparison using the full-length digest of this instance.
    pub fn avalanche(
        &self,
        data: &[u8],
        byte_index: usize,
        bit_index: u32,
    ) -> Result<AvalancheReport> {
        compare(|d| self.hash_bytes(d, None), data, byte_index, bit_index)
    }
}
