//======================================================================
// rc5x/src/backends/soft.rs
// Software (scalar) RC5 round functions and the `cipher` block backends
// that drive them.
//======================================================================

use crate::block::Rc5Core;
use crate::word::Word;
use cipher::consts::U1;
use cipher::inout::InOut;
use cipher::{Block, BlockBackend, BlockSizeUser, ParBlocksSizeUser};

/// Encrypting backend borrowed from an `Rc5Core`.
pub struct Encryptor<'a, W: Word>(pub(crate) &'a Rc5Core<W>);

/// Decrypting backend borrowed from an `Rc5Core`.
pub struct Decryptor<'a, W: Word>(pub(crate) &'a Rc5Core<W>);

impl<'a, W: Word> BlockSizeUser for Encryptor<'a, W> {
    type BlockSize = W::BlockSize;
}

impl<'a, W: Word> ParBlocksSizeUser for Encryptor<'a, W> {
    type ParBlocksSize = U1;
}

impl<'a, W: Word> BlockBackend for Encryptor<'a, W> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let (a, b) = load::<W>(block.get_in());
        let (a, b) = encrypt_words(self.0.round_keys(), a, b);
        store(block.get_out(), a, b);
    }
}

impl<'a, W: Word> BlockSizeUser for Decryptor<'a, W> {
    type BlockSize = W::BlockSize;
}

impl<'a, W: Word> ParBlocksSizeUser for Decryptor<'a, W> {
    type ParBlocksSize = U1;
}

impl<'a, W: Word> BlockBackend for Decryptor<'a, W> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let (a, b) = load::<W>(block.get_in());
        let (a, b) = decrypt_words(self.0.round_keys(), a, b);
        store(block.get_out(), a, b);
    }
}

#[inline(always)]
fn load<W: Word>(block: &[u8]) -> (W, W) {
    let (a, b) = block.split_at(W::BYTES);
    (W::from_le_slice(a), W::from_le_slice(b))
}

#[inline(always)]
fn store<W: Word>(block: &mut [u8], a: W, b: W) {
    let (lo, hi) = block.split_at_mut(W::BYTES);
    a.write_le(lo);
    b.write_le(hi);
}

/// Forward rounds. `s` holds `2 * (R + 1)` round keys.
#[inline(always)]
pub(crate) fn encrypt_words<W: Word>(s: &[W], a: W, b: W) -> (W, W) {
    let mut a = a.wrapping_add(s[0]);
    let mut b = b.wrapping_add(s[1]);
    for k in s[2..].chunks_exact(2) {
        a = (a ^ b).rotl(b).wrapping_add(k[0]);
        b = (b ^ a).rotl(a).wrapping_add(k[1]);
    }
    (a, b)
}

/// Inverse rounds, last round first. `b` is undone before `a` because its
/// round used the already-updated `a`.
#[inline(always)]
pub(crate) fn decrypt_words<W: Word>(s: &[W], a: W, b: W) -> (W, W) {
    let (mut a, mut b) = (a, b);
    for k in s[2..].chunks_exact(2).rev() {
        b = b.wrapping_sub(k[1]).rotr(a) ^ a;
        a = a.wrapping_sub(k[0]).rotr(b) ^ b;
    }
    (a.wrapping_sub(s[0]), b.wrapping_sub(s[1]))
}
