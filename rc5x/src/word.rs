//======================================================================
// rc5x/src/word.rs
// Word-size abstraction. Every supported RC5 width is a `Word` impl that
// carries its own magic constants and block size.
//======================================================================

use crate::consts::{P16, P32, P64, Q16, Q32, Q64};
use cipher::consts::{U16, U4, U8};
use core::fmt::Debug;
use core::ops::BitXor;
use zeroize::Zeroize;

/// An unsigned machine word RC5 can run on.
///
/// All arithmetic is modulo `2^BITS`, which the native wrapping operations
/// give us for free.
pub trait Word:
    Copy + Default + Eq + Debug + BitXor<Output = Self> + Zeroize + Send + Sync + Sized + 'static
{
    /// Block size in bytes (two words) as a type-level integer.
    type BlockSize: cipher::ArrayLength<u8>;

    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;

    /// Magic constant `P` for this width.
    const P: Self;
    /// Magic constant `Q` for this width.
    const Q: Self;

    const ZERO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Rotates left by a fixed amount.
    fn rotl_const(self, n: u32) -> Self;

    /// Rotates left by the low `log2(BITS)` bits of `amount`.
    fn rotl(self, amount: Self) -> Self;

    /// Rotates right by the low `log2(BITS)` bits of `amount`.
    fn rotr(self, amount: Self) -> Self;

    /// Reads a little-endian word. Missing high bytes count as zero, so a
    /// short slice behaves like a zero-padded one.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Writes the word little-endian into `out[..BYTES]`.
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($ty:ty, $block:ty, $p:expr, $q:expr) => {
        impl Word for $ty {
            type BlockSize = $block;

            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = core::mem::size_of::<$ty>();
            const P: Self = $p;
            const Q: Self = $q;
            const ZERO: Self = 0;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn rotl_const(self, n: u32) -> Self {
                self.rotate_left(n % Self::BITS)
            }

            #[inline(always)]
            fn rotl(self, amount: Self) -> Self {
                // BITS is a power of two, so truncating before the modulo is exact.
                self.rotate_left((amount as u32) % Self::BITS)
            }

            #[inline(always)]
            fn rotr(self, amount: Self) -> Self {
                self.rotate_right((amount as u32) % Self::BITS)
            }

            #[inline]
            fn from_le_slice(bytes: &[u8]) -> Self {
                bytes
                    .iter()
                    .take(Self::BYTES)
                    .rev()
                    .fold(0, |acc, &b| (acc << 8) | <$ty>::from(b))
            }

            #[inline]
            fn write_le(self, out: &mut [u8]) {
                out[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
            }
        }
    };
}

impl_word!(u16, U4, P16, Q16);
impl_word!(u32, U8, P32, Q32);
impl_word!(u64, U16, P64, Q64);
