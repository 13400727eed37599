//======================================================================
// arc4/src/stream.rs
// ARC4 state, key scheduling and the `cipher` stream core built on it.
//======================================================================

use crate::backends;
use crate::consts::{MAX_KEY_LEN, STATE_LEN};
use cipher::{
    consts::{U1, U256},
    typenum::{IsLessOrEqual, NonZero, True},
    ArrayLength, BlockSizeUser, InvalidLength, Key, KeyInit, KeySizeUser, StreamCipherCore,
    StreamCipherCoreWrapper,
};
use core::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Permutation table plus the two PRGA indices.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Arc4State {
    s: [u8; STATE_LEN],
    i: u8,
    j: u8,
}

impl Arc4State {
    /// Key-scheduling algorithm. `key` must be non-empty.
    pub(crate) fn new(key: &[u8]) -> Self {
        let mut s = [0u8; STATE_LEN];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut j = 0u8;
        for i in 0..STATE_LEN {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, usize::from(j));
        }
        Self { s, i: 0, j: 0 }
    }

    /// Pseudo-random generation step: one keystream byte.
    #[inline(always)]
    pub(crate) fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[usize::from(self.i)]);
        self.s.swap(usize::from(self.i), usize::from(self.j));
        let k = self.s[usize::from(self.i)].wrapping_add(self.s[usize::from(self.j)]);
        self.s[usize::from(k)]
    }
}

/// Key lengths the typed cipher accepts: 1 to 256 bytes.
pub trait Arc4KeySize: ArrayLength<u8> + NonZero + IsLessOrEqual<U256, Output = True> {}

impl<K> Arc4KeySize for K where
    K: ArrayLength<u8> + NonZero + IsLessOrEqual<U256, Output = True>
{
}

/// ARC4 stream core with the key length fixed by `K`.
///
/// Empty and over-long key types do not satisfy [`Arc4KeySize`]:
///
/// ```compile_fail
/// use arc4::Arc4;
/// use arc4::cipher::{consts::U0, KeyInit};
///
/// let _ = Arc4::<U0>::new_from_slice(b"");
/// ```
///
/// ```compile_fail
/// use arc4::Arc4;
/// use arc4::cipher::{consts::U257, KeyInit};
///
/// let _ = Arc4::<U257>::new_from_slice(&[0u8; 257]);
/// ```
pub struct Arc4Core<K: Arc4KeySize> {
    pub(crate) state: Arc4State,
    _key_size: PhantomData<K>,
}

impl<K: Arc4KeySize> KeySizeUser for Arc4Core<K> {
    type KeySize = K;
}

impl<K: Arc4KeySize> KeyInit for Arc4Core<K> {
    fn new(key: &Key<Self>) -> Self {
        Self {
            state: Arc4State::new(key),
            _key_size: PhantomData,
        }
    }
}

impl<K: Arc4KeySize> BlockSizeUser for Arc4Core<K> {
    type BlockSize = U1;
}

impl<K: Arc4KeySize> StreamCipherCore for Arc4Core<K> {
    fn remaining_blocks(&self) -> Option<usize> {
        None
    }

    fn process_with_backend(&mut self, f: impl cipher::StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::Backend(&mut self.state));
    }
}

/// The high-level ARC4 stream cipher type.
pub type Arc4<K> = StreamCipherCoreWrapper<Arc4Core<K>>;

/// ARC4 keystream for a key whose length is only known at runtime.
///
/// ```
/// let ks: Vec<u8> = arc4::Keystream::new(b"Key").unwrap().take(3).collect();
/// assert_eq!(ks, [0xeb, 0x9f, 0x77]);
/// ```
#[derive(Clone)]
pub struct Keystream {
    state: Arc4State,
}

impl Keystream {
    /// Accepts keys of 1 to 256 bytes.
    pub fn new(key: &[u8]) -> Result<Self, InvalidLength> {
        if key.is_empty() || key.len() > MAX_KEY_LEN {
            return Err(InvalidLength);
        }
        Ok(Self {
            state: Arc4State::new(key),
        })
    }

    /// XORs the next `data.len()` keystream bytes into `data`.
    pub fn apply(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.state.next_byte();
        }
    }
}

impl Iterator for Keystream {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        Some(self.state.next_byte())
    }
}

/// Encrypts or decrypts `data` in place under `key`.
pub fn apply_keystream(key: &[u8], data: &mut [u8]) -> Result<(), InvalidLength> {
    Keystream::new(key)?.apply(data);
    Ok(())
}
