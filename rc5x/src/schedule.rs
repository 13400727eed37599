//======================================================================
// rc5x/src/schedule.rs
// Key expansion: align the raw key into words, seed the round-key table
// from (P, Q), then mix the two together.
//======================================================================

use crate::consts::{MIX_PASSES, SCHEDULE_ROTATION};
use crate::word::Word;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Expanded round-key table `S[0..T]`, `T = 2 * (rounds + 1)`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule<W: Word> {
    words: Vec<W>,
}

impl<W: Word> KeySchedule<W> {
    pub fn new(rounds: u8, key: &[u8]) -> Self {
        let mut l = align_key::<W>(key);
        let mut words = seed::<W>(2 * (usize::from(rounds) + 1));
        mix(&mut words, &mut l);
        l.zeroize();
        Self { words }
    }

    /// The round keys in order.
    #[inline]
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Number of rounds this schedule was expanded for.
    pub fn rounds(&self) -> usize {
        self.words.len() / 2 - 1
    }
}

/// Packs the key into `max(1, ceil(len / BYTES))` little-endian words.
/// The last word is implicitly zero-padded; an empty key is one zero word.
pub(crate) fn align_key<W: Word>(key: &[u8]) -> Vec<W> {
    if key.is_empty() {
        return vec![W::ZERO];
    }
    key.chunks(W::BYTES).map(W::from_le_slice).collect()
}

/// `S[i] = P + i * Q (mod 2^w)`.
fn seed<W: Word>(t: usize) -> Vec<W> {
    let mut words = Vec::with_capacity(t);
    let mut value = W::P;
    for _ in 0..t {
        words.push(value);
        value = value.wrapping_add(W::Q);
    }
    words
}

fn mix<W: Word>(s: &mut [W], l: &mut [W]) {
    let (t, c) = (s.len(), l.len());
    let (mut a, mut b) = (W::ZERO, W::ZERO);
    let (mut i, mut j) = (0, 0);

    for _ in 0..MIX_PASSES * t.max(c) {
        a = s[i].wrapping_add(a).wrapping_add(b).rotl_const(SCHEDULE_ROTATION);
        s[i] = a;
        let ab = a.wrapping_add(b);
        b = l[j].wrapping_add(ab).rotl(ab);
        l[j] = b;
        i = (i + 1) % t;
        j = (j + 1) % c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{P32, Q32};

    #[test]
    fn key_alignment_is_little_endian_and_zero_padded() {
        let l = align_key::<u32>(b"\x01\x02\x03\x04\x05");
        assert_eq!(l, vec![0x0403_0201, 0x0000_0005]);

        let l = align_key::<u16>(b"ab");
        assert_eq!(l, vec![u16::from_le_bytes(*b"ab")]);
    }

    #[test]
    fn empty_key_aligns_to_one_zero_word() {
        assert_eq!(align_key::<u64>(&[]), vec![0u64]);
        assert_eq!(align_key::<u16>(&[]), vec![0u16]);
    }

    #[test]
    fn seed_follows_arithmetic_progression() {
        let s = seed::<u32>(4);
        assert_eq!(s[0], P32);
        assert_eq!(s[1], P32.wrapping_add(Q32));
        assert_eq!(s[3], P32.wrapping_add(Q32.wrapping_mul(3)));
    }

    #[test]
    fn table_length_tracks_rounds() {
        for rounds in [0u8, 1, 12, 255] {
            let schedule = KeySchedule::<u16>::new(rounds, b"k");
            assert_eq!(schedule.words().len(), 2 * (usize::from(rounds) + 1));
            assert_eq!(schedule.rounds(), usize::from(rounds));
        }
    }

    #[test]
    fn empty_key_matches_explicit_zero_word() {
        let empty = KeySchedule::<u32>::new(12, &[]);
        let zero = KeySchedule::<u32>::new(12, &[0u8; 4]);
        assert_eq!(empty.words(), zero.words());
    }

    #[test]
    fn key_changes_schedule() {
        let a = KeySchedule::<u64>::new(8, b"alpha");
        let b = KeySchedule::<u64>::new(8, b"alphb");
        assert_ne!(a.words(), b.words());
    }
}
