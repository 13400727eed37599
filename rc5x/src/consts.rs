//======================================================================
// rc5x/src/consts.rs
// Magic constants and fixed parameters of RC5.
//======================================================================

/// `Odd((e - 2) * 2^16)` and `Odd((phi - 1) * 2^16)`.
pub const P16: u16 = 0xB7E1;
pub const Q16: u16 = 0x9E37;

/// `Odd((e - 2) * 2^32)` and `Odd((phi - 1) * 2^32)`.
pub const P32: u32 = 0xB7E1_5163;
pub const Q32: u32 = 0x9E37_79B9;

/// `Odd((e - 2) * 2^64)` and `Odd((phi - 1) * 2^64)`.
pub const P64: u64 = 0xB7E1_5162_8AED_2A6B;
pub const Q64: u64 = 0x9E37_79B9_7F4A_7C15;

/// Fixed rotation applied to the round-key accumulator while mixing the key.
pub const SCHEDULE_ROTATION: u32 = 3;

/// The key-mixing loop runs `MIX_PASSES * max(c, T)` times.
pub const MIX_PASSES: usize = 3;

/// Merkle-Damgard end-of-message marker.
pub const PAD_MARKER: u8 = 0x80;

/// Width of the trailing bit-length field in the padded message.
pub const LENGTH_FIELD_BYTES: usize = 8;

/// Reference parameters: RC5-32/12 keyed with `b"default-key"`.
pub const DEFAULT_WORD_BITS: u32 = 32;
pub const DEFAULT_ROUNDS: u8 = 12;
pub const DEFAULT_KEY: &[u8] = b"default-key";
