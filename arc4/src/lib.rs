//======================================================================
// arc4/src/lib.rs
// Crate entry point for the ARC4 keystream cipher.
//======================================================================

#![cfg_attr(docsrs, feature(doc_cfg))]

//! ARC4 (alleged RC4) keystream cipher.
//!
//! Encryption and decryption are the same operation: XOR with the
//! keystream. ARC4 is broken as a cipher and is provided for interoperability
//! with existing data only.
//!
//! ```
//! use arc4::Arc4;
//! use arc4::cipher::{consts::U3, KeyInit, StreamCipher};
//!
//! let mut data = *b"Plaintext";
//! Arc4::<U3>::new(b"Key".into()).apply_keystream(&mut data);
//! assert_eq!(data, [0xbb, 0xf3, 0x16, 0xe8, 0xd9, 0x40, 0xaf, 0x0a, 0xd3]);
//! ```

// --- Module Declarations ---

mod backends;
pub mod consts;
pub mod stream;

// --- Test Module ---
#[cfg(test)]
mod tests;

// --- Re-exports ---

pub use cipher;
pub use stream::{apply_keystream, Arc4, Arc4Core, Arc4KeySize, Keystream};
