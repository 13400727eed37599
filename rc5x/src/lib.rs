#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// rc5x/src/lib.rs
// Crate entry point. Declares the public API and wires the modules.
//======================================================================


// --- Module declarations ---
pub mod consts;
pub mod word;
pub mod params;
pub mod schedule;
pub mod block;
mod backends;
mod rc5;

pub mod stream;
pub mod hash;
pub mod diffusion;
pub mod error;


pub use cipher;

pub use crate::block::Rc5Core;
pub use crate::diffusion::AvalancheReport;
pub use crate::error::{Error, Result};
pub use crate::params::{Rc5Params, WordSize};
pub use crate::rc5::Rc5;
pub use crate::stream::Padding;
pub use crate::word::Word;

// --- Convenience Type Aliases for Users ---
/// RC5 with 16-bit words (32-bit blocks).
pub type Rc5_16 = Rc5Core<u16>;
/// RC5 with 32-bit words (64-bit blocks).
pub type Rc5_32 = Rc5Core<u32>;
/// RC5 with 64-bit words (128-bit blocks).
pub type Rc5_64 = Rc5Core<u64>;
