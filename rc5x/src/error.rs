//======================================================================
// rc5x/src/error.rs
// Error type shared by every rc5x operation.
//======================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Word size outside `{16, 32, 64}`.
    #[error("unsupported word size: {0} bits (expected 16, 32 or 64)")]
    UnsupportedWordSize(u32),

    /// A block handed to encrypt/decrypt is not exactly one block long.
    #[error("invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    /// Empty input cannot be grown to hold the requested byte.
    #[error("byte index {0} is too large to flip in empty input")]
    ByteIndexTooLarge(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
