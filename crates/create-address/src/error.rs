//! Error types.
use thiserror::Error;

/// Malformed input handed to the encoder or the address derivation.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidInput {
    /// The string is not valid hexadecimal.
    #[error("invalid hex string: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Decoded bytes do not form a 20-byte address.
    #[error("expected 20 address bytes, got {len}")]
    AddressLength {
        /// Number of decoded bytes.
        len: usize,
    },
}

/// Errors returned while decoding an RLP encoded `[sender, nonce]` list.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// Malformed or non-canonical RLP.
    #[error(transparent)]
    Rlp(#[from] alloy_rlp::Error),
    /// Bytes remain after the top level list.
    #[error("{0} trailing bytes after list")]
    TrailingBytes(usize),
    /// The list does not hold exactly two items.
    #[error("expected 2 list items, got {0}")]
    ListLength(usize),
}

/// Errors aborting test-vector generation.
#[derive(Debug, Error)]
pub enum Error {
    /// Sender or nonce could not be used.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// Writing a test case failed.
    #[error("failed to write test case: {0}")]
    Io(#[from] std::io::Error),
}
