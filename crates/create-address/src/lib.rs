//! # create-address
//!
//! RLP encoding of `[sender, nonce]` and legacy `CREATE` contract address
//! derivation, plus the generator for the `test(...)` vectors built from them.

pub mod address;
pub mod error;
pub mod input;
pub mod rlp;
pub mod vectors;

pub use address::{create2_address, derive_address, derive_address_hex};
pub use alloy_primitives::{Address, B256};
pub use error::{DecodeError, Error, InvalidInput};
pub use input::{decode_address, decode_hex, ADDRESS_LENGTH};
pub use rlp::{decode_create_payload, rlp_encode_list, rlp_encode_list_hex};
pub use vectors::{generate, test_nonces, write_test_cases, TestCase, TEST_SENDER};
