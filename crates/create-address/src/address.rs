//! Contract address derivation.
use crate::{decode_hex, rlp_encode_list, InvalidInput};
use alloy_primitives::{keccak256, Address, B256};

/// Returns the address for the legacy `CREATE` scheme.
///
/// This is the last 20 bytes of `keccak256(rlp([sender, nonce]))`. The hash is
/// the original Keccak-256, not the standardized SHA3-256.
pub fn derive_address(sender: &[u8], nonce: u64) -> Address {
    Address::from_word(keccak256(rlp_encode_list(sender, nonce)))
}

/// Same as [`derive_address`] with the sender given as a hex string.
pub fn derive_address_hex(sender: &str, nonce: u64) -> Result<Address, InvalidInput> {
    Ok(derive_address(&decode_hex(sender)?, nonce))
}

/// Returns the address for the `CREATE2` scheme.
pub fn create2_address(sender: Address, salt: B256, init_code_hash: B256) -> Address {
    let mut preimage = [0u8; 1 + 20 + 32 + 32];
    preimage[0] = 0xff;
    preimage[1..21].copy_from_slice(sender.as_slice());
    preimage[21..53].copy_from_slice(salt.as_slice());
    preimage[53..].copy_from_slice(init_code_hash.as_slice());
    Address::from_word(keccak256(preimage))
}
