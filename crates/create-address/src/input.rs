//! Decoding of hex string inputs such as sender literals.
use crate::InvalidInput;
use alloy_primitives::Address;

/// Length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Decodes a hex string into bytes.
///
/// An optional `0x` or `0X` prefix is stripped. Both digit cases are accepted.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, InvalidInput> {
    let trimmed = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(hex::decode(trimmed)?)
}

/// Decodes a hex string that must hold exactly one 20-byte address.
pub fn decode_address(input: &str) -> Result<Address, InvalidInput> {
    let bytes = decode_hex(input)?;
    if bytes.len() != ADDRESS_LENGTH {
        return Err(InvalidInput::AddressLength { len: bytes.len() });
    }
    Ok(Address::from_slice(&bytes))
}
