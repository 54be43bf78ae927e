//! RLP encoding of the `[sender, nonce]` list hashed by the `CREATE` scheme.
use crate::{decode_hex, DecodeError, InvalidInput};
use alloy_rlp::{Decodable, Encodable, Header};

/// RLP encodes the list `[sender, nonce]`.
///
/// The nonce is written as its minimal big-endian bytes, so zero becomes the
/// empty string (`0x80`).
pub fn rlp_encode_list(sender: &[u8], nonce: u64) -> Vec<u8> {
    let header = Header {
        list: true,
        payload_length: sender.length() + nonce.length(),
    };
    let mut out = Vec::with_capacity(header.length() + header.payload_length);
    header.encode(&mut out);
    sender.encode(&mut out);
    nonce.encode(&mut out);
    out
}

/// Same as [`rlp_encode_list`] with the sender given as a hex string.
pub fn rlp_encode_list_hex(sender: &str, nonce: u64) -> Result<Vec<u8>, InvalidInput> {
    Ok(rlp_encode_list(&decode_hex(sender)?, nonce))
}

/// Counts the items in a list payload without decoding them.
fn count_items(mut payload: &[u8]) -> Result<usize, DecodeError> {
    let mut count = 0;
    while !payload.is_empty() {
        let header = Header::decode(&mut payload)?;
        payload = &payload[header.payload_length..];
        count += 1;
    }
    Ok(count)
}

/// Decodes an RLP encoded `[sender, nonce]` list, the inverse of [`rlp_encode_list`].
///
/// Only canonical encodings are accepted.
pub fn decode_create_payload(input: &[u8]) -> Result<(Vec<u8>, u64), DecodeError> {
    let mut buf = input;
    let header = Header::decode(&mut buf)?;
    if !header.list {
        return Err(alloy_rlp::Error::UnexpectedString.into());
    }
    if buf.len() < header.payload_length {
        return Err(alloy_rlp::Error::InputTooShort.into());
    }
    let (mut payload, rest) = buf.split_at(header.payload_length);
    if !rest.is_empty() {
        return Err(DecodeError::TrailingBytes(rest.len()));
    }

    let items = count_items(payload)?;
    if items != 2 {
        return Err(DecodeError::ListLength(items));
    }

    let sender = Header::decode_bytes(&mut payload, false)?.to_vec();
    let nonce = u64::decode(&mut payload)?;
    Ok((sender, nonce))
}
