//! Test-vector generation for `CREATE` address derivation.
//!
//! Every [`TestCase`] renders as one `test(...)` line that can be pasted into
//! the consuming test suite.
use crate::{decode_hex, derive_address, rlp_encode_list, Error, InvalidInput};
use alloy_primitives::Address;
use core::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// Sender used by the generated test cases.
pub const TEST_SENDER: &str = "004ec07d2329997267ec62b4166639513386f32e";

/// Nonces exercising one to four byte encodings.
pub const EDGE_NONCES: [u64; 6] = [0x8e, 512, 1111, 222222, 3333333333, 4294967295];

/// Upper bound (inclusive) of the dense nonce range following [`EDGE_NONCES`].
pub const DENSE_NONCE_MAX: u64 = 279;

/// Nonces covered by the generated test cases, in output order.
pub fn test_nonces() -> impl Iterator<Item = u64> {
    EDGE_NONCES.into_iter().chain(0..=DENSE_NONCE_MAX)
}

/// One derived test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Sender exactly as it was supplied.
    pub sender_hex: String,
    /// Account nonce.
    pub nonce: u64,
    /// RLP encoding of `[sender, nonce]`.
    pub rlp: Vec<u8>,
    /// Derived contract address.
    pub address: Address,
}

impl TestCase {
    /// Computes the encoding and address for `sender_hex` and `nonce`.
    pub fn new(sender_hex: &str, nonce: u64) -> Result<Self, InvalidInput> {
        let sender = decode_hex(sender_hex)?;
        let rlp = rlp_encode_list(&sender, nonce);
        let address = derive_address(&sender, nonce);
        trace!(nonce, rlp = %hex::encode(&rlp), %address, "derived test case");
        Ok(Self {
            sender_hex: sender_hex.to_owned(),
            nonce,
            rlp,
            address,
        })
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "test(\"{}\", {}, \"{}\", \"{}\");",
            self.sender_hex,
            self.nonce,
            hex::encode(&self.rlp),
            hex::encode(self.address.as_slice())
        )
    }
}

/// Derives a test case for every nonce, preserving input order.
///
/// The first invalid input aborts generation.
pub fn generate(
    sender_hex: &str,
    nonces: impl IntoIterator<Item = u64>,
) -> Result<Vec<TestCase>, InvalidInput> {
    nonces
        .into_iter()
        .map(|nonce| TestCase::new(sender_hex, nonce))
        .collect()
}

/// Writes one line per nonce to `out` and returns the number of lines written.
pub fn write_test_cases<W: Write>(
    mut out: W,
    sender_hex: &str,
    nonces: impl IntoIterator<Item = u64>,
) -> Result<usize, Error> {
    debug!(sender = sender_hex, "generating test cases");
    let mut written = 0;
    for nonce in nonces {
        let case = TestCase::new(sender_hex, nonce)?;
        writeln!(out, "{case}")?;
        written += 1;
    }
    out.flush()?;
    debug!(written, "generated test cases");
    Ok(written)
}
