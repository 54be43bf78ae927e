use create_address::{
    decode_create_payload, derive_address, generate, test_nonces, write_test_cases, TEST_SENDER,
};

#[test]
fn full_run_is_reproducible() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let written = write_test_cases(&mut first, TEST_SENDER, test_nonces()).unwrap();
    write_test_cases(&mut second, TEST_SENDER, test_nonces()).unwrap();

    assert_eq!(written, 286);
    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap().lines().count(), 286);
}

#[test]
fn edge_nonces_are_pinned() {
    let cases = generate(TEST_SENDER, test_nonces()).unwrap();
    let expected = [
        (142, "d794004ec07d2329997267ec62b4166639513386f32e818e", "8d7bb25141ff9c4c77e9e208b6bf4d1d3ca684b0"),
        (512, "d894004ec07d2329997267ec62b4166639513386f32e820200", "ecf98cb7016edb8e306e844a420597770de4e555"),
        (1111, "d894004ec07d2329997267ec62b4166639513386f32e820457", "e2be2e38fc6dc1eed5cab7e5af984c8ebb8c0854"),
        (222222, "d994004ec07d2329997267ec62b4166639513386f32e8303640e", "0412a526d7d49d2cf415d3081a5009d7d88466bf"),
        (3333333333, "da94004ec07d2329997267ec62b4166639513386f32e84c6aea155", "ab06f5d1b3f4f1f851ca93c536c5028c5caae9c1"),
        (4294967295, "da94004ec07d2329997267ec62b4166639513386f32e84ffffffff", "8d0819d94d68199830d1b30b8b51f1ebcf916e2f"),
    ];
    for (case, (nonce, rlp, address)) in cases.iter().zip(expected) {
        assert_eq!(case.nonce, nonce);
        assert_eq!(hex::encode(&case.rlp), rlp);
        assert_eq!(hex::encode(case.address.as_slice()), address);
    }

    let last = cases.last().unwrap();
    assert_eq!(last.nonce, 279);
    assert_eq!(
        hex::encode(last.address.as_slice()),
        "c49bc40f55763f1eebb8b4b07ecd27f9e345cd6f"
    );
}

#[test]
fn every_case_decodes_back() {
    let sender = create_address::decode_hex(TEST_SENDER).unwrap();
    for case in generate(TEST_SENDER, test_nonces()).unwrap() {
        assert_eq!(
            decode_create_payload(&case.rlp),
            Ok((sender.clone(), case.nonce))
        );
        assert_eq!(case.address, derive_address(&sender, case.nonce));
    }
}
