//! Fixed checksum values; a change here breaks every stored record.

use zeroxqr_crypto_core::checksum::checksum;
use zeroxqr_crypto_core::unified_format::{compose, parse, EncryptionComponents};

#[test]
fn checksum_of_minimal_record_body() {
    assert_eq!(checksum("0xQR|v2|AAAA|AAAA|AAAA|AAAA"), "7o16IE4m");
}

#[test]
fn composed_record_matches_fixed_text() {
    let components = EncryptionComponents {
        ciphertext: vec![0, 0, 0],
        salt: vec![0, 0, 0],
        nonce: vec![0, 0, 0],
        auth_tag: vec![0, 0, 0],
    };
    let text = compose(&components);
    assert_eq!(text, "0xQR|v2|AAAA|AAAA|AAAA|AAAA|7o16IE4m");
    assert_eq!(parse(&text).expect("parse should succeed"), components);
}
