//! NIST SP 800-38D: AES-256-GCM known-answer vector, through the
//! `seal`/`open` wrapper used by the engine.

use zeroxqr_crypto_core::symmetric::{open, seal, KEY_LEN, NONCE_LEN, TAG_LEN};
use zeroxqr_crypto_core::CryptoError;

/// Test Case 14: zero key, zero IV, 16 zero bytes of plaintext, no AAD.
const TC14_CT: [u8; 16] = [
    0xce, 0xa7, 0x40, 0x3d, 0x4d, 0x60, 0x6b, 0x6e, 0x07, 0x4e, 0xc5, 0xd3, 0xba, 0xf3, 0x9d,
    0x18,
];
const TC14_TAG: [u8; TAG_LEN] = [
    0xd0, 0xd1, 0xc8, 0xa7, 0x99, 0x99, 0x6b, 0xf0, 0x26, 0x5b, 0x98, 0xb5, 0xd4, 0x8a, 0xb9,
    0x19,
];

#[test]
fn nist_test_case_14_seal() {
    let sealed = seal(&[0u8; 16], &[0u8; KEY_LEN], &[0u8; NONCE_LEN]).expect("seal should succeed");
    assert_eq!(sealed.ciphertext, TC14_CT, "ciphertext mismatch");
    assert_eq!(sealed.tag, TC14_TAG, "tag mismatch");
    assert_eq!(sealed.nonce, [0u8; NONCE_LEN]);
}

#[test]
fn nist_test_case_14_open() {
    let plaintext = open(&TC14_CT, &TC14_TAG, &[0u8; KEY_LEN], &[0u8; NONCE_LEN])
        .expect("open should succeed");
    assert_eq!(plaintext.expose(), &[0u8; 16]);
}

#[test]
fn nist_test_case_14_flipped_tag_bit_rejected() {
    let mut tag = TC14_TAG;
    tag[0] ^= 0x01;
    assert!(matches!(
        open(&TC14_CT, &tag, &[0u8; KEY_LEN], &[0u8; NONCE_LEN]),
        Err(CryptoError::Authentication)
    ));
}
