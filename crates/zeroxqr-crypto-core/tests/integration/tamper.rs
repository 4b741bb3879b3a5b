//! Altered records never decrypt.
//!
//! Each case re-composes the record so the checksum is valid again; the
//! AEAD tag is then the only thing standing between the edit and the
//! plaintext.

use zeroxqr_crypto_core::unified_format::{compose, parse, EncryptionComponents};
use zeroxqr_crypto_core::{decrypt, encrypt, EngineError, FormatError};

const PASSWORD: &str = "tamper-test-password";

fn record() -> (String, EncryptionComponents) {
    let unified = encrypt("the eagle lands at midnight", PASSWORD).expect("encrypt should succeed");
    let components = parse(&unified).expect("parse should succeed");
    (unified, components)
}

fn assert_rejected(components: &EncryptionComponents) {
    let err = decrypt(&compose(components), PASSWORD).expect_err("tampered record should fail");
    assert!(matches!(err, EngineError::Authentication), "got {err:?}");
}

#[test]
fn flipped_ciphertext_bits_fail_authentication() {
    let (_, original) = record();
    for index in [0, original.ciphertext.len() - 1] {
        let mut c = original.clone();
        c.ciphertext[index] ^= 0x80;
        assert_rejected(&c);
    }
}

#[test]
fn flipped_tag_bits_fail_authentication() {
    let (_, original) = record();
    for index in [0, 15] {
        let mut c = original.clone();
        c.auth_tag[index] ^= 0x01;
        assert_rejected(&c);
    }
}

#[test]
fn altered_nonce_fails_authentication() {
    let (_, mut c) = record();
    c.nonce[0] ^= 0xFF;
    assert_rejected(&c);
}

#[test]
fn altered_salt_fails_authentication() {
    let (_, mut c) = record();
    c.salt[31] ^= 0x10;
    assert_rejected(&c);
}

#[test]
fn truncated_ciphertext_fails_authentication() {
    let (_, mut c) = record();
    c.ciphertext.pop();
    assert_rejected(&c);
}

#[test]
fn wrong_password_fails_authentication() {
    let (unified, _) = record();
    for wrong in ["tamper-test-passworD", "tamper-test-password ", "completely different"] {
        let err = decrypt(&unified, wrong).expect_err("wrong password should fail");
        assert!(matches!(err, EngineError::Authentication));
        assert_eq!(err.user_message(), "Wrong password or corrupted/tampered data");
    }
}

#[test]
fn edited_text_without_new_checksum_fails_before_crypto() {
    let (unified, _) = record();
    // Swap one character inside the ciphertext field.
    let start = "0xQR|v2|".len();
    let original = unified.as_bytes()[start];
    let replacement = if original == b'A' { "B" } else { "A" };
    let mut edited = unified.clone();
    edited.replace_range(start..=start, replacement);

    let err = decrypt(&edited, PASSWORD).expect_err("edited record should fail");
    assert!(matches!(
        err,
        EngineError::Format(FormatError::IntegrityCheckFailed)
    ));
}

#[test]
fn truncated_text_is_malformed() {
    let (unified, _) = record();
    let cut = unified.rfind('|').unwrap();
    let err = decrypt(&unified[..cut], PASSWORD).expect_err("truncated record should fail");
    assert!(matches!(
        err,
        EngineError::Format(FormatError::MalformedStructure { found: 6, .. })
    ));
}
