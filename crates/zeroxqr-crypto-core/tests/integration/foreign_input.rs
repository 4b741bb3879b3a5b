//! Text that never came from this crate is turned away with a specific
//! error, and without running key derivation.

use zeroxqr_crypto_core::unified_format::{compose_encoded, EncodedComponents};
use zeroxqr_crypto_core::{decrypt, Component, EngineError, FormatError};

const PASSWORD: &str = "irrelevant-password";

fn format_error(text: &str) -> FormatError {
    match decrypt(text, PASSWORD) {
        Err(EngineError::Format(e)) => e,
        other => panic!("expected a format error for {text:?}, got {other:?}"),
    }
}

#[test]
fn empty_input_is_malformed() {
    assert_eq!(
        format_error(""),
        FormatError::MalformedStructure {
            expected: 7,
            found: 1
        }
    );
}

#[test]
fn plain_text_and_urls_are_malformed() {
    for text in ["hello world", "https://example.com/?q=1", r#"{"ciphertext":"AAAA"}"#] {
        assert!(matches!(
            format_error(text),
            FormatError::MalformedStructure { .. }
        ));
    }
}

#[test]
fn other_pipe_delimited_data_has_unrecognized_header() {
    assert_eq!(
        format_error("QRX|v2|AAAA|AAAA|AAAA|AAAA|7o16IE4m"),
        FormatError::UnrecognizedHeader("QRX".into())
    );
}

#[test]
fn older_version_is_unsupported() {
    assert_eq!(
        format_error("0xQR|v1|AAAA|AAAA|AAAA|AAAA|7o16IE4m"),
        FormatError::UnsupportedVersion("v1".into())
    );
}

#[test]
fn bad_checksum_is_integrity_failure() {
    assert_eq!(
        format_error("0xQR|v2|AAAA|AAAA|AAAA|AAAA|00000000"),
        FormatError::IntegrityCheckFailed
    );
}

#[test]
fn invalid_base64_with_valid_checksum_names_the_field() {
    let encoded = EncodedComponents {
        ciphertext: "AAAA".into(),
        salt: "AAAA".into(),
        nonce: "not*base64".into(),
        auth_tag: "AAAA".into(),
    };
    assert_eq!(
        format_error(&compose_encoded(&encoded)),
        FormatError::CorruptedComponent(Component::Nonce)
    );
}

#[test]
fn short_salt_is_corrupted_salt() {
    // Well-formed record whose salt decodes to 3 bytes.
    assert_eq!(
        format_error("0xQR|v2|AAAA|AAAA|AAAA|AAAA|7o16IE4m"),
        FormatError::CorruptedComponent(Component::Salt)
    );
}

#[test]
fn format_errors_share_one_user_message() {
    let err = decrypt("garbage", PASSWORD).expect_err("should fail");
    assert_eq!(err.user_message(), "Cannot read this data");
}
