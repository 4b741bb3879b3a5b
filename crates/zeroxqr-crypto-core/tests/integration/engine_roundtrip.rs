//! Round-trip and freshness through the public API.

use zeroxqr_crypto_core::unified_format::{self, EncodedComponents};
use zeroxqr_crypto_core::validation::MAX_PLAINTEXT_CHARS;
use zeroxqr_crypto_core::{
    decrypt, encrypt, validate_decryption_input, EncryptionEngine, SeededRandom,
};

const PASSWORD: &str = "integration-password";

#[test]
fn single_character_roundtrip() {
    let unified = encrypt("x", PASSWORD).expect("encrypt should succeed");
    assert_eq!(decrypt(&unified, PASSWORD).expect("decrypt should succeed"), "x");
}

#[test]
fn maximum_length_roundtrip() {
    let plaintext: String = "0123456789".repeat(MAX_PLAINTEXT_CHARS / 10);
    assert_eq!(plaintext.chars().count(), MAX_PLAINTEXT_CHARS);
    let unified = encrypt(&plaintext, PASSWORD).expect("encrypt should succeed");
    assert_eq!(decrypt(&unified, PASSWORD).expect("decrypt should succeed"), plaintext);
}

#[test]
fn multiline_text_roundtrip() {
    let plaintext = "line one\nline two\r\n\ttabbed | with separator";
    let unified = encrypt(plaintext, PASSWORD).expect("encrypt should succeed");
    assert_eq!(decrypt(&unified, PASSWORD).expect("decrypt should succeed"), plaintext);
}

#[test]
fn repeated_encryption_is_fresh() {
    let engine = EncryptionEngine::new();
    let a = engine
        .encrypt_components("same text", PASSWORD)
        .expect("encrypt should succeed");
    let b = engine
        .encrypt_components("same text", PASSWORD)
        .expect("encrypt should succeed");

    assert_ne!(a.unified, b.unified);
    assert_ne!(a.components.salt, b.components.salt);
    assert_ne!(a.components.nonce, b.components.nonce);
    assert_ne!(a.components.ciphertext, b.components.ciphertext);

    assert_eq!(engine.decrypt(&a.unified, PASSWORD).unwrap(), "same text");
    assert_eq!(engine.decrypt(&b.unified, PASSWORD).unwrap(), "same text");
}

#[test]
fn field_by_field_decryption() {
    let engine = EncryptionEngine::new();
    let out = engine
        .encrypt_components("stored separately", PASSWORD)
        .expect("encrypt should succeed");

    // Caller keeps the four fields apart, then validates and reassembles.
    let encoded: EncodedComponents = out.components.encode();
    validate_decryption_input(&encoded, PASSWORD).expect("fields should validate");
    let components = encoded.decode().expect("fields should decode");
    assert_eq!(
        engine.decrypt_components(&components, PASSWORD).unwrap(),
        "stored separately"
    );

    // Reassembled text is identical to what encrypt produced.
    assert_eq!(unified_format::compose_encoded(&encoded), out.unified);
}

#[test]
fn seeded_records_decrypt_with_os_engine() {
    let seeded = EncryptionEngine::with_random(SeededRandom::new(42));
    let unified = seeded.encrypt("fixture text", PASSWORD).unwrap();
    assert_eq!(decrypt(&unified, PASSWORD).unwrap(), "fixture text");
}

#[test]
fn engine_shared_across_threads() {
    let engine = EncryptionEngine::new();
    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..3)
            .map(|i| {
                let engine = &engine;
                s.spawn(move || {
                    let text = format!("message {i}");
                    let unified = engine.encrypt(&text, PASSWORD).unwrap();
                    engine.decrypt(&unified, PASSWORD).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, vec!["message 0", "message 1", "message 2"]);
}
