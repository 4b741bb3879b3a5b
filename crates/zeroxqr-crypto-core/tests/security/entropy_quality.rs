//! Smoke tests for the OS random source and for salt/nonce freshness.
//!
//! Thresholds sit well below the expected Shannon entropy for each sample
//! size (about 7.81 bits/byte at 1 KB, 4.88 at 32 bytes) so natural
//! variance never trips them, while all-zero or repeating output does.

use std::collections::HashSet;

use zeroxqr_crypto_core::memory::SecretBuffer;
use zeroxqr_crypto_core::{EncryptionEngine, OsRandom};

#[allow(clippy::cast_precision_loss)]
fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut freq = [0u64; 256];
    for &b in data {
        freq[b as usize] = freq[b as usize].saturating_add(1);
    }
    let len = data.len() as f64;
    freq.iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / len;
            -p * p.log2()
        })
        .sum()
}

#[test]
fn os_random_1kb_entropy() {
    let buf = SecretBuffer::random(&OsRandom, 1024).expect("random source should succeed");
    let entropy = shannon_entropy(buf.expose());
    assert!(entropy > 7.5, "entropy too low: {entropy:.4}");
}

#[test]
fn os_random_64kb_entropy() {
    let buf = SecretBuffer::random(&OsRandom, 65_536).expect("random source should succeed");
    let entropy = shannon_entropy(buf.expose());
    assert!(entropy > 7.99, "entropy too low: {entropy:.4}");
}

#[test]
fn salts_look_random() {
    let out = EncryptionEngine::new()
        .encrypt_components("entropy check", "entropy-password")
        .expect("encrypt should succeed");
    let entropy = shannon_entropy(&out.components.salt);
    assert!(entropy > 4.0, "salt entropy too low: {entropy:.4}");
}

#[test]
fn nonces_do_not_repeat() {
    let engine = EncryptionEngine::new();
    let nonces: HashSet<Vec<u8>> = (0..4)
        .map(|_| {
            engine
                .encrypt_components("nonce check", "entropy-password")
                .expect("encrypt should succeed")
                .components
                .nonce
        })
        .collect();
    assert_eq!(nonces.len(), 4);
}
