//! AES-256-GCM authenticated encryption.
//!
//! This module provides:
//! - [`seal`]: encrypt plaintext under a caller-supplied nonce, returning [`SealedData`]
//! - [`open`]: authenticate and decrypt, returning [`SecretBuffer`]
//!
//! The nonce is an argument rather than generated here: the engine draws it
//! from its injected random source, alongside a fresh salt. A fresh salt
//! means a fresh key, so a (key, nonce) pair never repeats.
//!
//! Ciphertext and tag are kept as separate fields (they travel as separate
//! fields of the unified format). `ring` works on `ciphertext || tag`, so
//! [`open`] rebuilds that buffer and zeroizes it afterwards.

use ring::aead;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::memory::SecretBuffer;

/// AES-256-GCM nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// AES-256-GCM key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Output of [`seal`]: nonce, ciphertext, and tag.
#[must_use = "encrypted data must be stored or transmitted"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedData {
    pub nonce: [u8; NONCE_LEN],
    /// Same length as the plaintext (GCM does not pad).
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

fn aead_key(key: &[u8]) -> Result<aead::LessSafeKey, CryptoError> {
    if key.len() != KEY_LEN {
        return Err(CryptoError::Encryption(format!(
            "invalid key length: {} bytes (expected {KEY_LEN})",
            key.len()
        )));
    }
    let unbound = aead::UnboundKey::new(&aead::AES_256_GCM, key)
        .map_err(|_| CryptoError::Encryption("failed to create AES-256-GCM key".into()))?;
    Ok(aead::LessSafeKey::new(unbound))
}

/// Encrypt `plaintext` under `key` and `nonce` with AES-256-GCM (empty AAD).
///
/// Deterministic: the same inputs give the same output. Never reuse a
/// nonce with the same key.
///
/// # Errors
///
/// Returns `CryptoError::Encryption` if the key is not exactly 32 bytes or
/// the seal operation fails.
pub fn seal(
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
) -> Result<SealedData, CryptoError> {
    let less_safe_key = aead_key(key)?;
    let ring_nonce = aead::Nonce::assume_unique_for_key(*nonce);

    // Encrypt in place: plaintext buffer becomes ciphertext.
    let mut in_out = plaintext.to_vec();
    let Ok(tag) =
        less_safe_key.seal_in_place_separate_tag(ring_nonce, aead::Aad::empty(), &mut in_out)
    else {
        in_out.zeroize();
        return Err(CryptoError::Encryption(
            "AES-256-GCM encryption failed".into(),
        ));
    };

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_ref());

    Ok(SealedData {
        nonce: *nonce,
        ciphertext: in_out,
        tag: tag_bytes,
    })
}

/// Authenticate and decrypt.
///
/// `nonce` and `tag` are slices because they arrive decoded from text; any
/// length other than 12 / 16 bytes cannot have come from [`seal`] and is
/// reported as an authentication failure.
///
/// # Errors
///
/// Returns `CryptoError::Encryption` if the key is not exactly 32 bytes.
/// Returns `CryptoError::Authentication` if the nonce or tag has the wrong
/// length, or the tag does not verify (wrong key or altered data).
pub fn open(
    ciphertext: &[u8],
    tag: &[u8],
    key: &[u8],
    nonce: &[u8],
) -> Result<SecretBuffer, CryptoError> {
    let less_safe_key = aead_key(key)?;

    let nonce: [u8; NONCE_LEN] = nonce
        .try_into()
        .map_err(|_| CryptoError::Authentication)?;
    if tag.len() != TAG_LEN {
        return Err(CryptoError::Authentication);
    }
    let ring_nonce = aead::Nonce::assume_unique_for_key(nonce);

    let mut ct_tag = Vec::with_capacity(ciphertext.len().saturating_add(TAG_LEN));
    ct_tag.extend_from_slice(ciphertext);
    ct_tag.extend_from_slice(tag);

    let result = match less_safe_key.open_in_place(ring_nonce, aead::Aad::empty(), &mut ct_tag) {
        Ok(plaintext) => SecretBuffer::new(plaintext),
        Err(_) => Err(CryptoError::Authentication),
    };
    ct_tag.zeroize();
    result
}
