//! PBKDF2-HMAC-SHA256 key derivation.
//!
//! This module provides:
//! - [`derive_key`]: the general form, password + salt + iterations + key length
//! - [`derive`]: the engine's fixed parameters (100 000 iterations, 256 bits)
//!
//! # Fixed Iterations
//!
//! The iteration count is not stored in `0xQR` records. Every record is
//! derived with [`PBKDF2_ITERATIONS`]; changing it requires a new format
//! version, never a per-record downgrade.

use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::memory::SecretBuffer;

/// Iteration count used for every record.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// AES-256 key length in bits.
pub const KEY_LEN_BITS: usize = 256;

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;

/// Longest key `derive_key` will produce (two SHA-256 blocks).
const MAX_KEY_LEN_BITS: usize = 512;

/// Derive `key_len_bits` of key material from `password` and `salt`.
///
/// Returns a [`SecretBuffer`]; the intermediate output is zeroized.
///
/// Password content is never validated here. Empty or weak passwords are
/// the validation layer's concern.
///
/// # Errors
///
/// Returns `CryptoError::KeyDerivation` on misuse only:
/// - `key_len_bits` is zero, not a multiple of 8, or above 512
/// - `salt` is empty
/// - `iterations` is zero
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len_bits: usize,
) -> Result<SecretBuffer, CryptoError> {
    if key_len_bits == 0 || key_len_bits % 8 != 0 || key_len_bits > MAX_KEY_LEN_BITS {
        return Err(CryptoError::KeyDerivation(format!(
            "invalid key length: {key_len_bits} bits (must be a multiple of 8, 8..={MAX_KEY_LEN_BITS})"
        )));
    }
    if salt.is_empty() {
        return Err(CryptoError::KeyDerivation("salt must not be empty".into()));
    }
    if iterations == 0 {
        return Err(CryptoError::KeyDerivation(
            "iteration count must be non-zero".into(),
        ));
    }

    let mut output = vec![0u8; key_len_bits / 8];
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut output);

    let result = SecretBuffer::new(&output);
    output.zeroize();
    result
}

/// Derive the AES-256 key for a record from `password` and its salt.
///
/// # Errors
///
/// Returns `CryptoError::KeyDerivation` if `salt` is empty.
pub fn derive(password: &[u8], salt: &[u8]) -> Result<SecretBuffer, CryptoError> {
    derive_key(password, salt, PBKDF2_ITERATIONS, KEY_LEN_BITS)
}
