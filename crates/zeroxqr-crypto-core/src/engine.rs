//! String-level encrypt/decrypt facade.
//!
//! This module provides:
//! - [`EncryptionEngine`]: validation + PBKDF2 + AES-256-GCM + unified format
//! - [`encrypt`] / [`decrypt`]: the same with the OS random source
//!
//! # Pipeline
//!
//! Encrypt: validate → fresh 32-byte salt → derive key → fresh 96-bit nonce
//! → seal → compose.
//!
//! Decrypt: parse (checksum first, no secret-dependent work) → check salt
//! size → derive key from the embedded salt → open → UTF-8.
//!
//! The engine keeps no state between calls besides its random source, and
//! derived keys live only in a [`SecretBuffer`](crate::memory::SecretBuffer)
//! for the duration of one call. Key derivation is the slow step; callers
//! on a UI thread can move the call to a worker without extra locking.

use zeroize::Zeroize;

use crate::error::{Component, CryptoError, EngineError, FormatError};
use crate::kdf::{self, SALT_LEN};
use crate::random::{random_array, OsRandom, SecureRandom};
use crate::symmetric::{self, NONCE_LEN};
use crate::unified_format::{self, EncryptionComponents};
use crate::validation::validate_encryption_input;

/// Result of a successful encryption: the text to hand out, and the raw
/// components it encodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionOutput {
    pub unified: String,
    pub components: EncryptionComponents,
}

/// Password-based text encryption engine.
///
/// Generic over its random source so tests can pin salts and nonces;
/// [`EncryptionEngine::new`] always uses [`OsRandom`].
#[derive(Debug, Clone, Default)]
pub struct EncryptionEngine<R = OsRandom> {
    rng: R,
}

impl EncryptionEngine<OsRandom> {
    #[must_use]
    pub const fn new() -> Self {
        Self { rng: OsRandom }
    }
}

impl<R: SecureRandom> EncryptionEngine<R> {
    /// Engine drawing salts and nonces from `rng`.
    #[must_use]
    pub const fn with_random(rng: R) -> Self {
        Self { rng }
    }

    /// Encrypt `plaintext` under `password` and return unified-format text.
    ///
    /// # Errors
    ///
    /// - `EngineError::Validation`: input rejected before any cryptography
    /// - `EngineError::Crypto`: random source or primitive failure
    pub fn encrypt(&self, plaintext: &str, password: &str) -> Result<String, EngineError> {
        self.encrypt_components(plaintext, password)
            .map(|output| output.unified)
    }

    /// Like [`encrypt`](Self::encrypt), also returning the raw components.
    ///
    /// # Errors
    ///
    /// Same as [`encrypt`](Self::encrypt).
    pub fn encrypt_components(
        &self,
        plaintext: &str,
        password: &str,
    ) -> Result<EncryptionOutput, EngineError> {
        validate_encryption_input(plaintext, password)?;

        let salt: [u8; SALT_LEN] = random_array(&self.rng)?;
        let key = kdf::derive(password.as_bytes(), &salt)?;
        let nonce: [u8; NONCE_LEN] = random_array(&self.rng)?;
        let sealed = symmetric::seal(plaintext.as_bytes(), key.expose(), &nonce)?;
        drop(key);

        let components = EncryptionComponents {
            ciphertext: sealed.ciphertext,
            salt: salt.to_vec(),
            nonce: sealed.nonce.to_vec(),
            auth_tag: sealed.tag.to_vec(),
        };
        let unified = unified_format::compose(&components);

        tracing::debug!(
            plaintext_len = plaintext.len(),
            unified_len = unified.len(),
            "encrypted payload"
        );

        Ok(EncryptionOutput {
            unified,
            components,
        })
    }

    /// Decrypt unified-format text with `password`.
    ///
    /// # Errors
    ///
    /// - `EngineError::Format`: the text is not readable `0xQR` data
    /// - `EngineError::Authentication`: wrong password or altered data
    /// - `EngineError::Crypto`: primitive failure, or an authenticated
    ///   payload that is not UTF-8
    pub fn decrypt(&self, unified: &str, password: &str) -> Result<String, EngineError> {
        let components = unified_format::parse(unified).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected unified text");
        })?;
        self.decrypt_components(&components, password)
    }

    /// Decrypt components that were already parsed.
    ///
    /// # Errors
    ///
    /// Same as [`decrypt`](Self::decrypt); a salt of the wrong size is a
    /// `FormatError::CorruptedComponent`.
    pub fn decrypt_components(
        &self,
        components: &EncryptionComponents,
        password: &str,
    ) -> Result<String, EngineError> {
        if components.salt.len() != SALT_LEN {
            return Err(FormatError::CorruptedComponent(Component::Salt).into());
        }

        let key = kdf::derive(password.as_bytes(), &components.salt)?;
        let plaintext = symmetric::open(
            &components.ciphertext,
            &components.auth_tag,
            key.expose(),
            &components.nonce,
        )
        .inspect_err(|e| {
            if matches!(e, CryptoError::Authentication) {
                tracing::warn!("authentication failed: wrong password or tampered data");
            }
        })?;
        drop(key);

        tracing::debug!(plaintext_len = plaintext.len(), "decrypted payload");

        String::from_utf8(plaintext.expose().to_vec()).map_err(|e| {
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            EngineError::Crypto(CryptoError::Encryption(
                "decrypted payload is not valid UTF-8".into(),
            ))
        })
    }
}

/// Encrypt with a fresh OS-random salt and nonce.
///
/// # Errors
///
/// See [`EncryptionEngine::encrypt`].
pub fn encrypt(plaintext: &str, password: &str) -> Result<String, EngineError> {
    EncryptionEngine::new().encrypt(plaintext, password)
}

/// Decrypt unified-format text.
///
/// # Errors
///
/// See [`EncryptionEngine::decrypt`].
pub fn decrypt(unified: &str, password: &str) -> Result<String, EngineError> {
    EncryptionEngine::new().decrypt(unified, password)
}
