//! Error types for `zeroxqr-crypto-core`.
//!
//! Four kinds, matching how a caller is expected to react:
//! - [`ValidationError`]: re-prompt the user, no cryptography has run
//! - [`FormatError`]: the text is not readable `0xQR` data
//! - authentication failure: wrong password or tampered data
//! - [`CryptoError`]: a primitive misbehaved (misconfiguration)
//!
//! [`EngineError`] is the union returned by the engine facade.

use std::fmt;

use thiserror::Error;

/// Errors produced by the cryptographic primitives.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key derivation rejected its parameters (key length, salt, iterations).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// AES-256-GCM could not be set up or failed to seal.
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Authentication tag verification failed: wrong key or tampered data.
    #[error("decryption failed: authentication tag mismatch")]
    Authentication,

    /// The secure random source could not produce bytes.
    #[error("secure random source failed: {0}")]
    Random(String),

    /// Secure memory allocation failure.
    #[error("secure memory error: {0}")]
    SecureMemory(String),

    /// Password generation failure (invalid parameters).
    #[error("password generation error: {0}")]
    PasswordGeneration(String),
}

/// One of the four base64 byte fields of the unified format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Ciphertext,
    Salt,
    Nonce,
    AuthTag,
}

impl Component {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ciphertext => "encrypted content",
            Self::Salt => "salt",
            Self::Nonce => "IV",
            Self::AuthTag => "authentication tag",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural problems with unified-format text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The text did not split into exactly seven fields.
    #[error("invalid format: expected {expected} components, got {found}")]
    MalformedStructure { expected: usize, found: usize },

    /// Field 0 is not the `0xQR` header.
    #[error("invalid format: unrecognized header '{0}'")]
    UnrecognizedHeader(String),

    /// Field 1 names a layout this build does not read.
    #[error("unsupported version: '{0}'")]
    UnsupportedVersion(String),

    /// The trailing checksum does not match fields 0–5.
    #[error("data integrity check failed: checksum mismatch")]
    IntegrityCheckFailed,

    /// A byte field is not valid base64.
    #[error("invalid format: corrupted {0}")]
    CorruptedComponent(Component),
}

/// Caller-correctable input problems, detected before any cryptography.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("plaintext cannot be empty")]
    EmptyPlaintext,

    #[error("text too long: {actual} characters (max {max})")]
    PlaintextTooLong { max: usize, actual: usize },

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("password must be at least {min} characters (got {actual})")]
    PasswordTooShort { min: usize, actual: usize },

    /// A decryption field was blank.
    #[error("{0} cannot be empty")]
    EmptyField(Component),

    /// A decryption field is not valid base64.
    #[error("invalid {0} format")]
    InvalidEncoding(Component),
}

/// Errors returned by [`crate::engine::EncryptionEngine`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// Wrong password, or the ciphertext/tag were altered. Deliberately
    /// does not say which.
    #[error("wrong password or corrupted data")]
    Authentication,

    #[error(transparent)]
    Crypto(CryptoError),
}

impl From<CryptoError> for EngineError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Authentication => Self::Authentication,
            other => Self::Crypto(other),
        }
    }
}

impl EngineError {
    /// Sentence suitable for showing to an end user.
    ///
    /// Validation errors keep their detail (the user can fix them); the
    /// other kinds collapse to a fixed message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Format(_) => "Cannot read this data".to_string(),
            Self::Authentication => "Wrong password or corrupted/tampered data".to_string(),
            Self::Crypto(_) => "Encryption failed unexpectedly".to_string(),
        }
    }
}
