//! `zeroxqr-crypto-core`: password-based text encryption for zeroxqr.
//!
//! PBKDF2-HMAC-SHA256 key derivation, AES-256-GCM, and the `0xQR` unified
//! text format, plus a password strength analyzer and generator.
//! No I/O, no async; the only platform calls are memory locking and the
//! OS random source.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;
pub mod random;

pub mod kdf;
pub mod symmetric;

pub mod checksum;
pub mod unified_format;

pub mod validation;

pub mod engine;

pub mod password;

pub use engine::{decrypt, encrypt, EncryptionEngine, EncryptionOutput};
pub use error::{Component, CryptoError, EngineError, FormatError, ValidationError};
pub use memory::{disable_core_dumps, SecretBuffer};
pub use password::{
    analyze_password, generate_random_password, CharsetConfig, PasswordStrength,
    PasswordStrengthAnalyzer, PasswordStrengthResult, SecurityLevel, WeakPattern,
    DEFAULT_PASSWORD_LENGTH,
};
pub use random::{OsRandom, SecureRandom, SeededRandom};
pub use unified_format::{
    EncodedComponents, EncryptionComponents, FORMAT_HEADER, FORMAT_SEPARATOR, FORMAT_VERSION,
};
pub use validation::{validate_decryption_input, validate_encryption_input};
