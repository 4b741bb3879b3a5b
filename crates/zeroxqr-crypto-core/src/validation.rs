//! Pre-flight input checks.
//!
//! Callers run these before committing to key derivation. Each function
//! walks a fixed, ordered rule list and returns the first violation.

use crate::error::ValidationError;
use crate::unified_format::{is_valid_base64, EncodedComponents};

/// Longest plaintext accepted, in characters.
pub const MAX_PLAINTEXT_CHARS: usize = 10_000;

/// Shortest password accepted, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check plaintext and password for encryption.
///
/// Rules, in order: plaintext not blank, plaintext at most
/// [`MAX_PLAINTEXT_CHARS`], password not blank, password at least
/// [`MIN_PASSWORD_LEN`].
///
/// # Errors
///
/// The first violated rule as a [`ValidationError`].
pub fn validate_encryption_input(plaintext: &str, password: &str) -> Result<(), ValidationError> {
    if is_blank(plaintext) {
        return Err(ValidationError::EmptyPlaintext);
    }
    let plaintext_len = plaintext.chars().count();
    if plaintext_len > MAX_PLAINTEXT_CHARS {
        return Err(ValidationError::PlaintextTooLong {
            max: MAX_PLAINTEXT_CHARS,
            actual: plaintext_len,
        });
    }
    if is_blank(password) {
        return Err(ValidationError::EmptyPassword);
    }
    let password_len = password.chars().count();
    if password_len < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
            actual: password_len,
        });
    }
    Ok(())
}

/// Check individually supplied decryption fields and password.
///
/// Rules, in order: each of ciphertext, salt, nonce, tag not blank; password
/// not blank; then each of the four fields valid base64.
///
/// # Errors
///
/// The first violated rule as a [`ValidationError`].
pub fn validate_decryption_input(
    fields: &EncodedComponents,
    password: &str,
) -> Result<(), ValidationError> {
    let named = fields.fields();
    if let Some((component, _)) = named.iter().find(|(_, value)| is_blank(value)) {
        return Err(ValidationError::EmptyField(*component));
    }
    if is_blank(password) {
        return Err(ValidationError::EmptyPassword);
    }
    if let Some((component, _)) = named.iter().find(|(_, value)| !is_valid_base64(value)) {
        return Err(ValidationError::InvalidEncoding(*component));
    }
    Ok(())
}
