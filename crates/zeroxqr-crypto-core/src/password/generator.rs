//! Random password generation.
//!
//! Produces passwords that clear the encryption validator and score well
//! with the strength analyzer. All draws go through a [`SecureRandom`], so
//! the OS source is used in production and a seeded one in tests.

use rand::seq::SliceRandom;

use crate::error::CryptoError;
use crate::random::{OsRandom, RngAdapter, SecureRandom};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum generated length; matches the encryption password minimum.
pub const MIN_PASSWORD_LENGTH: usize = crate::validation::MIN_PASSWORD_LEN;

/// Maximum generated length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Length used when the caller does not choose one.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?/~";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Character classes to draw from.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharsetConfig {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetConfig {
    fn enabled(&self) -> impl Iterator<Item = &'static [u8]> + '_ {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, set)| set)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a password from the OS random source.
///
/// # Errors
///
/// See [`generate_random_password_with`].
pub fn generate_random_password(
    length: usize,
    charsets: &CharsetConfig,
) -> Result<String, CryptoError> {
    generate_random_password_with(&OsRandom, length, charsets)
}

/// Generate a password of `length` characters drawing from `rng`.
///
/// One character of every enabled class is placed first, the rest come
/// from the combined pool, then the whole buffer is shuffled with `SliceRandom::shuffle`.
///
/// # Errors
///
/// `CryptoError::PasswordGeneration` if `length` is outside
/// [`MIN_PASSWORD_LENGTH`]..=[`MAX_PASSWORD_LENGTH`] or no class is enabled;
/// `CryptoError::Random` if the random source fails.
pub fn generate_random_password_with<R: SecureRandom + ?Sized>(
    rng: &R,
    length: usize,
    charsets: &CharsetConfig,
) -> Result<String, CryptoError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(CryptoError::PasswordGeneration(format!(
            "length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}, got {length}"
        )));
    }

    let mut rng = RngAdapter::new(rng);
    let mut pool: Vec<u8> = Vec::new();
    let mut chars: Vec<u8> = Vec::with_capacity(length);
    for set in charsets.enabled() {
        pool.extend_from_slice(set);
        chars.push(pick(&mut rng, set)?);
    }
    if pool.is_empty() {
        return Err(CryptoError::PasswordGeneration(
            "at least one charset must be enabled".to_string(),
        ));
    }

    while chars.len() < length {
        chars.push(pick(&mut rng, &pool)?);
    }
    chars.shuffle(&mut rng);
    rng.finish()?;

    String::from_utf8(chars)
        .map_err(|_| CryptoError::PasswordGeneration("generated non-ASCII output".to_string()))
}

fn pick<R: SecureRandom + ?Sized>(
    rng: &mut RngAdapter<'_, R>,
    set: &[u8],
) -> Result<u8, CryptoError> {
    set.choose(rng)
        .copied()
        .ok_or_else(|| CryptoError::PasswordGeneration("empty character set".to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
