//! Transcription checksum for the unified format.
//!
//! First [`CHECKSUM_LEN`] characters of the base64 SHA-256 digest. It
//! catches typos and truncation before the expensive key derivation runs.
//! It has no key and is not an authenticity check; the GCM tag is.

use sha2::{Digest, Sha256};

/// Number of base64 characters kept from the digest.
pub const CHECKSUM_LEN: usize = 8;

/// Compute the checksum of `data` (its UTF-8 bytes).
#[must_use]
pub fn checksum(data: &str) -> String {
    let digest = Sha256::digest(data.as_bytes());
    let mut encoded = data_encoding::BASE64.encode(&digest);
    encoded.truncate(CHECKSUM_LEN);
    encoded
}

/// Whether `expected` is the checksum of `data`.
#[must_use]
pub fn verify(data: &str, expected: &str) -> bool {
    checksum(data) == expected
}
