//! `0xQR` unified text format: compose, parse, encode.
//!
//! This module provides:
//! - [`compose`]: produce the seven-field text from [`EncryptionComponents`]
//! - [`parse`]: recover [`EncryptionComponents`] from text, or a [`FormatError`]
//! - [`EncodedComponents`]: the four byte fields as base64 strings
//!
//! # Layout
//!
//! ```text
//! 0xQR|v2|CIPHERTEXT_B64|SALT_B64|NONCE_B64|TAG_B64|CHECKSUM
//! ```
//!
//! - Byte fields use standard base64 with padding and no line wrapping. The
//!   base64 alphabet has no `|`, so splitting is unambiguous.
//! - `CHECKSUM` is [`checksum`](crate::checksum::checksum) over the first
//!   six fields joined by `|`.
//! - Any version other than [`FORMAT_VERSION`] is rejected. A future change
//!   of KDF parameters would ship as a new version literal.
//!
//! # Parse Order
//!
//! Field count, header, version, checksum, then base64 validity. The
//! checksum is checked before any decoding so that transcription errors are
//! reported as such instead of as bad base64.

use data_encoding::BASE64;

use crate::checksum;
use crate::error::{Component, FormatError};

/// Literal identifying the format family.
pub const FORMAT_HEADER: &str = "0xQR";

/// The only on-wire layout this build reads and writes.
pub const FORMAT_VERSION: &str = "v2";

/// Field separator.
pub const FORMAT_SEPARATOR: char = '|';

/// Number of separator-delimited fields.
pub const FIELD_COUNT: usize = 7;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw output of one encryption: everything needed to decrypt except the
/// password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionComponents {
    pub ciphertext: Vec<u8>,
    pub salt: Vec<u8>,
    pub nonce: Vec<u8>,
    pub auth_tag: Vec<u8>,
}

/// [`EncryptionComponents`] with each byte field base64-encoded.
///
/// This is the shape callers persist or show field by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedComponents {
    pub ciphertext: String,
    pub salt: String,
    pub nonce: String,
    pub auth_tag: String,
}

impl EncryptionComponents {
    #[must_use]
    pub fn encode(&self) -> EncodedComponents {
        EncodedComponents {
            ciphertext: BASE64.encode(&self.ciphertext),
            salt: BASE64.encode(&self.salt),
            nonce: BASE64.encode(&self.nonce),
            auth_tag: BASE64.encode(&self.auth_tag),
        }
    }
}

impl EncodedComponents {
    /// Decode all four fields.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::CorruptedComponent` naming the first field
    /// (in wire order) that is not valid base64.
    pub fn decode(&self) -> Result<EncryptionComponents, FormatError> {
        Ok(EncryptionComponents {
            ciphertext: decode_field(&self.ciphertext, Component::Ciphertext)?,
            salt: decode_field(&self.salt, Component::Salt)?,
            nonce: decode_field(&self.nonce, Component::Nonce)?,
            auth_tag: decode_field(&self.auth_tag, Component::AuthTag)?,
        })
    }

    /// Fields paired with their names, in wire order.
    #[must_use]
    pub fn fields(&self) -> [(Component, &str); 4] {
        [
            (Component::Ciphertext, self.ciphertext.as_str()),
            (Component::Salt, self.salt.as_str()),
            (Component::Nonce, self.nonce.as_str()),
            (Component::AuthTag, self.auth_tag.as_str()),
        ]
    }
}

/// Whether `input` is valid standard, padded base64.
#[must_use]
pub fn is_valid_base64(input: &str) -> bool {
    BASE64.decode(input.as_bytes()).is_ok()
}

fn decode_field(input: &str, component: Component) -> Result<Vec<u8>, FormatError> {
    BASE64
        .decode(input.as_bytes())
        .map_err(|_| FormatError::CorruptedComponent(component))
}

// ---------------------------------------------------------------------------
// Compose
// ---------------------------------------------------------------------------

/// Render `components` as unified-format text.
#[must_use]
pub fn compose(components: &EncryptionComponents) -> String {
    compose_encoded(&components.encode())
}

/// Render already-encoded components as unified-format text.
#[must_use]
pub fn compose_encoded(encoded: &EncodedComponents) -> String {
    let sep = FORMAT_SEPARATOR.to_string();
    let body = [
        FORMAT_HEADER,
        FORMAT_VERSION,
        encoded.ciphertext.as_str(),
        encoded.salt.as_str(),
        encoded.nonce.as_str(),
        encoded.auth_tag.as_str(),
    ]
    .join(&sep);
    let sum = checksum::checksum(&body);
    format!("{body}{FORMAT_SEPARATOR}{sum}")
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

/// Parse unified-format text into its encoded fields, checking structure,
/// header, version, and checksum, but not base64 validity.
///
/// # Errors
///
/// - `MalformedStructure`: not exactly seven fields
/// - `UnrecognizedHeader`: field 0 is not [`FORMAT_HEADER`]
/// - `UnsupportedVersion`: field 1 is not [`FORMAT_VERSION`]
/// - `IntegrityCheckFailed`: checksum mismatch
pub fn parse_encoded(text: &str) -> Result<EncodedComponents, FormatError> {
    let parts: Vec<&str> = text.split(FORMAT_SEPARATOR).collect();
    let [header, version, ciphertext, salt, nonce, auth_tag, sum] = parts.as_slice() else {
        return Err(FormatError::MalformedStructure {
            expected: FIELD_COUNT,
            found: parts.len(),
        });
    };

    if *header != FORMAT_HEADER {
        return Err(FormatError::UnrecognizedHeader((*header).to_string()));
    }
    if *version != FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion((*version).to_string()));
    }

    let sep = FORMAT_SEPARATOR.to_string();
    let body = parts[..FIELD_COUNT - 1].join(&sep);
    if !checksum::verify(&body, sum) {
        return Err(FormatError::IntegrityCheckFailed);
    }

    Ok(EncodedComponents {
        ciphertext: (*ciphertext).to_string(),
        salt: (*salt).to_string(),
        nonce: (*nonce).to_string(),
        auth_tag: (*auth_tag).to_string(),
    })
}

/// Parse unified-format text into decoded components.
///
/// # Errors
///
/// Everything [`parse_encoded`] reports, then `CorruptedComponent` if a byte
/// field is not valid base64.
pub fn parse(text: &str) -> Result<EncryptionComponents, FormatError> {
    parse_encoded(text)?.decode()
}
