use std::io::Write;

use anyhow::{bail, Context};
use zeroize::Zeroizing;
use zeroxqr_crypto_core::kdf::SALT_LEN;
use zeroxqr_crypto_core::symmetric::{NONCE_LEN, TAG_LEN};
use zeroxqr_crypto_core::unified_format::{parse_encoded, FORMAT_HEADER, FORMAT_VERSION};
use zeroxqr_crypto_core::{analyze_password, Component, EncryptionEngine, EngineError};

use super::AppContext;
use crate::cli::{DecryptArgs, EncryptArgs, InspectArgs};
use crate::config::Preferences;
use crate::input::{self, PasswordPrompt};

pub fn encrypt(ctx: &AppContext, args: EncryptArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = input::read_text(args.text)?;
    let password = input::read_password(&args.password, PasswordPrompt::New)?;

    check_password_policy(&ctx.prefs, &password, args.force)?;

    let unified = EncryptionEngine::new()
        .encrypt(&text, &password)
        .map_err(user_error)?;
    writeln!(out, "{unified}")?;
    Ok(())
}

pub fn decrypt(args: DecryptArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let record = input::read_record(args.data)?;
    let password = input::read_password(&args.password, PasswordPrompt::Existing)?;

    let plaintext = Zeroizing::new(
        EncryptionEngine::new()
            .decrypt(&record, &password)
            .map_err(user_error)?,
    );
    writeln!(out, "{}", plaintext.as_str())?;
    Ok(())
}

pub fn inspect(args: InspectArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let record = input::read_record(args.data)?;
    let encoded = parse_encoded(&record).context("not a readable 0xQR record")?;
    let components = encoded.decode().context("not a readable 0xQR record")?;

    writeln!(out, "format:      {FORMAT_HEADER} {FORMAT_VERSION}")?;
    writeln!(out, "checksum:    verified")?;
    let rows = [
        (Component::Ciphertext, components.ciphertext.len(), None),
        (Component::Salt, components.salt.len(), Some(SALT_LEN)),
        (Component::Nonce, components.nonce.len(), Some(NONCE_LEN)),
        (Component::AuthTag, components.auth_tag.len(), Some(TAG_LEN)),
    ];
    for (component, len, expected) in rows {
        let label = format!("{component}:");
        match expected {
            Some(want) if want != len => {
                writeln!(out, "{label:<12} {len} bytes (expected {want})")?;
            }
            _ => writeln!(out, "{label:<12} {len} bytes")?,
        }
    }
    Ok(())
}

/// Refuse `password` when it rates below the configured minimum, unless
/// `force` is set.
fn check_password_policy(prefs: &Preferences, password: &str, force: bool) -> anyhow::Result<()> {
    let analysis = analyze_password(password);
    if analysis.security_level >= prefs.minimum_security_level {
        return Ok(());
    }
    if force {
        tracing::warn!(
            rated = %analysis.security_level,
            minimum = %prefs.minimum_security_level,
            "weak password accepted with --force"
        );
        return Ok(());
    }

    let mut message = format!(
        "password rated {} ({}); minimum is {}",
        analysis.strength, analysis.security_level, prefs.minimum_security_level
    );
    if prefs.show_recommendations {
        for hint in &analysis.recommendations {
            message.push_str("\n  - ");
            message.push_str(hint);
        }
    }
    message.push_str("\nuse --force to encrypt anyway");
    bail!(message)
}

/// Collapse an engine error to its user-facing sentence, keeping the
/// detail in the debug log.
fn user_error(err: EngineError) -> anyhow::Error {
    tracing::debug!(error = %err, "operation failed");
    anyhow::anyhow!(err.user_message())
}
