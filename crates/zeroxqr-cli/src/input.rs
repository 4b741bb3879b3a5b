//! Reading passwords and payloads from flags, the environment, or stdin.

use std::io::{self, IsTerminal, Read};

use anyhow::{bail, Context};
use dialoguer::Password;
use zeroize::Zeroizing;

use crate::cli::PasswordArgs;

/// Whether the password is being chosen (ask twice) or just entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPrompt {
    New,
    Existing,
}

/// Fetch the password from `--password-env`, or prompt on the terminal.
///
/// # Errors
///
/// Fails if the named variable is unset or not valid Unicode, or if no
/// terminal is available for the prompt.
pub fn read_password(
    args: &PasswordArgs,
    prompt: PasswordPrompt,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(var) = &args.password_env {
        return password_from_env(var);
    }
    if !io::stdin().is_terminal() {
        bail!("no terminal for the password prompt; use --password-env VAR");
    }

    let mut dialog = Password::new();
    dialog = match prompt {
        PasswordPrompt::New => dialog
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match"),
        PasswordPrompt::Existing => dialog.with_prompt("Password"),
    };
    dialog
        .allow_empty_password(true)
        .interact()
        .map(Zeroizing::new)
        .context("failed to read password")
}

/// Read the password held in environment variable `var`.
///
/// # Errors
///
/// Fails if `var` is unset or not valid Unicode.
pub fn password_from_env(var: &str) -> anyhow::Result<Zeroizing<String>> {
    std::env::var(var)
        .map(Zeroizing::new)
        .with_context(|| format!("environment variable {var} is not set"))
}

/// `value` if given, otherwise all of stdin.
///
/// One trailing line break is dropped so `echo text | zeroxqr encrypt`
/// encrypts `text`.
///
/// # Errors
///
/// Fails if stdin cannot be read or is not UTF-8.
pub fn read_text(value: Option<String>) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = value {
        return Ok(Zeroizing::new(value));
    }
    let mut buffer = Zeroizing::new(String::new());
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    let trimmed_len = strip_line_break(&buffer).len();
    buffer.truncate(trimmed_len);
    Ok(buffer)
}

/// `value` if given, otherwise stdin; surrounding whitespace removed.
///
/// # Errors
///
/// Fails if stdin cannot be read or is not UTF-8.
pub fn read_record(value: Option<String>) -> anyhow::Result<String> {
    let raw = match value {
        Some(value) => value,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    Ok(raw.trim().to_string())
}

fn strip_line_break(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
