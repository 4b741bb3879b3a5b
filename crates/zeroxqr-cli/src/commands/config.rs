use std::io::Write;

use anyhow::{ensure, Context};
use zeroxqr_crypto_core::password::generator::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

use super::AppContext;
use crate::cli::ConfigArgs;

/// With no flags, print the effective preferences. Otherwise apply the
/// flags and save.
pub fn run(ctx: &AppContext, args: &ConfigArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut prefs = ctx.prefs.clone();
    let mut changed = false;

    if let Some(level) = args.min_level {
        prefs.minimum_security_level = level.into();
        changed = true;
    }
    if let Some(length) = args.length {
        ensure!(
            (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length),
            "length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}"
        );
        prefs.generated_password_length = length;
        changed = true;
    }
    if let Some(show) = args.recommendations {
        prefs.show_recommendations = show;
        changed = true;
    }

    if changed {
        prefs.save(&ctx.config_dir).with_context(|| {
            format!("failed to save preferences in {}", ctx.config_dir.display())
        })?;
        tracing::debug!(dir = %ctx.config_dir.display(), "saved preferences");
        ctx.status(&format!("saved to {}", ctx.config_dir.display()));
    }

    serde_json::to_writer_pretty(&mut *out, &prefs)?;
    writeln!(out)?;
    Ok(())
}
