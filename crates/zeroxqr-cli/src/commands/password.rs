use std::io::Write;

use zeroize::Zeroizing;
use zeroxqr_crypto_core::{analyze_password, generate_random_password, PasswordStrengthResult};

use super::AppContext;
use crate::cli::{AnalyzeArgs, GenerateArgs};
use crate::input::{self, PasswordPrompt};

pub fn analyze(ctx: &AppContext, args: AnalyzeArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => Zeroizing::new(password),
        None => input::read_password(&args.source, PasswordPrompt::Existing)?,
    };
    let result = analyze_password(&password);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        render(&result, ctx.prefs.show_recommendations, out)?;
    }
    Ok(())
}

pub fn generate(ctx: &AppContext, args: &GenerateArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let length = args.length.unwrap_or(ctx.prefs.generated_password_length);
    let mut charsets = ctx.prefs.charsets.clone();
    charsets.uppercase &= !args.no_uppercase;
    charsets.lowercase &= !args.no_lowercase;
    charsets.digits &= !args.no_digits;
    charsets.symbols &= !args.no_symbols;

    let password = Zeroizing::new(generate_random_password(length, &charsets)?);
    writeln!(out, "{}", password.as_str())?;

    let rating = analyze_password(&password);
    ctx.status(&format!(
        "{} · {:.0} bits · {}",
        rating.strength, rating.entropy, rating.security_level
    ));
    Ok(())
}

fn render(
    result: &PasswordStrengthResult,
    show_recommendations: bool,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(out, "Strength:       {} ({}/100)", result.strength, result.score)?;
    writeln!(out, "Security:       {}", result.security_level)?;
    writeln!(out, "Entropy:        {:.1} bits", result.entropy)?;
    writeln!(out, "Time to crack:  {}", result.time_to_crack)?;
    if show_recommendations && !result.recommendations.is_empty() {
        writeln!(out, "Recommendations:")?;
        for hint in &result.recommendations {
            writeln!(out, "  - {hint}")?;
        }
    }
    Ok(())
}
