//! `zeroxqr` command-line front end for `zeroxqr-crypto-core`.
//!
//! Results go to stdout, logs and status lines to stderr, so the output
//! of `encrypt`/`decrypt`/`generate` can be piped directly.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

mod cli;
mod commands;
mod config;
mod input;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::Cli;
use crate::commands::AppContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_up_logger(cli.verbose, cli.quiet);

    if let Err(e) = zeroxqr_crypto_core::disable_core_dumps() {
        tracing::warn!(error = %e, "could not disable core dumps");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::from_cli(&cli)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&ctx, cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise the level follows `-v`/`-q`.
fn set_up_logger(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to set global default subscriber");
    }
}
