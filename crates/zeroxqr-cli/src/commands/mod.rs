//! Subcommand handlers.
//!
//! Handlers write their result to `out` (stdout in the binary) and
//! status lines to stderr unless `--quiet` is set.

mod config;
mod crypt;
mod password;

use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use crate::config::{resolve_dir, Preferences};

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub prefs: Preferences,
    pub config_dir: PathBuf,
    pub quiet: bool,
}

impl AppContext {
    /// Resolve the config directory and load preferences from it.
    ///
    /// # Errors
    ///
    /// Fails when no config directory can be determined.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config_dir = resolve_dir(cli.config_dir.as_deref())?;
        let prefs = Preferences::load(&config_dir);
        tracing::debug!(dir = %config_dir.display(), ?prefs, "loaded preferences");
        Ok(Self {
            prefs,
            config_dir,
            quiet: cli.quiet,
        })
    }

    fn status(&self, line: &str) {
        if !self.quiet {
            eprintln!("{line}");
        }
    }
}

/// Run `command`.
///
/// # Errors
///
/// Whatever the handler reports; messages are ready for the user.
pub fn dispatch(ctx: &AppContext, command: Commands, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Commands::Encrypt(args) => crypt::encrypt(ctx, args, out),
        Commands::Decrypt(args) => crypt::decrypt(args, out),
        Commands::Inspect(args) => crypt::inspect(args, out),
        Commands::Analyze(args) => password::analyze(ctx, args, out),
        Commands::Generate(args) => password::generate(ctx, &args, out),
        Commands::Config(args) => config::run(ctx, &args, out),
    }
}
