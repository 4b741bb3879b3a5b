use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use zeroxqr_crypto_core::SecurityLevel;

/// zeroxqr - password-based text encryption with a copy-paste friendly format
#[derive(Debug, Parser)]
#[command(name = "zeroxqr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding preferences.json
    #[arg(long = "config", global = true, env = "ZEROXQR_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encrypt text into a 0xQR record
    Encrypt(EncryptArgs),
    /// Decrypt a 0xQR record
    Decrypt(DecryptArgs),
    /// Rate a password
    Analyze(AnalyzeArgs),
    /// Generate a random password
    Generate(GenerateArgs),
    /// Show the structure of a 0xQR record without decrypting it
    Inspect(InspectArgs),
    /// Show or change preferences
    Config(ConfigArgs),
}

/// Where the password comes from when it is not typed interactively.
#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Read the password from this environment variable
    #[arg(long, value_name = "VAR")]
    pub password_env: Option<String>,
}

#[derive(Debug, Args)]
pub struct EncryptArgs {
    /// Text to encrypt (reads stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,

    /// Accept a password below the configured minimum security level
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct DecryptArgs {
    /// 0xQR record (reads stdin when omitted)
    #[arg(short, long)]
    pub data: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Password to rate (prompts when omitted; beware shell history)
    pub password: Option<String>,

    #[command(flatten)]
    pub source: PasswordArgs,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Length in characters (defaults to the configured length)
    #[arg(short, long)]
    pub length: Option<usize>,

    #[arg(long)]
    pub no_uppercase: bool,

    #[arg(long)]
    pub no_lowercase: bool,

    #[arg(long)]
    pub no_digits: bool,

    #[arg(long)]
    pub no_symbols: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// 0xQR record (reads stdin when omitted)
    #[arg(short, long)]
    pub data: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Refuse encryption passwords rated below this level
    #[arg(long, value_enum)]
    pub min_level: Option<LevelArg>,

    /// Default length for `generate`
    #[arg(long)]
    pub length: Option<usize>,

    /// Show improvement hints in `analyze` and on refusal
    #[arg(long)]
    pub recommendations: Option<bool>,
}

/// Command-line spelling of [`SecurityLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Insecure,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl From<LevelArg> for SecurityLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Insecure => Self::Insecure,
            LevelArg::Low => Self::Low,
            LevelArg::Medium => Self::Medium,
            LevelArg::High => Self::High,
            LevelArg::VeryHigh => Self::VeryHigh,
        }
    }
}
