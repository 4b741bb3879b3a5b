//! User preferences, stored as plain JSON.
//!
//! Nothing secret lives here: only the policy knobs the CLI applies
//! around the core crate.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use zeroxqr_crypto_core::{CharsetConfig, SecurityLevel, DEFAULT_PASSWORD_LENGTH};

const PREFERENCES_FILE: &str = "preferences.json";
const PREFERENCES_TMP: &str = ".preferences.json.tmp";

/// CLI preferences. Every field has a default, so partial files load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// `encrypt` refuses passwords rated below this without `--force`.
    #[serde(default = "default_minimum_security_level")]
    pub minimum_security_level: SecurityLevel,

    /// Length used by `generate` when `--length` is absent.
    #[serde(default = "default_generated_password_length")]
    pub generated_password_length: usize,

    #[serde(default = "default_true")]
    pub show_recommendations: bool,

    /// Character classes used by `generate`.
    #[serde(default)]
    pub charsets: CharsetConfig,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            minimum_security_level: default_minimum_security_level(),
            generated_password_length: default_generated_password_length(),
            show_recommendations: true,
            charsets: CharsetConfig::default(),
        }
    }
}

const fn default_minimum_security_level() -> SecurityLevel {
    SecurityLevel::Medium
}
const fn default_generated_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}
const fn default_true() -> bool {
    true
}

/// `explicit` if given, else the platform config directory
/// (`~/.config/zeroxqr` on Linux).
///
/// # Errors
///
/// Fails when no home directory can be determined.
pub fn resolve_dir(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    ProjectDirs::from("io.github", "utkarshvishnoi", "zeroxqr")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .context("could not determine a config directory; pass --config")
}

impl Preferences {
    /// Load `{dir}/preferences.json`, falling back to defaults when the
    /// file is missing or unreadable.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(PREFERENCES_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt preferences");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write `{dir}/preferences.json` atomically (tmp file + rename),
    /// creating `dir` if needed. Owner-only on Unix.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the directory cannot be created or the
    /// write/rename fails.
    pub fn save(&self, dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        let path = dir.join(PREFERENCES_FILE);
        let tmp = dir.join(PREFERENCES_TMP);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&tmp, json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, &path)
    }
}
