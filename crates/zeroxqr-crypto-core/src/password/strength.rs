//! Password strength estimation.
//!
//! A heuristic, deterministic score: charset-size entropy, discounted for
//! repeated characters and for each weak pattern found by
//! [`patterns::detect`](super::patterns::detect). Intended to steer users
//! away from weak secrets before they reach key derivation, not as a
//! cracking model.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::patterns::{self, WeakPattern};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Guesses per second assumed for the crack-time estimate.
pub const GUESSES_PER_SECOND: f64 = 1e12;

/// Length below which a password is always `VeryWeak`.
pub const MIN_REASONABLE_LENGTH: usize = 8;

/// Length below which a longer password is recommended.
pub const RECOMMENDED_LENGTH: usize = 12;

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SPECIAL_POOL: u32 = 32;

const REPETITION_WEIGHT: f64 = 0.5;
const PATTERN_WEIGHT: f64 = 0.1;
const REPEATED_SHARE_LIMIT: f64 = 0.3;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const MILLENNIUM: f64 = 31_536_000_000.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Strength tier, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Score on a 0–100 scale. Monotone in the tier.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::VeryWeak => 10,
            Self::Weak => 25,
            Self::Fair => 50,
            Self::Good => 75,
            Self::Strong => 90,
            Self::VeryStrong => 100,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse security rating of a password used as an encryption secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecurityLevel {
    Insecure,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SecurityLevel {
    /// Upper-case badge text.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Insecure => "INSECURE",
            Self::Low => "LOW SECURITY",
            Self::Medium => "MEDIUM SECURITY",
            Self::High => "HIGH SECURITY",
            Self::VeryHigh => "VERY HIGH SECURITY",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.badge())
    }
}

/// Character-level facts about a password.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordMetrics {
    /// Length in characters.
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    /// Anything that is neither alphabetic nor an ASCII digit.
    pub has_special_chars: bool,
    pub unique_chars: usize,
    /// `length - unique_chars`.
    pub repeated_chars: usize,
    pub patterns: Vec<WeakPattern>,
}

impl PasswordMetrics {
    #[must_use]
    pub fn from_password(password: &str) -> Self {
        let length = password.chars().count();
        let unique_chars = password.chars().collect::<HashSet<_>>().len();
        Self {
            length,
            has_lowercase: password.chars().any(char::is_lowercase),
            has_uppercase: password.chars().any(char::is_uppercase),
            has_digits: password.chars().any(|c| c.is_ascii_digit()),
            has_special_chars: password
                .chars()
                .any(|c| !(c.is_alphabetic() || c.is_ascii_digit())),
            unique_chars,
            repeated_chars: length.saturating_sub(unique_chars),
            patterns: patterns::detect(password),
        }
    }

    /// Size of the alphabet implied by the character classes present (at least 1).
    #[must_use]
    pub fn charset_size(&self) -> u32 {
        let pools = [
            (self.has_lowercase, LOWERCASE_POOL),
            (self.has_uppercase, UPPERCASE_POOL),
            (self.has_digits, DIGIT_POOL),
            (self.has_special_chars, SPECIAL_POOL),
        ];
        pools
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, size)| *size)
            .sum::<u32>()
            .max(1)
    }

    /// Estimated entropy in bits, never negative.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn entropy(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        let length = self.length as f64;
        let base = length * f64::from(self.charset_size()).log2();
        let penalty = (self.repeated_chars as f64 / length) * REPETITION_WEIGHT
            + self.patterns.len() as f64 * PATTERN_WEIGHT;
        (base - base * penalty).max(0.0)
    }
}

/// Outcome of [`analyze_password`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthResult {
    pub strength: PasswordStrength,
    /// 0 for the empty password, otherwise [`PasswordStrength::score`].
    pub score: u8,
    /// Bits.
    pub entropy: f64,
    pub time_to_crack: String,
    pub recommendations: Vec<String>,
    pub security_level: SecurityLevel,
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Stateless analyzer; see [`analyze_password`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordStrengthAnalyzer;

impl PasswordStrengthAnalyzer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyze `password`. Same input, same result.
    #[must_use]
    pub fn analyze(&self, password: &str) -> PasswordStrengthResult {
        if password.is_empty() {
            return PasswordStrengthResult {
                strength: PasswordStrength::VeryWeak,
                score: 0,
                entropy: 0.0,
                time_to_crack: "Instant".into(),
                recommendations: vec!["Password cannot be empty".into()],
                security_level: SecurityLevel::Insecure,
            };
        }

        let metrics = PasswordMetrics::from_password(password);
        let entropy = metrics.entropy();
        let strength = strength_tier(metrics.length, entropy);

        PasswordStrengthResult {
            strength,
            score: strength.score(),
            entropy,
            time_to_crack: time_to_crack(entropy),
            recommendations: recommendations(&metrics, strength),
            security_level: security_level(strength, entropy),
        }
    }
}

/// Analyze `password` with the default analyzer.
#[must_use]
pub fn analyze_password(password: &str) -> PasswordStrengthResult {
    PasswordStrengthAnalyzer::new().analyze(password)
}

fn strength_tier(length: usize, entropy: f64) -> PasswordStrength {
    if length < MIN_REASONABLE_LENGTH {
        PasswordStrength::VeryWeak
    } else if entropy < 30.0 {
        PasswordStrength::Weak
    } else if entropy < 50.0 {
        PasswordStrength::Fair
    } else if entropy < 70.0 {
        PasswordStrength::Good
    } else if entropy < 90.0 {
        PasswordStrength::Strong
    } else {
        PasswordStrength::VeryStrong
    }
}

fn security_level(strength: PasswordStrength, entropy: f64) -> SecurityLevel {
    use PasswordStrength as S;
    if strength == S::VeryWeak || entropy < 25.0 {
        SecurityLevel::Insecure
    } else if strength == S::Weak || entropy < 40.0 {
        SecurityLevel::Low
    } else if strength == S::Fair || entropy < 60.0 {
        SecurityLevel::Medium
    } else if strength == S::Good || entropy < 80.0 {
        SecurityLevel::High
    } else {
        SecurityLevel::VeryHigh
    }
}

/// Average time to exhaust half the keyspace at [`GUESSES_PER_SECOND`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn time_to_crack(entropy: f64) -> String {
    let seconds = 2f64.powf(entropy) / 2.0 / GUESSES_PER_SECOND;
    let whole = |unit: f64| (seconds / unit) as u64;

    if seconds < 1.0 {
        "Instant".into()
    } else if seconds < MINUTE {
        format!("{} seconds", whole(1.0))
    } else if seconds < HOUR {
        format!("{} minutes", whole(MINUTE))
    } else if seconds < DAY {
        format!("{} hours", whole(HOUR))
    } else if seconds < YEAR {
        format!("{} days", whole(DAY))
    } else if seconds < MILLENNIUM {
        format!("{} years", whole(YEAR))
    } else {
        "Centuries+".into()
    }
}

#[allow(clippy::cast_precision_loss)]
fn recommendations(metrics: &PasswordMetrics, strength: PasswordStrength) -> Vec<String> {
    let mut out = Vec::new();

    if metrics.length < RECOMMENDED_LENGTH {
        out.push(format!(
            "Use at least {RECOMMENDED_LENGTH} characters (current: {})",
            metrics.length
        ));
    }
    if !metrics.has_lowercase {
        out.push("Add lowercase letters (a-z)".into());
    }
    if !metrics.has_uppercase {
        out.push("Add uppercase letters (A-Z)".into());
    }
    if !metrics.has_digits {
        out.push("Add numbers (0-9)".into());
    }
    if !metrics.has_special_chars {
        out.push("Add special characters (!@#$%^&*)".into());
    }
    if metrics.repeated_chars as f64 > metrics.length as f64 * REPEATED_SHARE_LIMIT {
        out.push("Reduce repeated characters".into());
    }
    if !metrics.patterns.is_empty() {
        let listed: Vec<String> = metrics.patterns.iter().map(ToString::to_string).collect();
        out.push(format!("Avoid common patterns: {}", listed.join(", ")));
    }
    if strength == PasswordStrength::VeryStrong {
        out.push("Excellent! This password provides strong security.".into());
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
