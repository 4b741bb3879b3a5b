//! Password tooling.
//!
//! - [`strength`]: entropy-based strength analyzer with recommendations
//! - [`patterns`]: weak-pattern detection used by the analyzer
//! - [`generator`]: random password generation

pub mod generator;
pub mod patterns;
pub mod strength;

pub use generator::{
    generate_random_password, generate_random_password_with, CharsetConfig,
    DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use patterns::WeakPattern;
pub use strength::{
    analyze_password, PasswordMetrics, PasswordStrength, PasswordStrengthAnalyzer,
    PasswordStrengthResult, SecurityLevel,
};
