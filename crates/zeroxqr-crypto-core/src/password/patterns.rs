//! Weak-pattern detection.

use std::fmt;

/// Passwords that show up at the top of every breach list.
pub const COMMON_WORDS: [&str; 5] = ["password", "123456", "qwerty", "admin", "login"];

/// Keyboard rows; any three adjacent keys (either direction) count.
pub const KEYBOARD_ROWS: [&str; 4] = ["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];

/// A weakness found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeakPattern {
    /// Three characters with consecutive ascending code points (`abc`, `123`).
    SequentialChars,
    /// A 2–4 character chunk immediately repeated (`abab`, `xyzxyz`).
    RepeatedSequence,
    /// Contains one of [`COMMON_WORDS`].
    CommonWord(&'static str),
    /// Contains three adjacent keys from one of [`KEYBOARD_ROWS`].
    KeyboardPattern,
}

impl fmt::Display for WeakPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SequentialChars => f.write_str("sequential chars"),
            Self::RepeatedSequence => f.write_str("repeated sequences"),
            Self::CommonWord(word) => write!(f, "common word: {word}"),
            Self::KeyboardPattern => f.write_str("keyboard pattern"),
        }
    }
}

/// Run every check and list what was found, in check order.
///
/// Each common word is reported separately.
#[must_use]
pub fn detect(password: &str) -> Vec<WeakPattern> {
    let chars: Vec<char> = password.chars().collect();
    let lower = password.to_lowercase();
    let mut found = Vec::new();

    if has_sequential_run(&chars) {
        found.push(WeakPattern::SequentialChars);
    }
    if has_repeated_sequence(&chars) {
        found.push(WeakPattern::RepeatedSequence);
    }
    found.extend(
        COMMON_WORDS
            .iter()
            .copied()
            .filter(|word| lower.contains(word))
            .map(WeakPattern::CommonWord),
    );
    if has_keyboard_run(&lower) {
        found.push(WeakPattern::KeyboardPattern);
    }
    found
}

fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let (a, b, c) = (u32::from(w[0]), u32::from(w[1]), u32::from(w[2]));
        a.checked_add(1) == Some(b) && b.checked_add(1) == Some(c)
    })
}

fn has_repeated_sequence(chars: &[char]) -> bool {
    (2..=4).any(|len: usize| {
        let span = len.saturating_mul(2);
        chars
            .windows(span)
            .any(|w| w[..len] == w[len..])
    })
}

fn has_keyboard_run(lower: &str) -> bool {
    KEYBOARD_ROWS.iter().any(|row| {
        let keys: Vec<char> = row.chars().collect();
        keys.windows(3).any(|w| {
            let forward: String = w.iter().collect();
            let reversed: String = w.iter().rev().collect();
            lower.contains(&forward) || lower.contains(&reversed)
        })
    })
}
