// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use serde::Serialize;
use std::fmt;

use crate::password::MIN_LENGTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub(crate) enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Coarse classification: anything shorter than eight characters is weak,
/// strong needs an uppercase letter, a digit and a symbol.
pub(crate) fn classify_strength(password: &str) -> Strength {
    if password.chars().count() < MIN_LENGTH {
        return Strength::Weak;
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if has_uppercase && has_digit && has_symbol {
        Strength::Strong
    } else {
        Strength::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_weak() {
        assert_eq!(classify_strength(""), Strength::Weak);
        assert_eq!(classify_strength("Xy9!abc"), Strength::Weak);
    }

    #[test]
    fn missing_character_class_is_medium() {
        assert_eq!(classify_strength("ali567199005"), Strength::Medium);
        assert_eq!(classify_strength("ALICE!!!!"), Strength::Medium);
        assert_eq!(classify_strength("Alice!!!!"), Strength::Medium);
        assert_eq!(classify_strength("Alice1234"), Strength::Medium);
    }

    #[test]
    fn all_classes_are_strong() {
        assert_eq!(classify_strength("Xy9!abc123"), Strength::Strong);
        assert_eq!(classify_strength("A1 bcdefg"), Strength::Strong);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(classify_strength("Ä1bcdefgh"), Strength::Medium);
        assert_eq!(classify_strength("A1bcdefgé"), Strength::Strong);
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(classify_strength("A1éééé"), Strength::Weak);
    }

    #[test]
    fn display_labels() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Medium.to_string(), "Medium");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
