//! Password Strength Evaluation
//!
//! Rule-based strength meter backing the registration and reset forms.
//!
//! Every password is checked against the same fixed, ordered list of
//! [`REQUIREMENTS`]. The score is the number of satisfied requirements and
//! maps to a [`StrengthTier`] with a display color and text.
//!
//! ## Notes
//! The `one_special_character` requirement is checked with an uppercase
//! letter test. The label and the check disagree; clients depend on the
//! current behavior, so it is kept as is.
//!
//! ## Examples
//! ```rust
//! use platform::password::{PasswordStrength, StrengthTier};
//!
//! let strength = PasswordStrength::of("Abcdefg1");
//! assert_eq!(strength.score, 4);
//! assert_eq!(strength.tier, StrengthTier::Strong);
//! ```

use serde::Serialize;

/// Minimum password length counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Highest reachable score
pub const MAX_SCORE: u8 = REQUIREMENTS.len() as u8;

// ============================================================================
// Requirements
// ============================================================================

/// A single password rule
#[derive(Debug, Clone, Copy)]
pub struct PasswordRequirement {
    /// i18n key shown next to the rule
    pub label: &'static str,
    check: fn(&str) -> bool,
}

impl PasswordRequirement {
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

/// The rules, in display order
pub const REQUIREMENTS: [PasswordRequirement; 4] = [
    PasswordRequirement {
        label: "min_8_characters",
        check: has_min_length,
    },
    PasswordRequirement {
        label: "one_number",
        check: has_digit,
    },
    PasswordRequirement {
        label: "one_lowercase_letter",
        check: has_lowercase,
    },
    PasswordRequirement {
        label: "one_special_character",
        check: has_uppercase,
    },
];

fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Result of one requirement against one password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementCheck {
    pub label: &'static str,
    pub satisfied: bool,
}

/// Check `password` against every requirement, in order
pub fn evaluate(password: &str) -> Vec<RequirementCheck> {
    REQUIREMENTS
        .iter()
        .map(|requirement| RequirementCheck {
            label: requirement.label,
            satisfied: requirement.is_satisfied_by(password),
        })
        .collect()
}

/// Number of satisfied checks
pub fn strength_score(checks: &[RequirementCheck]) -> u8 {
    checks.iter().filter(|check| check.satisfied).count() as u8
}

// ============================================================================
// Presentation
// ============================================================================

/// Step function over the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    /// Score 0
    Empty,
    /// Score 1
    VeryWeak,
    /// Score 2
    Weak,
    /// Score 3
    Medium,
    /// Score 4
    Strong,
}

impl StrengthTier {
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthTier::Empty,
            1 => StrengthTier::VeryWeak,
            2 => StrengthTier::Weak,
            3 => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    /// Color token for the meter bar
    pub const fn color(&self) -> &'static str {
        match self {
            StrengthTier::Empty => "border",
            StrengthTier::VeryWeak => "red-500",
            StrengthTier::Weak => "orange-500",
            StrengthTier::Medium => "amber-500",
            StrengthTier::Strong => "emerald-500",
        }
    }

    /// Text shown under the meter
    pub const fn text(&self) -> &'static str {
        match self {
            StrengthTier::Empty => "Enter a password",
            StrengthTier::VeryWeak | StrengthTier::Weak => "Weak password",
            StrengthTier::Medium => "Medium password",
            StrengthTier::Strong => "Strong password",
        }
    }
}

pub const fn get_strength_color(score: u8) -> &'static str {
    StrengthTier::from_score(score).color()
}

pub const fn get_strength_text(score: u8) -> &'static str {
    StrengthTier::from_score(score).text()
}

/// Everything the strength meter needs for one password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub checks: Vec<RequirementCheck>,
    pub score: u8,
    pub tier: StrengthTier,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        let checks = evaluate(password);
        let score = strength_score(&checks);

        Self {
            checks,
            score,
            tier: StrengthTier::from_score(score),
        }
    }
}
