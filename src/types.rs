//! Score, strength classification and evaluation report types.

use std::fmt;

/// Highest score the four checks can add up to.
pub const MAX_SCORE: f64 = 7.0;

/// Additive strength score in `[0, 7]`.
///
/// Every check contributes a multiple of 0.5, so scores are exact and can be
/// compared with `==`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PasswordScore(f64);

impl PasswordScore {
    pub fn new(value: f64) -> Self {
        PasswordScore(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Classifies the score: >= 6 is strong, >= 4 is moderate, below is weak.
    pub fn strength(&self) -> Strength {
        if self.0 >= 6.0 {
            Strength::Strong
        } else if self.0 >= 4.0 {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Strength class derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Outcome of running all four checks over a password.
///
/// `feedback` holds one line per failed check, in the fixed check order
/// (length, case mixture, digit, special character). The list is always
/// populated; whether to display it is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    pub score: PasswordScore,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    pub fn strength(&self) -> Strength {
        self.score.strength()
    }
}
