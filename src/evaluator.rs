//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::checks::{
    CheckResult, case, case_mix_check, digit, digit_check, length, length_check, special,
    special_char_check,
};
use crate::common::is_common;
use crate::types::{PasswordScore, StrengthReport};

/// Error signalled by [`check_password_strength`] when there is nothing to
/// evaluate. Distinct from any score: neither the common-password filter nor
/// the evaluator ran.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("no password provided")]
    NoInput,
}

/// Outcome of the check-strength operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Hard rejection by the common-password filter; the evaluator was not
    /// consulted.
    TooCommon,
    /// The password was scored.
    Scored(StrengthReport),
}

/// Evaluates password strength and returns a detailed report.
///
/// Runs the four checks in fixed order (length, case mixture, digit, special
/// character). Each passing check adds its weight to the score; each failing
/// check appends one feedback line. There is no early exit: a password can
/// fail every check (score 0) or pass every check (score 7).
///
/// Pure: the same password always yields the same report.
pub fn evaluate(password: &SecretString) -> StrengthReport {
    let mut score = 0.0;
    let mut feedback = Vec::new();

    // Fixed check order; weights live next to their checks.
    let checks: [(fn(&SecretString) -> CheckResult, f64); 4] = [
        (length_check, length::WEIGHT),
        (case_mix_check, case::WEIGHT),
        (digit_check, digit::WEIGHT),
        (special_char_check, special::WEIGHT),
    ];

    for (check_fn, weight) in checks {
        match check_fn(password) {
            None => score += weight,
            Some(reason) => feedback.push(reason.to_string()),
        }
    }

    StrengthReport {
        score: PasswordScore::new(score),
        feedback,
    }
}

/// The check-strength operation: empty-input handling, then the
/// common-password filter, then the evaluator.
///
/// # Returns
/// - `Err(CheckError::NoInput)` for an empty password; the filter and the
///   evaluator are not run
/// - `Ok(Verdict::TooCommon)` if the filter matches; the evaluator is not run
/// - `Ok(Verdict::Scored(report))` otherwise
pub fn check_password_strength(password: &SecretString) -> Result<Verdict, CheckError> {
    if password.expose_secret().is_empty() {
        return Err(CheckError::NoInput);
    }

    if is_common(password.expose_secret()) {
        #[cfg(feature = "tracing")]
        tracing::warn!("password rejected by the common-password filter");
        return Ok(Verdict::TooCommon);
    }

    Ok(Verdict::Scored(evaluate(password)))
}
