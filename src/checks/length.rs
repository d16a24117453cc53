//! Length check - passwords shorter than the minimum fail.

use super::CheckResult;
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Score contribution when the check passes.
pub const WEIGHT: f64 = 2.0;

/// Checks if the password meets the minimum length.
///
/// # Returns
/// - `Some(feedback)` if the password is too short
/// - `None` if the password has sufficient length
pub fn length_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some("Password should be at least 8 characters long.");
    }
    None
}
