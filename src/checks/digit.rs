//! Digit check - requires at least one decimal digit.

use super::CheckResult;
use secrecy::{ExposeSecret, SecretString};

/// Score contribution when the check passes.
pub const WEIGHT: f64 = 1.5;

/// Checks if the password contains at least one ASCII digit.
///
/// # Returns
/// - `Some(feedback)` if no digit is present
/// - `None` if a digit is present
pub fn digit_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        None
    } else {
        Some("Add at least one number (0-9).")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_check_missing_digit() {
        let pwd = SecretString::new("NoNumbersHere!".to_string().into());
        assert_eq!(digit_check(&pwd), Some("Add at least one number (0-9)."));
    }

    #[test]
    fn test_digit_check_single_digit() {
        let pwd = SecretString::new("OneNumber7".to_string().into());
        assert_eq!(digit_check(&pwd), None);
    }

    #[test]
    fn test_digit_check_digits_only() {
        let pwd = SecretString::new("123456".to_string().into());
        assert_eq!(digit_check(&pwd), None);
    }
}
