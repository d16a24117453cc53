//! Case mixture check - requires both uppercase and lowercase letters.

use super::CheckResult;
use secrecy::{ExposeSecret, SecretString};

/// Score contribution when the check passes.
pub const WEIGHT: f64 = 1.5;

/// Checks if the password mixes uppercase and lowercase ASCII letters.
///
/// # Returns
/// - `Some(feedback)` if either case is missing
/// - `None` if both cases are present
pub fn case_mix_check(password: &SecretString) -> CheckResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        None
    } else {
        Some("Include both uppercase and lowercase letters.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_mix_check_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        assert!(case_mix_check(&pwd).is_some());
    }

    #[test]
    fn test_case_mix_check_missing_lowercase() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        assert!(case_mix_check(&pwd).is_some());
    }

    #[test]
    fn test_case_mix_check_no_letters_at_all() {
        let pwd = SecretString::new("12345!@#".to_string().into());
        assert_eq!(
            case_mix_check(&pwd),
            Some("Include both uppercase and lowercase letters.")
        );
    }

    #[test]
    fn test_case_mix_check_both_cases() {
        let pwd = SecretString::new("MixedCase".to_string().into());
        assert_eq!(case_mix_check(&pwd), None);
    }
}
