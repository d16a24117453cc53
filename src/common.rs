//! Common-password filter
//!
//! Hard-reject check against a fixed list of known-weak passwords,
//! independent of scoring.

/// Known-weak passwords, stored lowercase and matched case-insensitively.
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "qwerty",
    "password123",
    "admin",
    "letmein",
];

/// Checks if a password is in the common-password list.
///
/// The input is lowercased before the lookup, so `"PASSWORD"` and
/// `"Password123"` both match. No partial or fuzzy matching.
pub fn is_common(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_common_exact_match() {
        assert!(is_common("letmein"));
        assert!(is_common("123456"));
    }

    #[test]
    fn test_is_common_case_insensitive() {
        assert!(is_common("PASSWORD"));
        assert!(is_common("Password123"));
        assert!(is_common("QwErTy"));
    }

    #[test]
    fn test_is_common_no_partial_match() {
        assert!(!is_common("password1234"));
        assert!(!is_common("my-qwerty"));
    }

    #[test]
    fn test_is_common_uncommon_password() {
        assert!(!is_common("CorrectHorseBatteryStaple!123"));
    }

    #[test]
    fn test_is_common_empty_string() {
        assert!(!is_common(""));
    }
}
