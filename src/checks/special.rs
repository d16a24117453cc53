//! Special character check - requires a symbol from the fixed set.

use super::CheckResult;
use secrecy::{ExposeSecret, SecretString};

/// The accepted special characters. Symbols outside this set do not count.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Score contribution when the check passes.
pub const WEIGHT: f64 = 2.0;

/// Checks if the password contains at least one character from
/// [`SPECIAL_CHARS`].
///
/// # Returns
/// - `Some(feedback)` if no accepted special character is present
/// - `None` if one is present
pub fn special_char_check(password: &SecretString) -> CheckResult {
    if password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
    {
        None
    } else {
        Some("Include at least one special character (!@#$%^&*).")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_char_check_missing() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        assert_eq!(
            special_char_check(&pwd),
            Some("Include at least one special character (!@#$%^&*).")
        );
    }

    #[test]
    fn test_special_char_check_each_accepted_symbol() {
        for symbol in SPECIAL_CHARS.chars() {
            let pwd = SecretString::new(format!("abc{symbol}").into());
            assert_eq!(special_char_check(&pwd), None, "symbol {symbol} rejected");
        }
    }

    #[test]
    fn test_special_char_check_symbol_outside_set() {
        // Punctuation outside the fixed set does not count
        let pwd = SecretString::new("Has.Dots-And_Underscores".to_string().into());
        assert!(special_char_check(&pwd).is_some());
    }
}
