//! Password strength checks
//!
//! Each check examines one aspect of the password and carries a fixed weight
//! added to the score when it passes.

pub mod case;
pub mod digit;
pub mod length;
pub mod special;

pub use case::case_mix_check;
pub use digit::digit_check;
pub use length::length_check;
pub use special::special_char_check;

/// Result type for check functions.
/// - `Some(feedback)` - Check failed, with the improvement suggestion
/// - `None` - Check passed
pub type CheckResult = Option<&'static str>;
