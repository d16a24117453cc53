//! Password strength meter library
//!
//! Scores password strength with four fixed, weighted checks, hard-rejects
//! known-common passwords, generates random strong passwords and keeps an
//! in-memory diary of saved credentials.
//!
//! # Features
//!
//! - `tracing`: Enables logging via the tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{check_password_strength, Strength, Verdict};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! match check_password_strength(&password) {
//!     Ok(Verdict::Scored(report)) => {
//!         println!("Score: {}", report.score);
//!         assert_eq!(report.strength(), Strength::Strong);
//!     }
//!     Ok(Verdict::TooCommon) => println!("Pick a less common password"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

// Internal modules
mod checks;
mod common;
mod diary;
mod evaluator;
mod generator;
mod types;

// Public API
pub use common::is_common;
pub use diary::{DiaryEntry, PasswordDiary};
pub use evaluator::{CheckError, Verdict, check_password_strength, evaluate};
pub use generator::{DEFAULT_LENGTH, generate, generate_with};
pub use types::{MAX_SCORE, PasswordScore, Strength, StrengthReport};
