//! wordpass Core
//!
//! Derive a password deterministically from free text.
//!
//! # How it works
//!
//! The caller supplies a target length, a set of special characters and the
//! ordered list of unique words found in a text. The engine fills a buffer of
//! `length` slots in three passes:
//!
//! 1. **Special characters**: the trailing words pick slot positions
//!    (collisions probe forward, wrapping around).
//! 2. **Digits**: the first remaining word, plus every later one whose
//!    character-code sum is divisible by 7, yields one digit each.
//! 3. **Letters**: the words left over yield one letter each.
//!
//! The same inputs always produce the same password. This is a reproducible
//! transformation, not a secure random generator.
//!
//! # Example
//!
//! ```
//! use wordpass_core::{derive, extract_unique_words};
//!
//! let text = "In the session of the day retail and tourism led the way \
//!             but mobile and the market did not as the economy and energy of athens grew";
//! let words = extract_unique_words(text, 5);
//!
//! let password = derive(8, &['$', '#', '@', '!'], &words[..8]).unwrap();
//! assert_eq!(password.as_str(), "2Kv@K!$#");
//! ```

pub mod engine;
pub mod fold;
pub mod password;
pub mod request;
pub mod words;

// Re-exports
pub use engine::{derive, PasswordGenerator, WordGenerator};
pub use password::Password;
pub use request::{PasswordRequest, RequestError, RequestLimits};
pub use words::{extract_unique_words, take_words};

use thiserror::Error;

/// Errors from the derivation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("Invalid password length: {0}")]
    InvalidLength(usize),
    #[error("{special} special characters do not fit in a password of length {length}")]
    TooManySpecialChars { special: usize, length: usize },
    #[error("Insufficient material: {0}")]
    InsufficientMaterial(String),
    #[error("Incomplete output: {unfilled} of {length} slots left unfilled")]
    IncompleteOutput { unfilled: usize, length: usize },
}
