//! Password request validation
//!
//! Checks a request against the configured limits before it reaches the
//! engine, so that engine failures only signal mismatched (but individually
//! valid) inputs.

use crate::engine::PasswordGenerator;
use crate::password::Password;
use crate::words::{extract_unique_words, take_words};
use crate::DeriveError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Slots always left for digits and letters
pub const MIN_NON_SPECIAL_SLOTS: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Password length must be from {min} to {max}")]
    InvalidPasswordLength { min: usize, max: usize },
    #[error("Special characters must be at least {min} and maximum {max}")]
    InvalidSpecialCharsSize { min: usize, max: usize },
    #[error("Special character '{0}' is not supported")]
    UnsupportedSpecialChar(char),
    #[error("Special character '{0}' is selected more than once")]
    DuplicateSpecialChar(char),
    #[error("Text is longer than {max} characters")]
    TextTooLong { max: usize },
    #[error("Less than {required} valid US-ASCII words found in text (found {found})")]
    NotAdequateValidWords { required: usize, found: usize },
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),
    #[error("Failed to generate password: {0}")]
    Derivation(#[from] DeriveError),
}

/// Bounds a request must satisfy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLimits {
    /// Shortest password allowed
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Longest password allowed
    #[serde(default = "default_max_password_length")]
    pub max_password_length: usize,

    /// Shortest word taken from the text
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Fewest special characters allowed
    #[serde(default = "default_min_special_chars")]
    pub min_special_chars: usize,

    /// Longest text accepted, in characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Special characters a request may choose from
    #[serde(default = "default_special_palette")]
    pub special_palette: String,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            max_password_length: default_max_password_length(),
            min_word_length: default_min_word_length(),
            min_special_chars: default_min_special_chars(),
            max_text_chars: default_max_text_chars(),
            special_palette: default_special_palette(),
        }
    }
}

fn default_min_password_length() -> usize {
    8
}

fn default_max_password_length() -> usize {
    20
}

fn default_min_word_length() -> usize {
    5
}

fn default_min_special_chars() -> usize {
    3
}

fn default_max_text_chars() -> usize {
    1000
}

fn default_special_palette() -> String {
    "$#@!%-_".to_string()
}

impl RequestLimits {
    /// Most special characters allowed for a given length
    pub fn max_special_chars(&self, length: usize) -> usize {
        length.saturating_sub(MIN_NON_SPECIAL_SLOTS)
    }

    /// Check that every request length in range can be satisfied
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.min_password_length == 0 {
            return Err(RequestError::InvalidLimits(
                "min_password_length must be > 0".into(),
            ));
        }
        if self.min_password_length > self.max_password_length {
            return Err(RequestError::InvalidLimits(format!(
                "min_password_length {} exceeds max_password_length {}",
                self.min_password_length, self.max_password_length
            )));
        }
        if self.min_special_chars > self.max_special_chars(self.min_password_length) {
            return Err(RequestError::InvalidLimits(format!(
                "min_password_length {} leaves no room for {} special characters",
                self.min_password_length, self.min_special_chars
            )));
        }
        if self.min_word_length == 0 {
            return Err(RequestError::InvalidLimits(
                "min_word_length must be > 0".into(),
            ));
        }
        if self.special_palette.is_empty() {
            return Err(RequestError::InvalidLimits(
                "special_palette must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// A password request as entered by the user
#[derive(Debug, Clone)]
pub struct PasswordRequest {
    /// Requested password length
    pub length: usize,
    /// Chosen special characters, in order
    pub special_chars: Vec<char>,
    /// Free text the words are taken from
    pub text: String,
}

impl PasswordRequest {
    pub fn new(length: usize, special_chars: impl Into<Vec<char>>, text: impl Into<String>) -> Self {
        Self {
            length,
            special_chars: special_chars.into(),
            text: text.into(),
        }
    }

    pub fn validate_length(&self, limits: &RequestLimits) -> Result<(), RequestError> {
        if self.length < limits.min_password_length || self.length > limits.max_password_length {
            return Err(RequestError::InvalidPasswordLength {
                min: limits.min_password_length,
                max: limits.max_password_length,
            });
        }
        Ok(())
    }

    pub fn validate_special_chars(&self, limits: &RequestLimits) -> Result<(), RequestError> {
        let max = limits.max_special_chars(self.length);
        let count = self.special_chars.len();
        if count < limits.min_special_chars || count > max {
            return Err(RequestError::InvalidSpecialCharsSize {
                min: limits.min_special_chars,
                max,
            });
        }

        let mut seen = HashSet::new();
        for &c in &self.special_chars {
            if !limits.special_palette.contains(c) {
                return Err(RequestError::UnsupportedSpecialChar(c));
            }
            if !seen.insert(c) {
                return Err(RequestError::DuplicateSpecialChar(c));
            }
        }
        Ok(())
    }

    /// Validate the text and return the words the engine will use
    pub fn validate_text(&self, limits: &RequestLimits) -> Result<Vec<String>, RequestError> {
        if self.text.chars().count() > limits.max_text_chars {
            return Err(RequestError::TextTooLong {
                max: limits.max_text_chars,
            });
        }

        let words = extract_unique_words(&self.text, limits.min_word_length);
        if words.len() < self.length {
            return Err(RequestError::NotAdequateValidWords {
                required: self.length,
                found: words.len(),
            });
        }
        Ok(take_words(&words, self.length).to_vec())
    }

    /// Validate the request and derive its password
    pub fn generate(
        &self,
        limits: &RequestLimits,
        generator: &impl PasswordGenerator,
    ) -> Result<Password, RequestError> {
        self.validate_length(limits)?;
        self.validate_special_chars(limits)?;
        let words = self.validate_text(limits)?;

        let password = generator.generate(self.length, &self.special_chars, &words)?;
        if password.len() != self.length {
            log::warn!(
                "Generator returned {} chars, expected {}",
                password.len(),
                self.length
            );
            return Err(RequestError::Derivation(DeriveError::IncompleteOutput {
                unfilled: self.length.saturating_sub(password.len()),
                length: self.length,
            }));
        }
        log::info!("Password of {} chars generated", password.len());
        Ok(password)
    }
}
