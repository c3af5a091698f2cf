//! Derived password container
//!
//! The characters are wiped from memory when the password is dropped.

use std::fmt;
use zeroize::Zeroizing;

/// A successfully derived password (every slot filled)
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub(crate) fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self(Zeroizing::new(chars.into_iter().collect()))
    }

    /// The password as a string slice
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len())
    }
}
