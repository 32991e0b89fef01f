//! Password generation and strength rating.

pub mod charset;
pub mod generate;
pub mod strength;

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

pub use generate::{
    checked_length, generate, generate_batch, generate_password, generate_password_with,
};
pub use strength::{StrengthRating, score};

/// Parameters for one generation request.
///
/// Upper and lowercase letters are always part of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: true,
        }
    }
}

/// A generated password. Wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(inner: String) -> Self {
        Password(inner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rate this password.
    pub fn strength(&self) -> StrengthRating {
        score(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len())
    }
}
