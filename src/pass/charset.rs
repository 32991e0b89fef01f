//! Character pool building for password generation.

use log::debug;

use super::GenerationConfig;
use crate::error::GenerationError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters that are easy to misread for one another.
pub const AMBIGUOUS: &[char] = &['l', '1', 'I', 'i', 'L', '0', 'O', 'o'];

/// A character class used both for building pools and for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Category {
    /// The reference characters of this category, in fixed order.
    pub fn chars(self) -> &'static str {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Digit => DIGITS,
            Category::Symbol => SYMBOLS,
        }
    }
}

/// The set of characters eligible for sampling.
///
/// Never holds duplicates. Iteration order is deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool(Vec<char>);

impl Pool {
    /// Build a pool from arbitrary characters; later duplicates are dropped.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut pool = Vec::new();
        for c in chars {
            if !pool.contains(&c) {
                pool.push(c);
            }
        }
        Pool(pool)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

/// Build the pool for a generation config.
///
/// Letters are always present; digits and symbols are opt-in. Length is not
/// looked at here.
pub fn build(config: &GenerationConfig) -> Result<Pool, GenerationError> {
    let mut categories = vec![Category::Lowercase, Category::Uppercase];
    if config.include_digits {
        categories.push(Category::Digit);
    }
    if config.include_symbols {
        categories.push(Category::Symbol);
    }

    let excluded: &[char] = if config.exclude_ambiguous { AMBIGUOUS } else { &[] };
    build_with(&categories, excluded)
}

/// Union the given categories, then drop every character in `excluded`.
pub fn build_with(categories: &[Category], excluded: &[char]) -> Result<Pool, GenerationError> {
    let pool = Pool::from_chars(
        categories
            .iter()
            .flat_map(|cat| cat.chars().chars())
            .filter(|c| !excluded.contains(c)),
    );

    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    debug!(
        "built pool of {} chars from {} categories ({} excluded)",
        pool.len(),
        categories.len(),
        excluded.len()
    );
    Ok(pool)
}
