//! Coarse password strength rating.
//!
//! The rating looks only at length and at how many character categories
//! appear. It is a heuristic, not an entropy estimate: dictionary words,
//! repeated runs and skewed character frequencies are not considered.

use std::fmt;

/// Ordered strength label, `Weak < Medium < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
}

impl StrengthRating {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Medium => "Medium",
            StrengthRating::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate a password from its own content.
pub fn score(password: &str) -> StrengthRating {
    let length = password.chars().count();
    let categories = category_count(password);

    if length < 8 || categories < 3 {
        StrengthRating::Weak
    } else if length < 12 || categories < 4 {
        StrengthRating::Medium
    } else {
        StrengthRating::Strong
    }
}

/// Number of categories present: lowercase, uppercase, digit, special (0-4).
fn category_count(password: &str) -> usize {
    let (mut lower, mut upper, mut digit, mut special) = (false, false, false, false);

    for c in password.chars() {
        if c.is_lowercase() {
            lower = true;
        } else if c.is_uppercase() {
            upper = true;
        } else if c.is_numeric() {
            digit = true;
        } else if !c.is_alphanumeric() {
            special = true;
        }
    }

    [lower, upper, digit, special].into_iter().filter(|&b| b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_single_category_is_weak() {
        assert_eq!(score("abc"), StrengthRating::Weak);
    }

    #[test]
    fn eight_lowercase_is_weak() {
        assert_eq!(score("abcdefgh"), StrengthRating::Weak);
    }

    #[test]
    fn eight_chars_three_categories_is_medium() {
        assert_eq!(score("Abcdefg1"), StrengthRating::Medium);
    }

    #[test]
    fn long_four_categories_is_strong() {
        assert_eq!(score("Abcdefghijk1!"), StrengthRating::Strong);
    }

    #[test]
    fn seven_chars_four_categories_is_weak() {
        assert_eq!(score("Ab1!xyz"), StrengthRating::Weak);
    }

    #[test]
    fn long_three_categories_stays_medium() {
        assert_eq!(score("Abcdefghijklmnop1"), StrengthRating::Medium);
    }

    #[test]
    fn eleven_chars_four_categories_is_medium() {
        assert_eq!(score("Abcdefghi1!"), StrengthRating::Medium);
        assert_eq!(score("Abcdefghij1!"), StrengthRating::Strong);
    }

    #[test]
    fn empty_is_weak() {
        assert_eq!(score(""), StrengthRating::Weak);
    }

    #[test]
    fn whitespace_counts_as_special() {
        assert_eq!(category_count("a B 1"), 4);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 7 chars, 4 categories, more than 8 bytes
        assert_eq!(score("Äb1!xyz"), StrengthRating::Weak);
    }

    #[test]
    fn ratings_are_ordered() {
        assert!(StrengthRating::Weak < StrengthRating::Medium);
        assert!(StrengthRating::Medium < StrengthRating::Strong);
        assert_eq!(StrengthRating::Strong.to_string(), "Strong");
    }
}
