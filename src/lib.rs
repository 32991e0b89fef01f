//! Random password generation from a configurable character pool, plus a
//! coarse strength rating.
//!
//! ```no_run
//! use passgauge::{GenerationConfig, generate_password, score_strength};
//!
//! let pass = generate_password(&GenerationConfig::default())?;
//! println!("{} ({})", pass.as_str(), score_strength(pass.as_str()));
//! # Ok::<(), passgauge::GenerationError>(())
//! ```

pub mod entropy;
pub mod error;
pub mod pass;

pub use error::GenerationError;
pub use pass::{
    GenerationConfig, Password, StrengthRating, checked_length, generate_batch,
    generate_password, generate_password_with,
};

/// Rate any password string. Never fails; an empty string is `Weak`.
pub fn score_strength(password: &str) -> StrengthRating {
    pass::strength::score(password)
}
