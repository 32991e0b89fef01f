//! Error kinds for a single generation request.

use thiserror::Error;

/// Why a password could not be generated.
///
/// Both kinds are terminal for the request: nothing is retried and no
/// partial password is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid password length {0}: must be at least 1")]
    InvalidLength(i64),
    #[error("character pool is empty after exclusions")]
    EmptyPool,
}
