//! Password generation.

use log::debug;
use rand::distributions::{Distribution, Uniform};

use super::{GenerationConfig, Password, charset, charset::Pool};
use crate::entropy::{self, SecureRng};
use crate::error::GenerationError;

/// Generate a single password for `config` from the default secure source.
pub fn generate_password(config: &GenerationConfig) -> Result<Password, GenerationError> {
    generate_password_with(config, &mut entropy::source())
}

/// Generate a single password for `config` from `rng`.
pub fn generate_password_with<R: SecureRng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Password, GenerationError> {
    check_length(config.length)?;
    let pool = charset::build(config)?;
    generate(&pool, config.length, rng)
}

/// Generate `count` passwords sharing one pool.
pub fn generate_batch<R: SecureRng + ?Sized>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>, GenerationError> {
    check_length(config.length)?;
    let pool = charset::build(config)?;
    (0..count)
        .map(|_| generate(&pool, config.length, rng))
        .collect()
}

/// Draw `length` characters from `pool`, independently and with replacement.
///
/// Fails before drawing anything if `length` is zero or the pool is empty.
pub fn generate<R: SecureRng + ?Sized>(
    pool: &Pool,
    length: usize,
    rng: &mut R,
) -> Result<Password, GenerationError> {
    check_length(length)?;
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    debug!("drawing {} chars from a pool of {}", length, pool.len());

    // Refuse lengths that cannot be allocated instead of aborting
    let mut buf = String::new();
    buf.try_reserve_exact(length).map_err(|_| {
        GenerationError::InvalidLength(i64::try_from(length).unwrap_or(i64::MAX))
    })?;

    let chars = pool.as_slice();
    let dist = Uniform::from(0..chars.len());
    buf.extend((0..length).map(|_| chars[dist.sample(rng)]));
    Ok(Password::new(buf))
}

/// Front-end check for a raw, possibly negative length.
pub fn checked_length(raw: i64) -> Result<usize, GenerationError> {
    if raw <= 0 {
        return Err(GenerationError::InvalidLength(raw));
    }
    usize::try_from(raw).map_err(|_| GenerationError::InvalidLength(raw))
}

#[inline]
fn check_length(length: usize) -> Result<(), GenerationError> {
    if length == 0 {
        return Err(GenerationError::InvalidLength(0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn produces_requested_length_from_pool() {
        let pool = charset::build(&GenerationConfig::default()).unwrap();
        let mut rng = seeded();
        for length in [1, 2, 8, 12, 64, 1000] {
            let pass = generate(&pool, length, &mut rng).unwrap();
            assert_eq!(pass.len(), length);
            assert!(pass.as_str().chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn zero_length_is_rejected_before_pool_check() {
        let mut rng = seeded();
        assert_eq!(
            generate(&Pool::default(), 0, &mut rng),
            Err(GenerationError::InvalidLength(0))
        );
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut rng = seeded();
        assert_eq!(
            generate(&Pool::default(), 5, &mut rng),
            Err(GenerationError::EmptyPool)
        );
    }

    #[test]
    fn unallocatable_length_is_an_error() {
        let pool = Pool::from_chars(['a', 'b']);
        assert_eq!(
            generate(&pool, usize::MAX, &mut seeded()),
            Err(GenerationError::InvalidLength(i64::MAX))
        );
        if let Ok(huge) = checked_length(i64::MAX) {
            assert!(generate(&pool, huge, &mut seeded()).is_err());
        }
    }

    #[test]
    fn negative_and_zero_raw_lengths_are_invalid() {
        assert_eq!(checked_length(0), Err(GenerationError::InvalidLength(0)));
        assert_eq!(checked_length(-5), Err(GenerationError::InvalidLength(-5)));
        assert_eq!(checked_length(16), Ok(16));
    }

    #[test]
    fn same_seed_same_password() {
        let cfg = GenerationConfig::default();
        let a = generate_password_with(&cfg, &mut seeded()).unwrap();
        let b = generate_password_with(&cfg, &mut seeded()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_char_pool_repeats() {
        let pool = Pool::from_chars(['x']);
        let pass = generate(&pool, 5, &mut seeded()).unwrap();
        assert_eq!(pass.as_str(), "xxxxx");
    }

    #[test]
    fn batch_generates_count_passwords() {
        let cfg = GenerationConfig {
            length: 20,
            ..Default::default()
        };
        let batch = generate_batch(&cfg, 7, &mut seeded()).unwrap();
        assert_eq!(batch.len(), 7);
        assert!(batch.iter().all(|p| p.len() == 20));
    }

    #[test]
    fn batch_with_zero_length_fails() {
        let cfg = GenerationConfig {
            length: 0,
            ..Default::default()
        };
        assert_eq!(
            generate_batch(&cfg, 3, &mut seeded()),
            Err(GenerationError::InvalidLength(0))
        );
    }

    #[test]
    fn default_source_generates() {
        let pass = generate_password(&GenerationConfig::default()).unwrap();
        assert_eq!(pass.len(), 12);
    }
}
