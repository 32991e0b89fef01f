use passgauge::pass::charset::{self, Pool};
use passgauge::pass::generate;
use passgauge::{
    GenerationConfig, GenerationError, StrengthRating, generate_batch, generate_password,
    generate_password_with, score_strength,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn config(length: usize, digits: bool, symbols: bool, ambiguous: bool) -> GenerationConfig {
    GenerationConfig {
        length,
        include_digits: digits,
        include_symbols: symbols,
        exclude_ambiguous: ambiguous,
    }
}

/// Pearson chi-square statistic of `counts` against a uniform expectation.
fn chi_square(counts: &[u64], total: u64) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

fn frequencies(pool: &Pool, drawn: &str) -> Vec<u64> {
    let mut counts = vec![0u64; pool.len()];
    for c in drawn.chars() {
        let idx = pool.iter().position(|p| p == c).expect("char outside pool");
        counts[idx] += 1;
    }
    counts
}

#[test]
fn full_pool_draws_are_uniform() {
    // 94 chars, 93 degrees of freedom; p = 0.001 critical value is ~136
    let pool = charset::build(&config(1, true, true, false)).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0x00c0_ffee);
    let draws = 100_000;

    let pass = generate(&pool, draws, &mut rng).unwrap();
    let counts = frequencies(&pool, pass.as_str());

    let stat = chi_square(&counts, draws as u64);
    assert!(stat < 150.0, "chi-square {stat:.1} too high for 93 dof");

    let expected = draws as f64 / pool.len() as f64;
    for &c in &counts {
        let deviation = (c as f64 - expected).abs() / expected;
        assert!(deviation < 0.15, "count {c} strays from {expected:.0}");
    }
}

#[test]
fn non_power_of_two_pool_is_uniform() {
    // 3 chars: plain modulo on a small draw would skew towards the first
    let pool = Pool::from_chars(['a', 'b', 'c']);
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let draws = 90_000;

    let pass = generate(&pool, draws, &mut rng).unwrap();
    let counts = frequencies(&pool, pass.as_str());

    // 2 degrees of freedom; p = 0.001 critical value is ~13.8
    assert!(chi_square(&counts, draws as u64) < 16.0);
}

#[test]
fn invalid_lengths_fail_before_sampling() {
    let pool = charset::build(&GenerationConfig::default()).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    assert_eq!(
        generate(&pool, 0, &mut rng),
        Err(GenerationError::InvalidLength(0))
    );
    assert_eq!(
        passgauge::checked_length(-5),
        Err(GenerationError::InvalidLength(-5))
    );
    assert_eq!(
        generate_password(&config(0, true, true, true)),
        Err(GenerationError::InvalidLength(0))
    );
}

#[test]
fn empty_pool_fails() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    assert_eq!(
        generate(&Pool::from_chars(std::iter::empty()), 5, &mut rng),
        Err(GenerationError::EmptyPool)
    );
}

#[test]
fn strength_boundaries() {
    assert_eq!(score_strength("abc"), StrengthRating::Weak);
    assert_eq!(score_strength("abcdefgh"), StrengthRating::Weak);
    assert_eq!(score_strength("Abcdefg1"), StrengthRating::Medium);
    assert_eq!(score_strength("Abcdefghijk1!"), StrengthRating::Strong);
}

#[test]
fn letters_only_passwords_are_weak() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let batch = generate_batch(&config(40, false, false, true), 50, &mut rng).unwrap();
    for pass in &batch {
        assert_eq!(pass.strength(), StrengthRating::Weak);
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let cfg = config(24, true, true, true);
    let a = generate_password_with(&cfg, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
    let b = generate_password_with(&cfg, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
    let c = generate_password_with(&cfg, &mut ChaCha20Rng::seed_from_u64(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

proptest! {
    #[test]
    fn length_and_membership_hold(
        length in 1usize..512,
        digits: bool,
        symbols: bool,
        ambiguous: bool,
        seed: u64,
    ) {
        let cfg = config(length, digits, symbols, ambiguous);
        let pool = charset::build(&cfg).unwrap();
        let pass = generate_password_with(&cfg, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(pass.len(), length);
        prop_assert!(pass.as_str().chars().all(|c| pool.contains(c)));
        if ambiguous {
            prop_assert!(!pass.as_str().chars().any(|c| charset::AMBIGUOUS.contains(&c)));
        }
    }

    #[test]
    fn short_passwords_are_always_weak(s in "\\PC{0,7}") {
        prop_assert_eq!(score_strength(&s), StrengthRating::Weak);
    }

    #[test]
    fn appending_never_lowers_the_rating(s in "[ -~]{0,20}", extra in "[ -~]{1,8}") {
        let longer = format!("{s}{extra}");
        prop_assert!(score_strength(&longer) >= score_strength(&s));
    }
}
