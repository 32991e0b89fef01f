//! Secure randomness for password sampling.
//!
//! Everything that draws characters goes through [`SecureRng`], so tests can
//! substitute a seeded generator while the binary uses the thread-local or
//! OS source.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::{OsRng, ThreadRng};
use rand_core::{CryptoRng, RngCore};

/// A cryptographically secure random source.
pub trait SecureRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> SecureRng for T {}

// Runtime flag: draw every value straight from the OS instead of ThreadRng
static USE_OS_RNG: AtomicBool = AtomicBool::new(false);

pub fn enable_os_rng() {
    USE_OS_RNG.store(true, Ordering::SeqCst);
}

pub fn is_os_rng_enabled() -> bool {
    USE_OS_RNG.load(Ordering::Relaxed)
}

/// Human-readable name of the active source.
pub fn entropy_source() -> &'static str {
    source().name()
}

// =============================================================================
// Source
// =============================================================================

/// The process-wide default source, resolved per call.
pub enum Source {
    Thread(ThreadRng),
    Os(OsRng),
}

/// Get the currently selected default source.
pub fn source() -> Source {
    source_for(is_os_rng_enabled())
}

pub fn source_for(os_rng: bool) -> Source {
    if os_rng {
        Source::Os(OsRng)
    } else {
        Source::Thread(rand::thread_rng())
    }
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Thread(_) => "ChaCha thread RNG (OS-seeded)",
            Source::Os(_) => "OS random (getrandom)",
        }
    }
}

impl RngCore for Source {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Thread(r) => r.next_u32(),
            Source::Os(r) => r.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Thread(r) => r.next_u64(),
            Source::Os(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Thread(r) => r.fill_bytes(dest),
            Source::Os(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        match self {
            Source::Thread(r) => r.try_fill_bytes(dest),
            Source::Os(r) => r.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for Source {}
