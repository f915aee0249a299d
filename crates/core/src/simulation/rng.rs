//! Deterministic simulation RNG.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Every run
//! owns its own `SimRng`; nothing in the engine touches `rand::rng()` except
//! to draw a fresh seed for unseeded runs, and that seed is kept so the run
//! can be replayed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG stream for one simulation run
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    #[must_use]
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a `SimRng` from a seed drawn from the thread-local generator
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed_u64(rand::rng().random())
    }

    /// Seed this stream was created from
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SimRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}
