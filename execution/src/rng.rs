//! Random draws for cards, reels and the wheel.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of independent, uniformly distributed draws.
pub trait RandomSource {
    /// Returns a value uniformly distributed over `0..bound`. `bound` must be non-zero.
    fn draw(&mut self, bound: usize) -> usize;
}

/// ChaCha-backed [RandomSource]. Seeded sessions replay exactly.
#[derive(Clone, Debug)]
pub struct CasinoRng {
    inner: ChaCha20Rng,
}

impl CasinoRng {
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for CasinoRng {
    fn draw(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}
