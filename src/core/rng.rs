//! Deterministic shuffling for the word pool.
//!
//! The same seed always yields the same word order, which keeps tests and
//! replays reproducible. Reshuffles after the pool runs out continue the same
//! stream, so a seeded game is deterministic end to end.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used to shuffle words.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Restart the stream from its seed.
    pub fn rewind(&mut self) {
        self.inner = ChaCha8Rng::seed_from_u64(self.seed);
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(42)
    }
}
