//! Seedable random source
//!
//! Every shuffle, the first-player pick and all AI randomness draw from one
//! `GameRng`, so a seed plus a fixed sequence of player answers reproduces a game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    inner: ChaCha12Rng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        GameRng {
            inner: ChaCha12Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in [0, 1)
    pub fn random(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform integer in [min, max), by flooring a scaled `random()`
    ///
    /// Returns `min` when the range is empty.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = (max - min) as f64;
        let offset = (self.random() * span).floor() as i64;
        // Guard against float rounding landing exactly on `max`
        min + offset.min(max - min - 1)
    }

    /// Index in [0, len); `len` must be non-zero
    pub fn random_index(&mut self, len: usize) -> usize {
        self.random_int(0, len as i64) as usize
    }

    /// Uniform float in [min, max)
    pub fn random_float(&mut self, min: f64, max: f64) -> f64 {
        min + self.random() * (max - min)
    }

    /// In-place Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.random_index(i + 1);
            items.swap(i, j);
        }
    }
}
