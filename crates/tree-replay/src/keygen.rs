//! Reproducible key-sequence generation.
//!
//! Uses the xoshiro256** PRNG so the same seed always yields the same
//! keys and, by recorder determinism, the same trace. This backs the
//! "regenerate random input" control of the surrounding tool.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// A seeded source of insertion-key sequences.
pub struct KeySource {
    rng: Xoshiro256StarStar,
}

impl KeySource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Generates `count` integer-valued keys in `[min, max]` inclusive.
    pub fn random_keys(&mut self, count: usize, min: i64, max: i64) -> Vec<f64> {
        (0..count)
            .map(|_| self.rng.gen_range(min..=max) as f64)
            .collect()
    }
}

/// One-shot helper: a fresh [`KeySource`] drained for a single batch.
pub fn random_keys(seed: u64, count: usize, min: i64, max: i64) -> Vec<f64> {
    KeySource::new(seed).random_keys(count, min, max)
}
