//! Conventional, non-secure generator.
//!
//! [`FastRandom`] implements [`RandomGenerator`] on top of `fastrand`'s
//! wyrand generator. It is fast and seedable, which makes it a fit for
//! simulations and reproducible tests, and it must never be used for keys,
//! tokens or anything an attacker may try to predict.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::generator::{RandomGenerator, check_order};

/// Seedable generator with the same bound semantics as
/// [`crate::UniformRandomGenerator`].
pub struct FastRandom {
    rng: Mutex<fastrand::Rng>,
}

impl FastRandom {
    /// Creates a generator with a random seed.
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    /// Creates a generator whose output is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn lock(&self) -> MutexGuard<'_, fastrand::Rng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomGenerator for FastRandom {
    fn next_raw_int(&self) -> i32 {
        self.lock().i32(0..=i32::MAX)
    }

    fn next_int_ranged(&self, min_value: i32, max_value: i32) -> Result<i32> {
        check_order(min_value, max_value)?;

        if min_value == max_value {
            return Ok(min_value);
        }

        Ok(self.lock().i32(min_value..max_value))
    }

    fn next_unit_double(&self) -> f64 {
        self.lock().f64()
    }

    fn fill_random_bytes(&self, buffer: &mut [u8]) {
        self.lock().fill(buffer);
    }
}
