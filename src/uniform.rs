//! Uniform sampling over a cryptographic entropy source.
//!
//! [`UniformRandomGenerator`] turns raw entropy into unbiased values within
//! caller-supplied bounds. Every value starts life as one 32-bit word read
//! from the source:
//!
//! - raw integers clear the sign bit, which halves the output space evenly;
//! - ranged integers use rejection sampling (see below);
//! - unit doubles divide the word by 2³², giving 2³² evenly spaced points in
//!   `[0.0, 1.0)`;
//! - ranged doubles linearly rescale a unit double.
//!
//! # Rejection sampling
//!
//! Reducing a word modulo a span that does not divide 2³² favours the
//! lowest `2³² mod span` outputs by one raw value each. The generator
//! instead accepts a word only if it is below `2³² - (2³² mod span)`, the
//! largest multiple of `span` that fits, and draws again otherwise. Fewer
//! than half of all words are ever rejected, so the expected number of
//! draws is below two for every span.
//!
//! # Concurrency
//!
//! One mutex guards the source and the 4-byte scratch word. It is taken
//! once per entropy fetch, never across a whole rejection loop, so
//! concurrent callers interleave their retries freely. Byte fills go
//! through the same mutex.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};

use crate::entropy::{EntropySource, OsEntropy};
use crate::error::Result;
use crate::generator::{RandomGenerator, check_order};

/// Bytes in one entropy word.
const WORD_BYTES: usize = 4;

/// Cardinality of the raw word domain, 2³².
const WORD_SPACE: u64 = 1 << 32;

/// Clears the sign bit of a word.
const RAW_INT_MASK: u32 = 0x7fff_ffff;

/// Cryptographically strong generator with the [`RandomGenerator`] contract.
///
/// Safe to share between threads (for example behind an `Arc`).
pub struct UniformRandomGenerator<S = OsEntropy> {
    inner: Mutex<Inner<S>>,
}

struct Inner<S> {
    source: S,
    scratch: [u8; WORD_BYTES],
}

impl UniformRandomGenerator<OsEntropy> {
    /// Creates a generator that reads directly from the operating system.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl Default for UniformRandomGenerator<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> UniformRandomGenerator<S> {
    /// Creates a generator that takes exclusive ownership of `source`.
    pub fn with_source(source: S) -> Self {
        debug!("uniform generator using {} entropy", source.name());

        Self {
            inner: Mutex::new(Inner {
                source,
                scratch: [0u8; WORD_BYTES],
            }),
        }
    }

    /// Consumes the generator and returns its entropy source.
    pub fn into_source(self) -> S {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .source
    }

    /// The guarded state holds no invariant a panic could break, so a
    /// poisoned lock is simply taken over.
    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches one little-endian word of entropy.
    fn next_word(&self) -> u32 {
        let mut guard = self.lock();
        let inner = &mut *guard;

        inner.source.fill_bytes(&mut inner.scratch);
        u32::from_le_bytes(inner.scratch)
    }
}

impl<S: EntropySource> RandomGenerator for UniformRandomGenerator<S> {
    fn next_raw_int(&self) -> i32 {
        (self.next_word() & RAW_INT_MASK) as i32
    }

    fn next_int_ranged(&self, min_value: i32, max_value: i32) -> Result<i32> {
        check_order(min_value, max_value)?;

        if min_value == max_value {
            return Ok(min_value);
        }

        // At most 2³² - 1, so it fits in u64 and never exceeds WORD_SPACE.
        let span = (i64::from(max_value) - i64::from(min_value)) as u64;
        let limit = WORD_SPACE - WORD_SPACE % span;

        loop {
            let word = u64::from(self.next_word());

            if word < limit {
                return Ok((i64::from(min_value) + (word % span) as i64) as i32);
            }

            trace!("rejected word {word} for span {span}");
        }
    }

    fn next_unit_double(&self) -> f64 {
        f64::from(self.next_word()) / WORD_SPACE as f64
    }

    fn fill_random_bytes(&self, buffer: &mut [u8]) {
        if buffer.is_empty() {
            return;
        }

        self.lock().source.fill_bytes(buffer);
    }
}
