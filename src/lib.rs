//! Cryptographically strong uniform random values.
//!
//! This crate provides a drop-in replacement for a conventional random
//! number generator whose values come from a cryptographic entropy source.
//! It keeps the conventional contract (half-open ranges, argument
//! validation, equal bounds returning the bound) while guaranteeing that
//! every value in a requested range is exactly equally likely.
//!
//! # Module overview
//!
//! - `generator`
//!   The [`RandomGenerator`] trait: raw integers, bounded and ranged
//!   integers, unit and ranged doubles, byte fills.
//!
//! - `uniform`
//!   [`UniformRandomGenerator`], the secure implementation. Integer ranges
//!   use rejection sampling to remove modulo bias; all entropy access is
//!   serialized per instance so a generator can be shared across threads.
//!
//! - `fast`
//!   [`FastRandom`], a seedable, non-secure implementation of the same
//!   trait for code that does not need cryptographic strength.
//!
//! - `entropy`
//!   The [`EntropySource`] trait and [`OsEntropy`], which reads straight
//!   from the operating system.
//!
//! - `config`
//!   [`GeneratorConfig`] for choosing between the secure and fast
//!   generators at runtime.
//!
//! # Example
//!
//! ```
//! use cryptal_random::{RandomGenerator, UniformRandomGenerator};
//!
//! let rng = UniformRandomGenerator::new();
//! let die = rng.next_int_ranged(1, 7).unwrap();
//! assert!((1..7).contains(&die));
//! ```
//!
//! # Non-goals
//!
//! - This crate does not implement a general-purpose CSPRNG API; it
//!   consumes secure bytes and shapes them.
//! - The secure generator is not seedable or reproducible.
//! - Throughput is secondary to correctness and unbiasedness.

mod os;

pub mod config;
pub mod entropy;
pub mod error;
pub mod fast;
pub mod generator;
pub mod uniform;

pub use config::{GeneratorConfig, GeneratorKind};
pub use entropy::{EntropySource, OsEntropy};
pub use error::{RandomError, Result};
pub use fast::FastRandom;
pub use generator::RandomGenerator;
pub use uniform::UniformRandomGenerator;
