//! The generator interface.
//!
//! [`RandomGenerator`] is the operation set shared by the secure
//! [`crate::UniformRandomGenerator`] and the conventional
//! [`crate::FastRandom`]. Code that needs random values takes a
//! `&dyn RandomGenerator` (or a generic `G: RandomGenerator`) and the caller
//! decides whether cryptographic strength is required.
//!
//! # Bound semantics
//!
//! - Ranges are half-open: `[min_value, max_value)`.
//! - `min_value == max_value` returns `min_value` without consuming any
//!   randomness.
//! - `min_value > max_value`, a negative `max_value` in the single-bound
//!   forms, and non-finite float bounds fail with
//!   [`RandomError::InvalidArgument`], again before any randomness is drawn.

use log::trace;

use crate::error::{RandomError, Result};

/// A source of uniformly distributed values.
pub trait RandomGenerator: Send + Sync {
    /// Returns a non-negative integer in `[0, i32::MAX]`.
    fn next_raw_int(&self) -> i32;

    /// Returns an integer in `[0, max_value)`.
    ///
    /// # Errors
    /// [`RandomError::InvalidArgument`] if `max_value` is negative.
    fn next_int_bounded(&self, max_value: i32) -> Result<i32> {
        if max_value < 0 {
            return Err(RandomError::invalid_argument(
                "max_value",
                format!("{max_value} must be non-negative"),
            ));
        }

        self.next_int_ranged(0, max_value)
    }

    /// Returns an integer uniformly distributed over `[min_value, max_value)`.
    ///
    /// # Errors
    /// [`RandomError::InvalidArgument`] if `min_value > max_value`.
    fn next_int_ranged(&self, min_value: i32, max_value: i32) -> Result<i32>;

    /// Returns a double in `[0.0, 1.0)`.
    fn next_unit_double(&self) -> f64;

    /// Returns a double in `[0.0, max_value)`.
    ///
    /// # Errors
    /// [`RandomError::InvalidArgument`] if `max_value` is negative or not
    /// finite.
    fn next_double_bounded(&self, max_value: f64) -> Result<f64> {
        check_finite("max_value", max_value)?;

        if max_value < 0.0 {
            return Err(RandomError::invalid_argument(
                "max_value",
                format!("{max_value} must be non-negative"),
            ));
        }

        self.next_double_ranged(0.0, max_value)
    }

    /// Returns a double uniformly distributed over `[min_value, max_value)`.
    ///
    /// # Errors
    /// [`RandomError::InvalidArgument`] if either bound is not finite or
    /// `min_value > max_value`.
    fn next_double_ranged(&self, min_value: f64, max_value: f64) -> Result<f64> {
        check_finite("min_value", min_value)?;
        check_finite("max_value", max_value)?;
        check_order(min_value, max_value)?;

        if min_value == max_value {
            return Ok(min_value);
        }

        Ok(rescale(min_value, max_value, || self.next_unit_double()))
    }

    /// Overwrites every byte of `buffer` with random data.
    ///
    /// An empty buffer is left untouched and consumes no randomness.
    fn fill_random_bytes(&self, buffer: &mut [u8]);
}

/// Fails unless `min_value <= max_value`.
pub(crate) fn check_order<T>(min_value: T, max_value: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if min_value > max_value {
        return Err(RandomError::invalid_argument(
            "min_value",
            format!("{min_value} is greater than max_value {max_value}"),
        ));
    }

    Ok(())
}

fn check_finite(param: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RandomError::invalid_argument(
            param,
            format!("{value} is not a finite number"),
        ));
    }

    Ok(())
}

/// Maps unit doubles onto `[min_value, max_value)`.
///
/// Requires finite bounds with `min_value < max_value`. Uses
/// `min + u * (max - min)`, or the interpolation form when the width
/// overflows. A result that rounding pushes outside the interval is
/// discarded and a fresh unit double drawn; `u == 0.0` always lands on
/// `min_value`, so the loop terminates.
pub(crate) fn rescale(min_value: f64, max_value: f64, mut unit: impl FnMut() -> f64) -> f64 {
    let width = max_value - min_value;

    loop {
        let u = unit();
        let value = if width.is_finite() {
            min_value + u * width
        } else {
            min_value * (1.0 - u) + max_value * u
        };

        if value >= min_value && value < max_value {
            return value;
        }

        trace!("rescaled {value} fell outside [{min_value}, {max_value}), drawing again");
    }
}
