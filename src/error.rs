//! Error type for the random generators.
//!
//! Every failure in this crate is a caller mistake detected before any
//! entropy is consumed: bounds in the wrong order, a negative upper bound,
//! a non-finite float bound, or an unusable configuration value. There is a
//! single error kind, [`RandomError::InvalidArgument`], carrying the name of
//! the offending parameter and a human-readable reason.

use thiserror::Error;

/// Errors returned by the generators and their configuration.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RandomError {
    /// A precondition on an argument was violated.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl RandomError {
    pub(crate) fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`RandomError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Name of the parameter that caused the error.
    #[must_use]
    pub fn param(&self) -> &'static str {
        match self {
            Self::InvalidArgument { param, .. } => param,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;
