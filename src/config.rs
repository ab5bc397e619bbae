//! Generator configuration.
//!
//! Lets a caller pick, at runtime, between the cryptographically strong
//! [`crate::UniformRandomGenerator`] and the conventional
//! [`crate::FastRandom`], both handed back as a `Box<dyn RandomGenerator>`.
//! Only the fast generator accepts a seed.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{RandomError, Result};
use crate::fast::FastRandom;
use crate::generator::RandomGenerator;
use crate::uniform::UniformRandomGenerator;

/// Which generator to build.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GeneratorKind {
    /// OS entropy with unbiased range mapping. Never seedable.
    #[default]
    Secure,
    /// Seedable, non-secure generator.
    Fast,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secure => f.write_str("secure"),
            Self::Fast => f.write_str("fast"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "secure" => Ok(Self::Secure),
            "fast" => Ok(Self::Fast),
            other => Err(RandomError::invalid_argument(
                "kind",
                format!("unknown generator kind `{other}`, expected `secure` or `fast`"),
            )),
        }
    }
}

/// Configuration parameters for building a generator.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Which implementation to use.
    pub kind: GeneratorKind,
    /// Fixed seed for reproducible output. Only valid with
    /// [`GeneratorKind::Fast`]; `None` seeds randomly.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Checks the parameters.
    ///
    /// # Errors
    /// [`RandomError::InvalidArgument`] if a seed is given for
    /// [`GeneratorKind::Secure`].
    pub fn validate(&self) -> Result<()> {
        if self.kind == GeneratorKind::Secure && self.seed.is_some() {
            return Err(RandomError::invalid_argument(
                "seed",
                "the secure generator cannot be seeded",
            ));
        }

        Ok(())
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    /// [`RandomError::InvalidArgument`] if the configuration does not
    /// validate.
    pub fn build(&self) -> Result<Box<dyn RandomGenerator>> {
        self.validate()?;

        debug!("building {} generator", self.kind);

        Ok(match (self.kind, self.seed) {
            (GeneratorKind::Secure, _) => Box::new(UniformRandomGenerator::new()),
            (GeneratorKind::Fast, Some(seed)) => Box::new(FastRandom::with_seed(seed)),
            (GeneratorKind::Fast, None) => Box::new(FastRandom::new()),
        })
    }
}
