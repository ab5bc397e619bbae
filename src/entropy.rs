//! Entropy sources.
//!
//! An [`EntropySource`] fills byte buffers with cryptographically random
//! data. It is the only thing a [`crate::UniformRandomGenerator`] needs from
//! the outside world; everything else is arithmetic on the bytes it returns.
//!
//! Sources are assumed infallible and non-blocking in practice. A platform
//! that cannot produce entropy panics inside the source rather than handing
//! back predictable bytes.

use crate::os::sys_random;

/// A provider of cryptographically random bytes.
///
/// Implementations must fill the whole of `dest` on every call and must
/// never produce biased output. They are driven through `&mut self`; the
/// generator that owns a source serializes access to it.
pub trait EntropySource: Send {
    /// Overwrites every byte of `dest` with fresh random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Short label used in log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Entropy taken directly from the operating system on every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        sys_random(dest);
    }

    fn name(&self) -> &'static str {
        "os"
    }
}
