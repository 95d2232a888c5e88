//! Entropy source abstraction
//!
//! Production code always draws from the OS CSPRNG via [`OsEntropy`].
//! The [`RandomSource`] trait exists so tests can substitute a
//! deterministic source for reproducible (non-security) vectors instead
//! of reaching into hidden global state.

use rand::RngCore;

use crate::error::SaltboxError;

/// A narrow, stateless capability for producing random bytes.
///
/// Implementations must be safe for concurrent use from multiple threads
/// without external locking.
pub trait RandomSource {
    /// Fill `buf` with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// - `RandomGenerationFailure` if sufficient entropy cannot be
    ///   obtained. The failure is surfaced, never silently retried.
    fn fill(&self, buf: &mut [u8]) -> Result<(), SaltboxError>;
}

/// The OS-level secure entropy source.
///
/// A zero-sized handle over the operating system CSPRNG, which provides
/// its own internal synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl RandomSource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), SaltboxError> {
        rand::rngs::OsRng
            .try_fill_bytes(buf)
            .map_err(|_| SaltboxError::RandomGenerationFailure)
    }
}
