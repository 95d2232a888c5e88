//! Error types for box operations

use thiserror::Error;

/// Errors from secretbox, box and sealed box operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaltboxError {
    /// Key or nonce material does not match its required fixed length.
    /// Detected before any cryptographic operation runs.
    #[error("invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize {
        /// Required length in bytes
        expected: usize,
        /// Length that was provided
        actual: usize,
    },

    /// Ciphertext is shorter than the minimum header + tag size.
    /// Checked first, before any decryption attempt.
    #[error("invalid ciphertext length: need at least {minimum} bytes, got {actual}")]
    InvalidCiphertextLength {
        /// Minimum valid length in bytes
        minimum: usize,
        /// Length that was provided
        actual: usize,
    },

    /// Authentication tag verification failed (tampering, wrong key, or
    /// corrupted data). Deliberately opaque: no position or cause detail.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// The OS entropy source failed to produce random bytes.
    /// Not retried automatically.
    #[error("random generation failed")]
    RandomGenerationFailure,
}

impl SaltboxError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Fatal errors indicate tampering or an unusable environment.
    /// Non-fatal errors are caller mistakes that a corrected retry fixes.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::AuthenticationFailure | Self::RandomGenerationFailure => true,
            Self::InvalidKeySize { .. } | Self::InvalidCiphertextLength { .. } => false,
        }
    }
}
