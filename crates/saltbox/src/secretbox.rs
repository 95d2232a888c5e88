//! Symmetric authenticated encryption (NaCl `crypto_secretbox`)
//!
//! Same XSalsa20-Poly1305 core as [`crate::boxes`], but the 32-byte key
//! is used directly with no agreement step, and the fresh random nonce
//! travels in front of the ciphertext:
//!
//! ```text
//! nonce(24) || tag(16) || cipher
//! ```
//!
//! No state is retained between calls, so the same key can be used
//! concurrently from multiple callers; nonce uniqueness comes from the
//! size of the random 24-byte space, not a counter.

use crypto_secretbox::{
    XSalsa20Poly1305,
    aead::{Aead, KeyInit, generic_array::GenericArray},
};
use tracing::trace;

use crate::{
    error::SaltboxError,
    keys::{Key, NONCE_SIZE, Nonce, TAG_SIZE},
    random::{OsEntropy, RandomSource},
};

/// Smallest well-formed ciphertext: nonce plus tag, zero payload bytes
pub const MIN_CIPHERTEXT_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// Encrypt `message` under `key` with a fresh OS-random nonce.
///
/// # Errors
///
/// - `RandomGenerationFailure` if the entropy source fails
pub fn seal(message: &[u8], key: &Key) -> Result<Vec<u8>, SaltboxError> {
    seal_with(message, key, &OsEntropy)
}

/// Encrypt `message` under `key`, drawing the nonce from `random`.
///
/// Returns `nonce(24) || tag(16) || cipher`. Two calls with identical
/// inputs produce different outputs because the nonce is drawn fresh
/// per call.
///
/// # Errors
///
/// - `RandomGenerationFailure` if the entropy source fails
pub fn seal_with(
    message: &[u8],
    key: &Key,
    random: &impl RandomSource,
) -> Result<Vec<u8>, SaltboxError> {
    let nonce = Nonce::generate(random)?;
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key.as_bytes()));

    let Ok(boxed) = cipher.encrypt(GenericArray::from_slice(nonce.as_bytes()), message) else {
        unreachable!("XSalsa20-Poly1305 encryption cannot fail with valid inputs");
    };

    let mut out = Vec::with_capacity(NONCE_SIZE + boxed.len());
    out.extend_from_slice(nonce.as_bytes());
    out.extend_from_slice(&boxed);

    trace!(message_len = message.len(), ciphertext_len = out.len(), "secretbox sealed");
    Ok(out)
}

/// Authenticate and decrypt a ciphertext produced by [`seal`].
///
/// The nonce is read from the first 24 bytes of the input. Decryption is
/// all-or-nothing: no partial plaintext is ever returned.
///
/// # Errors
///
/// - `InvalidCiphertextLength` if the input is shorter than 40 bytes
/// - `AuthenticationFailure` on tag mismatch or tampering
pub fn open(ciphertext: &[u8], key: &Key) -> Result<Vec<u8>, SaltboxError> {
    if ciphertext.len() < MIN_CIPHERTEXT_SIZE {
        return Err(SaltboxError::InvalidCiphertextLength {
            minimum: MIN_CIPHERTEXT_SIZE,
            actual: ciphertext.len(),
        });
    }

    let (nonce, boxed) = ciphertext.split_at(NONCE_SIZE);
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key.as_bytes()));

    cipher
        .decrypt(GenericArray::from_slice(nonce), boxed)
        .map_err(|_| SaltboxError::AuthenticationFailure)
}
