//! Anonymous-sender public-key encryption (libsodium `crypto_box_seal`)
//!
//! A fresh ephemeral key pair is generated per message and its private
//! half discarded immediately after sealing, so the recipient learns
//! nothing about who sent the message. The nonce is derived from the two
//! public keys (see [`crate::derivation::sealed_nonce`]) and therefore
//! never travels on the wire:
//!
//! ```text
//! ephemeral_pk(32) || tag(16) || cipher
//! ```
//!
//! Discarding the ephemeral private key gives forward secrecy for sender
//! anonymity, not for confidentiality against a future compromise of the
//! recipient key.

use tracing::trace;

use crate::{
    boxes, derivation,
    error::SaltboxError,
    keys::{KeyPair, PUBLIC_KEY_SIZE, PrivateKey, PublicKey, TAG_SIZE},
    random::{OsEntropy, RandomSource},
};

/// Smallest well-formed ciphertext: ephemeral key plus tag, zero payload
pub const MIN_CIPHERTEXT_SIZE: usize = PUBLIC_KEY_SIZE + TAG_SIZE;

/// Encrypt `message` to `recipient` without revealing the sender.
///
/// # Errors
///
/// - `RandomGenerationFailure` if the entropy source fails
pub fn seal(message: &[u8], recipient: &PublicKey) -> Result<Vec<u8>, SaltboxError> {
    seal_with(message, recipient, &OsEntropy)
}

/// Encrypt `message` to `recipient`, drawing the ephemeral key from
/// `random`.
///
/// Returns `ephemeral_pk(32) || tag(16) || cipher`. The ephemeral
/// private key is dropped (and zeroized) before this function returns;
/// not even the sender can open the result.
///
/// # Errors
///
/// - `RandomGenerationFailure` if the entropy source fails
pub fn seal_with(
    message: &[u8],
    recipient: &PublicKey,
    random: &impl RandomSource,
) -> Result<Vec<u8>, SaltboxError> {
    let ephemeral = KeyPair::generate(random)?;
    let nonce = derivation::sealed_nonce(&ephemeral.public, recipient);

    let boxed = boxes::seal(message, &nonce, &ephemeral.private, recipient);

    let mut out = Vec::with_capacity(PUBLIC_KEY_SIZE + boxed.len());
    out.extend_from_slice(ephemeral.public.as_bytes());
    out.extend_from_slice(&boxed);

    trace!(message_len = message.len(), ciphertext_len = out.len(), "sealed box sealed");
    Ok(out)
}

/// Decrypt a sealed box with the recipient's private key.
///
/// The recipient's public key is recomputed from `recipient_private` so
/// the nonce derivation sees the same two keys, in the same order, as at
/// seal time.
///
/// # Errors
///
/// - `InvalidCiphertextLength` if the input is shorter than 48 bytes
/// - `AuthenticationFailure` on tag mismatch or tampering (including a
///   modified ephemeral key header)
pub fn open(ciphertext: &[u8], recipient_private: &PrivateKey) -> Result<Vec<u8>, SaltboxError> {
    if ciphertext.len() < MIN_CIPHERTEXT_SIZE {
        return Err(SaltboxError::InvalidCiphertextLength {
            minimum: MIN_CIPHERTEXT_SIZE,
            actual: ciphertext.len(),
        });
    }

    let (header, boxed) = ciphertext.split_at(PUBLIC_KEY_SIZE);
    let ephemeral_public = PublicKey::from_slice(header)?;

    let recipient = KeyPair::from_private(recipient_private);
    let nonce = derivation::sealed_nonce(&ephemeral_public, &recipient.public);

    boxes::open(boxed, &nonce, recipient_private, &ephemeral_public)
}
