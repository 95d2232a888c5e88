//! Public-key authenticated encryption (NaCl `crypto_box`)
//!
//! X25519 key agreement between the caller's private key and the peer's
//! public key, then XSalsa20-Poly1305 under the derived shared key and a
//! caller-supplied 24-byte nonce. The output follows the libsodium wire
//! layout: 16-byte Poly1305 tag, then the encrypted payload.
//!
//! Nonce discipline is the caller's responsibility here; the
//! [`crate::secretbox`] and [`crate::sealedbox`] layers each supply a
//! safe nonce strategy on top.

use crypto_secretbox::{
    XSalsa20Poly1305,
    aead::{Aead, KeyInit, generic_array::GenericArray},
};
use tracing::trace;

use crate::{
    derivation,
    error::SaltboxError,
    keys::{Nonce, PrivateKey, PublicKey, TAG_SIZE},
};

/// Encrypt and authenticate `message` from `sender_private` to
/// `recipient_public`.
///
/// Returns `tag(16) || cipher`; the output is always exactly
/// `message.len() + 16` bytes.
pub fn seal(
    message: &[u8],
    nonce: &Nonce,
    sender_private: &PrivateKey,
    recipient_public: &PublicKey,
) -> Vec<u8> {
    let key = derivation::shared_key(sender_private, recipient_public);
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key.as_ref()));

    let Ok(ciphertext) = cipher.encrypt(GenericArray::from_slice(nonce.as_bytes()), message)
    else {
        unreachable!("XSalsa20-Poly1305 encryption cannot fail with valid inputs");
    };

    trace!(message_len = message.len(), "box sealed");
    ciphertext
}

/// Authenticate and decrypt a ciphertext produced by [`seal`].
///
/// Key agreement is recomputed on this side; the underlying curve
/// guarantees it matches the sender's. Tag verification inside the AEAD
/// is constant-time, so a mismatch reveals nothing about which byte
/// differed.
///
/// # Errors
///
/// - `InvalidCiphertextLength` if the input is shorter than the 16-byte tag
/// - `AuthenticationFailure` if the tag does not verify
pub fn open(
    ciphertext: &[u8],
    nonce: &Nonce,
    recipient_private: &PrivateKey,
    sender_public: &PublicKey,
) -> Result<Vec<u8>, SaltboxError> {
    if ciphertext.len() < TAG_SIZE {
        return Err(SaltboxError::InvalidCiphertextLength {
            minimum: TAG_SIZE,
            actual: ciphertext.len(),
        });
    }

    let key = derivation::shared_key(recipient_private, sender_public);
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key.as_ref()));

    cipher
        .decrypt(GenericArray::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| SaltboxError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys::KeyPair, random::OsEntropy};

    fn keypairs() -> (KeyPair, KeyPair) {
        let sender = KeyPair::generate(&OsEntropy).unwrap();
        let recipient = KeyPair::generate(&OsEntropy).unwrap();
        (sender, recipient)
    }

    #[test]
    fn seal_open_roundtrip() {
        let (sender, recipient) = keypairs();
        let nonce = Nonce::generate(&OsEntropy).unwrap();
        let message = b"Hello, World!";

        let ciphertext = seal(message, &nonce, &sender.private, &recipient.public);
        let opened = open(&ciphertext, &nonce, &recipient.private, &sender.public).unwrap();

        assert_eq!(opened, message);
    }

    #[test]
    fn roundtrip_empty_message() {
        let (sender, recipient) = keypairs();
        let nonce = Nonce::generate(&OsEntropy).unwrap();

        let ciphertext = seal(b"", &nonce, &sender.private, &recipient.public);
        assert_eq!(ciphertext.len(), TAG_SIZE);

        let opened = open(&ciphertext, &nonce, &recipient.private, &sender.public).unwrap();
        assert!(opened.is_empty());
    }

    #[test]
    fn ciphertext_adds_exactly_the_tag() {
        let (sender, recipient) = keypairs();
        let nonce = Nonce::generate(&OsEntropy).unwrap();
        let message = vec![0x42u8; 1000];

        let ciphertext = seal(&message, &nonce, &sender.private, &recipient.public);
        assert_eq!(ciphertext.len(), message.len() + TAG_SIZE);
    }

    #[test]
    fn wrong_nonce_fails() {
        let (sender, recipient) = keypairs();
        let nonce = Nonce::from([1u8; 24]);
        let other_nonce = Nonce::from([2u8; 24]);

        let ciphertext = seal(b"message", &nonce, &sender.private, &recipient.public);
        let result = open(&ciphertext, &other_nonce, &recipient.private, &sender.public);

        assert_eq!(result, Err(SaltboxError::AuthenticationFailure));
    }

    #[test]
    fn wrong_sender_key_fails() {
        let (sender, recipient) = keypairs();
        let impostor = KeyPair::generate(&OsEntropy).unwrap();
        let nonce = Nonce::generate(&OsEntropy).unwrap();

        let ciphertext = seal(b"message", &nonce, &sender.private, &recipient.public);
        let result = open(&ciphertext, &nonce, &recipient.private, &impostor.public);

        assert_eq!(result, Err(SaltboxError::AuthenticationFailure));
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let (sender, recipient) = keypairs();
        let nonce = Nonce::generate(&OsEntropy).unwrap();

        let mut ciphertext = seal(b"message", &nonce, &sender.private, &recipient.public);
        ciphertext[0] ^= 0x01;

        let result = open(&ciphertext, &nonce, &recipient.private, &sender.public);
        assert_eq!(result, Err(SaltboxError::AuthenticationFailure));
    }

    #[test]
    fn rejects_ciphertext_shorter_than_tag() {
        let (sender, recipient) = keypairs();
        let nonce = Nonce::generate(&OsEntropy).unwrap();

        let result = open(&[0u8; 15], &nonce, &recipient.private, &sender.public);
        assert_eq!(
            result,
            Err(SaltboxError::InvalidCiphertextLength { minimum: 16, actual: 15 })
        );
    }

    #[test]
    fn direction_can_be_reversed() {
        // The shared key is symmetric, so the recipient can reply with the
        // same key material in the opposite direction
        let (alice, bob) = keypairs();
        let nonce = Nonce::generate(&OsEntropy).unwrap();

        let to_bob = seal(b"ping", &nonce, &alice.private, &bob.public);
        let at_bob = open(&to_bob, &nonce, &bob.private, &alice.public).unwrap();
        assert_eq!(at_bob, b"ping");

        let to_alice = seal(b"pong", &nonce, &bob.private, &alice.public);
        let at_alice = open(&to_alice, &nonce, &alice.private, &bob.public).unwrap();
        assert_eq!(at_alice, b"pong");
    }
}
