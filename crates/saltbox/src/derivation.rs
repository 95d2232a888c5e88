//! Key and nonce derivation for the box constructions
//!
//! Two deterministic derivations live here:
//!
//! - The box shared key: X25519 between a private key and a peer public
//!   key, then HSalsa20 with a zero block (the NaCl `beforenm` step).
//! - The sealed box nonce: unkeyed Blake2b with 24-byte output over
//!   `ephemeral_pk || recipient_pk`, exactly as libsodium's
//!   `crypto_box_seal` derives it. Both sides must hash the same two
//!   keys in the same order or the nonce (and the message) is lost.

use blake2::{Blake2b, Digest, digest::consts::U24};
use salsa20::{
    cipher::{consts::U10, generic_array::GenericArray},
    hsalsa,
};
use x25519_dalek::StaticSecret;
use zeroize::Zeroizing;

use crate::keys::{KEY_SIZE, Nonce, NONCE_SIZE, PrivateKey, PublicKey};

/// Blake2b with 24-byte output, the sealed box nonce hash
type Blake2b192 = Blake2b<U24>;

/// Derive the symmetric key shared between `private` and `public`.
///
/// Computes X25519 key agreement and runs the result through HSalsa20,
/// matching NaCl `crypto_box_beforenm`. Agreement is symmetric: swapping
/// which side contributes the private key yields the same output, which
/// is what lets [`crate::boxes::open`] reverse [`crate::boxes::seal`].
///
/// The returned key is wrapped in [`Zeroizing`] so it is wiped when the
/// caller drops it.
pub fn shared_key(private: &PrivateKey, public: &PublicKey) -> Zeroizing<[u8; KEY_SIZE]> {
    let secret = StaticSecret::from(*private.as_bytes());
    let their_public = x25519_dalek::PublicKey::from(*public.as_bytes());
    let agreed = secret.diffie_hellman(&their_public);

    let key = hsalsa::<U10>(GenericArray::from_slice(agreed.as_bytes()), &GenericArray::default());
    Zeroizing::new(key.into())
}

/// Derive the deterministic sealed box nonce from the two public keys.
///
/// `Blake2b-192(ephemeral_pk || recipient_pk)`. Deterministic on purpose:
/// the fresh ephemeral key supplies per-message uniqueness, and deriving
/// the nonce from material already on the wire means it does not need to
/// be transmitted.
pub fn sealed_nonce(ephemeral: &PublicKey, recipient: &PublicKey) -> Nonce {
    let mut hasher = Blake2b192::new();
    hasher.update(ephemeral.as_bytes());
    hasher.update(recipient.as_bytes());
    let digest: [u8; NONCE_SIZE] = hasher.finalize().into();
    Nonce::from(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys::KeyPair, random::OsEntropy};

    #[test]
    fn agreement_is_symmetric() {
        let alice = KeyPair::generate(&OsEntropy).unwrap();
        let bob = KeyPair::generate(&OsEntropy).unwrap();

        let from_alice = shared_key(&alice.private, &bob.public);
        let from_bob = shared_key(&bob.private, &alice.public);

        assert_eq!(*from_alice, *from_bob, "agree(privA, pubB) must equal agree(privB, pubA)");
    }

    #[test]
    fn different_peers_produce_different_keys() {
        let alice = KeyPair::generate(&OsEntropy).unwrap();
        let bob = KeyPair::generate(&OsEntropy).unwrap();
        let carol = KeyPair::generate(&OsEntropy).unwrap();

        let with_bob = shared_key(&alice.private, &bob.public);
        let with_carol = shared_key(&alice.private, &carol.public);

        assert_ne!(*with_bob, *with_carol);
    }

    #[test]
    fn sealed_nonce_is_deterministic() {
        let ephemeral = PublicKey::from([1u8; 32]);
        let recipient = PublicKey::from([2u8; 32]);

        let nonce1 = sealed_nonce(&ephemeral, &recipient);
        let nonce2 = sealed_nonce(&ephemeral, &recipient);

        assert_eq!(nonce1, nonce2);
    }

    #[test]
    fn sealed_nonce_depends_on_key_order() {
        let a = PublicKey::from([1u8; 32]);
        let b = PublicKey::from([2u8; 32]);

        assert_ne!(sealed_nonce(&a, &b), sealed_nonce(&b, &a));
    }

    #[test]
    fn sealed_nonce_changes_with_either_key() {
        let ephemeral = PublicKey::from([1u8; 32]);
        let recipient = PublicKey::from([2u8; 32]);
        let other = PublicKey::from([3u8; 32]);

        let base = sealed_nonce(&ephemeral, &recipient);
        assert_ne!(base, sealed_nonce(&other, &recipient));
        assert_ne!(base, sealed_nonce(&ephemeral, &other));
    }
}
