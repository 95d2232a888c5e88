//! NaCl-compatible authenticated encryption boxes
//!
//! Byte-exact implementations of the NaCl/libsodium box constructions,
//! composed from vetted primitive crates. Ciphertexts produced here
//! decrypt under any conforming NaCl implementation and vice versa.
//!
//! # Constructions
//!
//! ```text
//! secretbox:  key ─────────────────────────────┐
//!                                              ▼
//!             random nonce(24) ──► XSalsa20-Poly1305 ──► nonce || tag || cipher
//!
//! box:        X25519(priv, peer_pub) ──► HSalsa20 ──► shared key
//!             caller nonce(24)       ──► XSalsa20-Poly1305 ──► tag || cipher
//!
//! sealed box: ephemeral keypair (per message, discarded)
//!             nonce = Blake2b-192(eph_pk || rcpt_pk)
//!             box(message) ──► eph_pk || tag || cipher
//! ```
//!
//! # Security
//!
//! - Tag verification is constant-time inside the AEAD; authentication
//!   failures are opaque and all-or-nothing
//! - Private keys, symmetric keys and derived shared keys are zeroized
//!   on drop and redacted from `Debug` output
//! - Nonces are never reused under a key: secretbox draws a fresh random
//!   nonce per call, sealed boxes derive theirs from a fresh ephemeral key
//! - All operations are pure functions over immutable buffers except the
//!   entropy draw; everything is safe for concurrent use
//!
//! # Example
//!
//! ```
//! use saltbox::{KeyPair, OsEntropy, sealedbox};
//!
//! let recipient = KeyPair::generate(&OsEntropy)?;
//!
//! let ciphertext = sealedbox::seal(b"Hello, World!", &recipient.public)?;
//! let plaintext = sealedbox::open(&ciphertext, &recipient.private)?;
//!
//! assert_eq!(plaintext, b"Hello, World!");
//! # Ok::<(), saltbox::SaltboxError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod boxes;
pub mod derivation;
pub mod error;
pub mod keys;
pub mod random;
pub mod sealedbox;
pub mod secretbox;

pub use error::SaltboxError;
pub use keys::{
    KEY_SIZE, Key, KeyPair, NONCE_SIZE, Nonce, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, PrivateKey,
    PublicKey, TAG_SIZE,
};
pub use random::{OsEntropy, RandomSource};
