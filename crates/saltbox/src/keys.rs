//! Fixed-size key material containers
//!
//! Every container checks its length at construction, so the cipher layers
//! never see an undersized or oversized buffer. There is no implicit
//! conversion between key kinds.
//!
//! # Security
//!
//! - Private and symmetric key bytes are zeroized on drop
//! - Private and symmetric keys redact their contents from `Debug` output
//! - Secret material deliberately has no `PartialEq`: byte comparison of
//!   secrets must go through a constant-time primitive, not `==`

use core::fmt;

use zeroize::Zeroize;

use crate::{error::SaltboxError, random::RandomSource};

/// Curve25519 public key length in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Curve25519 private key length in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Symmetric secretbox key length in bytes
pub const KEY_SIZE: usize = 32;

/// XSalsa20 nonce length in bytes
pub const NONCE_SIZE: usize = 24;

/// Poly1305 authentication tag length in bytes
pub const TAG_SIZE: usize = 16;

fn check_len(expected: usize, actual: usize) -> Result<(), SaltboxError> {
    if expected == actual {
        Ok(())
    } else {
        Err(SaltboxError::InvalidKeySize { expected, actual })
    }
}

/// A 32-byte Curve25519 public key.
///
/// Never secret; safe to log, compare and transmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Construct from a byte slice.
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` if the slice is not exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SaltboxError> {
        check_len(PUBLIC_KEY_SIZE, bytes.len())?;
        let mut key = [0u8; PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

/// A 32-byte Curve25519 private key.
///
/// Zeroized on drop. `Debug` output redacts the key bytes.
#[derive(Clone)]
pub struct PrivateKey([u8; PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Construct from a byte slice.
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` if the slice is not exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SaltboxError> {
        check_len(PRIVATE_KEY_SIZE, bytes.len())?;
        let mut key = [0u8; PRIVATE_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// The raw key bytes.
    ///
    /// Handle with care: callers own the hygiene of any copy they make.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; PRIVATE_KEY_SIZE]> for PrivateKey {
    fn from(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// A 32-byte symmetric key for [`crate::secretbox`].
///
/// Used directly as the XSalsa20-Poly1305 key, with no agreement step.
/// Zeroized on drop. `Debug` output redacts the key bytes.
#[derive(Clone)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Construct from a byte slice.
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` if the slice is not exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SaltboxError> {
        check_len(KEY_SIZE, bytes.len())?;
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Generate a fresh random key.
    ///
    /// # Errors
    ///
    /// - `RandomGenerationFailure` if the entropy source fails
    pub fn generate(random: &impl RandomSource) -> Result<Self, SaltboxError> {
        let mut key = [0u8; KEY_SIZE];
        random.fill(&mut key)?;
        Ok(Self(key))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// A 24-byte XSalsa20 nonce.
///
/// Must be unique per (key, message) pair. A reused nonce under the same
/// key is a fatal security violation; [`crate::secretbox`] draws a fresh
/// random nonce per call and [`crate::sealedbox`] derives one from a fresh
/// ephemeral key, so neither can repeat in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Construct from a byte slice.
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` if the slice is not exactly 24 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SaltboxError> {
        check_len(NONCE_SIZE, bytes.len())?;
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(bytes);
        Ok(Self(nonce))
    }

    /// Draw a fresh random nonce.
    ///
    /// The 24-byte space is large enough that random selection makes
    /// collision probability negligible, so no counter state is kept.
    ///
    /// # Errors
    ///
    /// - `RandomGenerationFailure` if the entropy source fails
    pub fn generate(random: &impl RandomSource) -> Result<Self, SaltboxError> {
        let mut nonce = [0u8; NONCE_SIZE];
        random.fill(&mut nonce)?;
        Ok(Self(nonce))
    }

    /// The raw nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

/// A Curve25519 key pair.
///
/// The public key is always the deterministic image of the private key
/// under X25519 base-point multiplication.
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// The shareable half
    pub public: PublicKey,
    /// The secret half
    pub private: PrivateKey,
}

impl KeyPair {
    /// Generate a fresh key pair from the given entropy source.
    ///
    /// # Errors
    ///
    /// - `RandomGenerationFailure` if the entropy source fails
    pub fn generate(random: &impl RandomSource) -> Result<Self, SaltboxError> {
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        random.fill(&mut bytes)?;
        let private = PrivateKey::from(bytes);
        bytes.zeroize();
        Ok(Self::from_private(&private))
    }

    /// Rebuild a key pair from its private half.
    ///
    /// The public key is recomputed, so two calls with the same private
    /// key always agree. [`crate::sealedbox::open`] relies on this to
    /// re-derive the nonce the sender used.
    pub fn from_private(private: &PrivateKey) -> Self {
        let secret = x25519_dalek::StaticSecret::from(*private.as_bytes());
        let public = x25519_dalek::PublicKey::from(&secret);
        Self { public: PublicKey::from(public.to_bytes()), private: private.clone() }
    }
}
