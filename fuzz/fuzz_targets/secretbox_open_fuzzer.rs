//! Fuzz target for secretbox open
//!
//! Feeds arbitrary ciphertexts and keys into the untrusted-input entry
//! point, plus corrupted outputs of a real seal.
//!
//! # Invariants
//!
//! - Open never panics, whatever the input
//! - Inputs shorter than 40 bytes always report the length error
//! - A corrupted valid ciphertext never decrypts

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use saltbox::{secretbox, Key, SaltboxError};

#[derive(Debug, Arbitrary)]
struct SecretboxScenario {
    key: [u8; 32],
    ciphertext: Vec<u8>,
    /// When set, also seal a real message and corrupt one byte of it
    corrupt: Option<(Vec<u8>, usize, u8)>,
}

fuzz_target!(|scenario: SecretboxScenario| {
    let key = Key::from(scenario.key);

    match secretbox::open(&scenario.ciphertext, &key) {
        Ok(plaintext) => assert_eq!(plaintext.len() + 40, scenario.ciphertext.len()),
        Err(SaltboxError::InvalidCiphertextLength { minimum, actual }) => {
            assert_eq!(minimum, 40);
            assert_eq!(actual, scenario.ciphertext.len());
            assert!(actual < 40);
        }
        Err(SaltboxError::AuthenticationFailure) => {
            assert!(scenario.ciphertext.len() >= 40);
        }
        Err(other) => panic!("unexpected error from open: {other}"),
    }

    if let Some((message, position, mask)) = scenario.corrupt {
        let Ok(mut sealed) = secretbox::seal(&message, &key) else {
            return;
        };

        let roundtrip = secretbox::open(&sealed, &key).unwrap();
        assert_eq!(roundtrip, message);

        if mask != 0 {
            let position = position % sealed.len();
            sealed[position] ^= mask;
            assert_eq!(
                secretbox::open(&sealed, &key),
                Err(SaltboxError::AuthenticationFailure)
            );
        }
    }
});
