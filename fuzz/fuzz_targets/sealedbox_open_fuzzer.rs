//! Fuzz target for sealed box open
//!
//! Arbitrary ciphertexts against arbitrary recipient keys, plus
//! corrupted outputs of a real seal. The 32-byte header is attacker
//! controlled, so arbitrary bytes exercise the ephemeral-key parsing
//! and nonce re-derivation paths.
//!
//! # Invariants
//!
//! - Open never panics, whatever the input
//! - Inputs shorter than 48 bytes always report the length error
//! - A corrupted valid ciphertext never decrypts

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use saltbox::{sealedbox, KeyPair, PrivateKey, SaltboxError};

#[derive(Debug, Arbitrary)]
struct SealedboxScenario {
    recipient_private: [u8; 32],
    ciphertext: Vec<u8>,
    /// When set, also seal a real message and corrupt one byte of it
    corrupt: Option<(Vec<u8>, usize, u8)>,
}

fuzz_target!(|scenario: SealedboxScenario| {
    let recipient = KeyPair::from_private(&PrivateKey::from(scenario.recipient_private));

    match sealedbox::open(&scenario.ciphertext, &recipient.private) {
        Ok(plaintext) => assert_eq!(plaintext.len() + 48, scenario.ciphertext.len()),
        Err(SaltboxError::InvalidCiphertextLength { minimum, actual }) => {
            assert_eq!(minimum, 48);
            assert_eq!(actual, scenario.ciphertext.len());
            assert!(actual < 48);
        }
        Err(SaltboxError::AuthenticationFailure) => {
            assert!(scenario.ciphertext.len() >= 48);
        }
        Err(other) => panic!("unexpected error from open: {other}"),
    }

    if let Some((message, position, mask)) = scenario.corrupt {
        let Ok(mut sealed) = sealedbox::seal(&message, &recipient.public) else {
            return;
        };

        let roundtrip = sealedbox::open(&sealed, &recipient.private).unwrap();
        assert_eq!(roundtrip, message);

        if mask != 0 {
            let position = position % sealed.len();
            sealed[position] ^= mask;
            assert_eq!(
                sealedbox::open(&sealed, &recipient.private),
                Err(SaltboxError::AuthenticationFailure)
            );
        }
    }
});
