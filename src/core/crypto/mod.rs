//! Cryptographic operations.
//!
//! RSA-OAEP sealing of individual secret strings. A [`Sealer`] holds a
//! public key and turns plaintext into base64 ciphertext; an
//! [`Unsealer`] holds the matching private key and reverses it.
//!
//! ## Parameters
//!
//! - Padding: OAEP with SHA-256 for both the digest and MGF1
//! - Label: the fixed string in [`OAEP_LABEL`](crate::core::constants::OAEP_LABEL)
//! - Encoding: standard base64 with padding
//!
//! A key's capacity is `size - 2 * 32 - 2` bytes of plaintext. Keys whose
//! capacity is under [`MIN_CAPACITY`](crate::core::constants::MIN_CAPACITY)
//! are rejected when loaded.
//!
//! Neither type synchronizes internally. Share one across threads only
//! behind a lock.

mod keys;
mod sealer;
mod unsealer;

pub use sealer::Sealer;
pub use unsealer::Unsealer;

use rsa::Oaep;
use sha2::Sha256;

use crate::core::constants::{DIGEST_LEN, OAEP_LABEL};

/// OAEP padding shared by both directions.
fn padding() -> Oaep {
    Oaep::new_with_label::<Sha256, _>(OAEP_LABEL)
}

/// Largest plaintext, in bytes, a key of `modulus_len` bytes can seal.
pub fn capacity(modulus_len: usize) -> usize {
    modulus_len.saturating_sub(2 * DIGEST_LEN + 2)
}
