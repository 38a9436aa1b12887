//! Public-key half of the engine.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use tracing::{debug, trace};

use super::{capacity, keys, padding};
use crate::error::CryptoError;

/// Seals plaintext with an RSA public key.
#[derive(Debug, Default)]
pub struct Sealer {
    key: Option<RsaPublicKey>,
}

impl Sealer {
    /// Create a sealer with no key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sealer from a PEM-encoded PKIX public key.
    pub fn from_pem(pem: &str) -> Result<Self, CryptoError> {
        let mut sealer = Self::new();
        sealer.load_key_pem(pem)?;
        Ok(sealer)
    }

    /// Load a PEM-encoded PKIX public key, replacing any current key.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::UnsupportedKeyType` for non-RSA keys and
    /// `CryptoError::KeyTooSmall` when the key's capacity is under the
    /// minimum, and `CryptoError::UnsupportedKeySize` for key sizes whose
    /// ciphertext would carry no base64 padding. On error the sealer keeps its previous key.
    pub fn load_key_pem(&mut self, pem: &str) -> Result<(), CryptoError> {
        let key = keys::parse_public_key(pem)?;
        debug!(bits = key.size() * 8, "public key loaded");
        self.key = Some(key);
        Ok(())
    }

    /// Load a public key from a PEM file.
    pub fn load_key_file(&mut self, path: impl AsRef<Path>) -> Result<(), CryptoError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading public key");
        let pem = std::fs::read_to_string(path).map_err(|source| CryptoError::ReadKey {
            path: path.display().to_string(),
            source,
        })?;
        self.load_key_pem(&pem)
    }

    /// Whether a key is loaded.
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// Drop the loaded key.
    pub fn clear_key(&mut self) {
        self.key = None;
    }

    /// Largest plaintext the loaded key can seal, in bytes.
    pub fn max_message_len(&self) -> Option<usize> {
        self.key.as_ref().map(|k| capacity(k.size()))
    }

    /// Encrypt `plaintext` and return it base64-encoded.
    ///
    /// # Errors
    ///
    /// - `CryptoError::NoKey` if no key is loaded
    /// - `CryptoError::MessageTooLong` if `plaintext` exceeds the key's capacity
    /// - `CryptoError::Encryption` for any other failure
    pub fn seal_secret(&self, plaintext: &str) -> Result<String, CryptoError> {
        let key = self.key.as_ref().ok_or(CryptoError::NoKey)?;
        let max = capacity(key.size());

        trace!(plaintext_len = plaintext.len(), max, "sealing");

        if plaintext.len() > max {
            return Err(CryptoError::MessageTooLong {
                len: plaintext.len(),
                max,
            });
        }

        let ciphertext = key
            .encrypt(&mut OsRng, padding(), plaintext.as_bytes())
            .map_err(|e| match e {
                rsa::Error::MessageTooLong => CryptoError::MessageTooLong {
                    len: plaintext.len(),
                    max,
                },
                other => CryptoError::Encryption(other.to_string()),
            })?;

        Ok(STANDARD.encode(ciphertext))
    }
}
