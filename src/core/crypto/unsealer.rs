//! Private-key half of the engine.

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{capacity, keys, padding};
use crate::error::CryptoError;

/// Unseals ciphertext with an RSA private key.
///
/// The key is zeroized when cleared or dropped.
#[derive(Default)]
pub struct Unsealer {
    key: Option<RsaPrivateKey>,
}

impl Unsealer {
    /// Create an unsealer with no key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unsealer from a PEM-encoded PKCS#8 private key.
    pub fn from_pem(pem: &str, passphrase: Option<&str>) -> Result<Self, CryptoError> {
        let mut unsealer = Self::new();
        unsealer.load_key_pem(pem, passphrase)?;
        Ok(unsealer)
    }

    /// Load a PEM-encoded PKCS#8 private key, replacing any current key.
    ///
    /// `passphrase` is required when the key is encrypted.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::PassphraseRequired` for an encrypted key without
    /// a passphrase, `CryptoError::UnsupportedKeyType` for non-RSA keys and
    /// `CryptoError::KeyTooSmall` when the key's capacity is under the
    /// minimum, and `CryptoError::UnsupportedKeySize` for key sizes whose
    /// ciphertext would carry no base64 padding. On error the unsealer keeps its previous key.
    pub fn load_key_pem(&mut self, pem: &str, passphrase: Option<&str>) -> Result<(), CryptoError> {
        let key = keys::parse_private_key(pem, passphrase)?;
        debug!(bits = key.size() * 8, "private key loaded");
        self.key = Some(key);
        Ok(())
    }

    /// Load a private key from a PEM file.
    pub fn load_key_file(
        &mut self,
        path: impl AsRef<Path>,
        passphrase: Option<&str>,
    ) -> Result<(), CryptoError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading private key");
        let pem = Zeroizing::new(std::fs::read_to_string(path).map_err(|source| {
            CryptoError::ReadKey {
                path: path.display().to_string(),
                source,
            }
        })?);
        self.load_key_pem(&pem, passphrase)
    }

    /// Whether a key is loaded.
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// Drop the loaded key.
    pub fn clear_key(&mut self) {
        self.key = None;
    }

    /// Largest plaintext the loaded key's pair can seal, in bytes.
    pub fn max_message_len(&self) -> Option<usize> {
        self.key.as_ref().map(|k| capacity(k.size()))
    }

    /// Decode and decrypt base64 `ciphertext`.
    ///
    /// # Errors
    ///
    /// - `CryptoError::NoKey` if no key is loaded
    /// - `CryptoError::Decryption` for anything else: bad base64, wrong key,
    ///   tampered ciphertext or a non-UTF-8 plaintext all look the same
    pub fn unseal_secret(&self, ciphertext: &str) -> Result<String, CryptoError> {
        let key = self.key.as_ref().ok_or(CryptoError::NoKey)?;

        trace!(ciphertext_len = ciphertext.len(), "unsealing");

        let bytes = STANDARD
            .decode(ciphertext)
            .map_err(|_| CryptoError::Decryption)?;
        let plaintext = key
            .decrypt_blinded(&mut OsRng, padding(), &bytes)
            .map_err(|_| CryptoError::Decryption)?;

        String::from_utf8(plaintext).map_err(|e| {
            drop(Zeroizing::new(e.into_bytes()));
            CryptoError::Decryption
        })
    }
}

impl fmt::Debug for Unsealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsealer")
            .field("has_key", &self.has_key())
            .finish()
    }
}
