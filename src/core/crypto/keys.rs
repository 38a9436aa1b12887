//! PEM key decoding.
//!
//! Public keys are PKIX (`PUBLIC KEY`), private keys are PKCS#8
//! (`PRIVATE KEY` or, passphrase-protected, `ENCRYPTED PRIVATE KEY`).
//! Only RSA keys are accepted, and only when they leave enough OAEP
//! capacity for a useful secret.

use pkcs8::der::{Document, SecretDocument};
use pkcs8::{EncryptedPrivateKeyInfo, ObjectIdentifier, PrivateKeyInfo, SubjectPublicKeyInfoRef};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::trace;

use super::capacity;
use crate::core::constants::MIN_CAPACITY;
use crate::error::CryptoError;

const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const ENCRYPTED_PRIVATE_KEY_LABEL: &str = "ENCRYPTED PRIVATE KEY";

/// Decode a PEM-encoded PKIX RSA public key.
pub(crate) fn parse_public_key(pem: &str) -> Result<RsaPublicKey, CryptoError> {
    let (label, doc) = Document::from_pem(pem)
        .map_err(|e| CryptoError::InvalidKey(format!("malformed PEM: {}", e)))?;

    if label != PUBLIC_KEY_LABEL {
        return Err(CryptoError::InvalidKey(format!(
            "expected a PKIX \"{}\" block, found \"{}\"",
            PUBLIC_KEY_LABEL, label
        )));
    }

    let spki = SubjectPublicKeyInfoRef::try_from(doc.as_bytes())
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    ensure_rsa(spki.algorithm.oid)?;

    let key = RsaPublicKey::try_from(spki).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    ensure_usable(key.size())?;

    trace!(bits = key.size() * 8, "decoded public key");
    Ok(key)
}

/// Decode a PEM-encoded PKCS#8 RSA private key.
///
/// `passphrase` is only consulted for `ENCRYPTED PRIVATE KEY` blocks.
pub(crate) fn parse_private_key(
    pem: &str,
    passphrase: Option<&str>,
) -> Result<RsaPrivateKey, CryptoError> {
    let (label, doc) = SecretDocument::from_pem(pem)
        .map_err(|e| CryptoError::InvalidKey(format!("malformed PEM: {}", e)))?;

    let plain = match label {
        PRIVATE_KEY_LABEL => doc,
        ENCRYPTED_PRIVATE_KEY_LABEL => {
            let passphrase = passphrase.ok_or(CryptoError::PassphraseRequired)?;
            let encrypted = EncryptedPrivateKeyInfo::try_from(doc.as_bytes())
                .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
            encrypted.decrypt(passphrase).map_err(|_| {
                CryptoError::InvalidKey("unable to decrypt private key: wrong passphrase?".to_string())
            })?
        }
        other => {
            return Err(CryptoError::InvalidKey(format!(
                "expected a PKCS#8 \"{}\" block, found \"{}\"",
                PRIVATE_KEY_LABEL, other
            )))
        }
    };

    let info = PrivateKeyInfo::try_from(plain.as_bytes())
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    ensure_rsa(info.algorithm.oid)?;

    let key = RsaPrivateKey::try_from(info).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    ensure_usable(key.size())?;

    trace!(bits = key.size() * 8, "decoded private key");
    Ok(key)
}

fn ensure_rsa(oid: ObjectIdentifier) -> Result<(), CryptoError> {
    if oid == rsa::pkcs1::ALGORITHM_OID {
        Ok(())
    } else {
        Err(CryptoError::UnsupportedKeyType(algorithm_name(oid)))
    }
}

fn ensure_usable(modulus_len: usize) -> Result<(), CryptoError> {
    let available = capacity(modulus_len);
    if available < MIN_CAPACITY {
        return Err(CryptoError::KeyTooSmall {
            bits: modulus_len * 8,
            capacity: available,
            min: MIN_CAPACITY,
        });
    }
    // sealed payloads must end in base64 padding
    if modulus_len % 3 == 0 {
        return Err(CryptoError::UnsupportedKeySize {
            bits: modulus_len * 8,
        });
    }
    Ok(())
}

fn algorithm_name(oid: ObjectIdentifier) -> String {
    match oid.to_string().as_str() {
        "1.2.840.10045.2.1" => "EC".to_string(),
        "1.3.101.112" => "Ed25519".to_string(),
        "1.3.101.110" => "X25519".to_string(),
        "1.2.840.10040.4.1" => "DSA".to_string(),
        other => format!("algorithm {}", other),
    }
}
