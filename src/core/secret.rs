//! Sealed secret values.
//!
//! A [`SealedSecret`] is a configuration field that holds either a
//! plaintext secret or its RSA-OAEP ciphertext. In a document it appears
//! as the bare plaintext, or wrapped as `sealed(<base64>)`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;
use zeroize::Zeroize;

use crate::core::constants::{SEALED_PATTERN, SEALED_PREFIX, SEALED_SUFFIX};
use crate::core::crypto::{Sealer, Unsealer};
use crate::core::validation::{Report, Validate};
use crate::core::walk::Node;
use crate::error::{SecretError, ValidationError};

/// Something that can be sealed and unsealed in place.
pub trait Sealable {
    /// Whether the value currently holds ciphertext.
    fn is_sealed(&self) -> bool;

    /// Encrypt in place. Succeeds without change if already sealed.
    fn seal(&mut self, sealer: &Sealer) -> Result<(), SecretError>;

    /// Decrypt in place. Succeeds without change if already unsealed.
    fn unseal(&mut self, unsealer: &Unsealer) -> Result<(), SecretError>;

    /// Check integrity without changing anything.
    ///
    /// With a keyed unsealer a sealed value is trial-decrypted. Otherwise
    /// only the stored form is checked.
    fn check(&self, unsealer: Option<&Unsealer>) -> Result<(), SecretError>;
}

fn sealed_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEALED_PATTERN).expect("sealed pattern is a valid regex"))
}

/// Whether `payload` looks like sealed ciphertext.
pub fn is_sealed_format(payload: &str) -> bool {
    sealed_format().is_match(payload)
}

/// A secret configuration value, sealed or not.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedSecret {
    value: String,
    sealed: bool,
}

impl SealedSecret {
    /// An unsealed secret holding `plaintext`.
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self {
            value: plaintext.into(),
            sealed: false,
        }
    }

    /// Read a secret from its document form.
    ///
    /// `sealed(<payload>)` is taken as sealed only when the payload looks
    /// like ciphertext; anything else, wrapper included, is plaintext.
    pub fn parse(text: &str) -> Self {
        if let Some(payload) = text
            .strip_prefix(SEALED_PREFIX)
            .and_then(|rest| rest.strip_suffix(SEALED_SUFFIX))
        {
            if is_sealed_format(payload) {
                return Self {
                    value: payload.to_string(),
                    sealed: true,
                };
            }
        }
        Self::new(text)
    }

    /// Build a secret with an explicit state, without checking the value.
    ///
    /// Use [`Sealable::check`] or validation to catch a malformed value.
    pub fn from_parts(value: impl Into<String>, sealed: bool) -> Self {
        Self {
            value: value.into(),
            sealed,
        }
    }

    /// The stored value: plaintext when unsealed, bare ciphertext when sealed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Document form: `sealed(<ciphertext>)` or the bare plaintext.
    pub fn to_wire(&self) -> String {
        if self.sealed {
            format!("{}{}{}", SEALED_PREFIX, self.value, SEALED_SUFFIX)
        } else {
            self.value.clone()
        }
    }

    /// Structural check of the stored value.
    pub fn check_raw_value(&self) -> Result<(), SecretError> {
        if self.sealed {
            if !is_sealed_format(&self.value) {
                return Err(SecretError::Format);
            }
        } else if self.value.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(())
    }
}

impl Sealable for SealedSecret {
    fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn seal(&mut self, sealer: &Sealer) -> Result<(), SecretError> {
        if self.sealed {
            return Ok(());
        }

        let ciphertext = sealer.seal_secret(&self.value).map_err(SecretError::Seal)?;
        self.value.zeroize();
        self.value = ciphertext;
        self.sealed = true;

        trace!("secret sealed");
        Ok(())
    }

    fn unseal(&mut self, unsealer: &Unsealer) -> Result<(), SecretError> {
        if !self.sealed {
            return Ok(());
        }

        let plaintext = unsealer
            .unseal_secret(&self.value)
            .map_err(SecretError::Unseal)?;
        self.value = plaintext;
        self.sealed = false;

        trace!("secret unsealed");
        Ok(())
    }

    fn check(&self, unsealer: Option<&Unsealer>) -> Result<(), SecretError> {
        match unsealer {
            Some(unsealer) if self.sealed && unsealer.has_key() => {
                let mut plaintext = unsealer
                    .unseal_secret(&self.value)
                    .map_err(SecretError::Check)?;
                plaintext.zeroize();
                Ok(())
            }
            _ => self.check_raw_value(),
        }
    }
}

impl Validate for SealedSecret {
    fn validate(&self, report: &mut Report, _root: &dyn Node) -> Result<(), ValidationError> {
        if let Err(e) = self.check_raw_value() {
            report.add(self, e.to_string());
        }
        Ok(())
    }
}

crate::walkable!(SealedSecret [Seal, Validate] {});

impl Drop for SealedSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Never shows plaintext.
impl fmt::Debug for SealedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SealedSecret")
            .field("sealed", &self.sealed)
            .field("value", &format_args!("{}", self))
            .finish()
    }
}

/// Short description for reports: a ciphertext prefix, or a redaction.
impl fmt::Display for SealedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sealed {
            let shown: String = self.value.chars().take(12).collect();
            if shown.len() < self.value.len() {
                write!(f, "{}{}...{}", SEALED_PREFIX, shown, SEALED_SUFFIX)
            } else {
                write!(f, "{}{}{}", SEALED_PREFIX, shown, SEALED_SUFFIX)
            }
        } else if self.value.is_empty() {
            f.write_str("<empty>")
        } else {
            f.write_str("<redacted>")
        }
    }
}

impl Serialize for SealedSecret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for SealedSecret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SealedSecretVisitor)
    }
}

struct SealedSecretVisitor;

impl<'de> Visitor<'de> for SealedSecretVisitor {
    type Value = SealedSecret;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar string (quote numbers and booleans)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(SealedSecret::parse(v))
    }

    fn visit_string<E: de::Error>(self, mut v: String) -> Result<Self::Value, E> {
        let secret = SealedSecret::parse(&v);
        v.zeroize();
        Ok(secret)
    }

    // Secrets are strings; an unquoted `1.50` would come back as `1.5`.
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Err(E::invalid_type(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Err(E::invalid_type(Unexpected::Unsigned(v), &self))
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> Result<Self::Value, E> {
        Err(E::invalid_type(Unexpected::Other("integer"), &self))
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> Result<Self::Value, E> {
        Err(E::invalid_type(Unexpected::Other("integer"), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::invalid_type(Unexpected::Float(v), &self))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Err(E::invalid_type(Unexpected::Bool(v), &self))
    }
}
