//! Constants used throughout sealconf.
//!
//! Centralizes the wire token, OAEP parameters and environment names.

/// OAEP label bound into every ciphertext.
pub const OAEP_LABEL: &str = "OAEP Encrypted";

/// Output size of the OAEP digest (SHA-256) in bytes.
pub const DIGEST_LEN: usize = 32;

/// Smallest plaintext capacity a key must offer to be accepted.
pub const MIN_CAPACITY: usize = 50;

/// Prefix of the textual wrapper around a sealed value.
pub const SEALED_PREFIX: &str = "sealed(";

/// Suffix of the textual wrapper around a sealed value.
pub const SEALED_SUFFIX: &str = ")";

/// Pattern every sealed payload must match: base64 followed by padding.
pub const SEALED_PATTERN: &str = r"^[A-Za-z0-9+/]+=+$";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SEALCONF_LOG";

/// Environment variable holding the public key path.
pub const PUBLIC_KEY_ENV: &str = "SEALCONF_PUBLIC_KEY";

/// Environment variable holding the private key path.
pub const PRIVATE_KEY_ENV: &str = "SEALCONF_PRIVATE_KEY";

/// Environment variable holding the private key passphrase.
pub const PASSPHRASE_ENV: &str = "SEALCONF_PASSPHRASE";
