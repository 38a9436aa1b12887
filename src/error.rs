use thiserror::Error;

/// Top-level error for sealconf operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A whole-tree operation finished but reported per-item failures.
    #[error("{0}")]
    Failed(String),
}

/// Errors raised by the RSA-OAEP engine and key loading.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("no key loaded")]
    NoKey,

    #[error("message too long: {len} bytes exceeds the key capacity of {max} bytes")]
    MessageTooLong { len: usize, max: usize },

    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Deliberately carries no detail: corrupt input and a wrong key look the same.
    #[error("decryption failed")]
    Decryption,

    #[error("unsupported key type: {0} (only RSA keys are accepted)")]
    UnsupportedKeyType(String),

    #[error("key too small: {bits}-bit key allows {capacity} bytes of plaintext, at least {min} required")]
    KeyTooSmall {
        bits: usize,
        capacity: usize,
        min: usize,
    },

    /// Keys whose byte length is a multiple of 3 give base64 ciphertext
    /// without `=` padding, which would read back as plaintext.
    #[error("unsupported key size: {bits}-bit keys produce unpadded ciphertext (use 2048 or 4096 bits)")]
    UnsupportedKeySize { bits: usize },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("private key is encrypted and no passphrase was given")]
    PassphraseRequired,

    #[error("failed to read key file {path}: {source}")]
    ReadKey {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a single sealed secret.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("sealing secret: {0}")]
    Seal(#[source] CryptoError),

    #[error("unsealing secret: {0}")]
    Unseal(#[source] CryptoError),

    #[error("checking secret: {0}")]
    Check(#[source] CryptoError),

    #[error("unsealed value should not be empty")]
    Empty,

    #[error("sealed value does not match the expected format")]
    Format,
}

impl SecretError {
    /// The underlying crypto failure, if there is one.
    pub fn crypto(&self) -> Option<&CryptoError> {
        match self {
            Self::Seal(e) | Self::Unseal(e) | Self::Check(e) => Some(e),
            Self::Empty | Self::Format => None,
        }
    }
}

/// Hard validation errors.
///
/// These stop a validation walk outright, unlike findings which are
/// collected into a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("validation aborted: {reason}")]
    Aborted { reason: String },
}

/// Errors reading or writing configuration documents.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config format: {0} (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat(String),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
