//! sealconf - Seal secrets inside configuration files.
//!
//! Secrets are encrypted with RSA-OAEP (SHA-256) under a public key and
//! stored in the config file as `sealed(<base64>)`, so the file can be
//! committed while only holders of the private key can read them.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── seal          # seal, seal-value
//! │   ├── unseal        # unseal
//! │   ├── check         # check
//! │   ├── validate      # validate
//! │   └── keys          # key loading and passphrase prompt
//! └── core/             # Library components
//!     ├── crypto/       # RSA-OAEP engine
//!     │   ├── keys      # PEM parsing and key checks
//!     │   ├── sealer    # Public-key side
//!     │   └── unsealer  # Private-key side
//!     ├── walk/         # Capability-driven tree walker
//!     ├── secret        # SealedSecret and the Sealable capability
//!     ├── validation    # Validate capability and reports
//!     ├── bulk          # seal_all / unseal_all / check_all
//!     ├── config        # Mail relay config model
//!     └── document      # YAML, JSON and TOML I/O
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sealconf::core::bulk::seal_all;
//! use sealconf::core::config::Config;
//! use sealconf::core::crypto::Sealer;
//!
//! # fn main() -> sealconf::error::Result<()> {
//! let sealer = Sealer::from_pem(&std::fs::read_to_string("seal.pub.pem")?)?;
//! let mut config = Config::load("relay.yaml")?;
//! let result = seal_all(&mut config, &sealer)?;
//! assert!(result.is_ok());
//! config.save("relay.yaml")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
