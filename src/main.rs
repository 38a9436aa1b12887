//! sealconf - Seal secrets inside configuration files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sealconf::cli::output;
use sealconf::cli::{execute, Cli};
use sealconf::core::constants::LOG_ENV;
use sealconf::error::{CryptoError, Error, SecretError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sealconf=debug")
        } else {
            EnvFilter::new("sealconf=warn")
        }
    });

    // stdout carries command output (seal-value prints the sealed form)
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Crypto(CryptoError::PassphraseRequired) => {
                Some("pass --passphrase or set SEALCONF_PASSPHRASE")
            }
            Error::Crypto(CryptoError::KeyTooSmall { .. }) => {
                Some("generate a key of at least 2048 bits")
            }
            Error::Crypto(CryptoError::UnsupportedKeySize { .. }) => {
                Some("generate a 2048 or 4096-bit key instead")
            }
            Error::Crypto(CryptoError::UnsupportedKeyType(_)) => {
                Some("generate one with: openssl genpkey -algorithm RSA -pkeyopt rsa_keygen_bits:4096")
            }
            Error::Secret(SecretError::Seal(CryptoError::MessageTooLong { .. })) => {
                Some("use a larger key or a shorter value")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
