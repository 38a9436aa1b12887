//! Command-line interface.

pub mod check;
pub mod keys;
pub mod output;
pub mod seal;
pub mod unseal;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants;

/// sealconf - Keep secrets sealed inside configuration files.
#[derive(Parser)]
#[command(
    name = "sealconf",
    about = "Seal secrets inside configuration files so they can live in version control",
    version,
    after_help = "Sealed values look like sealed(<base64>) and need the private key to open."
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Public key location.
#[derive(Args, Debug)]
pub struct PublicKeyArgs {
    /// PEM-encoded PKIX RSA public key
    #[arg(short = 'k', long = "public-key", env = constants::PUBLIC_KEY_ENV, value_name = "PEM")]
    pub public_key: PathBuf,
}

/// Private key location and passphrase.
#[derive(Args, Debug)]
pub struct PrivateKeyArgs {
    /// PEM-encoded PKCS#8 RSA private key
    #[arg(short = 'k', long = "private-key", env = constants::PRIVATE_KEY_ENV, value_name = "PEM")]
    pub private_key: PathBuf,

    /// Passphrase for an encrypted private key (prompted for if omitted)
    #[arg(long, env = constants::PASSPHRASE_ENV, hide_env_values = true)]
    pub passphrase: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Seal every plaintext secret in a config file
    Seal {
        /// Config file (.yaml, .yml, .json or .toml)
        file: PathBuf,
        #[command(flatten)]
        key: PublicKeyArgs,
        /// Write the result here instead of in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Unseal every sealed secret in a config file
    Unseal {
        /// Config file (.yaml, .yml, .json or .toml)
        file: PathBuf,
        #[command(flatten)]
        key: PrivateKeyArgs,
        /// Write the result here instead of in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check sealed secrets, trial-decrypting them when a key is given
    Check {
        /// Config file (.yaml, .yml, .json or .toml)
        file: PathBuf,
        /// PEM-encoded PKCS#8 RSA private key
        #[arg(short = 'k', long = "private-key", env = constants::PRIVATE_KEY_ENV, value_name = "PEM")]
        private_key: Option<PathBuf>,
        /// Passphrase for an encrypted private key
        #[arg(long, env = constants::PASSPHRASE_ENV, hide_env_values = true)]
        passphrase: Option<String>,
    },

    /// Validate a config file
    Validate {
        /// Config file (.yaml, .yml, .json or .toml)
        file: PathBuf,
    },

    /// Seal a single value and print it in sealed(...) form
    SealValue {
        /// Plaintext to seal
        value: String,
        #[command(flatten)]
        key: PublicKeyArgs,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Seal { file, key, output } => seal::execute(&file, &key.public_key, output.as_deref()),
        Unseal { file, key, output } => unseal::execute(
            &file,
            &key.private_key,
            key.passphrase.as_deref(),
            output.as_deref(),
        ),
        Check {
            file,
            private_key,
            passphrase,
        } => check::execute(&file, private_key.as_deref(), passphrase.as_deref()),
        Validate { file } => validate::execute(&file),
        SealValue { value, key } => seal::value(&value, &key.public_key),
    }
}
