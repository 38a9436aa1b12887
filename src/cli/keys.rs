//! Key loading for commands.

use std::path::Path;

use zeroize::Zeroizing;

use crate::core::crypto::{Sealer, Unsealer};
use crate::error::{CryptoError, Error, Result};

/// Load the public key at `path`.
pub fn sealer(path: &Path) -> Result<Sealer> {
    let mut sealer = Sealer::new();
    sealer.load_key_file(path)?;
    Ok(sealer)
}

/// Load the private key at `path`.
///
/// An encrypted key with no passphrase is retried once with a prompt
/// when someone is at the terminal.
pub fn unsealer(path: &Path, passphrase: Option<&str>) -> Result<Unsealer> {
    let mut unsealer = Unsealer::new();

    match unsealer.load_key_file(path, passphrase) {
        Ok(()) => {}
        Err(CryptoError::PassphraseRequired) if console::user_attended_stderr() => {
            let entered = prompt_passphrase()?;
            unsealer.load_key_file(path, Some(entered.as_str()))?;
        }
        Err(e) => return Err(e.into()),
    }

    Ok(unsealer)
}

fn prompt_passphrase() -> Result<Zeroizing<String>> {
    dialoguer::Password::new()
        .with_prompt("Private key passphrase")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| Error::Failed(format!("passphrase prompt failed: {}", e)))
}
