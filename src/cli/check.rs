//! Check command.
//!
//! Without a key only the stored form of each secret is checked; with
//! one, every sealed secret is also trial-decrypted. Nothing is written.

use std::path::Path;

use crate::cli::{keys, output};
use crate::core::bulk;
use crate::core::config::Config;
use crate::error::{Error, Result};

/// Check the secrets in `file`.
pub fn execute(file: &Path, private_key: Option<&Path>, passphrase: Option<&str>) -> Result<()> {
    let unsealer = private_key
        .map(|path| keys::unsealer(path, passphrase))
        .transpose()?;
    let config = Config::load(file)?;

    let result = bulk::check_all(&config, unsealer.as_ref())?;

    output::section(&format!(
        "Check {}",
        output::path(&file.display().to_string())
    ));
    output::kv("sealed", result.total_sealed);
    output::kv("unsealed", result.total_unsealed);
    output::kv(
        "mode",
        if unsealer.is_some() {
            "decrypt"
        } else {
            "format only"
        },
    );

    for e in &result.errors {
        output::error(&e.to_string());
    }

    if !result.is_ok() {
        return Err(Error::Failed(format!(
            "{} secret(s) failed the check",
            result.errors.len()
        )));
    }

    if result.total_unsealed > 0 {
        output::warn(&format!(
            "{} secret{} not sealed",
            result.total_unsealed,
            if result.total_unsealed == 1 { " is" } else { "s are" }
        ));
    }
    output::success("all secrets passed");
    Ok(())
}
