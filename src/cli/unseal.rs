//! Unseal command.

use std::path::Path;

use crate::cli::{keys, output};
use crate::core::bulk;
use crate::core::config::Config;
use crate::error::{Error, Result};

/// Unseal every sealed secret in `file`.
pub fn execute(
    file: &Path,
    private_key: &Path,
    passphrase: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let unsealer = keys::unsealer(private_key, passphrase)?;
    let mut config = Config::load(file)?;

    let result = bulk::unseal_all(&mut config, &unsealer)?;

    let target = out.unwrap_or(file);
    if result.number_unsealed > 0 || out.is_some() {
        config.save(target)?;
    }

    output::section(&format!(
        "Unseal {}",
        output::path(&file.display().to_string())
    ));
    output::kv("unsealed", result.total_unsealed);
    output::kv("new", result.number_unsealed);
    output::kv("failed", result.total_sealed);

    for e in &result.errors {
        output::error(&e.to_string());
    }

    if !result.is_ok() {
        return Err(Error::Failed(format!(
            "{} secret(s) could not be unsealed",
            result.errors.len()
        )));
    }

    match result.number_unsealed {
        0 => output::success("nothing to unseal"),
        n => {
            output::success(&format!(
                "{} secret{} unsealed into {}",
                n,
                if n == 1 { "" } else { "s" },
                output::path(&target.display().to_string())
            ));
            output::warn("the file now holds plaintext secrets; do not commit it");
        }
    }
    Ok(())
}
