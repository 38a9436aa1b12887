//! Seal commands.

use std::path::Path;

use crate::cli::{keys, output};
use crate::core::bulk;
use crate::core::config::Config;
use crate::core::secret::{Sealable, SealedSecret};
use crate::error::{Error, Result};

/// Seal every plaintext secret in `file`.
///
/// Secrets that sealed are written out even when others failed.
pub fn execute(file: &Path, public_key: &Path, out: Option<&Path>) -> Result<()> {
    let sealer = keys::sealer(public_key)?;
    let mut config = Config::load(file)?;

    let result = bulk::seal_all(&mut config, &sealer)?;

    let target = out.unwrap_or(file);
    if result.number_sealed > 0 || out.is_some() {
        config.save(target)?;
    }

    output::section(&format!("Seal {}", output::path(&file.display().to_string())));
    output::kv("sealed", result.total_sealed);
    output::kv("new", result.number_sealed);
    output::kv("failed", result.total_unsealed);

    for e in &result.errors {
        output::error(&e.to_string());
    }

    if !result.is_ok() {
        return Err(Error::Failed(format!(
            "{} secret(s) could not be sealed",
            result.errors.len()
        )));
    }

    match result.number_sealed {
        0 => output::success("nothing to seal"),
        n => output::success(&format!(
            "{} secret{} sealed into {}",
            n,
            if n == 1 { "" } else { "s" },
            output::path(&target.display().to_string())
        )),
    }
    Ok(())
}

/// Seal one value and print its document form.
pub fn value(plaintext: &str, public_key: &Path) -> Result<()> {
    let sealer = keys::sealer(public_key)?;

    let mut secret = SealedSecret::new(plaintext);
    secret.check_raw_value()?;
    secret.seal(&sealer)?;

    println!("{}", secret.to_wire());
    Ok(())
}
