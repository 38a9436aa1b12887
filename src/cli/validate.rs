//! Validate command.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::validation::validate_object;
use crate::error::{Error, Result};

/// Validate `file` and print every finding.
pub fn execute(file: &Path) -> Result<()> {
    let config = Config::load(file)?;
    let result = validate_object(&config)?;

    output::section(&format!(
        "Validate {}",
        output::path(&file.display().to_string())
    ));

    if result.is_valid() {
        output::success("config is valid");
        return Ok(());
    }

    for finding in &result.findings {
        output::warn(&finding.to_string());
    }

    Err(Error::Failed(format!(
        "{} problem{} found",
        result.len(),
        if result.len() == 1 { "" } else { "s" }
    )))
}
