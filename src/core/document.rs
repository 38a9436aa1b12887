//! Reading and writing configuration documents.
//!
//! The format is chosen by file extension: YAML (`.yaml`, `.yml`), JSON
//! (`.json`) or TOML (`.toml`).

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// A supported document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }

    /// Parse `text` in this format.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T> {
        let value = match self {
            Self::Yaml => serde_yaml::from_str(text).map_err(ConfigError::Yaml)?,
            Self::Json => serde_json::from_str(text).map_err(ConfigError::Json)?,
            Self::Toml => toml::from_str(text).map_err(ConfigError::TomlParse)?,
        };
        Ok(value)
    }

    /// Render `value` in this format.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        let text = match self {
            Self::Yaml => serde_yaml::to_string(value).map_err(ConfigError::Yaml)?,
            Self::Json => {
                let mut text = serde_json::to_string_pretty(value).map_err(ConfigError::Json)?;
                text.push('\n');
                text
            }
            Self::Toml => toml::to_string_pretty(value).map_err(ConfigError::TomlSerialize)?,
        };
        Ok(text)
    }
}

/// Read and parse a document.
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    debug!(path = %path.display(), ?format, "reading document");

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    format.parse(&text)
}

/// Render and write a document.
pub fn write<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let format = Format::from_path(path)?;
    debug!(path = %path.display(), ?format, "writing document");

    let text = format.render(value)?;
    std::fs::write(path, text).map_err(|source| ConfigError::WriteFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
