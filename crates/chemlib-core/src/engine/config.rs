use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Abbreviation-rendering options, one flag per item type.
///
/// A declarative schema consumed by the host's config-file subsystem; the
/// host owns persistence, this side only supplies the field set and the
/// defaults. Every flag is independent of the others.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub element_abbreviations: bool,
    pub dust_abbreviations: bool,
    pub nugget_abbreviations: bool,
    pub ingot_abbreviations: bool,
    pub plate_abbreviations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            element_abbreviations: true,
            dust_abbreviations: false,
            nugget_abbreviations: false,
            ingot_abbreviations: false,
            plate_abbreviations: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl RenderOptions {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
