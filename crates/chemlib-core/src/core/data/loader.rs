use super::schema::{CompoundRecord, CompoundsDocument, ElementRecord, ElementsDocument};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Data file not found or unreadable at '{path}': {source}")]
    Resource {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed chemical data in '{source_name}': {source}")]
    Format {
        source_name: String,
        source: serde_json::Error,
    },
    #[error("Element '{name}' in '{source_name}' has invalid atomic number 0")]
    AtomicNumber { source_name: String, name: String },
}

/// Parses an `elements.json` document into its ordered element records.
///
/// `source_name` is only used for error context (a file path or resource
/// name). The whole document is parsed and validated before anything is
/// returned, so a failure leaves no partial result behind.
pub fn parse_elements(source_name: &str, content: &str) -> Result<Vec<ElementRecord>, DataError> {
    let document: ElementsDocument =
        serde_json::from_str(content).map_err(|e| DataError::Format {
            source_name: source_name.to_string(),
            source: e,
        })?;

    for record in &document.elements {
        if record.atomic_number == 0 {
            return Err(DataError::AtomicNumber {
                source_name: source_name.to_string(),
                name: record.name.clone(),
            });
        }
    }

    Ok(document.elements)
}

/// Parses a `compounds.json` document into its ordered compound records.
pub fn parse_compounds(source_name: &str, content: &str) -> Result<Vec<CompoundRecord>, DataError> {
    let document: CompoundsDocument =
        serde_json::from_str(content).map_err(|e| DataError::Format {
            source_name: source_name.to_string(),
            source: e,
        })?;
    Ok(document.compounds)
}

pub fn read_elements(path: &Path) -> Result<Vec<ElementRecord>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|e| DataError::Resource {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_elements(&path.to_string_lossy(), &content)
}

pub fn read_compounds(path: &Path) -> Result<Vec<CompoundRecord>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|e| DataError::Resource {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_compounds(&path.to_string_lossy(), &content)
}
