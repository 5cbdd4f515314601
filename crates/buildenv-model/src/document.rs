//! Environment documents on disk
//!
//! A document holds a single environment mapping, as JSON (`.json`) or TOML
//! (`.toml`). TOML documents are converted to the equivalent JSON mapping so
//! both formats go through exactly the same construction.

use std::path::Path;

use buildenv_core::{Aggregate, ModelError, ModelResult, RawMapping};
use serde_json::Value;
use tracing::debug;

use crate::project_environment::ProjectEnvironment;

/// Document formats recognized by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> ModelResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DocumentFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(DocumentFormat::Toml),
            _ => Err(ModelError::config(format!(
                "Unsupported document type: {} (expected .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Parse document text into a raw mapping
pub fn parse_mapping(content: &str, format: DocumentFormat) -> ModelResult<RawMapping> {
    let value: Value = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Toml => {
            let table: toml::Table = toml::from_str(content)?;
            serde_json::to_value(table)?
        }
    };
    RawMapping::try_from(value)
}

/// Load and build an environment from a document
pub fn load_environment<P: AsRef<Path>>(path: P) -> ModelResult<ProjectEnvironment> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    debug!("Loading {:?} environment document from {}", format, path.display());

    let content = std::fs::read_to_string(path)?;
    ProjectEnvironment::from_mapping(parse_mapping(&content, format)?)
}
