//! pt-project: network file format and validation.
//!
//! A network file is a snapshot of what the host model exposes for one export:
//! elements, ports, joints and export settings.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{validate_network_file, ValidationError};

use std::path::Path;

pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn from_yaml_str(content: &str) -> ProjectResult<NetworkFile> {
    let file: NetworkFile = serde_yaml::from_str(content)?;
    validate_network_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_network_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&content)?;
    validate_network_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_network_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, `.yaml`/`.yml` as YAML.
pub fn load(path: &Path) -> ProjectResult<NetworkFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("yaml") | Some("yml") => load_yaml(path),
        other => Err(ProjectError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}
