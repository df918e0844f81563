//! Error types for the pt-app service layer.

use pt_core::ElementId;

/// Application error type that wraps errors from the backend crates
/// and provides one error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("No seed elements found for system: {0}")]
    NoSeeds(String),

    #[error("Unknown seed element: {0}")]
    UnknownSeed(u32),

    #[error("Cycle detected, {} element(s) could not be ordered: {}", .unordered.len(), join_ids(.unordered))]
    Cycle { unordered: Vec<ElementId> },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pt-app operations.
pub type AppResult<T> = Result<T, AppError>;

fn join_ids(ids: &[ElementId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// Conversions from backend error types
impl From<pt_project::ProjectError> for AppError {
    fn from(err: pt_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<pt_graph::GraphError> for AppError {
    fn from(err: pt_graph::GraphError) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<pt_core::PtError> for AppError {
    fn from(err: pt_core::PtError) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<pt_traverse::CycleError> for AppError {
    fn from(err: pt_traverse::CycleError) -> Self {
        AppError::Cycle {
            unordered: err.unordered,
        }
    }
}
