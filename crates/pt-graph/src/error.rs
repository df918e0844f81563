//! Graph-specific error types.

use pt_core::{ElementId, PortId, PtError};

pub type GraphResult<T> = Result<T, GraphError>;

/// Network construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Two elements share an id.
    DuplicateElement { element: ElementId },

    /// Two ports share an id.
    DuplicatePort { port: PortId },

    /// A port names an owner that doesn't exist.
    UnknownOwner { port: PortId, owner: ElementId },

    /// An element lists a port that doesn't exist.
    UnknownPort { element: ElementId, port: PortId },

    /// An element lists a port that belongs to somebody else.
    PortOwnerMismatch {
        element: ElementId,
        port: PortId,
        actual: Option<ElementId>,
    },

    /// A port names an owner whose port list doesn't include it.
    UnlistedPort { port: PortId, owner: ElementId },

    /// A link refers to a port that doesn't exist.
    DanglingLink { port: PortId, target: PortId },

    /// A port is linked to itself.
    SelfLink { port: PortId },

    /// A port flow is NaN or infinite.
    NonFiniteFlow { port: PortId, value: f64 },

    /// ID not found in index map.
    IdNotFound { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateElement { element } => {
                write!(f, "Element {} is defined more than once", element)
            }
            GraphError::DuplicatePort { port } => {
                write!(f, "Port {} is defined more than once", port)
            }
            GraphError::UnknownOwner { port, owner } => {
                write!(f, "Port {} refers to non-existent owner {}", port, owner)
            }
            GraphError::UnknownPort { element, port } => {
                write!(f, "Element {} lists non-existent port {}", element, port)
            }
            GraphError::PortOwnerMismatch {
                element,
                port,
                actual,
            } => match actual {
                Some(actual) => write!(
                    f,
                    "Element {} lists port {} but the port belongs to {}",
                    element, port, actual
                ),
                None => write!(
                    f,
                    "Element {} lists port {} but the port has no owner",
                    element, port
                ),
            },
            GraphError::UnlistedPort { port, owner } => {
                write!(f, "Port {} names owner {} but is not in its port list", port, owner)
            }
            GraphError::DanglingLink { port, target } => {
                write!(f, "Port {} is linked to non-existent port {}", port, target)
            }
            GraphError::SelfLink { port } => {
                write!(f, "Port {} is linked to itself", port)
            }
            GraphError::NonFiniteFlow { port, value } => {
                write!(f, "Port {} has non-finite flow {}", port, value)
            }
            GraphError::IdNotFound { what } => {
                write!(f, "{} not found in index map", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for PtError {
    fn from(err: GraphError) -> Self {
        PtError::Invariant {
            what: err.to_string(),
        }
    }
}
