//! Error types for traversal operations.

use pt_core::ElementId;
use thiserror::Error;

/// A node set meant to be acyclic contains at least one cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Cycle detected: {} element(s) could not be ordered", .unordered.len())]
pub struct CycleError {
    /// Elements left with unresolved predecessors, in input order.
    pub unordered: Vec<ElementId>,
}
