//! pt-traverse: ordering of network elements.
//!
//! - `tracer`: single-path chain following with run-wide de-duplication
//! - `walker`: tag-bounded depth-first walk over node adjacency
//! - `sequencer`: Kahn ordering of a node set with cycle detection

pub mod error;
pub mod sequencer;
pub mod tracer;
pub mod walker;

pub use error::CycleError;
pub use sequencer::topological_sort;
pub use tracer::{Chain, ChainEnd, ChainTracer, Placement, MAX_CHAIN_STEPS};
pub use walker::{NetworkWalker, Visited};
