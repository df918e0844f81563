//! pt-graph: port model and adjacency layer for pipetree.
//!
//! Provides:
//! - Port/element value types as handed out by the host model
//! - Narrow host capability traits (`PortSource`, `AttributeSource`)
//! - An in-memory `Network` host with an incremental builder and validation
//! - The node builder that resolves ports into neighbor lists
//! - A per-run memoizing `NodeArena`
//!
//! # Example
//!
//! ```
//! use pt_graph::{
//!     build_node, ElementCategory, FlowDirection, NetworkBuilder, PortSpec, SystemType,
//! };
//!
//! let mut builder = NetworkBuilder::new();
//! let pump = builder.add_element("Pump", ElementCategory::Equipment);
//! let pipe = builder.add_element("Pipe 1", ElementCategory::Pipe);
//! let a = builder.add_port(pump, PortSpec::piping(FlowDirection::In, SystemType::Supply, 1.0));
//! let b = builder.add_port(pipe, PortSpec::piping(FlowDirection::Out, SystemType::Supply, 1.0));
//! builder.link(a, b);
//! let network = builder.build().unwrap();
//!
//! let node = build_node(&network, pump);
//! assert_eq!(node.neighbors, vec![pipe]);
//! ```

pub mod arena;
pub mod builder;
pub mod error;
pub mod host;
pub mod indexing;
pub mod model;
pub mod network;
pub mod node;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use arena::NodeArena;
pub use builder::{NetworkBuilder, PortSpec};
pub use error::{GraphError, GraphResult};
pub use host::{AttributeSource, PortSource};
pub use indexing::ElementIndex;
pub use model::{AttrValue, Domain, Element, ElementCategory, FlowDirection, Port, SystemType};
pub use network::Network;
pub use node::{build_node, Node};
