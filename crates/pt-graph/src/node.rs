//! Resolution of an element's ports into neighbor edges.

use std::collections::{HashMap, HashSet};

use pt_core::ElementId;

use crate::host::PortSource;
use crate::model::Domain;

/// Adjacency of one element, derived from its ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: ElementId,
    /// Distinct elements feeding this one through an Out/Bidirectional port,
    /// in port enumeration order.
    pub neighbors: Vec<ElementId>,
    /// Every qualifying joint regardless of direction: neighbor -> local owners.
    pub connections: HashMap<ElementId, Vec<ElementId>>,
}

impl Node {
    /// An element without any resolvable adjacency.
    pub fn isolated(id: ElementId) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
            connections: HashMap::new(),
        }
    }

    pub fn is_isolated(&self) -> bool {
        self.neighbors.is_empty() && self.connections.is_empty()
    }

    pub fn neighbor_set(&self) -> HashSet<ElementId> {
        self.neighbors.iter().copied().collect()
    }
}

/// Build the node for `element`.
///
/// A joined port qualifies when its domain is defined and its owner is known,
/// is not a network container, and is not `element` itself. Qualifying joints
/// always land in `connections`; only Out/Bidirectional ones become neighbors.
/// Elements without a port collection yield an isolated node.
pub fn build_node<S: PortSource + ?Sized>(source: &S, element: ElementId) -> Node {
    let mut node = Node::isolated(element);
    let Some(ports) = source.ports(element) else {
        return node;
    };

    for port in ports {
        for linked in source.linked_ports(port) {
            if linked.domain == Domain::Undefined {
                continue;
            }
            let Some(owner) = linked.owner else {
                continue;
            };
            if owner == element || source.is_container(owner) {
                continue;
            }

            node.connections.entry(owner).or_default().push(element);
            if linked.direction.is_outward() && !node.neighbors.contains(&owner) {
                node.neighbors.push(owner);
            }
        }
    }

    node
}
