//! Per-run memoization of nodes.

use std::collections::HashMap;

use pt_core::ElementId;

use crate::host::PortSource;
use crate::node::{build_node, Node};

/// Builds each element's node at most once per run.
///
/// Tracing, walking and sequencing all read adjacency through one arena, so
/// port resolution never runs twice for the same element.
#[derive(Debug)]
pub struct NodeArena<'a, S: PortSource + ?Sized> {
    source: &'a S,
    nodes: HashMap<ElementId, Node>,
}

impl<'a, S: PortSource + ?Sized> NodeArena<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            nodes: HashMap::new(),
        }
    }

    /// The host this arena reads from.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Node for `id`, built on first request.
    ///
    /// Network containers are never turned into nodes.
    pub fn node(&mut self, id: ElementId) -> Option<&Node> {
        if self.source.is_container(id) {
            return None;
        }
        let source = self.source;
        Some(
            self.nodes
                .entry(id)
                .or_insert_with(|| build_node(source, id)),
        )
    }

    /// Copy of the neighbor list of `id` (empty for containers).
    pub fn neighbors(&mut self, id: ElementId) -> Vec<ElementId> {
        self.node(id).map(|n| n.neighbors.clone()).unwrap_or_default()
    }

    /// Number of nodes built so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
