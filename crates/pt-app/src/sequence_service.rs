//! Calculation ordering of a system's elements.

use pt_core::ElementId;
use pt_graph::{Network, Node, NodeArena};
use pt_traverse::topological_sort;

use crate::error::{AppError, AppResult};
use crate::selection;

/// Order the members of the systems matching `filter` so that every element
/// comes before its outward neighbors.
///
/// Fails with [`AppError::Cycle`] if the members form a directed cycle.
pub fn order_system(network: &Network, tag_key: &str, filter: &str) -> AppResult<Vec<ElementId>> {
    let members = selection::elements_in_system(network, tag_key, filter);
    if members.is_empty() {
        return Err(AppError::NoSeeds(filter.to_string()));
    }

    let mut arena = NodeArena::new(network);
    let nodes: Vec<Node> = members
        .iter()
        .filter_map(|&id| arena.node(id).cloned())
        .collect();

    let order = topological_sort(&nodes)?;
    tracing::info!(filter, elements = order.len(), "system ordered");
    Ok(order.into_iter().map(|n| n.id).collect())
}
