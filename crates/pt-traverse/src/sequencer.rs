//! Topological ordering of a node set (Kahn's algorithm).

use std::collections::VecDeque;

use pt_graph::{ElementIndex, Node};

use crate::error::CycleError;

/// Order `nodes` so that every node comes before the nodes it lists as neighbors.
///
/// In-degree counts, for each node, the *other* nodes of the set listing it;
/// neighbors outside the set are ignored. Ties are broken by input order.
/// Repeated ids keep their first occurrence. Any cycle fails the whole call.
pub fn topological_sort(nodes: &[Node]) -> Result<Vec<&Node>, CycleError> {
    let index = ElementIndex::from_ids(nodes.iter().map(|n| n.id));
    let mut slots: Vec<Option<&Node>> = vec![None; index.len()];
    for node in nodes {
        if let Some(i) = index.get(node.id) {
            if slots[i].is_none() {
                slots[i] = Some(node);
            }
        }
    }
    let slots: Vec<&Node> = slots.into_iter().flatten().collect();

    // Successors as dense indices, self-references dropped
    let successors: Vec<Vec<usize>> = slots
        .iter()
        .map(|node| {
            node.neighbors
                .iter()
                .filter(|&&nb| nb != node.id)
                .filter_map(|&nb| index.get(nb))
                .collect()
        })
        .collect();

    let mut in_degree = vec![0usize; slots.len()];
    for succ in &successors {
        for &j in succ {
            in_degree[j] += 1;
        }
    }

    // Seed the queue with all zero-in-degree nodes, in input order
    let mut queue: VecDeque<usize> = (0..slots.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(slots.len());

    while let Some(i) = queue.pop_front() {
        order.push(slots[i]);
        for &j in &successors[i] {
            in_degree[j] -= 1;
            if in_degree[j] == 0 {
                queue.push_back(j);
            }
        }
    }

    if order.len() < slots.len() {
        let unordered = (0..slots.len())
            .filter(|&i| in_degree[i] > 0)
            .map(|i| index.id(i))
            .collect();
        let err = CycleError { unordered };
        tracing::warn!(unordered = err.unordered.len(), "node set contains a cycle");
        return Err(err);
    }

    Ok(order)
}
