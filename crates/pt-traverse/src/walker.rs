//! Tag-bounded depth-first walk over node adjacency.

use std::collections::HashSet;

use pt_core::ElementId;
use pt_graph::{AttributeSource, NodeArena, PortSource};

/// Elements visited by one or more walks, in visiting order.
#[derive(Debug, Clone, Default)]
pub struct Visited {
    order: Vec<ElementId>,
    seen: HashSet<ElementId>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.seen.contains(&id)
    }

    /// Mark `id` visited; false if it already was.
    pub fn insert(&mut self, id: ElementId) -> bool {
        if self.seen.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    pub fn order(&self) -> &[ElementId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

struct Frame {
    neighbors: Vec<ElementId>,
    next: usize,
}

/// Depth-first walker that stays within elements sharing the seed's tag.
#[derive(Debug, Clone)]
pub struct NetworkWalker {
    tag_key: String,
}

impl NetworkWalker {
    /// `tag_key` names the attribute compared against the seed (e.g. system name).
    pub fn new(tag_key: impl Into<String>) -> Self {
        Self {
            tag_key: tag_key.into(),
        }
    }

    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    /// Walk from `seed`, adding every reached element to `visited`.
    ///
    /// For each element, unvisited neighbors are examined in order. A neighbor
    /// with the seed's tag is descended into; the first neighbor with another
    /// tag ends the examination of that element's remaining neighbors.
    /// Network containers are never visited.
    pub fn walk<S, A>(
        &self,
        arena: &mut NodeArena<'_, S>,
        attrs: &A,
        seed: ElementId,
        visited: &mut Visited,
    ) where
        S: PortSource + ?Sized,
        A: AttributeSource + ?Sized,
    {
        if arena.node(seed).is_none() || !visited.insert(seed) {
            return;
        }
        let tag = self.tag_of(attrs, seed);
        let start = visited.len();

        // Explicit frames reproduce recursive visiting order without recursion depth
        let mut stack = vec![Frame {
            neighbors: arena.neighbors(seed),
            next: 0,
        }];
        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let candidate = frame.neighbors.get(frame.next).copied();
            frame.next += 1;

            let Some(candidate) = candidate else {
                stack.pop();
                continue;
            };
            if visited.contains(candidate) {
                continue;
            }
            if self.tag_of(attrs, candidate) != tag {
                stack.pop();
                continue;
            }
            if arena.node(candidate).is_none() {
                continue;
            }

            visited.insert(candidate);
            stack.push(Frame {
                neighbors: arena.neighbors(candidate),
                next: 0,
            });
        }

        tracing::debug!(%seed, %tag, reached = visited.len() - start + 1, "walk finished");
    }

    fn tag_of<A: AttributeSource + ?Sized>(&self, attrs: &A, id: ElementId) -> String {
        attrs
            .attribute(id, &self.tag_key)
            .and_then(|v| v.as_text())
            .unwrap_or_default()
    }
}
