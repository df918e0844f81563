//! Contiguous indexing of an element set.
//!
//! Provides a bidirectional mapping between element ids and dense indices
//! (0..N) so per-element bookkeeping can live in plain vectors.

use std::collections::HashMap;

use pt_core::ElementId;

use crate::error::{GraphError, GraphResult};

/// Dense index over a set of element ids, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ElementIndex {
    /// Contiguous list of element IDs (index -> ElementId).
    ids: Vec<ElementId>,

    /// Reverse lookup: ElementId -> index.
    slots: HashMap<ElementId, usize>,
}

impl ElementIndex {
    /// Build an index; repeated ids keep their first position.
    pub fn from_ids<I: IntoIterator<Item = ElementId>>(ids: I) -> Self {
        let mut index = Self::default();
        for id in ids {
            if let std::collections::hash_map::Entry::Vacant(slot) = index.slots.entry(id) {
                slot.insert(index.ids.len());
                index.ids.push(id);
            }
        }
        index
    }

    /// Number of elements in the index.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Dense index of `id`, if present.
    pub fn get(&self, id: ElementId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// Dense index of `id`, or an error if it is not part of the set.
    pub fn idx(&self, id: ElementId) -> GraphResult<usize> {
        self.get(id)
            .ok_or(GraphError::IdNotFound { what: "ElementId" })
    }

    /// Get the element ID for a dense index (panics if out of bounds).
    pub fn id(&self, i: usize) -> ElementId {
        self.ids[i]
    }

    /// All element IDs in index order.
    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }
}
