//! Directional single-path chain tracing.
//!
//! From a seed, the tracer repeatedly takes the first qualifying joined
//! element until nothing qualifies, the element is already placed in some
//! chain of this run, or the step bound is reached.

use std::collections::HashSet;

use pt_core::{at_least, ElementId, Tolerances};
use pt_graph::{FlowDirection, PortSource, SystemType};

/// Hard cap on elements per chain, whatever the input data looks like.
pub const MAX_CHAIN_STEPS: usize = 100;

/// Why a chain stopped growing. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainEnd {
    /// No qualifying next element.
    Exhausted,
    /// The next element already belongs to a chain of this run.
    AlreadyPlaced,
    /// The step bound was hit while a next element was still available.
    StepBound,
}

/// Ordered elements produced by one trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub elements: Vec<ElementId>,
    pub end: ChainEnd,
}

impl Chain {
    /// First element of the chain; `None` only for a hand-built empty chain.
    pub fn seed(&self) -> Option<ElementId> {
        self.elements.first().copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl AsRef<[ElementId]> for Chain {
    fn as_ref(&self) -> &[ElementId] {
        &self.elements
    }
}

/// Run-wide record of elements already placed in a chain.
///
/// One `Placement` is threaded through every trace of a run so that no
/// element is emitted twice, whichever seed reached it first.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    placed: HashSet<ElementId>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.placed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    fn place(&mut self, id: ElementId) {
        self.placed.insert(id);
    }
}

/// Chain tracer for one system-type filter.
#[derive(Debug, Clone)]
pub struct ChainTracer {
    filter: SystemType,
    max_steps: usize,
    tol: Tolerances,
}

impl ChainTracer {
    pub fn new(filter: SystemType) -> Self {
        Self {
            filter,
            max_steps: MAX_CHAIN_STEPS,
            tol: Tolerances::default(),
        }
    }

    /// Override the step bound (mainly for tests).
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn filter(&self) -> &SystemType {
        &self.filter
    }

    /// One step: the element the chain continues to from `current`, if any.
    ///
    /// Ports and joined ports are enumerated in ascending id order, so the
    /// first qualifying candidate is deterministic.
    pub fn next_element<S: PortSource + ?Sized>(
        &self,
        source: &S,
        current: ElementId,
    ) -> Option<ElementId> {
        let ports = source.ports(current)?;

        for port in ports.into_iter().filter(|p| p.system_type == self.filter) {
            if port.links.is_empty() {
                continue;
            }
            for linked in source.linked_ports(port) {
                let Some(owner) = linked.owner else {
                    continue;
                };
                if owner == current || source.is_container(owner) || !linked.domain.is_fluid() {
                    continue;
                }

                let accepted = match self.filter {
                    SystemType::Supply => {
                        linked.direction == FlowDirection::Out
                            && at_least(linked.flow, port.flow, self.tol)
                    }
                    SystemType::Return => linked.direction == FlowDirection::In,
                    SystemType::Other(_) => false,
                };
                if accepted {
                    return Some(owner);
                }
            }
        }

        None
    }

    /// Trace a chain from `seed`, recording every emitted element in `placement`.
    ///
    /// Returns `None` if the seed itself was already placed.
    pub fn trace<S: PortSource + ?Sized>(
        &self,
        source: &S,
        seed: ElementId,
        placement: &mut Placement,
    ) -> Option<Chain> {
        if placement.contains(seed) {
            tracing::trace!(%seed, "seed already placed, skipping");
            return None;
        }

        placement.place(seed);
        let mut elements = vec![seed];
        let mut current = seed;

        let end = loop {
            let Some(next) = self.next_element(source, current) else {
                break ChainEnd::Exhausted;
            };
            if placement.contains(next) {
                break ChainEnd::AlreadyPlaced;
            }
            if elements.len() >= self.max_steps {
                break ChainEnd::StepBound;
            }
            placement.place(next);
            elements.push(next);
            current = next;
        };

        tracing::debug!(%seed, len = elements.len(), ?end, filter = %self.filter, "chain traced");
        Some(Chain { elements, end })
    }

    /// Trace every seed in order with one shared placement.
    pub fn trace_all<S: PortSource + ?Sized>(
        &self,
        source: &S,
        seeds: &[ElementId],
        placement: &mut Placement,
    ) -> Vec<Chain> {
        seeds
            .iter()
            .filter_map(|&seed| self.trace(source, seed, placement))
            .collect()
    }
}
