//! Incremental network builder.

use std::collections::{HashMap, HashSet};

use pt_core::{ElementId, PortId, Real};

use crate::error::GraphResult;
use crate::model::{AttrValue, Domain, Element, ElementCategory, FlowDirection, Port, SystemType};
use crate::network::Network;
use crate::validate;

/// Port attributes supplied when adding a port through the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct PortSpec {
    pub domain: Domain,
    pub direction: FlowDirection,
    pub system_type: SystemType,
    pub flow: Real,
}

impl PortSpec {
    /// A piping-domain port.
    pub fn piping(direction: FlowDirection, system_type: SystemType, flow: Real) -> Self {
        Self {
            domain: Domain::Piping,
            direction,
            system_type,
            flow,
        }
    }

    /// Same port in another domain.
    pub fn in_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }
}

/// Builder for constructing a network incrementally.
///
/// Use `add_element`, `add_port` and `link` to build up the network,
/// then call `build()` to validate and freeze it into an immutable `Network`.
/// Explicit-id variants (`insert_element`, `insert_port`) exist for loaders
/// that carry host ids.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    elements: Vec<Element>,
    ports: Vec<Port>,
    links: Vec<(PortId, PortId)>,
    next_element_id: u32,
    next_port_id: u32,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element and return its ID.
    pub fn add_element(&mut self, name: impl Into<String>, category: ElementCategory) -> ElementId {
        let id = allocate(&mut self.next_element_id, self.elements.iter().map(|e| e.id));
        self.elements.push(Element::new(id, name, category));
        id
    }

    /// Add an element that already carries a host id.
    pub fn insert_element(&mut self, element: Element) {
        self.next_element_id = self.next_element_id.max(element.id.index().saturating_add(1));
        self.elements.push(element);
    }

    /// Add a port owned by `owner` and register it on the owner.
    pub fn add_port(&mut self, owner: ElementId, spec: PortSpec) -> PortId {
        let id = self.push_port(Some(owner), spec);
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == owner) {
            element.ports.get_or_insert_with(Vec::new).push(id);
        }
        id
    }

    /// Add a port whose owner the host could not resolve.
    pub fn add_orphan_port(&mut self, spec: PortSpec) -> PortId {
        self.push_port(None, spec)
    }

    /// Add a port that already carries a host id. Owner port lists are not touched.
    pub fn insert_port(&mut self, port: Port) {
        self.next_port_id = self.next_port_id.max(port.id.index().saturating_add(1));
        self.ports.push(port);
    }

    /// Physically join two ports. The relation is made symmetric on `build()`.
    pub fn link(&mut self, a: PortId, b: PortId) {
        self.links.push((a, b));
    }

    /// Set a named attribute on an element (no-op for unknown elements).
    pub fn set_attribute(
        &mut self,
        element: ElementId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) {
        if let Some(e) = self.elements.iter_mut().find(|e| e.id == element) {
            e.attributes.insert(key.into(), value.into());
        }
    }

    /// Build and validate the network, returning an immutable `Network`.
    pub fn build(mut self) -> GraphResult<Network> {
        validate::validate_structure(&self.elements, &self.ports)?;

        let port_slots = Self::slots(self.ports.iter().map(|p| p.id));

        // Links requested through the builder plus links carried by inserted ports
        let mut pairs = std::mem::take(&mut self.links);
        pairs.extend(
            self.ports
                .iter()
                .flat_map(|p| p.links.iter().map(move |&l| (p.id, l))),
        );
        validate::validate_links(&pairs, &port_slots)?;

        // Symmetrize, then keep each link list sorted and distinct
        for (a, b) in pairs {
            self.ports[port_slots[&a]].links.push(b);
            self.ports[port_slots[&b]].links.push(a);
        }
        for port in &mut self.ports {
            port.links.sort();
            port.links.dedup();
        }

        let element_slots = Self::slots(self.elements.iter().map(|e| e.id));
        tracing::debug!(
            elements = self.elements.len(),
            ports = self.ports.len(),
            "network built"
        );

        Ok(Network {
            elements: self.elements,
            ports: self.ports,
            element_slots,
            port_slots,
        })
    }

    fn push_port(&mut self, owner: Option<ElementId>, spec: PortSpec) -> PortId {
        let id = allocate(&mut self.next_port_id, self.ports.iter().map(|p| p.id));
        self.ports.push(Port {
            id,
            owner,
            domain: spec.domain,
            direction: spec.direction,
            system_type: spec.system_type,
            flow: spec.flow,
            links: Vec::new(),
        });
        id
    }

    fn slots<I: Iterator<Item = pt_core::Id>>(ids: I) -> HashMap<pt_core::Id, usize> {
        ids.enumerate().map(|(slot, id)| (id, slot)).collect()
    }
}

/// Next automatic id. Once the counter runs past the id range (after an
/// explicit id near `u32::MAX`), the lowest id not yet in use is handed out.
fn allocate<I: Iterator<Item = pt_core::Id>>(next: &mut u32, used: I) -> pt_core::Id {
    if let Ok(id) = pt_core::Id::try_from_index(*next, "auto id") {
        *next += 1;
        return id;
    }
    let used: HashSet<u32> = used.map(|id| id.index()).collect();
    // One of 0..=used.len() is always free
    let free = (0..=used.len() as u32)
        .find(|i| !used.contains(i))
        .unwrap_or_default();
    pt_core::Id::from_index(free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PortSource;

    fn supply(direction: FlowDirection) -> PortSpec {
        PortSpec::piping(direction, SystemType::Supply, 1.0)
    }

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let e1 = builder.add_element("E1", ElementCategory::Pipe);
        let e2 = builder.add_element("E2", ElementCategory::Pipe);
        let p1 = builder.add_port(e1, supply(FlowDirection::Out));

        assert_eq!(e1.index(), 0);
        assert_eq!(e2.index(), 1);
        assert_eq!(p1.index(), 0);
        assert_eq!(builder.elements[0].ports, Some(vec![p1]));
    }

    #[test]
    fn links_are_symmetric_after_build() {
        let mut builder = NetworkBuilder::new();
        let e1 = builder.add_element("E1", ElementCategory::Pipe);
        let e2 = builder.add_element("E2", ElementCategory::Pipe);
        let a = builder.add_port(e1, supply(FlowDirection::Out));
        let b = builder.add_port(e2, supply(FlowDirection::In));
        builder.link(a, b);
        builder.link(b, a);

        let network = builder.build().unwrap();
        assert_eq!(network.port(a).unwrap().links, vec![b]);
        assert_eq!(network.port(b).unwrap().links, vec![a]);
    }

    #[test]
    fn inserted_port_links_are_mirrored() {
        let mut builder = NetworkBuilder::new();
        let e1 = builder.add_element("E1", ElementCategory::Pipe);
        let e2 = builder.add_element("E2", ElementCategory::Pipe);
        let b = builder.add_port(e2, supply(FlowDirection::In));
        let a = PortId::from_index(10);
        builder.insert_port(Port {
            id: a,
            owner: Some(e1),
            domain: Domain::Piping,
            direction: FlowDirection::Out,
            system_type: SystemType::Supply,
            flow: 1.0,
            links: vec![b],
        });
        builder.elements[0].ports = Some(vec![a]);

        let network = builder.build().unwrap();
        assert_eq!(network.port(b).unwrap().links, vec![a]);
    }

    #[test]
    fn insert_element_advances_auto_ids() {
        let mut builder = NetworkBuilder::new();
        builder.insert_element(Element::new(
            ElementId::from_index(41),
            "Host",
            ElementCategory::Equipment,
        ));
        let next = builder.add_element("Next", ElementCategory::Pipe);
        assert_eq!(next.index(), 42);
    }

    #[test]
    fn auto_ids_survive_an_explicit_id_at_the_top_of_the_range() {
        let mut builder = NetworkBuilder::new();
        let top = ElementId::from_index(u32::MAX - 1);
        builder.insert_element(Element::new(top, "Host", ElementCategory::Equipment));

        let first = builder.add_element("A", ElementCategory::Pipe);
        let second = builder.add_element("B", ElementCategory::Pipe);
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);

        let port = builder.add_port(first, supply(FlowDirection::Out));
        let network = builder.build().unwrap();
        assert_eq!(network.elements().len(), 3);
        assert_eq!(network.port(port).unwrap().owner, Some(first));
    }

    #[test]
    fn link_to_missing_port_is_rejected() {
        let mut builder = NetworkBuilder::new();
        let e1 = builder.add_element("E1", ElementCategory::Pipe);
        let a = builder.add_port(e1, supply(FlowDirection::Out));
        builder.link(a, PortId::from_index(77));
        assert!(builder.build().is_err());
    }
}
