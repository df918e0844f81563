//! In-memory host model.

use std::collections::HashMap;

use pt_core::{ElementId, PortId};

use crate::host::{AttributeSource, PortSource};
use crate::model::{AttrValue, Element, ElementCategory, Port};

/// A validated, immutable snapshot of elements and ports.
///
/// Elements and ports are kept in insertion order, which is the order the
/// host enumerated them in. Lookups go through id -> slot maps.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub(crate) elements: Vec<Element>,
    pub(crate) ports: Vec<Port>,
    pub(crate) element_slots: HashMap<ElementId, usize>,
    pub(crate) port_slots: HashMap<PortId, usize>,
}

impl Network {
    /// Return all elements in host order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Return all ports in host order.
    pub fn ports_all(&self) -> &[Port] {
        &self.ports
    }

    /// Elements of a given category, in host order.
    pub fn elements_of(&self, category: ElementCategory) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.category == category)
    }

    /// Look up an element id by its display name (first match).
    pub fn element_by_name(&self, name: &str) -> Option<ElementId> {
        self.elements.iter().find(|e| e.name == name).map(|e| e.id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element_slots.contains_key(&id)
    }
}

impl PortSource for Network {
    fn element(&self, id: ElementId) -> Option<&Element> {
        self.element_slots.get(&id).map(|&slot| &self.elements[slot])
    }

    fn port(&self, id: PortId) -> Option<&Port> {
        self.port_slots.get(&id).map(|&slot| &self.ports[slot])
    }
}

impl AttributeSource for Network {
    fn attribute(&self, element: ElementId, key: &str) -> Option<AttrValue> {
        self.element(element)?.attributes.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{NetworkBuilder, PortSpec};
    use crate::model::{FlowDirection, SystemType};

    #[test]
    fn ports_are_enumerated_by_id() {
        let mut builder = NetworkBuilder::new();
        let pipe = builder.add_element("P", ElementCategory::Pipe);
        let p0 = builder.add_port(pipe, PortSpec::piping(FlowDirection::In, SystemType::Supply, 1.0));
        let p1 = builder.add_port(pipe, PortSpec::piping(FlowDirection::Out, SystemType::Supply, 1.0));
        let network = builder.build().unwrap();

        let ids: Vec<PortId> = network.ports(pipe).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![p0, p1]);
    }

    #[test]
    fn unknown_element_has_no_ports_or_attributes() {
        let network = NetworkBuilder::new().build().unwrap();
        let ghost = ElementId::from_index(99);
        assert!(network.ports(ghost).is_none());
        assert!(network.attribute(ghost, "length").is_none());
        assert!(!network.is_container(ghost));
    }

    #[test]
    fn attributes_are_read_through_the_trait() {
        let mut builder = NetworkBuilder::new();
        let pipe = builder.add_element("P", ElementCategory::Pipe);
        builder.set_attribute(pipe, "length", 2.5);
        let network = builder.build().unwrap();
        assert_eq!(
            network.attribute(pipe, "length"),
            Some(AttrValue::Number(2.5))
        );
        assert_eq!(network.element_by_name("P"), Some(pipe));
    }
}
