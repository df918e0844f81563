//! Host capability traits.
//!
//! The traversal core only ever talks to the host through these two traits.
//! A host adapter needs `element` and `port`; the port enumeration helpers
//! have default implementations that pin a deterministic (ascending id) order.

use pt_core::{ElementId, PortId};

use crate::model::{AttrValue, Element, Port};

/// Read access to elements and their ports.
pub trait PortSource {
    /// Look up an element; `None` if the host doesn't know it.
    fn element(&self, id: ElementId) -> Option<&Element>;

    /// Look up a port.
    fn port(&self, id: PortId) -> Option<&Port>;

    /// Ports of an element in ascending port-id order.
    ///
    /// `None` when the element is unknown or has no port collection.
    fn ports(&self, element: ElementId) -> Option<Vec<&Port>> {
        let ids = self.element(element)?.ports.as_ref()?;
        let mut ports: Vec<&Port> = ids.iter().filter_map(|&id| self.port(id)).collect();
        ports.sort_by_key(|p| p.id);
        Some(ports)
    }

    /// Ports joined to `port`, in ascending port-id order.
    fn linked_ports(&self, port: &Port) -> Vec<&Port> {
        let mut linked: Vec<&Port> = port.links.iter().filter_map(|&id| self.port(id)).collect();
        linked.sort_by_key(|p| p.id);
        linked
    }

    /// True if `id` is a network-container (system) element.
    fn is_container(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(|e| e.category.is_container())
    }
}

/// Read access to named element attributes.
pub trait AttributeSource {
    fn attribute(&self, element: ElementId, key: &str) -> Option<AttrValue>;
}

impl<T: PortSource + ?Sized> PortSource for &T {
    fn element(&self, id: ElementId) -> Option<&Element> {
        (**self).element(id)
    }

    fn port(&self, id: PortId) -> Option<&Port> {
        (**self).port(id)
    }

    fn ports(&self, element: ElementId) -> Option<Vec<&Port>> {
        (**self).ports(element)
    }

    fn linked_ports(&self, port: &Port) -> Vec<&Port> {
        (**self).linked_ports(port)
    }

    fn is_container(&self, id: ElementId) -> bool {
        (**self).is_container(id)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, element: ElementId, key: &str) -> Option<AttrValue> {
        (**self).attribute(element, key)
    }
}
