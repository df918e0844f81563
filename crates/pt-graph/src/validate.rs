//! Network validation logic.

use std::collections::{HashMap, HashSet};

use pt_core::{ensure_finite, ElementId, PortId};

use crate::error::{GraphError, GraphResult};
use crate::model::{Element, Port};

/// Validate ids and ownership: every reference exists and agrees.
pub(crate) fn validate_structure(elements: &[Element], ports: &[Port]) -> GraphResult<()> {
    let mut element_ids: HashSet<ElementId> = HashSet::new();
    for element in elements {
        if !element_ids.insert(element.id) {
            return Err(GraphError::DuplicateElement {
                element: element.id,
            });
        }
    }

    let mut owners: HashMap<PortId, Option<ElementId>> = HashMap::new();
    for port in ports {
        if owners.insert(port.id, port.owner).is_some() {
            return Err(GraphError::DuplicatePort { port: port.id });
        }
        if ensure_finite(port.flow, "port flow").is_err() {
            return Err(GraphError::NonFiniteFlow {
                port: port.id,
                value: port.flow,
            });
        }
        // Each owned port must reference an existing element
        if let Some(owner) = port.owner {
            if !element_ids.contains(&owner) {
                return Err(GraphError::UnknownOwner {
                    port: port.id,
                    owner,
                });
            }
        }
    }

    // Each listed port must exist and point back at the element listing it
    for element in elements {
        for &port_id in element.ports.iter().flatten() {
            match owners.get(&port_id) {
                None => {
                    return Err(GraphError::UnknownPort {
                        element: element.id,
                        port: port_id,
                    });
                }
                Some(&owner) if owner != Some(element.id) => {
                    return Err(GraphError::PortOwnerMismatch {
                        element: element.id,
                        port: port_id,
                        actual: owner,
                    });
                }
                Some(_) => {}
            }
        }
    }

    // Each owned port must be listed by its owner
    let listed: HashSet<(ElementId, PortId)> = elements
        .iter()
        .flat_map(|e| e.ports.iter().flatten().map(move |&p| (e.id, p)))
        .collect();
    for port in ports {
        if let Some(owner) = port.owner {
            if !listed.contains(&(owner, port.id)) {
                return Err(GraphError::UnlistedPort {
                    port: port.id,
                    owner,
                });
            }
        }
    }

    Ok(())
}

/// Validate physical joints: both ends exist and differ.
pub(crate) fn validate_links(
    links: &[(PortId, PortId)],
    port_slots: &HashMap<PortId, usize>,
) -> GraphResult<()> {
    for &(a, b) in links {
        if a == b {
            return Err(GraphError::SelfLink { port: a });
        }
        if !port_slots.contains_key(&a) {
            return Err(GraphError::DanglingLink { port: b, target: a });
        }
        if !port_slots.contains_key(&b) {
            return Err(GraphError::DanglingLink { port: a, target: b });
        }
    }
    Ok(())
}
