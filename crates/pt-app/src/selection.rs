//! Element selection by system name.
//!
//! These mirror the pickers of the editor add-in: listing systems, finding
//! seed pipes per system, and gathering the members of a system.

use pt_core::{ElementId, Real};
use pt_graph::{AttributeSource, ElementCategory, Network};

/// The highest-flow pipe of one system.
#[derive(Debug, Clone, PartialEq)]
pub struct StartPipe {
    pub system: String,
    pub element: ElementId,
    /// Flow in m³/s, 0 when the pipe carries no flow attribute.
    pub flow: Real,
}

fn text_attr(network: &Network, id: ElementId, key: &str) -> Option<String> {
    network.attribute(id, key).and_then(|v| v.as_text())
}

fn tagged<'a>(
    network: &'a Network,
    category: ElementCategory,
    tag_key: &'a str,
    filter: &'a str,
) -> impl Iterator<Item = ElementId> + 'a {
    network
        .elements_of(category)
        .filter(move |e| {
            text_attr(network, e.id, tag_key).is_some_and(|tag| tag.contains(filter))
        })
        .map(|e| e.id)
}

/// Distinct system labels carried by pipes, in first-seen order.
pub fn system_names(network: &Network, abbreviation_key: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for pipe in network.elements_of(ElementCategory::Pipe) {
        if let Some(name) = text_attr(network, pipe.id, abbreviation_key) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Equipment whose tag contains `filter`.
pub fn equipment_in_system(network: &Network, tag_key: &str, filter: &str) -> Vec<ElementId> {
    tagged(network, ElementCategory::Equipment, tag_key, filter).collect()
}

/// Equipment, then pipes, whose tag contains `filter`.
pub fn elements_in_system(network: &Network, tag_key: &str, filter: &str) -> Vec<ElementId> {
    let mut ids = equipment_in_system(network, tag_key, filter);
    ids.extend(tagged(network, ElementCategory::Pipe, tag_key, filter));
    ids
}

/// Network containers whose name contains `filter`.
pub fn containers_in_system(network: &Network, filter: &str) -> Vec<ElementId> {
    network
        .elements()
        .iter()
        .filter(|e| e.category.is_container() && e.name.contains(filter))
        .map(|e| e.id)
        .collect()
}

/// One start pipe per distinct tag containing `filter`.
///
/// Pipes are grouped by their exact tag; each group yields its highest-flow
/// pipe, the later pipe winning a tie. Groups keep first-seen order.
pub fn start_pipes(
    network: &Network,
    tag_key: &str,
    flow_keys: &[String],
    filter: &str,
) -> Vec<StartPipe> {
    let mut starts: Vec<StartPipe> = Vec::new();
    for id in tagged(network, ElementCategory::Pipe, tag_key, filter) {
        let system = text_attr(network, id, tag_key).unwrap_or_default();
        let flow = flow_keys
            .iter()
            .filter_map(|k| network.attribute(id, k))
            .filter_map(|v| v.as_number())
            .find(|v| v.is_finite())
            .unwrap_or(0.0);

        match starts.iter_mut().find(|s| s.system == system) {
            Some(best) if flow >= best.flow => {
                best.element = id;
                best.flow = flow;
            }
            Some(_) => {}
            None => starts.push(StartPipe {
                system,
                element: id,
                flow,
            }),
        }
    }
    tracing::debug!(filter, groups = starts.len(), "start pipes selected");
    starts
}
