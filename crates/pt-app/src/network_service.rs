//! Conversion of network files into an in-memory host.

use std::path::Path;

use pt_core::{ElementId, Id, PortId};
use pt_graph::{
    AttrValue, Domain, Element, ElementCategory, FlowDirection, Network, NetworkBuilder, Port,
    SystemType,
};
use pt_project::{
    AttrDef, CategoryDef, DirectionDef, DomainDef, ExportSettings, NetworkFile,
};

use crate::error::AppResult;

/// A network ready for export together with its settings.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    pub name: String,
    pub network: Network,
    pub settings: ExportSettings,
}

/// Load a network file (YAML or JSON) and build its host model.
pub fn load_network(path: &Path) -> AppResult<LoadedNetwork> {
    let file = pt_project::load(path)?;
    let network = build_network(&file)?;
    tracing::info!(
        path = %path.display(),
        elements = network.elements().len(),
        "network loaded"
    );
    Ok(LoadedNetwork {
        name: file.name,
        network,
        settings: file.export,
    })
}

/// Build the in-memory host model described by `file`.
pub fn build_network(file: &NetworkFile) -> AppResult<Network> {
    let mut builder = NetworkBuilder::new();

    for def in &file.elements {
        let mut element = Element::new(element_id(def.id)?, &def.name, category(def.category));
        element.ports = match &def.ports {
            Some(ids) => Some(ids.iter().map(|&p| port_id(p)).collect::<AppResult<Vec<_>>>()?),
            None => None,
        };
        element.attributes = def
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), attr_value(v)))
            .collect();
        builder.insert_element(element);
    }

    for def in &file.ports {
        builder.insert_port(Port {
            id: port_id(def.id)?,
            owner: def.owner.map(element_id).transpose()?,
            domain: domain(def.domain),
            direction: direction(def.direction),
            system_type: SystemType::from(def.system_type.as_str()),
            flow: def.flow,
            links: def.links.iter().map(|&l| port_id(l)).collect::<AppResult<Vec<_>>>()?,
        });
    }

    Ok(builder.build()?)
}

fn element_id(raw: u32) -> AppResult<ElementId> {
    Ok(Id::try_from_index(raw, "element")?)
}

fn port_id(raw: u32) -> AppResult<PortId> {
    Ok(Id::try_from_index(raw, "port")?)
}

fn category(def: CategoryDef) -> ElementCategory {
    match def {
        CategoryDef::Pipe => ElementCategory::Pipe,
        CategoryDef::Fitting => ElementCategory::Fitting,
        CategoryDef::Accessory => ElementCategory::Accessory,
        CategoryDef::Equipment => ElementCategory::Equipment,
        CategoryDef::Connector => ElementCategory::Connector,
        CategoryDef::System => ElementCategory::System,
        CategoryDef::Other => ElementCategory::Other,
    }
}

fn domain(def: DomainDef) -> Domain {
    match def {
        DomainDef::Undefined => Domain::Undefined,
        DomainDef::Piping => Domain::Piping,
        DomainDef::Hvac => Domain::Hvac,
        DomainDef::Electrical => Domain::Electrical,
    }
}

fn direction(def: DirectionDef) -> FlowDirection {
    match def {
        DirectionDef::In => FlowDirection::In,
        DirectionDef::Out => FlowDirection::Out,
        DirectionDef::Bidirectional => FlowDirection::Bidirectional,
    }
}

fn attr_value(def: &AttrDef) -> AttrValue {
    match def {
        AttrDef::Flag(b) => AttrValue::Flag(*b),
        AttrDef::Number(v) => AttrValue::Number(*v),
        AttrDef::Text(s) => AttrValue::Text(s.clone()),
    }
}
