//! Network file schema definitions.

use std::collections::BTreeMap;

use pt_branch::AttributeKeys;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
    #[serde(default)]
    pub ports: Vec<PortDef>,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementDef {
    pub id: u32,
    pub name: String,
    pub category: CategoryDef,
    /// Omitted for kinds the host gives no port collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, AttrDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryDef {
    Pipe,
    Fitting,
    Accessory,
    Equipment,
    Connector,
    System,
    Other,
}

/// Attribute value as written in the file; booleans are tried before numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttrDef {
    Flag(bool),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortDef {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<u32>,
    #[serde(default)]
    pub domain: DomainDef,
    pub direction: DirectionDef,
    #[serde(default)]
    pub system_type: String,
    #[serde(default)]
    pub flow: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<u32>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DomainDef {
    Undefined,
    #[default]
    Piping,
    Hvac,
    Electrical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DirectionDef {
    In,
    Out,
    Bidirectional,
}

/// Export configuration carried with the network snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    /// Attribute compared by the network walker.
    pub tag_key: String,
    /// Attribute holding the short system label used to list systems.
    pub abbreviation_key: String,
    #[serde(flatten)]
    pub attributes: AttributeKeys,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            tag_key: "system_name".to_string(),
            abbreviation_key: "system_abbreviation".to_string(),
            attributes: AttributeKeys::default(),
        }
    }
}
