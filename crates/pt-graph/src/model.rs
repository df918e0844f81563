//! Port and element value types.
//!
//! These are read-only views of what the host model exposes for one run.
//! Nothing here is derived: adjacency lives in [`crate::node`].

use std::collections::BTreeMap;
use std::fmt;

use pt_core::{ElementId, PortId, Real};

/// Physical domain of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Not classified; never takes part in adjacency.
    Undefined,
    Piping,
    Hvac,
    Electrical,
}

impl Domain {
    /// Domains that carry fluid and can be followed by the chain tracer.
    pub fn is_fluid(self) -> bool {
        matches!(self, Domain::Piping | Domain::Hvac)
    }
}

/// Flow direction of a port, as seen from its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowDirection {
    In,
    Out,
    Bidirectional,
}

impl FlowDirection {
    /// True for ports that can feed flow into whatever they are joined to.
    pub fn is_outward(self) -> bool {
        matches!(self, FlowDirection::Out | FlowDirection::Bidirectional)
    }
}

/// System-type tag used to select which ports a traversal follows.
///
/// `supply` and `return` drive the tracer's flow polarity; any other tag is
/// kept verbatim so it can still be matched for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SystemType {
    Supply,
    Return,
    Other(String),
}

impl SystemType {
    pub fn as_str(&self) -> &str {
        match self {
            SystemType::Supply => "supply",
            SystemType::Return => "return",
            SystemType::Other(tag) => tag,
        }
    }
}

impl From<&str> for SystemType {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "supply" => SystemType::Supply,
            "return" => SystemType::Return,
            _ => SystemType::Other(tag.trim().to_string()),
        }
    }
}

impl From<String> for SystemType {
    fn from(tag: String) -> Self {
        SystemType::from(tag.as_str())
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad element kind reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Pipe,
    Fitting,
    Accessory,
    Equipment,
    /// Virtual connection point (e.g. an open pipe end used as a seed).
    Connector,
    /// Network container: the aggregate system object, not a physical part.
    System,
    Other,
}

impl ElementCategory {
    pub fn is_container(self) -> bool {
        self == ElementCategory::System
    }

    /// Whether the host resolves a port collection for this kind.
    pub fn has_ports(self) -> bool {
        !matches!(self, ElementCategory::System | ElementCategory::Other)
    }
}

/// Typed value of a named element attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(Real),
    Text(String),
    Flag(bool),
}

impl AttrValue {
    /// Numeric view; text is parsed leniently, flags are 0/1.
    pub fn as_number(&self) -> Option<Real> {
        match self {
            AttrValue::Number(v) => Some(*v),
            AttrValue::Text(s) => s.trim().replace(',', ".").parse().ok(),
            AttrValue::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Text view; returns `None` for blank text.
    pub fn as_text(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) if s.trim().is_empty() => None,
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Number(v) => Some(v.to_string()),
            AttrValue::Flag(b) => Some(b.to_string()),
        }
    }

    /// Boolean-like view: `true`/`yes`/`1` text, non-zero numbers.
    pub fn as_flag(&self) -> bool {
        match self {
            AttrValue::Flag(b) => *b,
            AttrValue::Number(v) => *v != 0.0,
            AttrValue::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "1" | "y"
            ),
        }
    }
}

impl From<Real> for AttrValue {
    fn from(v: Real) -> Self {
        AttrValue::Number(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Flag(v)
    }
}

/// A connection point on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub id: PortId,
    /// Owning element; `None` when the host cannot resolve it.
    pub owner: Option<ElementId>,
    pub domain: Domain,
    pub direction: FlowDirection,
    pub system_type: SystemType,
    pub flow: Real,
    /// Ports physically joined to this one (kept sorted by id).
    pub links: Vec<PortId>,
}

/// A component instance in the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub category: ElementCategory,
    /// `None` for kinds without a port collection.
    pub ports: Option<Vec<PortId>>,
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Element {
    pub fn new(id: ElementId, name: impl Into<String>, category: ElementCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            ports: category.has_ports().then(Vec::new),
            attributes: BTreeMap::new(),
        }
    }
}
