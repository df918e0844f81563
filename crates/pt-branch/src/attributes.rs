//! Resolution of per-element export attributes.
//!
//! Every lookup walks a list of candidate attribute keys and falls back to a
//! fixed default. A missing attribute never fails an export.

use pt_core::{as_lps, m, m3ps, ElementId, Length, Real, VolumeRate};
use pt_graph::AttributeSource;
use serde::{Deserialize, Serialize};

/// Placeholder exported for missing text attributes.
pub const MISSING_TEXT: &str = "-";

/// Attribute keys consulted for each exported value, in fallback order.
///
/// Numeric attributes are read in SI base units: lengths in metres, flows in
/// cubic metres per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeKeys {
    pub primary_key: String,
    pub length_keys: Vec<String>,
    pub diameter_keys: Vec<String>,
    pub flow_keys: Vec<String>,
    pub level_keys: Vec<String>,
    pub system_keys: Vec<String>,
}

impl Default for AttributeKeys {
    fn default() -> Self {
        let keys = |ks: &[&str]| ks.iter().map(|k| k.to_string()).collect();
        Self {
            primary_key: "calc_start".to_string(),
            length_keys: keys(&["length"]),
            diameter_keys: keys(&["diameter", "outer_diameter"]),
            flow_keys: keys(&["flow"]),
            level_keys: keys(&["level", "reference_level"]),
            system_keys: keys(&["system_abbreviation", "system_name"]),
        }
    }
}

/// Reads export attributes for elements through an [`AttributeSource`].
pub struct AttributeResolver<'a, A: ?Sized> {
    attrs: &'a A,
    keys: &'a AttributeKeys,
}

impl<'a, A: AttributeSource + ?Sized> AttributeResolver<'a, A> {
    pub fn new(attrs: &'a A, keys: &'a AttributeKeys) -> Self {
        Self { attrs, keys }
    }

    /// First key yielding a finite number.
    pub fn number(&self, id: ElementId, keys: &[String]) -> Option<Real> {
        keys.iter()
            .filter_map(|k| self.attrs.attribute(id, k))
            .filter_map(|v| v.as_number())
            .find(|v| v.is_finite())
    }

    /// First key yielding non-blank text.
    pub fn text(&self, id: ElementId, keys: &[String]) -> Option<String> {
        keys.iter()
            .filter_map(|k| self.attrs.attribute(id, k))
            .find_map(|v| v.as_text())
    }

    pub fn length(&self, id: ElementId) -> Length {
        m(self.number(id, &self.keys.length_keys).unwrap_or(0.0))
    }

    pub fn diameter(&self, id: ElementId) -> Length {
        m(self.number(id, &self.keys.diameter_keys).unwrap_or(0.0))
    }

    pub fn flow(&self, id: ElementId) -> Option<VolumeRate> {
        self.number(id, &self.keys.flow_keys).map(m3ps)
    }

    /// Flow rendered in l/s with three decimals, or `-`.
    pub fn volume_label(&self, id: ElementId) -> String {
        match self.flow(id) {
            Some(q) => format!("{:.3}", as_lps(q)),
            None => MISSING_TEXT.to_string(),
        }
    }

    pub fn level(&self, id: ElementId) -> String {
        self.text(id, &self.keys.level_keys)
            .unwrap_or_else(|| MISSING_TEXT.to_string())
    }

    pub fn system(&self, id: ElementId) -> String {
        self.text(id, &self.keys.system_keys)
            .unwrap_or_else(|| MISSING_TEXT.to_string())
    }

    /// Whether the element carries the primary-calculation-start marker.
    pub fn is_primary(&self, id: ElementId) -> bool {
        self.attrs
            .attribute(id, &self.keys.primary_key)
            .is_some_and(|v| v.as_flag())
    }
}
