//! Flat export records consumed by the tabular writer.

use pt_core::ElementId;
use serde::{Deserialize, Serialize};

/// Column names, in the order writers must emit them.
pub const RECORD_FIELDS: [&str; 11] = [
    "element_id",
    "system",
    "level",
    "branch",
    "track",
    "name",
    "diameter_mm",
    "length_m",
    "volume",
    "classification",
    "key",
];

/// One (branch, track) position. Field order is part of the export contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub element_id: ElementId,
    pub system: String,
    pub level: String,
    pub branch: usize,
    pub track: usize,
    pub name: String,
    pub diameter_mm: f64,
    pub length_m: f64,
    pub volume: String,
    pub classification: String,
    pub key: String,
}

impl ExportRecord {
    /// Field values as text, aligned with [`RECORD_FIELDS`].
    pub fn values(&self) -> [String; 11] {
        [
            self.element_id.to_string(),
            self.system.clone(),
            self.level.clone(),
            self.branch.to_string(),
            self.track.to_string(),
            self.name.clone(),
            format!("{:.1}", self.diameter_mm),
            format!("{:.3}", self.length_m),
            self.volume.clone(),
            self.classification.clone(),
            self.key.clone(),
        ]
    }
}

/// `system-level-branch-track`
pub fn composite_key(system: &str, level: &str, branch: usize, track: usize) -> String {
    format!("{system}-{level}-{branch}-{track}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_key_format() {
        assert_eq!(composite_key("T1", "L1", 0, 2), "T1-L1-0-2");
    }

    #[test]
    fn values_follow_field_order() {
        let record = ExportRecord {
            element_id: ElementId::from_index(310),
            system: "T1".into(),
            level: "L1".into(),
            branch: 1,
            track: 0,
            name: "Pipe".into(),
            diameter_mm: 25.0,
            length_m: 1.5,
            volume: "0.250".into(),
            classification: "primary".into(),
            key: composite_key("T1", "L1", 1, 0),
        };
        let values = record.values();
        assert_eq!(values[0], "310");
        assert_eq!(values[3], "1");
        assert_eq!(values[6], "25.0");
        assert_eq!(values[10], "T1-L1-1-0");
        assert_eq!(values.len(), RECORD_FIELDS.len());
    }
}
