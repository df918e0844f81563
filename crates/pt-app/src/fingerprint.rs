//! Content-based hashing of export results.

use pt_branch::ExportRecord;
use sha2::{Digest, Sha256};

/// Hex SHA-256 over the serialized records and the system they were exported for.
///
/// Identical networks and requests always produce the same id.
pub fn compute_export_id(system: &str, records: &[ExportRecord]) -> String {
    let mut hasher = Sha256::new();

    hasher.update(system.as_bytes());

    let records_json = serde_json::to_string(records).unwrap_or_default();
    hasher.update(records_json.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
