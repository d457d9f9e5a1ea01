//! Provenance and schema descriptors attached to pipeline reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information describing the upload a report was derived from.
///
/// Deliberately carries no timestamps so reruns stay byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Hex SHA-256 of the raw input bytes.
    pub input_hash: String,
    /// Decoder used for the input (`csv` or `json`).
    pub input_format: String,
    /// Number of rows in the normalized table.
    pub row_count: usize,
    /// Schema version of the report payload.
    pub schema_version: SchemaVersion,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
