#![deny(missing_docs)]
#![doc = "Exploded views, actor rankings and filtered views over normalized movie tables."]

/// Per-actor aggregation and rankings.
pub mod aggregate;
/// Row explosion over list columns.
pub mod explode;
/// Canonical hashing helpers.
pub mod hash;
/// View tunables.
pub mod options;
/// Pipeline entry points.
pub mod report;
/// Canonical JSON and YAML serde helpers.
pub mod serde;
/// Filtered views.
pub mod views;

pub use aggregate::{
    rank_actors, rank_exploded, ActivityEntry, ActorRankings, GrossEntry, NullableSum,
    ScreentimeEntry,
};
pub use explode::{explode, EntityRow, ExplodedRow};
pub use hash::stable_hash_string;
pub use options::AnalysisOptions;
pub use report::{analyze, analyze_loaded, analyze_table, report_digest, AnalysisReport};
pub use crate::serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
pub use views::{director_view, patience_view, DirectorView};
