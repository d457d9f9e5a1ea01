//! End-to-end pipeline and the report it produces.

use std::collections::BTreeMap;

use marquee_core::{MarqueeError, MovieRecord, RawTable, RunProvenance, SchemaVersion, Table};
use marquee_ingest::{coerce_table, LoadedInput};
use serde::Serialize;
use tracing::info;

use crate::aggregate::{rank_actors, ActorRankings};
use crate::hash::stable_hash_string;
use crate::options::AnalysisOptions;
use crate::views::{director_view, patience_view, DirectorView};

/// Schema version of serialized [`AnalysisReport`] payloads.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// All result sets derived from one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Where the table came from, when it was loaded from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<RunProvenance>,
    /// Options the views were computed with.
    pub options: AnalysisOptions,
    /// The normalized table.
    pub table: Table,
    /// Movies at or above the patience threshold, longest first.
    pub patience: Vec<MovieRecord>,
    /// The configured director's movies and their total duration.
    pub director: DirectorView,
    /// Top-N actor rankings.
    pub actors: ActorRankings,
}

/// Runs validate, coerce, explode, aggregate and filter over a raw table.
///
/// Fails only on invalid options or missing columns; every per-cell anomaly
/// is absorbed into null or empty values.
pub fn analyze(raw: &RawTable, opts: &AnalysisOptions) -> Result<AnalysisReport, MarqueeError> {
    opts.validate()?;
    let table = coerce_table(raw)?;
    analyze_table(table, opts)
}

/// Builds every derived view over an already normalized table.
pub fn analyze_table(table: Table, opts: &AnalysisOptions) -> Result<AnalysisReport, MarqueeError> {
    opts.validate()?;
    let patience: Vec<MovieRecord> = patience_view(&table, opts.patience_min_duration)
        .into_iter()
        .cloned()
        .collect();
    let director = director_view(&table, &opts.director);
    let actors = rank_actors(&table, opts.top_n);
    info!(
        rows = table.len(),
        patience = patience.len(),
        director_rows = director.rows.len(),
        ranked_actors = actors.screentime.len(),
        "analysis complete"
    );
    Ok(AnalysisReport {
        provenance: None,
        options: opts.clone(),
        table,
        patience,
        director,
        actors,
    })
}

/// Like [`analyze`] but also records provenance for a decoded file.
pub fn analyze_loaded(
    loaded: &LoadedInput,
    opts: &AnalysisOptions,
) -> Result<AnalysisReport, MarqueeError> {
    let mut report = analyze(&loaded.table, opts)?;
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    report.provenance = Some(RunProvenance {
        input_hash: loaded.input_hash.clone(),
        input_format: loaded.format.as_str().to_string(),
        row_count: report.table.len(),
        schema_version: REPORT_SCHEMA,
        tool_versions,
    });
    Ok(report)
}

/// Hex SHA-256 of the report's canonical JSON; equal for equal inputs.
pub fn report_digest(report: &AnalysisReport) -> Result<String, MarqueeError> {
    stable_hash_string(report)
}
