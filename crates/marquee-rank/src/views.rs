//! Filtered views: long movies and a single director's filmography.

use std::cmp::Ordering;

use marquee_core::{ListColumn, MovieRecord, Table};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{descending_nulls_last, NullableSum};
use crate::explode::{explode, EntityRow};

/// Movies with a known duration of at least `min_duration`, longest first.
pub fn patience_view(table: &Table, min_duration: f64) -> Vec<&MovieRecord> {
    let mut rows: Vec<&MovieRecord> = table
        .iter()
        .filter(|record| record.duration.is_some_and(|minutes| minutes >= min_duration))
        .collect();
    rows.sort_by(|a, b| descending_nulls_last(a.duration, b.duration));
    rows
}

fn ascending_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Movies credited to one director plus their summed duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorView {
    /// Director name as requested.
    pub director: String,
    /// Matching exploded rows, ordered by year (unknown years last).
    pub rows: Vec<EntityRow>,
    /// Summed duration; `None` when no matching row has a duration.
    pub total_duration: Option<f64>,
}

impl DirectorView {
    /// True when the director has no movies in the table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total duration truncated to whole minutes.
    pub fn total_minutes(&self) -> Option<i64> {
        self.total_duration.map(|total| total.trunc() as i64)
    }

    /// `(hours, minutes)` split of [`DirectorView::total_minutes`].
    pub fn total_hours_minutes(&self) -> Option<(i64, i64)> {
        self.total_minutes()
            .map(|minutes| (minutes.div_euclid(60), minutes.rem_euclid(60)))
    }
}

/// Explodes the director column and keeps rows whose director matches
/// `director` case-insensitively.
pub fn director_view(table: &Table, director: &str) -> DirectorView {
    let target = director.to_lowercase();
    let mut matches: Vec<_> = explode(table, ListColumn::DirectorList)
        .into_iter()
        .filter(|row| row.entity.to_lowercase() == target)
        .collect();
    let total_duration = matches
        .iter()
        .map(|row| row.record.duration)
        .collect::<NullableSum>()
        .value();
    matches.sort_by(|a, b| ascending_nulls_last(a.record.year, b.record.year));
    debug!(director, rows = matches.len(), "built director view");
    DirectorView {
        director: director.to_string(),
        rows: matches.iter().map(|row| row.to_entity_row()).collect(),
        total_duration,
    }
}
