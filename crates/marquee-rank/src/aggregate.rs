//! Per-actor aggregation and top-N rankings.

use std::cmp::Ordering;
use std::collections::HashSet;

use indexmap::IndexMap;
use marquee_core::{ListColumn, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::explode::{explode, ExplodedRow};

/// Sum that stays unknown until at least one value is known.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NullableSum(Option<f64>);

impl NullableSum {
    /// Adds a possibly missing value.
    pub fn add(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.0 = Some(self.0.unwrap_or(0.0) + value);
        }
    }

    /// The total, or `None` when every contribution was missing.
    pub fn value(self) -> Option<f64> {
        self.0
    }
}

impl FromIterator<Option<f64>> for NullableSum {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        let mut sum = NullableSum::default();
        for value in iter {
            sum.add(value);
        }
        sum
    }
}

/// Descending order with missing values last.
pub fn descending_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// One row of the screentime ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreentimeEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Trimmed actor name.
    pub actor: String,
    /// Summed duration in minutes; `None` when every duration was missing.
    pub total_duration: Option<f64>,
}

/// One row of the activity ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Trimmed actor name.
    pub actor: String,
    /// Distinct non-null titles the actor appears in.
    pub movie_count: usize,
}

/// One row of the gross ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Trimmed actor name.
    pub actor: String,
    /// Summed gross; `None` when every gross was missing.
    pub total_gross: Option<f64>,
}

/// The three actor rankings derived from one table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorRankings {
    /// Actors by total minutes on screen.
    pub screentime: Vec<ScreentimeEntry>,
    /// Actors by number of distinct movies.
    pub activity: Vec<ActivityEntry>,
    /// Actors by total box-office gross.
    pub gross: Vec<GrossEntry>,
}

impl ActorRankings {
    /// True when no actor could be ranked at all.
    pub fn is_empty(&self) -> bool {
        self.screentime.is_empty() && self.activity.is_empty() && self.gross.is_empty()
    }
}

#[derive(Debug, Default)]
struct ActorGroup<'a> {
    duration: NullableSum,
    gross: NullableSum,
    titles: HashSet<&'a str>,
}

/// Groups exploded rows by trimmed entity, in first-encounter order.
/// Empty entities are not grouped.
fn group_rows<'a>(rows: &[ExplodedRow<'a>]) -> IndexMap<&'a str, ActorGroup<'a>> {
    let mut groups: IndexMap<&'a str, ActorGroup<'a>> = IndexMap::new();
    for row in rows {
        let actor = row.entity.trim();
        if actor.is_empty() {
            continue;
        }
        let group = groups.entry(actor).or_default();
        group.duration.add(row.record.duration);
        group.gross.add(row.record.gross);
        if let Some(title) = row.record.title.as_deref() {
            group.titles.insert(title);
        }
    }
    groups
}

/// Stable descending sort on `metric`, truncated to `top_n`, ranked from 1.
fn top_ranked<T, F>(mut entries: Vec<(&str, T)>, top_n: usize, metric: F) -> Vec<(usize, String, T)>
where
    F: Fn(&T) -> Option<f64>,
{
    entries.sort_by(|a, b| descending_nulls_last(metric(&a.1), metric(&b.1)));
    entries
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, (actor, value))| (idx + 1, actor.to_string(), value))
        .collect()
}

/// Ranks the actors of already exploded cast rows.
pub fn rank_exploded(rows: &[ExplodedRow<'_>], top_n: usize) -> ActorRankings {
    let groups = group_rows(rows);
    debug!(rows = rows.len(), actors = groups.len(), "grouped cast rows");

    let screentime: Vec<ScreentimeEntry> = top_ranked(
        groups.iter().map(|(a, g)| (*a, g.duration.value())).collect(),
        top_n,
        |total| *total,
    )
    .into_iter()
    .map(|(rank, actor, total_duration)| ScreentimeEntry {
        rank,
        actor,
        total_duration,
    })
    .collect();

    let activity: Vec<ActivityEntry> = top_ranked(
        groups.iter().map(|(a, g)| (*a, g.titles.len())).collect(),
        top_n,
        |count| Some(*count as f64),
    )
    .into_iter()
    .map(|(rank, actor, movie_count)| ActivityEntry {
        rank,
        actor,
        movie_count,
    })
    .collect();

    let gross: Vec<GrossEntry> = top_ranked(
        groups.iter().map(|(a, g)| (*a, g.gross.value())).collect(),
        top_n,
        |total| *total,
    )
    .into_iter()
    .map(|(rank, actor, total_gross)| GrossEntry {
        rank,
        actor,
        total_gross,
    })
    .collect();

    ActorRankings {
        screentime,
        activity,
        gross,
    }
}

/// Explodes the cast column and ranks actors by screentime, activity and gross.
pub fn rank_actors(table: &Table, top_n: usize) -> ActorRankings {
    rank_exploded(&explode(table, ListColumn::CastList), top_n)
}
