//! CSV renderings of the result sets.

use std::path::Path;

use marquee_core::{MarqueeError, MovieRecord};
use marquee_ingest::{render_list, render_number, write_rows_csv};
use marquee_rank::{ActivityEntry, DirectorView, GrossEntry, ScreentimeEntry};

const PATIENCE_HEADER: [&str; 7] = [
    "title",
    "year",
    "duration",
    "ratingValue",
    "ratingCount",
    "directorList",
    "castList",
];

const DIRECTOR_HEADER: [&str; 7] = [
    "title",
    "year",
    "duration",
    "ratingValue",
    "ratingCount",
    "director",
    "castList",
];

pub fn write_patience(path: &Path, rows: &[MovieRecord]) -> Result<(), MarqueeError> {
    write_rows_csv(
        path,
        &PATIENCE_HEADER,
        rows.iter().map(|record| {
            vec![
                record.title.clone().unwrap_or_default(),
                render_number(record.year),
                render_number(record.duration),
                render_number(record.rating_value),
                render_number(record.rating_count),
                render_list(&record.director_list),
                render_list(&record.cast_list),
            ]
        }),
    )
}

pub fn write_director(path: &Path, view: &DirectorView) -> Result<(), MarqueeError> {
    write_rows_csv(
        path,
        &DIRECTOR_HEADER,
        view.rows.iter().map(|row| {
            vec![
                row.record.title.clone().unwrap_or_default(),
                render_number(row.record.year),
                render_number(row.record.duration),
                render_number(row.record.rating_value),
                render_number(row.record.rating_count),
                row.entity.clone(),
                render_list(&row.record.cast_list),
            ]
        }),
    )
}

pub fn write_screentime(path: &Path, entries: &[ScreentimeEntry]) -> Result<(), MarqueeError> {
    write_rows_csv(
        path,
        &["rank", "actor", "total_duration"],
        entries.iter().map(|e| {
            vec![
                e.rank.to_string(),
                e.actor.clone(),
                render_number(e.total_duration),
            ]
        }),
    )
}

pub fn write_activity(path: &Path, entries: &[ActivityEntry]) -> Result<(), MarqueeError> {
    write_rows_csv(
        path,
        &["rank", "actor", "movie_count"],
        entries
            .iter()
            .map(|e| vec![e.rank.to_string(), e.actor.clone(), e.movie_count.to_string()]),
    )
}

pub fn write_gross(path: &Path, entries: &[GrossEntry]) -> Result<(), MarqueeError> {
    write_rows_csv(
        path,
        &["rank", "actor", "total_gross"],
        entries.iter().map(|e| {
            vec![
                e.rank.to_string(),
                e.actor.clone(),
                render_number(e.total_gross),
            ]
        }),
    )
}
