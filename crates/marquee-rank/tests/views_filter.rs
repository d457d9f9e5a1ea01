use marquee_core::{MovieRecord, Table};
use marquee_rank::{director_view, patience_view};

fn movie(title: &str, year: Option<f64>, duration: Option<f64>, directors: &[&str]) -> MovieRecord {
    MovieRecord {
        title: Some(title.into()),
        year,
        duration,
        director_list: directors.iter().map(|name| name.to_string()).collect(),
        ..MovieRecord::default()
    }
}

#[test]
fn patience_threshold_is_inclusive() {
    let table = Table::new(vec![
        movie("Exact", None, Some(220.0), &[]),
        movie("Almost", None, Some(219.999), &[]),
        movie("Unknown", None, None, &[]),
        movie("Longest", None, Some(238.0), &[]),
    ]);
    let titles: Vec<&str> = patience_view(&table, 220.0)
        .iter()
        .filter_map(|record| record.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["Longest", "Exact"]);
}

#[test]
fn patience_view_can_be_empty() {
    let table = Table::new(vec![movie("Short", None, Some(90.0), &[])]);
    assert!(patience_view(&table, 220.0).is_empty());
}

#[test]
fn director_match_is_case_insensitive_and_sums_duration() {
    let table = Table::new(vec![
        movie("Jaws", Some(1975.0), Some(124.0), &["steven spielberg"]),
        movie("Heat", Some(1995.0), Some(170.0), &["Michael Mann"]),
        movie("Schindler's List", Some(1993.0), Some(195.0), &["Steven Spielberg"]),
        movie("Co-directed", None, Some(100.0), &["Someone", "STEVEN SPIELBERG"]),
    ]);
    let view = director_view(&table, "Steven Spielberg");
    let titles: Vec<&str> = view
        .rows
        .iter()
        .filter_map(|row| row.record.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["Jaws", "Schindler's List", "Co-directed"]);
    assert_eq!(view.total_duration, Some(419.0));
    assert_eq!(view.total_minutes(), Some(419));
    assert_eq!(view.total_hours_minutes(), Some((6, 59)));
}

#[test]
fn director_total_passes_missing_through() {
    let table = Table::new(vec![movie("Lost", Some(1980.0), None, &["Steven Spielberg"])]);
    let view = director_view(&table, "Steven Spielberg");
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.total_duration, None);
    assert_eq!(view.total_hours_minutes(), None);
}

#[test]
fn unknown_director_yields_empty_view() {
    let table = Table::new(vec![movie("Heat", Some(1995.0), Some(170.0), &["Michael Mann"])]);
    let view = director_view(&table, "Steven Spielberg");
    assert!(view.is_empty());
    assert_eq!(view.total_duration, None);
}
