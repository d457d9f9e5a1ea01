use marquee_core::{CellValue, MarqueeError, RawTable, EXPECTED_COLUMNS};
use marquee_ingest::{coerce_table, missing_columns, project, to_numeric, validate_columns};

fn cell_for(column: &str) -> CellValue {
    match column {
        "title" => CellValue::text("Gone with the Wind"),
        "duration" => CellValue::text("238"),
        "year" => CellValue::Integer(1939),
        "gross" => CellValue::Float(200_882_193.0),
        "castList" => CellValue::text("['Clark Gable', 'Vivien Leigh']"),
        "directorList" => CellValue::text("Victor Fleming"),
        "genreList" => CellValue::text_list(["Drama", "Romance"]),
        _ => CellValue::Null,
    }
}

fn raw_with(columns: &[&str]) -> RawTable {
    let mut table = RawTable::new(columns.iter().copied());
    table.push_row(columns.iter().map(|column| cell_for(column)).collect());
    table
}

#[test]
fn missing_gross_fails_naming_exactly_gross() {
    let columns: Vec<&str> = EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|column| *column != "gross")
        .collect();
    let raw = raw_with(&columns);
    let err = coerce_table(&raw).expect_err("gross is required");
    match &err {
        MarqueeError::Schema(schema) => assert_eq!(schema.missing, vec!["gross"]),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.missing_columns(), Some(&["gross".to_string()][..]));
}

#[test]
fn missing_columns_follow_canonical_order() {
    let raw = raw_with(&["directorList", "url"]);
    let missing = missing_columns(&raw, &EXPECTED_COLUMNS);
    assert_eq!(missing.len(), 12);
    assert_eq!(missing[0], "title");
    assert_eq!(missing[11], "characterList");
    assert!(validate_columns(&raw).is_err());
}

#[test]
fn extra_columns_are_dropped_and_order_is_canonical() {
    let mut columns: Vec<&str> = EXPECTED_COLUMNS.iter().rev().copied().collect();
    columns.insert(3, "imdbId");
    columns.push("poster");
    let raw = raw_with(&columns);
    let projected = project(&raw).expect("project");
    assert_eq!(projected.columns, EXPECTED_COLUMNS);
    assert_eq!(projected.rows[0].len(), 14);
    assert_eq!(projected.cell(0, 1), &CellValue::text("Gone with the Wind"));
}

#[test]
fn numeric_coercion_never_fails() {
    assert_eq!(to_numeric(&CellValue::text("N/A")), None);
    assert_eq!(to_numeric(&CellValue::text("142")), Some(142.0));
    assert_eq!(to_numeric(&CellValue::text(" 8.6 ")), Some(8.6));
    assert_eq!(to_numeric(&CellValue::text("1,000")), None);
    assert_eq!(to_numeric(&CellValue::text("nan")), None);
    assert_eq!(to_numeric(&CellValue::Integer(1994)), Some(1994.0));
    assert_eq!(to_numeric(&CellValue::Float(f64::NAN)), None);
    assert_eq!(to_numeric(&CellValue::text_list(["1"])), None);
    assert_eq!(to_numeric(&CellValue::Null), None);
}

#[test]
fn infinity_and_exponents_survive_coercion() {
    assert_eq!(to_numeric(&CellValue::text("inf")), Some(f64::INFINITY));
    assert_eq!(to_numeric(&CellValue::text(" -inf")), Some(f64::NEG_INFINITY));
    assert_eq!(to_numeric(&CellValue::Float(f64::INFINITY)), Some(f64::INFINITY));
    assert_eq!(to_numeric(&CellValue::text("1.5e2")), Some(150.0));
}

#[test]
fn coerced_records_carry_typed_fields() {
    let mut columns: Vec<&str> = EXPECTED_COLUMNS.to_vec();
    columns.swap(0, 13);
    let raw = raw_with(&columns);
    let table = coerce_table(&raw).expect("coerce");
    let record = &table.records()[0];
    assert_eq!(record.title.as_deref(), Some("Gone with the Wind"));
    assert_eq!(record.duration, Some(238.0));
    assert_eq!(record.year, Some(1939.0));
    assert_eq!(record.gross, Some(200_882_193.0));
    assert_eq!(record.budget, None);
    assert_eq!(record.url, None);
    assert_eq!(record.cast_list, vec!["Clark Gable", "Vivien Leigh"]);
    assert_eq!(record.director_list, vec!["Victor Fleming"]);
    assert_eq!(record.genre_list, vec!["Drama", "Romance"]);
    assert!(record.country_list.is_empty());
}

#[test]
fn unparseable_duration_becomes_missing() {
    let mut raw = raw_with(&EXPECTED_COLUMNS);
    let duration = raw.column_index("duration").expect("duration column");
    raw.rows[0][duration] = CellValue::text("N/A");
    let table = coerce_table(&raw).expect("coerce");
    assert_eq!(table.records()[0].duration, None);
}

#[test]
fn raw_input_is_not_mutated() {
    let raw = raw_with(&EXPECTED_COLUMNS);
    let before = raw.clone();
    let _ = coerce_table(&raw).expect("coerce");
    assert_eq!(raw, before);
}

#[test]
fn empty_table_coerces_to_empty() {
    let raw = RawTable::new(EXPECTED_COLUMNS);
    let table = coerce_table(&raw).expect("coerce");
    assert!(table.is_empty());
}
