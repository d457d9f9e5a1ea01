//! Schema validation and per-column type coercion.

use marquee_core::{
    CellValue, ListColumn, MarqueeError, MovieRecord, RawTable, SchemaValidationError, Table,
    EXPECTED_COLUMNS, NUMERIC_COLUMNS,
};
use tracing::{debug, warn};

use crate::cells::parse_str_list;

/// Required columns absent from `raw`, in the order given by `required`.
pub fn missing_columns(raw: &RawTable, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|column| !raw.has_column(column))
        .map(|column| column.to_string())
        .collect()
}

/// Checks that every expected column is present.
pub fn validate_columns(raw: &RawTable) -> Result<(), SchemaValidationError> {
    let missing = missing_columns(raw, &EXPECTED_COLUMNS);
    if missing.is_empty() {
        return Ok(());
    }
    warn!(missing = %missing.join(", "), "input table is missing required columns");
    Err(SchemaValidationError::new(missing))
}

/// Reprojects `raw` onto the expected columns in canonical order.
///
/// Extra columns are dropped; the input is left untouched.
pub fn project(raw: &RawTable) -> Result<RawTable, MarqueeError> {
    validate_columns(raw)?;
    let indices: Vec<usize> = EXPECTED_COLUMNS
        .iter()
        .filter_map(|column| raw.column_index(column))
        .collect();
    let mut projected = RawTable::new(EXPECTED_COLUMNS);
    for row in 0..raw.len() {
        projected.push_row(indices.iter().map(|&col| raw.cell(row, col).clone()).collect());
    }
    Ok(projected)
}

/// Best-effort numeric coercion; anything unparseable or NaN becomes `None`.
pub fn to_numeric(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Integer(value) => *value as f64,
        CellValue::Float(value) => *value,
        CellValue::Bool(flag) => f64::from(u8::from(*flag)),
        CellValue::Text(text) => text.trim().parse::<f64>().ok()?,
        CellValue::Null | CellValue::List(_) => return None,
    };
    (!value.is_nan()).then_some(value)
}

/// Text coercion for the free-text columns; null cells become `None`.
pub fn to_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(text) => Some(text.clone()),
        cell if cell.is_null() => None,
        other => Some(other.to_string()),
    }
}

fn numeric_slot<'r>(record: &'r mut MovieRecord, column: &str) -> Option<&'r mut Option<f64>> {
    match column {
        "duration" => Some(&mut record.duration),
        "gross" => Some(&mut record.gross),
        "budget" => Some(&mut record.budget),
        "ratingValue" => Some(&mut record.rating_value),
        "ratingCount" => Some(&mut record.rating_count),
        "year" => Some(&mut record.year),
        _ => None,
    }
}

/// Validates, projects and coerces a raw table into a [`Table`].
pub fn coerce_table(raw: &RawTable) -> Result<Table, MarqueeError> {
    let projected = project(raw)?;
    let column = |name: &str| {
        projected
            .column_index(name)
            .ok_or_else(|| MarqueeError::from(SchemaValidationError::new(vec![name.to_string()])))
    };
    let url = column("url")?;
    let title = column("title")?;
    let description = column("description")?;
    let numeric = NUMERIC_COLUMNS
        .iter()
        .map(|name| column(*name).map(|idx| (*name, idx)))
        .collect::<Result<Vec<_>, _>>()?;
    let lists = ListColumn::ALL
        .iter()
        .map(|list| column(list.column_name()).map(|idx| (*list, idx)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = Vec::with_capacity(projected.len());
    let mut numeric_misses = 0usize;
    for row in 0..projected.len() {
        let mut record = MovieRecord {
            url: to_text(projected.cell(row, url)),
            title: to_text(projected.cell(row, title)),
            description: to_text(projected.cell(row, description)),
            ..MovieRecord::default()
        };
        for (name, idx) in &numeric {
            let cell = projected.cell(row, *idx);
            let value = to_numeric(cell);
            if value.is_none() && !cell.is_null() {
                numeric_misses += 1;
            }
            if let Some(slot) = numeric_slot(&mut record, name) {
                *slot = value;
            }
        }
        for (list, idx) in &lists {
            *list.values_mut(&mut record) = parse_str_list(projected.cell(row, *idx));
        }
        records.push(record);
    }
    debug!(rows = records.len(), numeric_misses, "coerced movie table");
    Ok(Table::new(records))
}
