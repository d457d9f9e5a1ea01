use std::fs::File;
use std::io::Write;
use std::path::Path;

use marquee_core::{quote_text, ErrorInfo, MarqueeError, MovieRecord, Table, EXPECTED_COLUMNS};

fn export_error(code: &str, err: impl ToString) -> MarqueeError {
    MarqueeError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Renders a list as a literal (`['A', 'B']`) that re-ingests unchanged.
pub fn render_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|value| quote_text(value)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Renders an optional number; integral values print without a fraction.
pub fn render_number(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => v.to_string(),
    }
}

/// One record rendered in canonical column order.
pub fn record_fields(record: &MovieRecord) -> Vec<String> {
    vec![
        record.url.clone().unwrap_or_default(),
        record.title.clone().unwrap_or_default(),
        render_number(record.rating_value),
        render_number(record.rating_count),
        render_number(record.year),
        record.description.clone().unwrap_or_default(),
        render_number(record.budget),
        render_number(record.gross),
        render_number(record.duration),
        render_list(&record.genre_list),
        render_list(&record.country_list),
        render_list(&record.cast_list),
        render_list(&record.character_list),
        render_list(&record.director_list),
    ]
}

/// Writes a header and rows of pre-rendered fields as CSV.
pub fn write_rows<W, I>(writer: W, header: &[&str], rows: I) -> Result<(), MarqueeError>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header)
        .map_err(|err| export_error("marquee.export.header", err))?;
    for row in rows {
        wtr.write_record(&row)
            .map_err(|err| export_error("marquee.export.row", err))?;
    }
    wtr.flush()
        .map_err(|err| export_error("marquee.export.flush", err))
}

/// Same as [`write_rows`] but creates the file at `path`.
pub fn write_rows_csv<I>(path: &Path, header: &[&str], rows: I) -> Result<(), MarqueeError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let file = File::create(path).map_err(|err| {
        MarqueeError::Serde(
            ErrorInfo::new("marquee.export.create", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    write_rows(file, header, rows)
}

/// Writes a normalized table with the canonical 14-column header.
pub fn write_table_csv(table: &Table, path: &Path) -> Result<(), MarqueeError> {
    write_rows_csv(path, &EXPECTED_COLUMNS, table.iter().map(record_fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_compactly() {
        assert_eq!(render_number(None), "");
        assert_eq!(render_number(Some(142.0)), "142");
        assert_eq!(render_number(Some(8.5)), "8.5");
    }

    #[test]
    fn lists_render_as_literals() {
        assert_eq!(render_list(&[]), "[]");
        assert_eq!(
            render_list(&["A".to_string(), "O'Neil".to_string()]),
            "['A', \"O'Neil\"]"
        );
    }
}
