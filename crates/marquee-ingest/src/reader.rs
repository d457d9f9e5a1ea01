//! Decoding uploaded CSV and JSON files into a [`RawTable`].

use std::fs;
use std::io::Read;
use std::path::Path;

use marquee_core::{CellValue, ErrorInfo, MarqueeError, RawTable};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::debug;

fn ingest_error(code: &str, err: impl ToString) -> MarqueeError {
    MarqueeError::Ingest(ErrorInfo::new(code, err.to_string()))
}

/// Concrete decoder used for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// `.csv` files decode as CSV; every other upload is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }

    /// Lowercase name recorded in provenance.
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
        }
    }
}

/// Format selection in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    #[default]
    Auto,
    Csv,
    Json,
}

impl FormatChoice {
    /// Resolves the choice against the input path.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            FormatChoice::Auto => InputFormat::from_path(path),
            FormatChoice::Csv => InputFormat::Csv,
            FormatChoice::Json => InputFormat::Json,
        }
    }
}

/// Decoder settings, loadable from the `ingest` section of a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderOptions {
    /// CSV fields that decode to a missing value.
    #[serde(default = "default_na_values")]
    pub na_values: Vec<String>,
    /// Forces a decoder instead of dispatching on the file extension.
    #[serde(default)]
    pub format: FormatChoice,
}

fn default_na_values() -> Vec<String> {
    [
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            na_values: default_na_values(),
            format: FormatChoice::Auto,
        }
    }
}

impl ReaderOptions {
    fn is_na(&self, field: &str) -> bool {
        self.na_values.iter().any(|token| token == field)
    }
}

/// A decoded upload together with what provenance needs to know about it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedInput {
    pub table: RawTable,
    pub format: InputFormat,
    /// Hex SHA-256 of the raw bytes.
    pub input_hash: String,
}

/// Reads and decodes the file at `path`.
pub fn read_path(path: &Path, opts: &ReaderOptions) -> Result<LoadedInput, MarqueeError> {
    let bytes = fs::read(path).map_err(|err| {
        MarqueeError::Ingest(
            ErrorInfo::new("marquee.ingest.open", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let format = opts.format.resolve(path);
    let table = read_bytes(&bytes, format, opts)?;
    debug!(
        path = %path.display(),
        format = format.as_str(),
        rows = table.len(),
        columns = table.columns.len(),
        "decoded input"
    );
    Ok(LoadedInput {
        table,
        format,
        input_hash: hex::encode(Sha256::digest(&bytes)),
    })
}

/// Decodes in-memory bytes with the given decoder.
pub fn read_bytes(
    bytes: &[u8],
    format: InputFormat,
    opts: &ReaderOptions,
) -> Result<RawTable, MarqueeError> {
    match format {
        InputFormat::Csv => read_csv(bytes, opts),
        InputFormat::Json => read_json(bytes),
    }
}

/// Decodes CSV with a header row. Fields matching a null token become
/// [`CellValue::Null`]; every other field is kept as text.
pub fn read_csv<R: Read>(reader: R, opts: &ReaderOptions) -> Result<RawTable, MarqueeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|err| ingest_error("marquee.ingest.csv_header", err))?
        .clone();
    let mut table = RawTable::new(headers.iter());
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|err| {
            MarqueeError::Ingest(
                ErrorInfo::new("marquee.ingest.csv_record", err.to_string())
                    .with_context("record", idx.to_string()),
            )
        })?;
        let row = record
            .iter()
            .map(|field| {
                if opts.is_na(field) {
                    CellValue::Null
                } else {
                    CellValue::text(field)
                }
            })
            .collect();
        table.push_row(row);
    }
    Ok(table)
}

/// Decodes JSON in records, columns or split orientation.
pub fn read_json(bytes: &[u8]) -> Result<RawTable, MarqueeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| ingest_error("marquee.ingest.json", err))?;
    match value {
        Value::Array(rows) => from_rows(rows),
        Value::Object(map) if map.contains_key("columns") && map.contains_key("data") => {
            from_split(map)
        }
        Value::Object(map) => from_columns(map),
        _ => Err(MarqueeError::Ingest(
            ErrorInfo::new(
                "marquee.ingest.json_shape",
                "expected an array of records or an object of columns",
            )
            .with_hint("export the table with records or columns orientation"),
        )),
    }
}

fn json_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(flag) => CellValue::Bool(flag),
        Value::Number(number) => match number.as_i64() {
            Some(int) => CellValue::Integer(int),
            None => number
                .as_f64()
                .map(CellValue::Float)
                .unwrap_or(CellValue::Null),
        },
        Value::String(text) => CellValue::Text(text),
        Value::Array(items) => CellValue::List(items.into_iter().map(json_cell).collect()),
        object @ Value::Object(_) => CellValue::Text(object.to_string()),
    }
}

fn shape_error(message: &str, row: usize) -> MarqueeError {
    MarqueeError::Ingest(
        ErrorInfo::new("marquee.ingest.json_shape", message).with_context("row", row.to_string()),
    )
}

fn from_rows(rows: Vec<Value>) -> Result<RawTable, MarqueeError> {
    if rows.iter().all(Value::is_array) {
        let width = rows
            .iter()
            .filter_map(Value::as_array)
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let mut table = RawTable::new((0..width).map(|idx| idx.to_string()));
        for row in rows {
            if let Value::Array(cells) = row {
                table.push_row(cells.into_iter().map(json_cell).collect());
            }
        }
        return Ok(table);
    }

    let mut columns: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        let Value::Object(object) = row else {
            return Err(shape_error("record is not an object", idx));
        };
        for key in object.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
        objects.push(object);
    }
    let mut table = RawTable::new(columns.clone());
    for mut object in objects {
        let row = columns
            .iter()
            .map(|column| object.remove(column).map(json_cell).unwrap_or(CellValue::Null))
            .collect();
        table.push_row(row);
    }
    Ok(table)
}

/// Orders row-index keys numerically when they are all integers.
fn sorted_index(mut keys: Vec<String>) -> Vec<String> {
    if keys.iter().all(|key| key.parse::<i64>().is_ok()) {
        keys.sort_by_key(|key| key.parse::<i64>().unwrap_or_default());
    } else {
        keys.sort();
    }
    keys
}

fn from_columns(map: Map<String, Value>) -> Result<RawTable, MarqueeError> {
    let columns: Vec<String> = map.keys().cloned().collect();
    let mut index: Vec<String> = Vec::new();
    let mut height = 0usize;
    for value in map.values() {
        match value {
            Value::Object(cells) => {
                for key in cells.keys() {
                    if !index.contains(key) {
                        index.push(key.clone());
                    }
                }
            }
            Value::Array(cells) => height = height.max(cells.len()),
            _ => {
                return Err(MarqueeError::Ingest(ErrorInfo::new(
                    "marquee.ingest.json_shape",
                    "column values must be objects or arrays",
                )))
            }
        }
    }
    let index = sorted_index(index);
    let rows = height.max(index.len());

    let mut cells_by_column: Vec<Vec<CellValue>> = Vec::with_capacity(columns.len());
    for (_, value) in map {
        let cells = match value {
            Value::Object(mut cells) => index
                .iter()
                .map(|key| cells.remove(key).map(json_cell).unwrap_or(CellValue::Null))
                .collect(),
            Value::Array(cells) => cells.into_iter().map(json_cell).collect(),
            _ => Vec::new(),
        };
        cells_by_column.push(cells);
    }

    let mut table = RawTable::new(columns);
    let mut iters: Vec<_> = cells_by_column.into_iter().map(Vec::into_iter).collect();
    for _ in 0..rows {
        table.push_row(
            iters
                .iter_mut()
                .map(|cells| cells.next().unwrap_or(CellValue::Null))
                .collect(),
        );
    }
    Ok(table)
}

fn from_split(mut map: Map<String, Value>) -> Result<RawTable, MarqueeError> {
    let columns = match map.remove("columns") {
        Some(Value::Array(names)) => names
            .into_iter()
            .map(|name| match name {
                Value::String(text) => text,
                other => other.to_string(),
            })
            .collect::<Vec<_>>(),
        _ => return Err(shape_error("split columns must be an array", 0)),
    };
    let Some(Value::Array(data)) = map.remove("data") else {
        return Err(shape_error("split data must be an array", 0));
    };
    let mut table = RawTable::new(columns);
    for (idx, row) in data.into_iter().enumerate() {
        let Value::Array(cells) = row else {
            return Err(shape_error("split row is not an array", idx));
        };
        table.push_row(cells.into_iter().map(json_cell).collect());
    }
    Ok(table)
}
