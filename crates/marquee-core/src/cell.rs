//! Raw, untyped table cells as they arrive from a decoded upload.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Closed set of shapes a raw cell may take before coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Missing value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integral number (JSON integers).
    Integer(i64),
    /// Floating point number; `NaN` is the float null sentinel.
    Float(f64),
    /// Free text, including stringified lists.
    Text(String),
    /// Already structured sequence (JSON arrays).
    List(Vec<CellValue>),
}

static NULL_CELL: CellValue = CellValue::Null;

impl CellValue {
    /// Returns true for `Null` and for the `NaN` float sentinel.
    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(value) => value.is_nan(),
            _ => false,
        }
    }

    /// Builds a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Builds a list cell of text elements.
    pub fn text_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CellValue::List(values.into_iter().map(|v| CellValue::Text(v.into())).collect())
    }

    /// Quoted rendering used for list elements (`'A'` rather than `A`).
    pub fn repr(&self) -> String {
        match self {
            CellValue::Text(text) => quote_text(text),
            other => other.to_string(),
        }
    }
}

/// Renders a float the way list literals print it (`142.0`, `nan`, `inf`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}inf")
    } else {
        format!("{value:?}")
    }
}

/// Quotes text as a list-literal string, preferring single quotes.
pub fn quote_text(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("None"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Float(value) => f.write_str(&format_float(*value)),
            CellValue::Text(text) => f.write_str(text),
            CellValue::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&item.repr())?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Row/column table of raw cells with named columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTable {
    /// Column names in source order.
    pub columns: Vec<String>,
    /// Rows of cells; ragged rows read missing trailing cells as null.
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Creates an empty table with the given header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns true when the header carries the given column.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at the given position, or null when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&NULL_CELL)
    }
}
