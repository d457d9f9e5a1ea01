//! Decoding, list-cell normalization and schema coercion for marquee.

pub mod cells;
pub mod coerce;
pub mod export;
pub mod literal;
pub mod reader;

pub use cells::{parse_str_list, parse_text};
pub use coerce::{coerce_table, missing_columns, project, to_numeric, to_text, validate_columns};
pub use export::{render_list, render_number, write_rows, write_rows_csv, write_table_csv};
pub use literal::{parse_literal, LiteralError, LiteralValue};
pub use reader::{
    read_bytes, read_csv, read_json, read_path, FormatChoice, InputFormat, LoadedInput,
    ReaderOptions,
};
