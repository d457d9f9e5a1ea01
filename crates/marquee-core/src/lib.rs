#![deny(missing_docs)]
#![doc = "Core record types, raw cells and structured errors for the marquee movie table pipeline."]

pub mod cell;
pub mod errors;
pub mod provenance;
pub mod record;

pub use cell::{format_float, quote_text, CellValue, RawTable};
pub use errors::{ErrorInfo, MarqueeError, SchemaValidationError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use record::{
    ListColumn, MovieRecord, Table, EXPECTED_COLUMNS, LIST_COLUMNS, NUMERIC_COLUMNS,
};
