//! Structured error types shared across marquee crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MarqueeError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, column names, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Raised when an input table lacks one or more required columns.
///
/// The pipeline stops before coercion when this error is produced, so no
/// partial output ever accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaValidationError {
    /// Missing column names, in canonical column order.
    pub missing: Vec<String>,
    /// Structured payload mirroring the other error families.
    pub info: ErrorInfo,
}

impl SchemaValidationError {
    /// Builds the error for the given missing columns.
    pub fn new(missing: Vec<String>) -> Self {
        let listed = missing.join(", ");
        let info = ErrorInfo::new(
            "marquee.schema.missing_columns",
            format!("Missing required columns: {listed}"),
        )
        .with_context("missing", listed)
        .with_hint("upload a table carrying all expected movie columns");
        Self { missing, info }
    }
}

impl Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.info.fmt(f)
    }
}

impl std::error::Error for SchemaValidationError {}

/// Canonical error type for the marquee pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MarqueeError {
    /// Required columns are absent from the input table.
    #[error("schema error: {0}")]
    Schema(SchemaValidationError),
    /// Input bytes could not be decoded into a table.
    #[error("ingest error: {0}")]
    Ingest(ErrorInfo),
    /// Invalid configuration files or option values.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and export errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl MarqueeError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MarqueeError::Schema(err) => &err.info,
            MarqueeError::Ingest(info) | MarqueeError::Config(info) | MarqueeError::Serde(info) => {
                info
            }
        }
    }

    /// Returns the missing columns when this is a schema failure.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            MarqueeError::Schema(err) => Some(&err.missing),
            _ => None,
        }
    }
}

impl From<SchemaValidationError> for MarqueeError {
    fn from(err: SchemaValidationError) -> Self {
        MarqueeError::Schema(err)
    }
}
