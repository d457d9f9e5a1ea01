use marquee_core::errors::{ErrorInfo, MarqueeError, SchemaValidationError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "movies.csv")
        .with_context("reason", "example")
}

#[test]
fn schema_error_surface() {
    let err: MarqueeError = SchemaValidationError::new(vec!["gross".into()]).into();
    assert_eq!(err.info().code, "marquee.schema.missing_columns");
    assert_eq!(err.missing_columns(), Some(&["gross".to_string()][..]));
    assert_eq!(err.info().context.get("missing").map(String::as_str), Some("gross"));
    assert!(err.to_string().contains("Missing required columns: gross"));
}

#[test]
fn schema_error_lists_every_column() {
    let err = SchemaValidationError::new(vec!["title".into(), "duration".into()]);
    assert_eq!(err.missing, vec!["title", "duration"]);
    assert!(err.to_string().contains("title, duration"));
}

#[test]
fn ingest_error_surface() {
    let err = MarqueeError::Ingest(sample_info("I001", "bad csv"));
    assert_eq!(err.info().code, "I001");
    assert!(err.info().context.contains_key("path"));
    assert!(err.missing_columns().is_none());
}

#[test]
fn config_error_surface() {
    let err = MarqueeError::Config(sample_info("C001", "top_n must be positive"));
    assert_eq!(err.info().code, "C001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn serde_error_surface() {
    let err = MarqueeError::Serde(sample_info("S001", "write failed").with_hint("check disk"));
    assert_eq!(err.info().code, "S001");
    assert!(err.to_string().contains("hint: check disk"));
}
