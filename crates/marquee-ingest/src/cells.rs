//! Normalization of heterogeneous list-valued cells.

use marquee_core::CellValue;

use crate::literal::parse_literal;

/// Characters stripped from both ends of every list element.
const ELEMENT_TRIM: [char; 3] = [' ', '\'', '"'];

fn strip_element(text: &str) -> String {
    text.trim_matches(&ELEMENT_TRIM[..]).to_string()
}

/// Normalizes one cell into an ordered list of trimmed strings.
///
/// Structured sequences are stringified element-wise, null cells yield an
/// empty list, and text is read as a list or tuple literal when it is
/// bracket or paren delimited. Text that is not a valid literal is split on
/// commas. This never fails.
pub fn parse_str_list(cell: &CellValue) -> Vec<String> {
    match cell {
        CellValue::List(items) => items
            .iter()
            .map(|item| strip_element(&item.to_string()))
            .collect(),
        cell if cell.is_null() => Vec::new(),
        CellValue::Text(text) => parse_text(text),
        other => parse_text(&other.to_string()),
    }
}

/// Text branch of [`parse_str_list`].
pub fn parse_text(raw: &str) -> Vec<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if is_delimited(text) {
        if let Some(items) = parse_literal(text).ok().and_then(|v| v.into_sequence()) {
            return items
                .iter()
                .map(|item| strip_element(&item.to_string()))
                .collect();
        }
    }
    split_commas(text)
}

fn is_delimited(text: &str) -> bool {
    (text.starts_with('[') && text.ends_with(']')) || (text.starts_with('(') && text.ends_with(')'))
}

fn split_commas(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
