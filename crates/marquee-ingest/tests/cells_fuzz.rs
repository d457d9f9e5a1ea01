use marquee_core::CellValue;
use marquee_ingest::{parse_str_list, parse_text};
use proptest::prelude::*;

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        let first = parse_text(&text);
        for item in &first {
            prop_assert!(!item.starts_with(' '));
            prop_assert!(!item.ends_with(' '));
        }
        prop_assert_eq!(first, parse_text(&text));
    }

    #[test]
    fn list_like_text_is_deterministic(items in proptest::collection::vec("[A-Za-z' ,\\[\\]()\"]{0,12}", 0..6)) {
        let text = format!("[{}]", items.join(", "));
        let cell = CellValue::text(text);
        prop_assert_eq!(parse_str_list(&cell), parse_str_list(&cell));
    }

    #[test]
    fn quoted_names_round_trip(names in proptest::collection::vec("[A-Za-z][A-Za-z .-]{0,15}[A-Za-z]", 0..8)) {
        let text = format!(
            "[{}]",
            names.iter().map(|name| format!("'{name}'")).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(parse_text(&text), names);
    }
}
