//! Highlighter properties.

use super::{query_strategy, vietnamese_text};
use proptest::prelude::*;
use tracuu::{highlight, highlight_spans};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Removing the markers gives back the input exactly.
    #[test]
    fn prop_markup_only_adds_tags(text in vietnamese_text(), query in query_strategy()) {
        let marked = highlight(&text, &query);
        let stripped = marked.replace("<mark>", "").replace("</mark>", "");
        prop_assert_eq!(stripped, text);
    }

    /// Marks are never nested.
    #[test]
    fn prop_no_nested_marks(text in vietnamese_text(), query in query_strategy()) {
        let marked = highlight(&text, &query);
        let mut depth = 0i32;
        let mut rest = marked.as_str();
        while let Some(pos) = rest.find('<') {
            rest = &rest[pos..];
            if rest.starts_with("<mark>") {
                depth += 1;
                rest = &rest["<mark>".len()..];
            } else if rest.starts_with("</mark>") {
                depth -= 1;
                rest = &rest["</mark>".len()..];
            } else {
                rest = &rest[1..];
            }
            prop_assert!((0..=1).contains(&depth));
        }
        prop_assert_eq!(depth, 0);
    }

    /// Spans are sorted, disjoint, and land on char boundaries.
    #[test]
    fn prop_spans_well_formed(text in vietnamese_text(), query in query_strategy()) {
        let spans = highlight_spans(&text, &query);
        for span in &spans {
            prop_assert!(!span.is_empty());
            prop_assert!(span.end <= text.len());
            prop_assert!(text.is_char_boundary(span.start));
            prop_assert!(text.is_char_boundary(span.end));
        }
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }
}
