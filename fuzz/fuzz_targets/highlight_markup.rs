// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlight markup.
//!
//! Spans must be disjoint, sorted and on char boundaries, and stripping the
//! markers must give back the input byte for byte.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tracuu::{highlight_spans, highlight_with, Marker};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

// Control-character markers; inputs that already contain them skip the strip check.
const MARKER: Marker<'static> = Marker {
    open: "\u{1}",
    close: "\u{2}",
};

fuzz_target!(|input: HighlightInput| {
    let spans = highlight_spans(&input.text, &input.query);
    for span in &spans {
        assert!(span.start < span.end && span.end <= input.text.len());
        assert!(input.text.is_char_boundary(span.start));
        assert!(input.text.is_char_boundary(span.end));
    }
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start, "overlapping spans");
    }

    if input.text.contains(['\u{1}', '\u{2}']) {
        return;
    }
    let marked = highlight_with(&input.text, &input.query, &MARKER);
    let stripped: String = marked.chars().filter(|c| !matches!(c, '\u{1}' | '\u{2}')).collect();
    assert_eq!(stripped, input.text);
});
