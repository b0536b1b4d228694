// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting over the original, un-normalized text.
//!
//! Highlighting is cosmetic and independent of scoring. It works in two passes:
//!
//! 1. **Claim**: for each distinct query token (normalized, special-tokenized),
//!    find case-insensitive literal occurrences in the original text, first
//!    as whole words, and only if the token occurs nowhere as a whole word,
//!    as bare substrings. Occurrences overlapping a range an earlier token
//!    already claimed are skipped, but still count as whole-word hits.
//! 2. **Render**: walk the sorted, disjoint spans once, wrapping each in the
//!    marker.
//!
//! Because markup is only inserted in the render pass, a later token can never
//! match inside `<mark>` or split an earlier highlight.
//!
//! ```text
//! "Thông tư 31/2021/TT-BYT", query "31"
//!           ^^
//! "Thông tư <mark>31</mark>/2021/TT-BYT"
//! ```

use regex::{Regex, RegexBuilder};

use crate::tokenize::tokenize_special;
use crate::types::HighlightSpan;
use crate::util::normalize::normalize;

/// Opening and closing markup placed around each highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub open: &'a str,
    pub close: &'a str,
}

impl Marker<'static> {
    /// `<mark>…</mark>`, the default for HTML renderers.
    pub const HTML: Marker<'static> = Marker {
        open: "<mark>",
        close: "</mark>",
    };
}

impl Default for Marker<'static> {
    fn default() -> Self {
        Marker::HTML
    }
}

/// Wrap query matches in `text` with `<mark>` tags.
///
/// A blank query returns the text unchanged.
///
/// ```
/// use tracuu::highlight;
/// assert_eq!(
///     highlight("Thông tư 31/2021/TT-BYT", "31"),
///     "Thông tư <mark>31</mark>/2021/TT-BYT"
/// );
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, &Marker::HTML)
}

/// Wrap query matches in `text` with a caller-chosen marker.
pub fn highlight_with(text: &str, query: &str, marker: &Marker<'_>) -> String {
    if query.trim().is_empty() {
        return text.to_string();
    }
    render_spans(text, &highlight_spans(text, query), marker)
}

/// Disjoint byte ranges of `text` to highlight for `query`, sorted by start.
pub fn highlight_spans(text: &str, query: &str) -> Vec<HighlightSpan> {
    if query.trim().is_empty() || text.is_empty() {
        return Vec::new();
    }

    let mut claimed: Vec<HighlightSpan> = Vec::new();
    for token in distinct_tokens(query) {
        let escaped = regex::escape(&token);

        let word = case_insensitive(&format!(r"\b{escaped}\b"));
        let hits = match word {
            Some(word) if word.is_match(text) => unclaimed_matches(&word, text, &claimed),
            _ => case_insensitive(&escaped)
                .map(|substring| unclaimed_matches(&substring, text, &claimed))
                .unwrap_or_default(),
        };

        claimed.extend(hits);
    }

    claimed.sort_unstable();
    claimed
}

/// Insert `marker` around each span in a single left-to-right pass.
///
/// Spans must be sorted, disjoint, and on char boundaries of `text`; spans
/// that violate this are skipped rather than corrupting the output.
pub fn render_spans(text: &str, spans: &[HighlightSpan], marker: &Marker<'_>) -> String {
    let extra = spans.len() * (marker.open.len() + marker.close.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;

    for span in spans {
        if span.is_empty()
            || span.start < cursor
            || span.end > text.len()
            || !text.is_char_boundary(span.start)
            || !text.is_char_boundary(span.end)
        {
            continue;
        }
        out.push_str(&text[cursor..span.start]);
        out.push_str(marker.open);
        out.push_str(&text[span.start..span.end]);
        out.push_str(marker.close);
        cursor = span.end;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Normalized, special-tokenized query tokens, first occurrence only.
fn distinct_tokens(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in tokenize_special(&normalize(query)) {
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Compile a case-insensitive pattern. The input is always built from an
/// escaped literal, so this only fails if the size limit is hit.
fn case_insensitive(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

fn unclaimed_matches(
    pattern: &Regex,
    text: &str,
    claimed: &[HighlightSpan],
) -> Vec<HighlightSpan> {
    pattern
        .find_iter(text)
        .map(|m| HighlightSpan::new(m.start(), m.end()))
        .filter(|span| !span.is_empty() && !claimed.iter().any(|c| c.overlaps(span)))
        .collect()
}
