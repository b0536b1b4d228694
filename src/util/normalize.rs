// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for accent-insensitive comparison.
//!
//! Vietnamese stacks up to two marks on a vowel ("ệ" is e + circumflex + dot
//! below), so a user typing "quy dinh" has to find "quy định". NFD splits every
//! precomposed letter into its base and combining marks, the marks get dropped,
//! and the two letters NFD leaves alone (đ and Đ, which are distinct code points
//! rather than d plus a mark) are mapped by hand.
//!
//! ```text
//! "Điều 5"  ──lowercase──▶ "điều 5" ──NFD──▶ "đieu\u{0300}\u{0302} 5" ──strip──▶ "dieu 5"
//! ```

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison: lowercase, then fold diacritics.
///
/// - "Quy định" → "quy dinh"
/// - "Điều" → "dieu"
/// - "31/2021/TT-BYT" → "31/2021/tt-byt"
///
/// Whitespace is left as-is; callers that compare phrases collapse it
/// themselves with [`collapse_whitespace`].
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    fold_diacritics(&value.to_lowercase())
}

/// Strip combining marks and map đ/Đ, keeping the original case.
///
/// "Điều" → "Dieu". This is the case-preserving half of [`normalize`].
pub fn fold_diacritics(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect()
}

/// Collapse runs of whitespace to a single space and trim both ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every whitespace character.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Combining Diacritical Marks block (U+0300..U+036F).
///
/// Covers every tone mark Vietnamese uses plus the circumflex, breve and horn.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
