// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization: plain word splitting plus legal-code extraction.
//!
//! Plain tokens come from splitting on whitespace and `, . : ;`. That leaves a
//! decree number like "31/2021/TT-BYT" as one opaque token, so a user typing
//! "31" or "TT-BYT" would never hit it exactly. [`tokenize_special`] fixes that
//! by appending the recognisable pieces after the plain tokens:
//!
//! | Pattern | Example |
//! |---|---|
//! | digits `/` digits `/` letters-and-hyphens | `31/2021/tt-byt` |
//! | letters `-` letters | `tt-byt` |
//! | digits | `31`, `2021` |
//!
//! Both the atomic code and its pieces stay in the sequence. Each pattern runs
//! independently over the whole text, so one code can yield several specials.

use regex::Regex;
use std::sync::LazyLock;

/// Decree or dated document code: `31/2021/TT-BYT`.
static DECREE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[0-9]+/[0-9]+/[\p{L}\-]+").expect("valid decree pattern"));

/// Agency code: `TT-BYT`, `ND-CP`.
static AGENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\p{L}+-\p{L}+").expect("valid agency pattern"));

/// Bare number.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid number pattern"));

/// Characters that separate plain tokens besides whitespace.
const PUNCTUATION_SEPARATORS: [char; 4] = [',', '.', ':', ';'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION_SEPARATORS.contains(&c)
}

/// Split text into lowercase tokens on whitespace and `, . : ;`.
///
/// Never returns empty tokens.
///
/// ```
/// use tracuu::tokenize;
/// assert_eq!(tokenize("Quy định: chi tiết."), vec!["quy", "định", "chi", "tiết"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Plain tokens followed by the special tokens found in `text`.
pub fn tokenize_special(text: &str) -> Vec<String> {
    let mut tokens = tokenize(text);
    tokens.extend(extract_special_tokens(text));
    tokens
}

/// Extract decree codes, agency codes and bare numbers, in that order.
pub fn extract_special_tokens(text: &str) -> Vec<String> {
    [&*DECREE_CODE, &*AGENCY_CODE, &*NUMBER]
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Whether a token contains the `letters-letters` agency-code shape.
pub fn is_code_token(token: &str) -> bool {
    AGENCY_CODE.is_match(token)
}
