// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-adaptive acceptance threshold.
//!
//! Whole-word matching is generous to descriptive queries ("quy định chi tiết")
//! and stingy to terse ones ("31", "TT-BYT"): a bare number rarely earns the
//! sequential or phrase bonuses a sentence does. Queries with a short token,
//! a digit, or an agency-code token therefore get the lower bar.
//!
//! | Query shape | Threshold |
//! |---|---|
//! | any token of ≤ 2 characters | 0.5 |
//! | any token containing a digit | 0.5 |
//! | any `letters-letters` token | 0.5 |
//! | otherwise | 0.7 |

use crate::tokenize::{is_code_token, tokenize_special};
use crate::util::normalize::normalize;

/// Threshold for descriptive queries.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Threshold for short, numeric or code-like queries.
pub const RELAXED_THRESHOLD: f64 = 0.5;

/// Tokens up to this many characters count as short.
pub const SHORT_TOKEN_MAX_CHARS: usize = 2;

/// Minimum match ratio for a candidate to count as relevant to `query`.
///
/// ```
/// use tracuu::threshold;
/// assert_eq!(threshold("31"), 0.5);
/// assert_eq!(threshold("quy định chi tiết"), 0.7);
/// ```
pub fn threshold(query: &str) -> f64 {
    threshold_for_tokens(&tokenize_special(&normalize(query)))
}

/// Threshold for an already special-tokenized, normalized query.
pub fn threshold_for_tokens(tokens: &[String]) -> f64 {
    if tokens.iter().any(|token| relaxes_threshold(token)) {
        RELAXED_THRESHOLD
    } else {
        DEFAULT_THRESHOLD
    }
}

/// Accept iff the ratio reaches the threshold.
#[inline]
pub fn is_relevant(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

fn relaxes_threshold(token: &str) -> bool {
    token.chars().count() <= SHORT_TOKEN_MAX_CHARS
        || token.chars().any(|c| c.is_ascii_digit())
        || is_code_token(token)
}
