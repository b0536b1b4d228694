// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match ratio and relevance score for one candidate text.
//!
//! # Match ratio
//!
//! Each query token earns at most one credit, first strategy wins:
//!
//! 1. **Exact**: equals some candidate token → 1.0
//! 2. **Substring**: short (≤ 3 chars) or all-digit token found anywhere in
//!    the normalized candidate → 1.0
//! 3. **Partial**: longer token contains, or is contained in, some candidate
//!    token → 0.7
//!
//! ```text
//! ratio = min(1, credits / n + 0.5 · run / n + phrase)
//! ```
//!
//! where `run` is the longest stretch of leading query tokens found in order
//! in the candidate, and `phrase` is 0.3 when the whole collapsed query occurs
//! verbatim.
//!
//! # Relevance score
//!
//! Only candidates whose ratio clears the query's threshold get a score:
//!
//! ```text
//! score = 100 · ratio  (+50 phrase)  (+30 whitespace-free containment)
//! ```
//!
//! Rejected candidates score exactly 0. The bonuses land after the gate, so
//! two accepted candidates with equal ratios can still differ by up to 80.

use crate::query::Query;
use crate::scoring::threshold::is_relevant;
use crate::tokenize::tokenize_special;
use crate::types::MatchOutcome;
use crate::util::normalize::{normalize, strip_whitespace};

/// Credit for an exact or substring token hit.
pub const FULL_CREDIT: f64 = 1.0;

/// Credit for a partial (containment) token hit.
pub const PARTIAL_CREDIT: f64 = 0.7;

/// Tokens up to this many characters may match as bare substrings.
pub const SUBSTRING_MAX_CHARS: usize = 3;

/// Weight of the sequential-run fraction in the ratio.
pub const SEQUENTIAL_WEIGHT: f64 = 0.5;

/// Ratio bonus when the whole query occurs verbatim.
pub const PHRASE_RATIO_BONUS: f64 = 0.3;

/// Score bonus when the whole query occurs verbatim.
pub const PHRASE_SCORE_BONUS: f64 = 50.0;

/// Score bonus when the query occurs once whitespace is ignored.
pub const NO_SPACE_SCORE_BONUS: f64 = 30.0;

/// Ratio-to-score scale.
pub const RATIO_SCALE: f64 = 100.0;

/// Candidate text prepared for scoring against one query.
struct Candidate {
    normalized: String,
    tokens: Vec<String>,
}

impl Candidate {
    fn new(text: &str) -> Self {
        let normalized = normalize(text);
        let tokens = tokenize_special(&normalized);
        Self { normalized, tokens }
    }

    fn contains_phrase(&self, query: &Query) -> bool {
        self.normalized.contains(query.phrase())
    }
}

/// Score `text` against a raw query string.
///
/// A blank query yields the zero outcome.
pub fn score(text: &str, query: &str) -> MatchOutcome {
    Query::parse(query)
        .map(|query| score_query(text, &query))
        .unwrap_or_default()
}

/// Score `text` against a parsed query: ratio first, gate, then bonuses.
pub fn score_query(text: &str, query: &Query) -> MatchOutcome {
    let candidate = Candidate::new(text);
    let ratio = ratio_for(&candidate, query);

    if !is_relevant(ratio, query.threshold()) {
        return MatchOutcome { ratio, score: 0.0 };
    }

    let mut score = ratio * RATIO_SCALE;
    if candidate.contains_phrase(query) {
        score += PHRASE_SCORE_BONUS;
    }
    if strip_whitespace(&candidate.normalized).contains(query.compact()) {
        score += NO_SPACE_SCORE_BONUS;
    }

    MatchOutcome { ratio, score }
}

/// Bounded `[0, 1]` match ratio of `text` against `query`.
pub fn match_ratio(text: &str, query: &str) -> f64 {
    Query::parse(query)
        .map(|query| ratio_for(&Candidate::new(text), &query))
        .unwrap_or(0.0)
}

/// Relevance score of `text` for `query`; 0 when the candidate is rejected.
pub fn relevance_score(text: &str, query: &str) -> f64 {
    score(text, query).score
}

fn ratio_for(candidate: &Candidate, query: &Query) -> f64 {
    let query_tokens = query.tokens();
    if query_tokens.is_empty() {
        return 0.0;
    }
    let count = query_tokens.len() as f64;

    let credits: f64 = query_tokens
        .iter()
        .map(|token| token_credit(token, &candidate.tokens, &candidate.normalized))
        .sum();
    let basic_ratio = credits / count;

    let sequential_bonus = max_sequential_matches(&candidate.tokens, query_tokens) as f64 / count;

    let phrase_bonus = if candidate.contains_phrase(query) {
        PHRASE_RATIO_BONUS
    } else {
        0.0
    };

    (basic_ratio + SEQUENTIAL_WEIGHT * sequential_bonus + phrase_bonus).min(1.0)
}

/// Credit one query token earns against the candidate.
pub fn token_credit(token: &str, candidate_tokens: &[String], candidate_text: &str) -> f64 {
    if candidate_tokens.iter().any(|t| t == token) {
        return FULL_CREDIT;
    }

    let len = token.chars().count();
    let all_digits = token.chars().all(|c| c.is_ascii_digit());

    if (len <= SUBSTRING_MAX_CHARS || all_digits) && candidate_text.contains(token) {
        return FULL_CREDIT;
    }

    if len > SUBSTRING_MAX_CHARS
        && candidate_tokens
            .iter()
            .any(|t| t.contains(token) || token.contains(t.as_str()))
    {
        return PARTIAL_CREDIT;
    }

    0.0
}

/// Longest run of leading query tokens matched position-by-position by some
/// window of the candidate tokens.
///
/// ```
/// use tracuu::max_sequential_matches;
/// let text: Vec<String> = ["a", "quy", "dinh", "x"].map(String::from).to_vec();
/// let query: Vec<String> = ["quy", "dinh", "chi"].map(String::from).to_vec();
/// assert_eq!(max_sequential_matches(&text, &query), 2);
/// ```
pub fn max_sequential_matches(candidate_tokens: &[String], query_tokens: &[String]) -> usize {
    (0..candidate_tokens.len())
        .map(|start| {
            candidate_tokens[start..]
                .iter()
                .zip(query_tokens)
                .take_while(|(c, q)| c == q)
                .count()
        })
        .max()
        .unwrap_or(0)
}
