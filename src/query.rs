// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A user query, normalized and tokenized once per search.
//!
//! Scoring a record looks at the query from four angles: its special tokens,
//! its whitespace-collapsed phrase, its whitespace-free form, and the threshold
//! it implies. None of those depend on the record, so [`Query::parse`] computes
//! them up front and the per-record loop only normalizes candidate text.

use crate::scoring::threshold_for_tokens;
use crate::tokenize::tokenize_special;
use crate::util::normalize::{collapse_whitespace, normalize, strip_whitespace};

/// Parsed form of one search invocation's raw query string.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    raw: String,
    normalized: String,
    tokens: Vec<String>,
    phrase: String,
    compact: String,
    threshold: f64,
}

impl Query {
    /// Parse a raw query. Returns `None` for an empty or whitespace-only query,
    /// which means "no search" rather than "match nothing".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let normalized = normalize(raw);
        let tokens = tokenize_special(&normalized);
        let phrase = collapse_whitespace(&normalized);
        let compact = strip_whitespace(&normalized);
        let threshold = threshold_for_tokens(&tokens);

        Some(Self {
            raw: raw.to_string(),
            normalized,
            tokens,
            phrase,
            compact,
            threshold,
        })
    }

    /// The query exactly as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lowercased, diacritic-folded query.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Plain tokens followed by special tokens, duplicates included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Normalized query with internal whitespace collapsed and ends trimmed.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Normalized query with all whitespace removed.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Minimum match ratio a candidate needs to be accepted.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
