// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-scan search over a corpus.
//!
//! The corpus is small (tens to low thousands of records), so there is no
//! index: every record's question and answer are scored against the query,
//! the answer at a lower weight, and the sum decides.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::query::Query;
use crate::scoring::ranking::sort_results;
use crate::scoring::score_query;
use crate::types::{Corpus, Record, ScoredRecord, Section};

/// Hard cap on results returned by one search.
pub const MAX_RESULTS: usize = 20;

/// Answer text counts for less than question text.
pub const ANSWER_WEIGHT: f64 = 0.7;

/// Per-call search settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results; clamped to [`MAX_RESULTS`].
    pub limit: usize,
    /// Only scan these section labels. `None` scans every section.
    pub sections: Option<Vec<String>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: MAX_RESULTS,
            sections: None,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sections<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    fn includes(&self, section: &Section) -> bool {
        self.sections
            .as_ref()
            .map_or(true, |labels| labels.iter().any(|label| *label == section.label))
    }
}

/// Search the whole corpus with default options.
///
/// Returns at most [`MAX_RESULTS`] records, best first. An empty or
/// whitespace-only query returns nothing without doing any work.
pub fn search<'c>(corpus: &'c Corpus, query: &str) -> Vec<ScoredRecord<'c>> {
    search_with_options(corpus, query, &SearchOptions::default())
}

/// Search with explicit options.
pub fn search_with_options<'c>(
    corpus: &'c Corpus,
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredRecord<'c>> {
    let Some(query) = Query::parse(query) else {
        return Vec::new();
    };

    let candidates: Vec<(&'c str, &'c Record)> = corpus
        .sections()
        .iter()
        .filter(|section| options.includes(section))
        .flat_map(|section| {
            section
                .records
                .iter()
                .map(move |record| (section.label.as_str(), record))
        })
        .collect();

    #[cfg(feature = "parallel")]
    let candidate_iter = candidates.par_iter();
    #[cfg(not(feature = "parallel"))]
    let candidate_iter = candidates.iter();

    let mut results: Vec<ScoredRecord<'c>> = candidate_iter
        .filter_map(|&(section, record)| {
            let score = score_record(record, &query);
            (score > 0.0).then_some(ScoredRecord {
                record,
                score,
                section,
            })
        })
        .collect();

    tracing::debug!(
        query = query.raw(),
        records = candidates.len(),
        accepted = results.len(),
        threshold = query.threshold(),
        "scored corpus"
    );

    sort_results(&mut results);
    results.truncate(options.limit.min(MAX_RESULTS));

    for hit in &results {
        tracing::trace!(section = hit.section, id = hit.record.id, score = hit.score, "hit");
    }

    results
}

/// Combined score of one record: question score plus weighted answer score.
///
/// Each field is gated by the threshold on its own, so a record can be
/// accepted on its answer alone.
pub fn score_record(record: &Record, query: &Query) -> f64 {
    let question = score_query(&record.question, query).score;
    let answer = score_query(&record.answer, query).score * ANSWER_WEIGHT;
    question + answer
}
