// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accent-insensitive relevance scoring and highlighting for Vietnamese
//! question/answer lookup.
//!
//! The corpus is small and fixed, so there is no index. Each query is
//! normalized once, every record is scored by full scan, and records that clear
//! a query-adaptive threshold come back ranked and ready to highlight.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  normalize   │──▶│  tokenize   │──▶│   scoring    │──▶│    search    │
//! │ (lowercase,  │   │ (words +    │   │ (ratio, gate,│   │ (scan, sort, │
//! │  fold marks) │   │  codes)     │   │  bonuses)    │   │  cap at 20)  │
//! └──────────────┘   └─────────────┘   └──────────────┘   └──────────────┘
//!                           │
//!                           ▼
//!                    ┌─────────────┐
//!                    │  highlight  │  (original text, claimed spans)
//!                    └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use tracuu::{highlight, search, Corpus, Record, Section};
//!
//! let corpus = Corpus::new(vec![Section::new(
//!     "P1",
//!     vec![Record::new(1, "Thông tư 31/2021/TT-BYT quy định gì?", "Quy định về khám bệnh.")],
//! )])
//! .unwrap();
//!
//! let results = search(&corpus, "TT-BYT");
//! assert_eq!(results.len(), 1);
//! assert_eq!(
//!     highlight(&results[0].record.question, "TT-BYT"),
//!     "Thông tư 31/2021/<mark>TT-BYT</mark> quy định gì?"
//! );
//! ```

// Module declarations
pub mod corpus;
pub mod error;
mod highlight;
mod query;
pub mod scoring;
mod search;
pub mod testing;
mod tokenize;
mod types;
pub mod util;

// Re-exports for public API
pub use corpus::{load_corpus, parse_corpus};
pub use error::CorpusError;
pub use highlight::{highlight, highlight_spans, highlight_with, render_spans, Marker};
pub use query::Query;
pub use scoring::{
    is_relevant, match_ratio, max_sequential_matches, relevance_score, score, score_query,
    threshold, DEFAULT_THRESHOLD, RELAXED_THRESHOLD,
};
pub use search::{
    score_record, search, search_with_options, SearchOptions, ANSWER_WEIGHT, MAX_RESULTS,
};
pub use tokenize::{extract_special_tokens, is_code_token, tokenize, tokenize_special};
pub use types::{
    Corpus, HighlightSpan, MatchOutcome, Record, ScoredRecord, Section, PERCENT_BASE,
};
pub use util::normalize::{collapse_whitespace, fold_diacritics, normalize, strip_whitespace};
