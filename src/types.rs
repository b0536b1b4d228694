// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model: records, sections, the corpus, and what a search produces.
//!
//! | Type | Lifetime | Purpose |
//! |---|---|---|
//! | `Record` | process | One question/answer pair |
//! | `Section` | process | A labelled, ordered run of records (a tab) |
//! | `Corpus` | process | Ordered sections; read-only once loaded |
//! | `MatchOutcome` | one field | Ratio for the gate, score for ranking |
//! | `ScoredRecord` | one search | A record borrowed from the corpus with its score |
//! | `HighlightSpan` | one render | Byte range over the original text |
//!
//! # Invariants
//!
//! - **Corpus**: section labels are non-empty and unique; record ids are unique
//!   within a section; every record's `section` equals its section's label.
//!   [`Corpus::validate`] checks all three.
//! - **MatchOutcome**: `0 ≤ ratio ≤ 1`, `score ≥ 0`, and `score > 0` only when
//!   the ratio cleared the query's threshold.
//! - **HighlightSpan**: `start < end`, both on char boundaries of the text the
//!   span was computed for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// Display denominator for [`ScoredRecord::match_percent`]: a perfect ratio
/// (100) plus the phrase bonus (50).
pub const PERCENT_BASE: f64 = 150.0;

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub question: String,
    pub answer: String,
    /// Label of the owning section. Filled in from the section when loading.
    #[serde(default)]
    pub section: String,
}

impl Record {
    pub fn new(id: u32, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            section: String::new(),
        }
    }
}

/// A labelled group of records, displayed as one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub records: Vec<Record>,
}

impl Section {
    /// Build a section, stamping `label` onto every record.
    pub fn new(label: impl Into<String>, records: Vec<Record>) -> Self {
        let label = label.into();
        let records = records
            .into_iter()
            .map(|record| Record {
                section: label.clone(),
                ..record
            })
            .collect();
        Self { label, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }
}

/// The whole lookup corpus: sections in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    sections: Vec<Section>,
}

impl Corpus {
    /// Build a corpus, checking the invariants listed in the module docs.
    pub fn new(sections: Vec<Section>) -> Result<Self, CorpusError> {
        let corpus = Self { sections };
        corpus.validate()?;
        Ok(corpus)
    }

    /// Check label and id uniqueness and record/section label agreement.
    pub fn validate(&self) -> Result<(), CorpusError> {
        let mut labels = HashSet::new();
        for section in &self.sections {
            if section.label.trim().is_empty() {
                return Err(CorpusError::EmptyLabel);
            }
            if !labels.insert(section.label.as_str()) {
                return Err(CorpusError::DuplicateSection(section.label.clone()));
            }

            let mut ids = HashSet::new();
            for record in &section.records {
                if !ids.insert(record.id) {
                    return Err(CorpusError::DuplicateId {
                        section: section.label.clone(),
                        id: record.id,
                    });
                }
                if record.section != section.label {
                    return Err(CorpusError::SectionMismatch {
                        section: section.label.clone(),
                        id: record.id,
                        found: record.section.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.iter().map(|section| section.label.as_str())
    }

    /// Look up a section by label.
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.label == label)
    }

    /// Look up one record by section label and id.
    pub fn record(&self, label: &str, id: u32) -> Option<&Record> {
        self.section(label).and_then(|section| section.get(id))
    }

    /// Every record, section by section.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.sections.iter().flat_map(|section| section.records.iter())
    }

    pub fn total_records(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}

/// Result of scoring one candidate text against one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MatchOutcome {
    /// Bounded match ratio in `[0, 1]`; feeds the acceptance threshold.
    pub ratio: f64,
    /// Relevance score, 0 unless accepted; feeds ranking.
    pub score: f64,
}

impl MatchOutcome {
    /// Whether the candidate cleared the threshold and earned a score.
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// A record accepted by one search, with its combined score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord<'a> {
    pub record: &'a Record,
    pub score: f64,
    pub section: &'a str,
}

impl ScoredRecord<'_> {
    /// The "match %" badge shown next to a hit: `round(score / 150 · 100)`.
    ///
    /// Not clamped; a record hit in both question and answer can pass 100.
    pub fn match_percent(&self) -> u32 {
        (self.score / PERCENT_BASE * 100.0).round().max(0.0) as u32
    }
}

/// Byte range `[start, end)` to mark in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the two half-open ranges share at least one byte.
    pub fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}
