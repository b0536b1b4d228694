// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a corpus from JSON.
//!
//! Two layouts are accepted. The ordered form keeps tab order explicit:
//!
//! ```json
//! [
//!   { "label": "P1", "records": [{ "id": 1, "question": "…", "answer": "…" }] },
//!   { "label": "P2", "records": [] }
//! ]
//! ```
//!
//! The keyed form (`{ "P1": [...], "P2": [...] }`) is what many hand-written
//! data files look like. JSON objects carry no order, so its sections come
//! out sorted by label.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CorpusError;
use crate::types::{Corpus, Record, Section};

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Ordered(Vec<SectionFile>),
    Keyed(BTreeMap<String, Vec<Record>>),
}

#[derive(Deserialize)]
struct SectionFile {
    label: String,
    #[serde(default)]
    records: Vec<Record>,
}

/// Read and validate a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus = parse_corpus(&content)?;

    tracing::info!(
        path = %path.display(),
        sections = corpus.sections().len(),
        records = corpus.total_records(),
        "loaded corpus"
    );
    Ok(corpus)
}

/// Parse and validate a corpus from a JSON string.
pub fn parse_corpus(json: &str) -> Result<Corpus, CorpusError> {
    let file: CorpusFile = serde_json::from_str(json)?;

    let sections: Vec<Section> = match file {
        CorpusFile::Ordered(sections) => sections
            .into_iter()
            .map(|section| Section::new(section.label, section.records))
            .collect(),
        CorpusFile::Keyed(map) => map
            .into_iter()
            .map(|(label, records)| Section::new(label, records))
            .collect(),
    };

    for record in sections.iter().flat_map(|s| s.records.iter()) {
        if record.question.trim().is_empty() && record.answer.trim().is_empty() {
            tracing::warn!(section = %record.section, id = record.id, "record has no text");
        }
    }

    Corpus::new(sections)
}
