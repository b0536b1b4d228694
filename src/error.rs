// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading and validating a corpus.
//!
//! Scoring, search and highlighting never fail; only getting a corpus into
//! memory can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("section label must not be empty")]
    EmptyLabel,

    #[error("duplicate section label {0:?}")]
    DuplicateSection(String),

    #[error("duplicate record id {id} in section {section:?}")]
    DuplicateId { section: String, id: u32 },

    #[error("record {id} in section {section:?} is labelled {found:?}")]
    SectionMismatch {
        section: String,
        id: u32,
        found: String,
    },
}
