// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine over a loaded corpus.
//!
//! Normalize the query once, score each record's question and answer, keep
//! what clears the threshold, sort, cap at twenty.

mod engine;

pub use engine::*;
