// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by every stage of the pipeline.
//!
//! Right now that is just text normalization, which everything downstream
//! (tokenizer, scorer, threshold) runs its input through first.

pub mod normalize;
