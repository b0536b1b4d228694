// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a candidate text gets its numbers.
//!
//! Two numbers come out of scoring. The ratio decides whether a candidate is
//! relevant at all, against a threshold the query itself picks. The score,
//! computed only for candidates that pass, decides the order.

mod core;
pub mod ranking;
pub mod threshold;

pub use self::core::*;
pub use threshold::{
    is_relevant, threshold, threshold_for_tokens, DEFAULT_THRESHOLD, RELAXED_THRESHOLD,
    SHORT_TOKEN_MAX_CHARS,
};
