// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Ratios stay in [0, 1], scores are finite and non-negative, a positive score
//! always means the ratio cleared the threshold, and folding accents on either
//! side never changes the outcome.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tracuu::{normalize, score, threshold};

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    text: String,
    query: String,
}

fuzz_target!(|input: ScoreInput| {
    let outcome = score(&input.text, &input.query);

    assert!((0.0..=1.0).contains(&outcome.ratio), "ratio out of range");
    assert!(outcome.score.is_finite() && outcome.score >= 0.0);

    if outcome.score > 0.0 {
        assert!(outcome.ratio >= threshold(&input.query), "gate bypassed");
    }

    // Deterministic
    assert_eq!(outcome, score(&input.text, &input.query));

    // Accent-insensitive on both sides
    assert_eq!(outcome, score(&normalize(&input.text), &input.query));
    if !normalize(&input.query).trim().is_empty() {
        assert_eq!(outcome, score(&input.text, &normalize(&input.query)));
    }
});
