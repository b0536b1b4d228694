// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API to verify it never panics,
//! never returns more than the cap, and never breaks the ranking order.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tracuu::testing::sample_corpus;
use tracuu::{search, Corpus, MAX_RESULTS};

// Emoji, combining marks with no base letter, null bytes, unbalanced regex
// syntax. None of it should crash.
fuzz_target!(|query: &[u8]| {
    static CORPUS: std::sync::OnceLock<Corpus> = std::sync::OnceLock::new();
    let corpus = CORPUS.get_or_init(sample_corpus);

    let query = String::from_utf8_lossy(query);
    let results = search(corpus, &query);

    assert!(results.len() <= MAX_RESULTS, "result cap exceeded");

    for result in &results {
        assert!(result.score > 0.0, "zero-score record returned");
        assert!(result.score.is_finite(), "non-finite score");
        assert!(
            corpus.record(result.section, result.record.id).is_some(),
            "result does not belong to the corpus"
        );
    }

    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score >= b.score, "results out of order");
        if a.score == b.score {
            assert!(
                (a.section, a.record.id) < (b.section, b.record.id),
                "tie not broken deterministically"
            );
        }
    }
});
