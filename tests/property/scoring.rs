//! Scoring and search properties.

use super::common::sample_corpus;
use super::{query_strategy, vietnamese_text};
use proptest::prelude::*;
use tracuu::{
    match_ratio, normalize, score, search, threshold, DEFAULT_THRESHOLD, MAX_RESULTS,
    RELAXED_THRESHOLD,
};

/// Largest possible single-field score: full ratio plus both bonuses.
const MAX_FIELD_SCORE: f64 = 180.0;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_ratio_bounded(text in vietnamese_text(), query in vietnamese_text()) {
        let ratio = match_ratio(&text, &query);
        prop_assert!((0.0..=1.0).contains(&ratio), "ratio {} out of range", ratio);
    }

    #[test]
    fn prop_threshold_is_one_of_two(query in vietnamese_text()) {
        let t = threshold(&query);
        prop_assert!(t == DEFAULT_THRESHOLD || t == RELAXED_THRESHOLD);
    }

    /// Positive scores only come from ratios that cleared the gate.
    #[test]
    fn prop_score_respects_gate(text in vietnamese_text(), query in query_strategy()) {
        let outcome = score(&text, &query);
        if outcome.score > 0.0 {
            prop_assert!(outcome.ratio >= threshold(&query));
            prop_assert!(outcome.score >= outcome.ratio * 100.0);
            prop_assert!(outcome.score <= MAX_FIELD_SCORE);
        } else {
            prop_assert_eq!(outcome.score, 0.0);
        }
    }

    /// Accents and case in the query never change the outcome.
    #[test]
    fn prop_query_accent_insensitive(text in vietnamese_text(), query in query_strategy()) {
        prop_assert_eq!(score(&text, &query), score(&text, &normalize(&query)));
    }

    /// Accents and case in the candidate never change the outcome.
    #[test]
    fn prop_text_accent_insensitive(text in vietnamese_text(), query in query_strategy()) {
        prop_assert_eq!(score(&text, &query), score(&normalize(&text), &query));
    }

    #[test]
    fn prop_search_sorted_and_capped(query in query_strategy()) {
        let corpus = sample_corpus();
        let results = search(&corpus, &query);
        prop_assert!(results.len() <= MAX_RESULTS);
        prop_assert!(results.iter().all(|r| r.score > 0.0));
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
