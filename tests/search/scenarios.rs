//! End-to-end lookups against small Vietnamese fixtures.

use super::common::{decree_record, hit_keys, make_corpus, sample_corpus};
use tracuu::{search, threshold, RELAXED_THRESHOLD};

// ============================================================================
// DOCUMENT CODES
// ============================================================================

#[test]
fn decree_number_scores_full_marks() {
    let corpus = make_corpus(vec![("P1", vec![decree_record(1)])]);
    assert_eq!(threshold("31/2021"), RELAXED_THRESHOLD);

    let results = search(&corpus, "31/2021");
    assert_eq!(results.len(), 1);
    // ratio clamps to 1, phrase and whitespace-free bonuses both apply
    assert_eq!(results[0].score, 180.0);
    assert_eq!(results[0].match_percent(), 120);
}

#[test]
fn agency_code_query_finds_decree() {
    let corpus = make_corpus(vec![("P1", vec![decree_record(1)])]);
    let results = search(&corpus, "TT-BYT");
    assert_eq!(hit_keys(&results), vec![("P1", 1)]);
    assert_eq!(results[0].score, 180.0);
}

#[test]
fn agency_code_is_case_and_accent_insensitive() {
    let corpus = sample_corpus();
    let upper = search(&corpus, "NĐ-CP");
    let lower = search(&corpus, "nd-cp");
    assert_eq!(hit_keys(&upper), vec![("P2", 1)]);
    assert_eq!(hit_keys(&upper), hit_keys(&lower));
}

// ============================================================================
// PLAIN WORDS
// ============================================================================

#[test]
fn phrase_query_ranks_exact_questions_first() {
    let corpus = sample_corpus();
    let results = search(&corpus, "hồ sơ bệnh án");
    let keys = hit_keys(&results);

    // Both questions contain the phrase verbatim and tie at the top.
    assert_eq!(&keys[..2], &[("P1", 2), ("P3", 1)]);
    assert_eq!(results[0].score, results[1].score);
    assert!(results[2..].iter().all(|r| r.score < results[0].score));
}

#[test]
fn accentless_and_accented_queries_agree() {
    let corpus = sample_corpus();
    assert_eq!(
        hit_keys(&search(&corpus, "trách nhiệm")),
        hit_keys(&search(&corpus, "trach nhiem"))
    );
}

#[test]
fn unrelated_query_finds_nothing() {
    assert!(search(&sample_corpus(), "phần mềm máy tính").is_empty());
}
