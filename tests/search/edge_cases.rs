//! Degenerate queries and corpora.

use super::common::{make_corpus, make_record, sample_corpus};
use tracuu::{search, Corpus};

#[test]
fn blank_queries_return_nothing() {
    let corpus = sample_corpus();
    for query in ["", " ", "\t\n", "   "] {
        assert!(search(&corpus, query).is_empty(), "query {:?}", query);
    }
}

#[test]
fn separator_only_query_returns_nothing() {
    assert!(search(&sample_corpus(), ",.:;").is_empty());
}

#[test]
fn lone_combining_mark_returns_nothing() {
    assert!(search(&sample_corpus(), "\u{0301}").is_empty());
}

#[test]
fn empty_corpus_returns_nothing() {
    let corpus = Corpus::default();
    assert!(search(&corpus, "khám bệnh").is_empty());
}

#[test]
fn empty_record_text_never_matches() {
    let corpus = make_corpus(vec![("P1", vec![make_record(1, "", "")])]);
    assert!(search(&corpus, "a").is_empty());
}

#[test]
fn regex_metacharacters_in_query_do_not_panic() {
    let corpus = sample_corpus();
    for query in ["(31", "[TT-BYT", "a+b*", "\\d", "$^", "?"] {
        let _ = search(&corpus, query);
    }
}

#[test]
fn results_never_include_zero_scores() {
    let corpus = sample_corpus();
    let results = search(&corpus, "bệnh");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.score > 0.0));
}

#[test]
fn query_longer_than_every_record() {
    let query = "thông tư quy định chi tiết về khám bệnh chữa bệnh và hồ sơ bệnh án lưu trữ";
    let corpus = sample_corpus();
    let results = search(&corpus, query);
    assert!(results.len() <= corpus.total_records());
}
