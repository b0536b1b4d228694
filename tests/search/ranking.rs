//! Ordering of results: score, then section label, then record id.

use super::common::{assert_ranked, hit_keys, make_corpus, make_record, sample_corpus};
use tracuu::{search, ANSWER_WEIGHT};

#[test]
fn question_match_outranks_answer_match() {
    let corpus = make_corpus(vec![(
        "P1",
        vec![
            make_record(1, "Câu hỏi khác", "khám bệnh"),
            make_record(2, "khám bệnh", "Câu trả lời khác"),
        ],
    )]);

    let results = search(&corpus, "khám bệnh");
    assert_eq!(hit_keys(&results), vec![("P1", 2), ("P1", 1)]);
    assert_eq!(results[0].score, 180.0);
    assert!((results[1].score - 180.0 * ANSWER_WEIGHT).abs() < 1e-9);
}

#[test]
fn question_and_answer_scores_add_up() {
    let corpus = make_corpus(vec![(
        "P1",
        vec![
            make_record(1, "khám bệnh", "khám bệnh"),
            make_record(2, "khám bệnh", ""),
        ],
    )]);

    let results = search(&corpus, "khám bệnh");
    assert_eq!(hit_keys(&results), vec![("P1", 1), ("P1", 2)]);
    assert!((results[0].score - 180.0 * (1.0 + ANSWER_WEIGHT)).abs() < 1e-9);
}

#[test]
fn ties_break_on_section_then_id() {
    let corpus = make_corpus(vec![
        (
            "P2",
            vec![make_record(3, "khám bệnh", ""), make_record(1, "khám bệnh", "")],
        ),
        ("P1", vec![make_record(9, "khám bệnh", "")]),
    ]);

    let results = search(&corpus, "khám bệnh");
    assert_eq!(hit_keys(&results), vec![("P1", 9), ("P2", 1), ("P2", 3)]);
}

#[test]
fn ranking_is_deterministic() {
    let corpus = sample_corpus();
    for query in ["bệnh", "khám bệnh", "2021", "quy định", "hồ sơ"] {
        let first = search(&corpus, query);
        let second = search(&corpus, query);
        assert_eq!(first, second, "query {:?} ranked differently", query);
        assert_ranked(&first);
    }
}
