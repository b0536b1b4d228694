//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::io::Write;

use tempfile::NamedTempFile;
use tracuu::{Corpus, ScoredRecord};

// Re-export canonical test utilities from tracuu::testing
pub use tracuu::testing::{decree_record, make_corpus, make_record, sample_corpus};

// ============================================================================
// FIXTURES
// ============================================================================

/// Corpus in the ordered on-disk layout, mirroring `sample_corpus` in spirit.
pub const ORDERED_JSON: &str = r#"[
  {
    "label": "P1",
    "records": [
      { "id": 1, "question": "Thông tư 31/2021/TT-BYT quy định gì?", "answer": "Quy định về khám bệnh." },
      { "id": 2, "question": "Hồ sơ bệnh án gồm những giấy tờ gì?", "answer": "Gồm phiếu khám và đơn thuốc." }
    ]
  },
  {
    "label": "P2",
    "records": [
      { "id": 1, "question": "Nghị định 98/2021/NĐ-CP áp dụng cho ai?", "answer": "Cơ sở khám bệnh, chữa bệnh." }
    ]
  },
  { "label": "P3", "records": [] }
]"#;

/// Write `json` to a temporary file that lives as long as the handle.
pub fn corpus_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write corpus");
    file
}

/// `(section, id)` pairs of a result list, in rank order.
pub fn hit_keys<'a>(results: &[ScoredRecord<'a>]) -> Vec<(&'a str, u32)> {
    results.iter().map(|r| (r.section, r.record.id)).collect()
}

/// `n` records in one section that all mention "khám bệnh" in the question.
pub fn numbered_corpus(n: u32) -> Corpus {
    let records = (1..=n)
        .map(|id| make_record(id, &format!("Câu {} về khám bệnh", id), ""))
        .collect();
    make_corpus(vec![("P1", records)])
}

/// Assert results are sorted best first with the deterministic tie-break.
pub fn assert_ranked(results: &[ScoredRecord<'_>]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score >= b.score, "scores out of order: {} < {}", a.score, b.score);
        if a.score == b.score {
            assert!(
                (a.section, a.record.id) < (b.section, b.record.id),
                "tie not broken by section then id"
            );
        }
    }
}
