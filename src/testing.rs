// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Corpus, Record, Section};

/// Create a record with no section yet; [`make_corpus`] stamps it.
pub fn make_record(id: u32, question: &str, answer: &str) -> Record {
    Record::new(id, question, answer)
}

/// Build a corpus from `(label, records)` pairs, in order.
///
/// Panics on invalid input; fixtures are expected to be well-formed.
pub fn make_corpus(sections: Vec<(&str, Vec<Record>)>) -> Corpus {
    let sections = sections
        .into_iter()
        .map(|(label, records)| Section::new(label, records))
        .collect();
    Corpus::new(sections).expect("test corpus must be valid")
}

/// The record used throughout the end-to-end scenarios.
pub fn decree_record(id: u32) -> Record {
    make_record(
        id,
        "Thông tư 31/2021/TT-BYT quy định gì?",
        "Quy định về khám bệnh.",
    )
}

/// A small five-section corpus shaped like the real lookup data.
pub fn sample_corpus() -> Corpus {
    make_corpus(vec![
        (
            "P1",
            vec![
                decree_record(1),
                make_record(
                    2,
                    "Hồ sơ bệnh án gồm những giấy tờ gì?",
                    "Gồm phiếu khám, kết quả xét nghiệm và đơn thuốc.",
                ),
            ],
        ),
        (
            "P2",
            vec![make_record(
                1,
                "Nghị định 98/2021/NĐ-CP áp dụng cho ai?",
                "Áp dụng cho cơ sở khám bệnh, chữa bệnh.",
            )],
        ),
        (
            "P3",
            vec![make_record(
                1,
                "Thời hạn lưu trữ hồ sơ bệnh án là bao lâu?",
                "Tối thiểu 10 năm theo quy định chi tiết của Bộ Y tế.",
            )],
        ),
        (
            "P4",
            vec![make_record(
                1,
                "Điều 5 quy định về trách nhiệm của ai?",
                "Trách nhiệm của người đứng đầu cơ sở.",
            )],
        ),
        ("P5", vec![]),
    ])
}
