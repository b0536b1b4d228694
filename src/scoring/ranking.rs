// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how accepted records get sorted.
//!
//! Score dominates. Ties are broken by section label and then record id, so
//! two searches over the same corpus always list equal-score hits the same
//! way, whether scoring ran serially or in parallel.

use std::cmp::Ordering;

use crate::types::ScoredRecord;

/// Compare two scored records for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Section label** - ascending
/// 3. **Record id** - ascending
pub fn compare_results(a: &ScoredRecord<'_>, b: &ScoredRecord<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.section.cmp(b.section))
        .then_with(|| a.record.id.cmp(&b.record.id))
}

/// Sort in ranking order, best first.
pub fn sort_results(results: &mut [ScoredRecord<'_>]) {
    results.sort_by(compare_results);
}
