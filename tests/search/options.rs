//! Result limits and section filters.

use super::common::{hit_keys, numbered_corpus, sample_corpus};
use tracuu::{search, search_with_options, SearchOptions, MAX_RESULTS};

#[test]
fn default_search_caps_at_twenty() {
    let corpus = numbered_corpus(25);
    assert_eq!(search(&corpus, "khám bệnh").len(), MAX_RESULTS);
}

#[test]
fn smaller_limit_is_respected() {
    let corpus = numbered_corpus(25);
    let options = SearchOptions::default().with_limit(3);
    let results = search_with_options(&corpus, "khám bệnh", &options);
    assert_eq!(results.len(), 3);
    assert_eq!(
        hit_keys(&results),
        hit_keys(&search(&corpus, "khám bệnh")[..3])
    );
}

#[test]
fn larger_limit_is_clamped() {
    let corpus = numbered_corpus(25);
    let options = SearchOptions::default().with_limit(100);
    assert_eq!(
        search_with_options(&corpus, "khám bệnh", &options).len(),
        MAX_RESULTS
    );
}

#[test]
fn zero_limit_returns_nothing() {
    let options = SearchOptions::default().with_limit(0);
    assert!(search_with_options(&numbered_corpus(5), "khám bệnh", &options).is_empty());
}

#[test]
fn section_filter_restricts_results() {
    let corpus = sample_corpus();
    let options = SearchOptions::default().with_sections(["P3"]);
    let results = search_with_options(&corpus, "hồ sơ bệnh án", &options);
    assert_eq!(hit_keys(&results), vec![("P3", 1)]);
}

#[test]
fn unknown_section_filter_matches_nothing() {
    let options = SearchOptions::default().with_sections(["P9"]);
    assert!(search_with_options(&sample_corpus(), "bệnh", &options).is_empty());
}
