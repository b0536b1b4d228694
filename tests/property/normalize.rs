//! Normalizer and tokenizer properties.

use super::vietnamese_text;
use proptest::prelude::*;
use tracuu::{fold_diacritics, normalize, tokenize, tokenize_special};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn prop_normalize_idempotent(text in vietnamese_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// No combining marks and no đ survive normalization.
    #[test]
    fn prop_normalize_folds_everything(text in vietnamese_text()) {
        let folded = normalize(&text);
        prop_assert!(
            folded.chars().all(|c| !('\u{0300}'..='\u{036F}').contains(&c)),
            "combining mark survived in {:?}",
            folded
        );
        prop_assert!(!folded.contains(['đ', 'Đ']));
    }

    /// Folding preserves case; lowercasing afterwards equals normalize.
    #[test]
    fn prop_fold_then_lowercase(text in vietnamese_text()) {
        prop_assert_eq!(fold_diacritics(&text).to_lowercase(), normalize(&text));
    }

    /// Plain tokens are a prefix of special tokens.
    #[test]
    fn prop_special_extends_plain(text in vietnamese_text()) {
        let plain = tokenize(&text);
        let special = tokenize_special(&text);
        prop_assert!(special.len() >= plain.len());
        prop_assert_eq!(&special[..plain.len()], &plain[..]);
    }

    /// Tokens are non-empty and carry no separators.
    #[test]
    fn prop_tokens_clean(text in vietnamese_text()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains([',', '.', ':', ';']));
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }
}
