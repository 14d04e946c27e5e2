//! Property tests for summary invariants

use precis_core::{LanguageResources, RuleSegmenter, StemWeights, Summarizer};
use proptest::prelude::*;
use std::sync::OnceLock;

fn summarizer() -> &'static Summarizer {
    static SUMMARIZER: OnceLock<Summarizer> = OnceLock::new();
    SUMMARIZER.get_or_init(|| Summarizer::new().unwrap())
}

fn sentence() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-zA-Z]{1,10}", 1..15),
        prop::sample::select(vec![".", "!", "?"]),
    )
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end))
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 0..12).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_selection_preserves_document_order(
        text in document(),
        ratio in 0.05f64..=1.0,
        max in 1usize..8,
    ) {
        let summary = summarizer().summarize_with(&text, ratio, max);

        prop_assert!(summary.sentences.windows(2).all(|w| w[0].index < w[1].index));
        prop_assert!(summary
            .sentences
            .iter()
            .all(|s| s.index < summary.statistics.original_sentences));
    }

    #[test]
    fn prop_summary_size_is_bounded(
        text in document(),
        ratio in 0.05f64..=1.0,
        max in 1usize..8,
    ) {
        let summary = summarizer().summarize_with(&text, ratio, max);
        let total = summary.statistics.original_sentences;

        if total <= 2 {
            prop_assert_eq!(&summary.text, &text);
            prop_assert_eq!(summary.statistics.compression_ratio, 0.0);
        } else {
            prop_assert!(summary.sentences.len() <= max.min(total));
            prop_assert!(!summary.sentences.is_empty());
        }
        prop_assert_eq!(summary.statistics.summary_sentences, summary.sentences.len());
    }

    #[test]
    fn prop_compression_is_monotonic(
        text in document(),
        ratio in 0.05f64..=1.0,
        max in 1usize..8,
    ) {
        let stats = summarizer().summarize_with(&text, ratio, max).statistics;

        prop_assert!(stats.summary_words <= stats.original_words);
        prop_assert!((0.0..=100.0).contains(&stats.compression_ratio));
    }

    #[test]
    fn prop_summarize_is_deterministic(text in document(), max in 1usize..8) {
        let first = summarizer().summarize_with(&text, 0.3, max);
        let second = summarizer().summarize_with(&text, 0.3, max);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in "\\PC{0,300}") {
        let stats = summarizer().summarize(&text).statistics;

        prop_assert!((0.0..=100.0).contains(&stats.compression_ratio));
        prop_assert!(stats.summary_sentences <= stats.original_sentences);
    }

    #[test]
    fn prop_stem_weights_are_normalized(text in document()) {
        let resources = LanguageResources::english().unwrap();
        let segmenter = RuleSegmenter::from_resources(&resources);
        let stemmer = resources.stemmer_algorithm().build();
        let weights = StemWeights::build(
            &text,
            &segmenter,
            resources.stopwords(),
            stemmer.as_ref(),
        );

        if weights.is_empty() {
            prop_assert_eq!(weights.max_weight(), None);
        } else {
            prop_assert_eq!(weights.max_weight(), Some(1.0));
            prop_assert!(weights.iter().all(|(_, w)| w > 0.0 && w <= 1.0));
        }
    }
}
