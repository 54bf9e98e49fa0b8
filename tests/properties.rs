//! Property-based checks of the search invariants.

use disjoint_words::{
    count_combinations, run, CancellationToken, Dictionary, NoProgress, SearchConfig,
};
use proptest::prelude::*;

// Three-letter words keep the dictionaries dense enough to produce groups.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-l]{3}"
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..=24)
}

// A dictionary's bitwords next to a random permutation of them.
fn masks_and_shuffle_strategy() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    words_strategy().prop_flat_map(|words| {
        let masks = Dictionary::from_words(&words, 3).masks().to_vec();
        (Just(masks.clone()), Just(masks).prop_shuffle())
    })
}

fn count_with(dict: &Dictionary, target: usize, threads: usize) -> u64 {
    let config = SearchConfig::new(3, target).with_threads(threads);
    run(dict, &config, &NoProgress, &CancellationToken::new())
        .unwrap()
        .combinations
}

proptest! {
    #[test]
    fn order_does_not_matter(
        (masks, shuffled) in masks_and_shuffle_strategy(),
        target in 1usize..=4,
    ) {
        prop_assert_eq!(
            count_combinations(&masks, 0, 0, masks.len(), target),
            count_combinations(&shuffled, 0, 0, shuffled.len(), target)
        );
    }

    #[test]
    fn zero_target_is_one(words in words_strategy()) {
        let dict = Dictionary::from_words(&words, 3);
        prop_assert_eq!(count_combinations(dict.masks(), 0, 0, dict.len(), 0), 1);
    }

    #[test]
    fn too_small_dictionary_is_zero(words in prop::collection::vec(word_strategy(), 0..4)) {
        let dict = Dictionary::from_words(&words, 3);
        prop_assert_eq!(count_combinations(dict.masks(), 0, 0, dict.len(), 4), 0);
    }

    #[test]
    fn serial_and_parallel_agree(words in words_strategy(), target in 1usize..=4) {
        let dict = Dictionary::from_words(&words, 3);
        let serial = count_combinations(dict.masks(), 0, 0, dict.len(), target);
        prop_assert_eq!(count_with(&dict, target, 1), serial);
        prop_assert_eq!(count_with(&dict, target, 4), serial);
    }

    #[test]
    fn anagram_spellings_do_not_change_the_count(
        words in words_strategy(),
        target in 1usize..=4,
    ) {
        let dict = Dictionary::from_words(&words, 3);
        let doubled = Dictionary::from_words(
            words.iter().cloned().chain(words.iter().map(|w| w.chars().rev().collect())),
            3,
        );
        prop_assert_eq!(doubled.len(), dict.len());
        prop_assert_eq!(count_with(&doubled, target, 2), count_with(&dict, target, 2));
    }
}
