use super::dictionary::FstDictionary;
use super::rack::Rack;
use super::search::TrieSearcher;
use super::trie::Trie;
use crate::{find_words, find_words_with, SearchConfig, Strategy as SearchStrategy};

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Brute force: every distinct dictionary word the rack can spell, sorted
fn reference(rack: &Rack, dictionary: &[String], min_length: usize) -> Vec<String> {
    dictionary
        .iter()
        .filter(|w| w.chars().count() >= min_length && rack.can_spell(w))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn dictionary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{0,5}", 0..24)
}

fn unicode_dictionary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[aé語ß]{0,4}", 0..16)
}

/// A dictionary together with an arbitrary permutation of it
fn shuffled_dictionary() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    dictionary().prop_flat_map(|dict| (Just(dict.clone()), Just(dict).prop_shuffle()))
}

proptest! {
    #[test]
    fn prop_sound_and_complete(dict in dictionary(), input in "[a-e]{0,7}") {
        let found = find_words(&input, &dict);
        let rack: Rack = input.chars().collect();
        prop_assert_eq!(found, reference(&rack, &dict, 0));
    }

    #[test]
    fn prop_strategies_agree(
        dict in dictionary(),
        input in "[a-e?]{0,7}",
        min_length in 0usize..4,
    ) {
        let trie: Trie = dict.iter().collect();
        let rack = Rack::from_input(&input, Some('?'));
        let searcher = TrieSearcher::new(&trie, min_length);
        let cow = searcher.search(&rack, SearchStrategy::CopyOnWrite);
        let bt = searcher.search(&rack, SearchStrategy::Backtrack);
        prop_assert_eq!(&cow, &bt);
        prop_assert_eq!(cow, reference(&rack, &dict, min_length));
    }

    #[test]
    fn prop_fst_matches_trie(
        dict in unicode_dictionary(),
        input in "[aé語ß*]{0,6}",
        min_length in 0usize..3,
    ) {
        let config = SearchConfig { min_length, blank: Some('*'), ..SearchConfig::default() };
        let from_trie = find_words_with(&input, &dict, &config);
        let fst = FstDictionary::from_words(&dict).unwrap();
        let from_fst = fst.find_words(&Rack::from_input(&input, Some('*')), min_length).unwrap();
        prop_assert_eq!(from_trie, from_fst);
    }

    #[test]
    fn prop_dictionary_order_irrelevant(
        (dict, shuffled) in shuffled_dictionary(),
        input in "[a-e]{0,7}",
    ) {
        prop_assert_eq!(find_words(&input, &dict), find_words(&input, &shuffled));
    }

    #[test]
    fn prop_empty_dictionary(input in "\\PC{0,8}") {
        let empty: Vec<String> = Vec::new();
        prop_assert!(find_words(&input, &empty).is_empty());
    }
}
