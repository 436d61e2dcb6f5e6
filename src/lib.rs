//! # rackwords
//!
//! Finds every dictionary word that can be spelled from a rack of characters, using
//! each character at most as often as it appears in the rack.
//!
//! The dictionary is loaded into a [`Trie`] and walked depth first. An edge is only
//! followed while the rack still holds the character on it, so whole subtrees of
//! unreachable words are never visited.
//!
//! ```
//! let dictionary = ["ate", "eat", "tea", "dog", "do", "god", "goo", "go", "good"];
//! let words = rackwords::find_words("oogd", &dictionary);
//! assert_eq!(words, ["do", "dog", "go", "god", "goo", "good"]);
//! ```

use tracing::debug;

pub mod config;
pub mod error;
pub mod utils;
pub mod words;

pub use config::{SearchConfig, Strategy};
pub use error::Error;
pub use words::dictionary::FstDictionary;
pub use words::rack::{Letter, Rack};
pub use words::trie::{Trie, TrieNode};

/// Returns the words of `dictionary` whose characters form a sub-multiset of the
/// characters of `input`.
///
/// Words come back in trie pre-order with children in ascending `char` order, which
/// is lexicographic. A word listed twice in `dictionary` is returned once. Empty
/// input is not special: it still matches the empty word if the dictionary has one.
pub fn find_words<S: AsRef<str>>(input: &str, dictionary: &[S]) -> Vec<String> {
    find_words_with(input, dictionary, &SearchConfig::default())
}

/// [`find_words`] with a minimum word length, a blank tile marker and a choice of
/// search strategy
pub fn find_words_with<S: AsRef<str>>(
    input: &str,
    dictionary: &[S],
    config: &SearchConfig,
) -> Vec<String> {
    if dictionary.is_empty() {
        return Vec::new();
    }

    let trie: Trie = dictionary.iter().collect();
    let rack = Rack::from_input(input, config.blank);
    debug!(
        words = trie.len(),
        nodes = trie.node_count(),
        rack = rack.n_total,
        strategy = ?config.strategy,
        "searching"
    );

    let found = words::search::search(&trie, &rack, config);
    debug!(found = found.len(), "search finished");
    found
}
