pub mod dictionary;
pub mod rack;
pub mod search;
pub mod trie;
pub mod word_search;

#[cfg(test)]
mod proptests;
