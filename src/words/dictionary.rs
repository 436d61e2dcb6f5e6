use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::{IntoStreamer, Set};
use tracing::debug;

use super::rack::Rack;
use super::word_search::RackSearcher;
use crate::error::Error;

/// Reads a word list with one word per line. Blank lines are kept as the empty word.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        words.push(line.map_err(io_err)?);
    }
    debug!(path = %path.display(), words = words.len(), "read word file");
    Ok(words)
}

/// Word list stored as an fst set and searched with [`RackSearcher`]
pub struct FstDictionary {
    dict: Set<Vec<u8>>,
}

impl FstDictionary {
    pub fn from_words<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // fst wants its keys sorted and unique
        let mut words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_owned()).collect();
        words.sort_unstable();
        words.dedup();
        let dict = Set::from_iter(words)?;
        Ok(Self { dict })
    }

    /// Every word the rack can spell, in lexicographic order
    pub fn find_words(&self, rack: &Rack, min_length: usize) -> Result<Vec<String>, Error> {
        let matcher = RackSearcher { rack, min_length };
        Ok(self.dict.search(matcher).into_stream().into_strs()?)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.dict.contains(word)
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_dictionary_lookup() {
        let vocab = ["cat", "dog", "mouse", "moose", "laptop"];
        let dict = FstDictionary::from_words(vocab).unwrap();

        let valid = dict
            .find_words(&Rack::from_input("mo_se", Some('_')), 0)
            .unwrap();
        assert_eq!(valid, vec!["moose", "mouse"]);
        assert!(dict.contains("laptop"));
        assert!(!dict.contains("lap"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let dict = FstDictionary::from_words(["go", "go", "do"]).unwrap();
        assert_eq!(dict.len(), 2);
        let rack: Rack = "odg".chars().collect();
        assert_eq!(dict.find_words(&rack, 0).unwrap(), vec!["do", "go"]);
    }

    #[test]
    fn test_empty_word() {
        let dict = FstDictionary::from_words(["", "hi"]).unwrap();
        assert_eq!(dict.find_words(&Rack::empty(), 0).unwrap(), vec![""]);
        let rack: Rack = "hi".chars().collect();
        assert_eq!(dict.find_words(&rack, 0).unwrap(), vec!["", "hi"]);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = FstDictionary::from_words(Vec::<String>::new()).unwrap();
        assert!(dict.is_empty());
        let rack: Rack = "abc".chars().collect();
        assert!(dict.find_words(&rack, 0).unwrap().is_empty());
    }

    #[test]
    fn test_read_word_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "ate\r\neat\n\ntea\n").unwrap();
        assert_eq!(read_word_file(&path).unwrap(), vec!["ate", "eat", "", "tea"]);

        assert!(matches!(
            read_word_file(dir.path().join("nope.txt")),
            Err(Error::Io { .. })
        ));
    }
}
