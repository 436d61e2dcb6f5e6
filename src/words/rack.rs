use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    Blank,
    Letter(char),
}

/// Multiset of the characters still available to spell with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    /// Histogram count of each letter in the rack, without zero entries
    letters: HashMap<char, u32>,
    /// Number of blanks in the rack
    pub n_blanks: u32,
    /// The total number of remaining letters+wildcards to play
    pub n_total: u32,
}

impl Rack {
    pub fn new(mut letters: HashMap<char, u32>, n_blanks: u32) -> Self {
        letters.retain(|_, n| *n > 0);
        let n_total = letters.values().sum::<u32>() + n_blanks;
        Self {
            letters,
            n_blanks,
            n_total,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a rack from an input string. When `blank` is set, every occurrence of
    /// that character becomes a wildcard tile rather than a literal.
    pub fn from_input(input: &str, blank: Option<char>) -> Self {
        let mut letters = HashMap::new();
        let mut n_blanks = 0;
        for c in input.chars() {
            if Some(c) == blank {
                n_blanks += 1;
            } else {
                *letters.entry(c).or_insert(0) += 1;
            }
        }
        Self::new(letters, n_blanks)
    }

    pub fn count(&self, letter: char) -> u32 {
        self.letters.get(&letter).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.n_total == 0
    }

    /// Adds an additional letter in-place. Used to undo `remove_inplace`
    pub fn add_inplace(&mut self, letter: Letter) {
        match letter {
            Letter::Blank => self.n_blanks += 1,
            Letter::Letter(l) => *self.letters.entry(l).or_insert(0) += 1,
        };
        self.n_total += 1;
    }

    /// Does an in-place removal of the provided letter. The caller must have checked
    /// that the letter is available, e.g. through [`Rack::pick`].
    pub fn remove_inplace(&mut self, letter: Letter) {
        match letter {
            Letter::Blank => {
                debug_assert!(self.n_blanks > 0);
                self.n_blanks -= 1
            }
            Letter::Letter(l) => {
                let n = self.count(l);
                debug_assert!(n > 0, "removing {l:?} from a rack without it");
                if n > 1 {
                    self.letters.insert(l, n - 1);
                } else {
                    self.letters.remove(&l);
                }
            }
        };
        self.n_total -= 1;
    }

    /// Returns a copy of the rack with one `letter` taken out
    pub fn remove(&self, letter: char) -> Option<Self> {
        if self.count(letter) > 0 {
            let mut tmp = self.clone();
            tmp.remove_inplace(Letter::Letter(letter));
            Some(tmp)
        } else {
            None
        }
    }

    /// Returns a copy of the rack with one blank taken out
    pub fn remove_wildcard(&self) -> Option<Self> {
        if self.n_blanks > 0 {
            let mut tmp = self.clone();
            tmp.remove_inplace(Letter::Blank);
            Some(tmp)
        } else {
            None
        }
    }

    /// The tile that would be spent on `letter`: the letter itself while any are left,
    /// a blank otherwise
    pub fn pick(&self, letter: char) -> Option<Letter> {
        if self.count(letter) > 0 {
            Some(Letter::Letter(letter))
        } else if self.n_blanks > 0 {
            Some(Letter::Blank)
        } else {
            None
        }
    }

    /// Copy-on-write form of [`Rack::pick`] followed by [`Rack::remove_inplace`]
    pub fn take(&self, letter: char) -> Option<(Self, Letter)> {
        self.remove(letter)
            .map(|r| (r, Letter::Letter(letter)))
            .or_else(|| self.remove_wildcard().map(|r| (r, Letter::Blank)))
    }

    /// Whether every character of `word` can be covered by this rack
    pub fn can_spell(&self, word: &str) -> bool {
        let mut rack = self.clone();
        word.chars().all(|c| match rack.pick(c) {
            Some(tile) => {
                rack.remove_inplace(tile);
                true
            }
            None => false,
        })
    }
}

impl std::iter::FromIterator<char> for Rack {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut letters = HashMap::new();
        iter.into_iter()
            .for_each(|x| *letters.entry(x).or_insert(0) += 1);
        Self::new(letters, 0)
    }
}
