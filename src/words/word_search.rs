use fst::Automaton;

use super::rack::Rack;

/*
    Automaton that walks an fst word set while paying for every character out of a
    rack. Keys are UTF-8, so bytes of a multi-byte character are buffered until the
    character is complete and only then charged to the rack.
*/

#[derive(Debug, Clone)]
pub struct RackSearcherState {
    /// Number of whole characters consumed so far
    pub position: usize,
    /// Remaining letters in the rack
    pub rack: Rack,
    /// Leading bytes of a character that is not complete yet
    pending: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct RackSearcher<'a> {
    pub rack: &'a Rack,
    /// Minimum length for anything to be considered a word
    pub min_length: usize,
}

impl<'a> Automaton for RackSearcher<'a> {
    type State = Option<RackSearcherState>;

    fn start(&self) -> Self::State {
        Some(RackSearcherState {
            position: 0,
            rack: self.rack.clone(),
            pending: Vec::new(),
        })
    }

    fn is_match(&self, state: &Self::State) -> bool {
        match state {
            Some(state) => state.pending.is_empty() && state.position >= self.min_length,
            None => false,
        }
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        let state = state.as_ref()?;
        let mut pending = state.pending.clone();
        pending.push(byte);
        match std::str::from_utf8(&pending) {
            Ok(s) => {
                let letter = s.chars().next()?;
                let (rack, _) = state.rack.take(letter)?;
                Some(RackSearcherState {
                    position: state.position + 1,
                    rack,
                    pending: Vec::new(),
                })
            }
            // Character not finished yet
            Err(e) if e.error_len().is_none() => Some(RackSearcherState {
                position: state.position,
                rack: state.rack.clone(),
                pending,
            }),
            Err(_) => None,
        }
    }

    fn can_match(&self, state: &Self::State) -> bool {
        state.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fst::{IntoStreamer, Streamer};

    fn run(words: &[&str], rack: &Rack, min_length: usize) -> Vec<(String, usize)> {
        let mut build = fst::SetBuilder::memory();
        let mut sorted = words.to_vec();
        sorted.sort_unstable();
        build.extend_iter(sorted).unwrap();
        let dict = build.into_set();

        let automaton = RackSearcher { rack, min_length };
        let mut stream = dict.search_with_state(automaton).into_stream();
        let mut acc = vec![];
        while let Some((w, state)) = stream.next() {
            acc.push((
                std::str::from_utf8(w).unwrap().to_string(),
                state.expect("reached valid state").position,
            ))
        }
        acc
    }

    #[test]
    fn test_simple_search() {
        let rack: Rack = "tepa".chars().collect();
        let acc = run(&["pate", "peat", "tape", "tapes", "tepa"], &rack, 0);
        let words: Vec<_> = acc.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["pate", "peat", "tape", "tepa"]);
        assert!(acc.iter().all(|&(_, pos)| pos == 4));
    }

    #[test]
    fn test_position_counts_characters() {
        let rack: Rack = "thé".chars().collect();
        let acc = run(&["thé"], &rack, 0);
        assert_eq!(acc, vec![("thé".to_string(), 3)]);
    }

    #[test]
    fn test_min_length() {
        let rack: Rack = "oogd".chars().collect();
        let acc = run(&["do", "dog", "go", "good"], &rack, 3);
        let words: Vec<_> = acc.into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["dog", "good"]);
    }

    #[test]
    fn test_blank_covers_multibyte_letter() {
        let rack = Rack::from_input("th*", Some('*'));
        let acc = run(&["thé", "the", "thee"], &rack, 0);
        let words: Vec<_> = acc.into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["the", "thé"]);
    }
}
