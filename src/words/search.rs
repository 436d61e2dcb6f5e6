use tracing::trace;

use super::rack::{Letter, Rack};
use super::trie::{NodeId, Trie, TrieNode};
use crate::config::{SearchConfig, Strategy};

/// Pending work on the explicit stack of a walk
enum Frame<R> {
    /// Step onto `node` over `edge`, carrying what the rack needs there
    Enter {
        node: NodeId,
        edge: Option<char>,
        with: R,
    },
    /// Step back up over the last edge, returning `spent` to the rack
    Leave { spent: Option<Letter> },
}

/// Depth-first walk of a trie that only follows edges the rack can still pay for.
///
/// Words come out in pre-order. With children visited in ascending `char` order that
/// is plain lexicographic order. The walk keeps its own stack, so word length is
/// bounded by memory rather than by the thread's stack.
#[derive(Debug, Clone)]
pub struct TrieSearcher<'a> {
    pub trie: &'a Trie,
    /// Minimum length for anything to be reported as a word
    pub min_length: usize,
}

impl<'a> TrieSearcher<'a> {
    pub fn new(trie: &'a Trie, min_length: usize) -> Self {
        Self { trie, min_length }
    }

    pub fn search(&self, rack: &Rack, strategy: Strategy) -> Vec<String> {
        let mut found = Vec::new();
        match strategy {
            Strategy::CopyOnWrite => self.copy_on_write(rack, &mut found),
            Strategy::Backtrack => self.backtrack(rack, &mut found),
        }
        found
    }

    fn report(&self, node: &TrieNode, word: &str, depth: usize, found: &mut Vec<String>) {
        if node.is_word() && depth >= self.min_length {
            trace!(word, "matched");
            found.push(word.to_owned());
        }
    }

    /// Every frame owns the rack left after paying for its edge
    fn copy_on_write(&self, rack: &Rack, found: &mut Vec<String>) {
        let mut word = String::new();
        let mut depth = 0;
        let mut stack = vec![Frame::Enter {
            node: Trie::ROOT,
            edge: None,
            with: rack.clone(),
        }];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter { node, edge, with: rack } => {
                    if let Some(c) = edge {
                        word.push(c);
                        depth += 1;
                        stack.push(Frame::Leave { spent: None });
                    }
                    let node = self.trie.node(node);
                    self.report(node, &word, depth, found);
                    if rack.is_empty() {
                        continue;
                    }
                    // reversed so the smallest letter is popped first
                    for (c, child) in node.children().rev() {
                        if let Some((rest, _)) = rack.take(c) {
                            stack.push(Frame::Enter {
                                node: child,
                                edge: Some(c),
                                with: rest,
                            });
                        }
                    }
                }
                Frame::Leave { .. } => {
                    word.pop();
                    depth -= 1;
                }
            }
        }
    }

    /// One rack shared by the whole walk. A sibling is only entered after the
    /// previous sibling's subtree has been left, so the tile picked for it when its
    /// parent was expanded is still available.
    fn backtrack(&self, rack: &Rack, found: &mut Vec<String>) {
        let mut rack = rack.clone();
        let mut word = String::new();
        let mut depth = 0;
        let mut stack = vec![Frame::Enter {
            node: Trie::ROOT,
            edge: None,
            with: None,
        }];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter { node, edge, with } => {
                    if let (Some(c), Some(tile)) = (edge, with) {
                        rack.remove_inplace(tile);
                        word.push(c);
                        depth += 1;
                        stack.push(Frame::Leave { spent: Some(tile) });
                    }
                    let node = self.trie.node(node);
                    self.report(node, &word, depth, found);
                    if rack.is_empty() {
                        continue;
                    }
                    for (c, child) in node.children().rev() {
                        if let Some(tile) = rack.pick(c) {
                            stack.push(Frame::Enter {
                                node: child,
                                edge: Some(c),
                                with: Some(tile),
                            });
                        }
                    }
                }
                Frame::Leave { spent } => {
                    if let Some(tile) = spent {
                        rack.add_inplace(tile);
                    }
                    word.pop();
                    depth -= 1;
                }
            }
        }
    }
}

/// Runs the search over an already built trie
pub fn search(trie: &Trie, rack: &Rack, config: &SearchConfig) -> Vec<String> {
    TrieSearcher::new(trie, config.min_length).search(rack, config.strategy)
}
