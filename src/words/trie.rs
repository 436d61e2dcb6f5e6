use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Index of a node in its [`Trie`]
pub type NodeId = usize;

/// Prefix tree node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    next: BTreeMap<char, NodeId>,
    terminal: bool,
}

impl TrieNode {
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.next.get(&c).copied()
    }

    /// Children in ascending `char` order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, NodeId)> + '_ {
        self.next.iter().map(|(&c, &id)| (c, id))
    }

    /// True if the path from the root to this node spells a whole word
    pub fn is_word(&self) -> bool {
        self.terminal
    }
}

/// Insert-only prefix index over a word list.
///
/// Nodes live in one flat arena and refer to their children by index. Every node
/// except the root has exactly one parent, and children are always allocated after
/// their parent, so a child's id is larger than its parent's. Nothing on the node
/// type is recursive, which keeps drop, clone and serde flat no matter how long the
/// words are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrieData")]
pub struct Trie {
    nodes: Vec<TrieNode>,
    #[serde(skip_serializing)]
    n_words: usize,
}

/// Serialized form of a [`Trie`], checked before it is trusted
#[derive(Deserialize)]
struct TrieData {
    nodes: Vec<TrieNode>,
}

impl TryFrom<TrieData> for Trie {
    type Error = String;

    fn try_from(data: TrieData) -> Result<Self, Self::Error> {
        let nodes = data.nodes;
        if nodes.is_empty() {
            return Err("trie has no root node".to_owned());
        }
        let mut has_parent = vec![false; nodes.len()];
        for (id, node) in nodes.iter().enumerate() {
            for &child in node.next.values() {
                if child <= id || child >= nodes.len() || has_parent[child] {
                    return Err(format!("node {id} has an invalid child {child}"));
                }
                has_parent[child] = true;
            }
        }
        if let Some(orphan) = has_parent.iter().skip(1).position(|&p| !p) {
            return Err(format!("node {} is unreachable", orphan + 1));
        }
        let n_words = nodes.iter().filter(|n| n.terminal).count();
        Ok(Self { nodes, n_words })
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            n_words: 0,
        }
    }

    /// Adds a word to the trie. Inserting the empty word marks the root itself.
    pub fn insert(&mut self, word: &str) {
        let mut node = Self::ROOT;
        for c in word.chars() {
            node = match self.nodes[node].child(c) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].next.insert(c, child);
                    child
                }
            };
        }
        let node = &mut self.nodes[node];
        if !node.terminal {
            node.terminal = true;
            self.n_words += 1;
        }
    }

    /// Node reached by following `prefix` from the root
    pub fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(self.root(), |n, c| n.child(c).map(|id| self.node(id)))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| n.is_word())
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All stored words in pre-order, which is also lexicographic order
    pub fn words(&self) -> Vec<String> {
        enum Step {
            Enter(NodeId, Option<char>),
            Leave,
        }

        let mut out = Vec::with_capacity(self.n_words);
        let mut prefix = String::new();
        let mut stack = vec![Step::Enter(Self::ROOT, None)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id, edge) => {
                    if let Some(c) = edge {
                        prefix.push(c);
                        stack.push(Step::Leave);
                    }
                    let node = self.node(id);
                    if node.terminal {
                        out.push(prefix.clone());
                    }
                    // reversed so the smallest letter is popped first
                    stack.extend(
                        node.children()
                            .rev()
                            .map(|(c, child)| Step::Enter(child, Some(c))),
                    );
                }
                Step::Leave => {
                    prefix.pop();
                }
            }
        }
        out
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        iter.into_iter().for_each(|w| self.insert(w.as_ref()));
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
