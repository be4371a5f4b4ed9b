use log::trace;
use std::collections::BTreeMap;

pub use source::{FileWordSource, WordSource, WordSourceError};

pub mod source;

/// Handle to a node inside a `PrefixIndex`. Only meaningful for the index that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A single letter position in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// The letter on the edge leading into this node. `None` for the root.
    pub label: Option<char>,
    /// Outgoing edges, keyed by letter.
    children: BTreeMap<char, NodeId>,
}

impl TrieNode {
    fn new(label: Option<char>) -> Self {
        TrieNode {
            label,
            children: BTreeMap::new(),
        }
    }

    /// The letters which continue the prefix ending at this node.
    #[allow(dead_code)]
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.children.len()
    }
}

/// A character trie over the dictionary. Built once, read-only afterwards.
///
/// Nodes live in an arena, with the root at index 0. Every non-root node is the child of
/// exactly one parent, so the structure is a tree even though it is stored flat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
}

impl PrefixIndex {
    const ROOT: NodeId = NodeId(0);

    /// Build an index from a list of lowercase words, sharing common prefixes.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = PrefixIndex {
            nodes: vec![TrieNode::new(None)],
        };
        for word in words {
            let mut pointer = Self::ROOT;
            for letter in word.as_ref().chars() {
                pointer = index.put_child(pointer, letter);
            }
        }
        trace!("Built prefix index with {} nodes", index.nodes.len());
        index
    }

    /// Get the child of `node` along `letter`, creating it if it doesn't exist yet.
    fn put_child(&mut self, node: NodeId, letter: char) -> NodeId {
        if let Some(child) = self.child_for(node, letter) {
            return child;
        }
        let child = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(Some(letter)));
        self.nodes[node.0].children.insert(letter, child);
        child
    }

    /// The root node, representing the empty prefix.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Look up the node for a handle.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Follow the edge labelled `letter` out of `node`, if there is one.
    pub fn child_for(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.node(node).children.get(&letter).copied()
    }

    /// A node is terminal when no dictionary word extends its prefix any further.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.node(node).children.is_empty()
    }

    /// Follow a whole prefix from the root.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(self.root(), |node, letter| self.child_for(node, letter))
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no word contributed any letters.
    pub fn is_empty(&self) -> bool {
        self.is_terminal(self.root())
    }

    /// Every string spelled by a path from the root to a terminal node, in lexicographic
    /// order. An empty index yields nothing.
    #[allow(dead_code)]
    pub fn terminal_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        if self.is_empty() {
            return words;
        }

        // Depth-first, pushing children in reverse so they pop in order
        let mut stack = vec![(self.root(), String::new())];
        while let Some((id, prefix)) = stack.pop() {
            let node = self.node(id);
            if node.children.is_empty() {
                words.push(prefix);
                continue;
            }
            for &child in node.children.values().rev() {
                let mut extended = prefix.clone();
                extended.extend(self.node(child).label);
                stack.push((child, extended));
            }
        }
        words
    }
}
