//! Node implementation for the prefix trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns its
//! children by value, so the structure is a plain tree with no shared nodes.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child map keyed by a single character.
pub(crate) type Children = HashMap<char, TrieNode, FnvBuildHasher>;

/// A node in the prefix trie.
///
/// Each node represents one character position along the inserted strings
/// that share its spelled path.
#[derive(Debug, Default, Clone)]
pub(crate) struct TrieNode {
    /// Map of characters to child nodes
    pub(crate) children: Children,

    /// Whether the spelled path of this node was inserted exactly
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal node.
    pub(crate) fn new() -> Self {
        Self {
            children: Children::default(),
            is_terminal: false,
        }
    }

    /// Returns the child for `c`, creating it if absent.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(TrieNode::new)
    }

    /// Returns the child for `c`, if any.
    pub(crate) fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Counts the terminal nodes in this subtree, including `self`.
    pub(crate) fn count_terminals(&self) -> usize {
        let own = usize::from(self.is_terminal);
        own + self
            .children
            .values()
            .map(TrieNode::count_terminals)
            .sum::<usize>()
    }
}
