//! Prefix Trie Implementation
//!
//! This module provides a character-level prefix tree that answers two
//! questions about a vocabulary inserted ahead of time:
//!
//! * which inserted string is the longest prefix of an input
//!   ([`PrefixTrie::longest_prefix_match`]), and
//! * which inserted strings a partial input resolves to
//!   ([`PrefixTrie::match_completions`] and the lazy
//!   [`PrefixTrie::completions`]).
//!
//! Characters are compared exactly as given: there is no case folding and no
//! Unicode normalization.
//!
//! # Example
//!
//! ```
//! use niihau_lib::data_structures::PrefixTrie;
//!
//! let mut trie = PrefixTrie::new();
//! trie.insert("/api");
//! trie.insert("/api/users");
//!
//! assert_eq!(trie.longest_prefix_match("/api/users/42"), Some("/api/users".to_string()));
//!
//! let mut found = trie.match_completions("/ap");
//! found.sort();
//! assert_eq!(found, vec!["/api", "/api/users"]);
//! ```
//!
//! # Concurrency
//!
//! Inserting takes `&mut self`, reading takes `&self`. Build the trie first,
//! then share it (for instance behind an `Arc`) for concurrent reads.

mod completions;
mod config;
mod node;

use std::collections::HashMap;
use std::hash::BuildHasher;

pub use completions::Completions;
pub use config::{CompletionOrder, MatchPolicy, PrefixTrieConfig};
use node::TrieNode;

/// Outcome of walking an input down from the root.
struct Walk<'a> {
    /// Node where forward progress stopped
    node: &'a TrieNode,
    /// Byte length of the matched leading characters
    matched: usize,
    /// Byte length of the longest terminal prefix crossed, if any
    longest_terminal: Option<usize>,
    /// Whether every character of the input was matched
    consumed_all: bool,
}

impl Walk<'_> {
    /// True when at least one character matched, i.e. the walk left the root.
    fn advanced(&self) -> bool {
        self.matched > 0
    }
}

/// A character-level prefix tree over a vocabulary of strings.
///
/// Key features:
/// * Longest-prefix lookup for dispatch tables
/// * Completion enumeration, eager or lazy
/// * Owned node tree with no reference counting or locking
#[derive(Debug, Clone, Default)]
pub struct PrefixTrie {
    /// The root node, spelling the empty prefix
    root: TrieNode,

    /// Configuration options
    config: PrefixTrieConfig,
}

impl PrefixTrie {
    /// Creates a new empty `PrefixTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixTrieConfig::default())
    }

    /// Creates a new empty `PrefixTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: PrefixTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Builds a trie from the keys of an existing map.
    ///
    /// Values are ignored and the trie keeps no reference to the map, so it is
    /// useful for finding which map entry a longer input should resolve to.
    ///
    /// # Arguments
    ///
    /// * `map` - The map whose keys are inserted.
    pub fn from_map<K, V, S>(map: &HashMap<K, V, S>) -> Self
    where
        K: AsRef<str>,
        S: BuildHasher,
    {
        Self::from_keys(map.keys())
    }

    /// Builds a trie by inserting every key yielded by `keys`.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(keys);
        tracing::debug!(keys = trie.len(), "built prefix trie");
        trie
    }

    /// Replaces the configuration used by lookups. The tree is unchanged.
    pub fn set_config(&mut self, config: PrefixTrieConfig) {
        self.config = config;
    }

    /// Inserts a string into the trie.
    ///
    /// Missing nodes along the path are created on the way down; the node the
    /// last character leads to is marked terminal. Inserting the same string
    /// again changes nothing. Inserting `""` marks the root terminal, which
    /// no lookup reports as a match because matches need at least one
    /// character.
    ///
    /// # Returns
    ///
    /// `true` if the string was not present before.
    pub fn insert(&mut self, input: &str) -> bool {
        let mut node = &mut self.root;
        for c in input.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        tracing::trace!(input, is_new, "inserted key");
        is_new
    }

    /// Returns the longest inserted string that is a prefix of `input`.
    ///
    /// The walk follows `input` from the root until a character has no
    /// matching child or the input ends. Under the default
    /// [`MatchPolicy::StopAtDivergence`] only the node where the walk stopped
    /// is considered: if it is not terminal the result is `None`, even when a
    /// shorter inserted string was crossed on the way. With
    /// [`MatchPolicy::LongestTerminal`] the longest terminal crossed is
    /// reported instead.
    ///
    /// Zero-length matches are never reported.
    pub fn longest_prefix_match(&self, input: &str) -> Option<String> {
        let walk = self.walk(input);
        let end = match self.config.match_policy {
            MatchPolicy::StopAtDivergence => {
                (walk.advanced() && walk.node.is_terminal).then_some(walk.matched)
            }
            MatchPolicy::LongestTerminal => walk.longest_terminal,
        }?;
        Some(input[..end].to_string())
    }

    /// Resolves a partial input against the trie.
    ///
    /// The result holds:
    /// 1. the matched leading part of `input`, if it is non-empty and was
    ///    inserted, and
    /// 2. when the whole of `input` matched, every longer inserted string
    ///    that extends it (see [`completions`](Self::completions)).
    ///
    /// Order follows [`PrefixTrieConfig::completion_order`]; by default it is
    /// unspecified. Returns an empty list when nothing matches.
    pub fn match_completions(&self, input: &str) -> Vec<String> {
        let walk = self.walk(input);
        let matched = &input[..walk.matched];

        let mut results = Vec::new();
        if walk.advanced() && walk.node.is_terminal {
            results.push(matched.to_string());
        }
        results.extend(self.completions_after(&walk, matched));

        if self.config.completion_order == CompletionOrder::Sorted {
            results.sort_unstable();
        }
        results
    }

    /// Lazily yields every inserted string strictly longer than `input` that
    /// starts with it.
    ///
    /// Nothing is yielded unless all of `input` matched a path and that path
    /// is non-empty. A terminal node is yielded before the longer strings
    /// running through it; sibling order is unspecified. Each call starts a
    /// fresh walk.
    pub fn completions(&self, input: &str) -> Completions<'_> {
        let walk = self.walk(input);
        self.completions_after(&walk, &input[..walk.matched])
    }

    /// Returns `true` if `input` was inserted exactly.
    pub fn contains(&self, input: &str) -> bool {
        let walk = self.walk(input);
        walk.consumed_all && walk.node.is_terminal
    }

    /// Returns the number of distinct inserted strings.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.count_terminals()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_terminal
    }

    fn completions_after<'a>(&'a self, walk: &Walk<'a>, matched: &str) -> Completions<'a> {
        if walk.advanced() && walk.consumed_all {
            Completions::new(matched, walk.node)
        } else {
            Completions::empty()
        }
    }

    /// Follows `input` from the root, stopping at the first character with no
    /// matching child. Characters after that point never match.
    fn walk<'a>(&'a self, input: &str) -> Walk<'a> {
        let mut node = &self.root;
        let mut matched = 0;
        let mut longest_terminal = None;

        for c in input.chars() {
            match node.child(c) {
                Some(next) => {
                    node = next;
                    matched += c.len_utf8();
                    if node.is_terminal {
                        longest_terminal = Some(matched);
                    }
                }
                None => break,
            }
        }

        Walk {
            node,
            matched,
            longest_terminal,
            consumed_all: matched == input.len(),
        }
    }
}

impl<K: AsRef<str>> FromIterator<K> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K: AsRef<str>> Extend<K> for PrefixTrie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}
