// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy enumeration of completions below a trie node.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// One level of the depth-first walk.
struct Frame<'a> {
    entries: hashbrown::hash_map::Iter<'a, char, TrieNode>,
    /// Whether entering this frame pushed a character onto the path
    pushed: bool,
}

/// Iterator over the completions of a matched prefix.
///
/// Yields `prefix + suffix` for every terminal descendant of the node the
/// prefix leads to, in pre-order: a terminal child is yielded before the
/// longer strings running through it. The node itself is never yielded.
///
/// Created by [`PrefixTrie::completions`](super::PrefixTrie::completions).
pub struct Completions<'a> {
    path: String,
    stack: Vec<Frame<'a>>,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(prefix: &str, node: &'a TrieNode) -> Self {
        Self {
            path: prefix.to_owned(),
            stack: vec![Frame {
                entries: node.children.iter(),
                pushed: false,
            }],
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            path: String::new(),
            stack: Vec::new(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.entries.next() {
                Some((&c, child)) => {
                    self.path.push(c);
                    self.stack.push(Frame {
                        entries: child.children.iter(),
                        pushed: true,
                    });
                    if child.is_terminal {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    if let Some(done) = self.stack.pop() {
                        if done.pushed {
                            self.path.pop();
                        }
                    }
                }
            }
        }
    }
}

impl FusedIterator for Completions<'_> {}

impl std::fmt::Debug for Completions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completions")
            .field("path", &self.path)
            .field("depth", &self.stack.len())
            .finish()
    }
}
