// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the prefix trie.

use serde::{Deserialize, Serialize};

/// How `longest_prefix_match` decides which prefix to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Report a match only if the node where the walk stops is terminal.
    ///
    /// A shorter inserted string crossed earlier on the walk is not
    /// recovered: with `"a"` and `"abc"` inserted, `"abx"` yields `None`.
    #[default]
    StopAtDivergence,

    /// Report the longest terminal node crossed anywhere along the walk.
    ///
    /// With `"a"` and `"abc"` inserted, `"abx"` yields `Some("a")`.
    LongestTerminal,
}

/// Order of the strings returned by `match_completions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOrder {
    /// Whatever order the child maps iterate in. Not stable across tries.
    #[default]
    Unordered,

    /// Lexicographic order.
    Sorted,
}

/// Configuration for a [`PrefixTrie`](super::PrefixTrie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixTrieConfig {
    /// Policy used by longest-prefix lookups
    pub match_policy: MatchPolicy,

    /// Ordering applied to materialized completion lists
    pub completion_order: CompletionOrder,
}

impl PrefixTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - match_policy: `StopAtDivergence`
    /// - completion_order: `Unordered`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the longest-prefix match policy.
    pub fn with_match_policy(mut self, match_policy: MatchPolicy) -> Self {
        self.match_policy = match_policy;
        self
    }

    /// Set the ordering of completion lists.
    pub fn with_completion_order(mut self, completion_order: CompletionOrder) -> Self {
        self.completion_order = completion_order;
        self
    }
}
