//! Data structures for Niihau.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Owned, non-shared node storage
//! - Lookups that never fail, absence is reported in-band

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{Completions, PrefixTrie, PrefixTrieConfig};
