//! Niihau Library
//!
//! A character-level prefix matcher. Strings are inserted into a
//! [`PrefixTrie`](data_structures::PrefixTrie) ahead of time, after which
//! the trie answers:
//!
//! - which inserted string is the longest prefix of an input, and
//! - which inserted strings a partial input completes to.
//!
//! Typical uses are routing and dispatch tables keyed by string prefixes:
//! command matching, path routing, tokenization dictionaries.
//!
//! Around the trie the library provides layered configuration, a vocabulary
//! loader that builds tries from files, an error taxonomy with tracing-based
//! reporting, and the interface expected from a symmetric cipher
//! collaborator.

pub mod cipher;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod vocabulary;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Niihau.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter as the global reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
