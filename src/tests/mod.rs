//! Test modules for Niihau.
//!
//! This module contains the crate-level test suites:
//! - Property-based tests for the prefix trie using proptest
//! - Configuration loading and validation tests
//! - Vocabulary loading tests against temporary files
//! - Contract tests for the cipher collaborator interface
//! - Error reporting tests

pub mod config_tests;
pub mod error_tests;
