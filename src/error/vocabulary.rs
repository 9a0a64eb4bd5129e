//! Vocabulary error module.
//!
//! Errors raised while reading a vocabulary file into a prefix trie.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The vocabulary file could not be read.
    #[error("Failed to read vocabulary {path}: {source}")]
    Read {
        /// Path of the vocabulary file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The format could not be inferred from the file extension.
    #[error("Cannot determine vocabulary format for {0}")]
    UnknownFormat(PathBuf),

    /// The file content is not valid for its format.
    #[error("Failed to parse vocabulary {path}: {message}")]
    Parse {
        /// Path of the vocabulary file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A JSON or TOML vocabulary whose root is not a key/value mapping.
    #[error("Vocabulary {0} must contain a top-level mapping")]
    NotAMapping(PathBuf),
}
