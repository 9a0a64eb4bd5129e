//! Vocabulary loading.
//!
//! Builds a [`PrefixTrie`] from a file. Three formats are understood:
//!
//! * `lines` - one entry per line (`.txt`, `.lst`, `.list`)
//! * `json` - a top-level object whose keys are the entries (`.json`)
//! * `toml` - a top-level table whose keys are the entries (`.toml`)
//!
//! Values in JSON and TOML mappings are ignored, which lets an existing
//! routing table double as the vocabulary for its own prefix lookups.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::NiihauConfig;
use crate::data_structures::prefix_trie::{PrefixTrie, PrefixTrieConfig};
use crate::error::vocabulary::VocabularyError;

/// Result type for vocabulary operations.
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Supported vocabulary file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyFormat {
    /// One entry per line
    Lines,
    /// Keys of a top-level JSON object
    Json,
    /// Keys of a top-level TOML table
    Toml,
}

impl VocabularyFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "txt" | "lst" | "list" => Some(Self::Lines),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Loads vocabularies into prefix tries.
#[derive(Debug, Clone)]
pub struct VocabularyLoader {
    format: Option<VocabularyFormat>,
    skip_blank_lines: bool,
    trie_config: PrefixTrieConfig,
}

impl Default for VocabularyLoader {
    fn default() -> Self {
        Self {
            format: None,
            skip_blank_lines: true,
            trie_config: PrefixTrieConfig::default(),
        }
    }
}

impl VocabularyLoader {
    /// Creates a loader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader from the vocabulary and trie sections of a configuration.
    pub fn from_config(config: &NiihauConfig) -> Self {
        Self {
            format: config.vocabulary.format,
            skip_blank_lines: config.vocabulary.skip_blank_lines,
            trie_config: config.trie,
        }
    }

    /// Forces a format instead of inferring it from the extension.
    pub fn with_format(mut self, format: VocabularyFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets whether blank lines are skipped in line-based vocabularies.
    ///
    /// When not skipped, a blank line inserts the empty string.
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Reads `path` and builds a trie from its entries.
    pub fn load(&self, path: &Path) -> VocabularyResult<PrefixTrie> {
        let format = self
            .format
            .or_else(|| VocabularyFormat::from_path(path))
            .ok_or_else(|| VocabularyError::UnknownFormat(path.to_path_buf()))?;

        let contents = std::fs::read_to_string(path).map_err(|source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let trie = self.parse(path, format, &contents)?;
        tracing::info!(path = %path.display(), ?format, entries = trie.len(), "vocabulary loaded");
        Ok(trie)
    }

    /// Builds a trie from in-memory `contents`; `origin` is only used in errors.
    pub fn parse(
        &self,
        origin: &Path,
        format: VocabularyFormat,
        contents: &str,
    ) -> VocabularyResult<PrefixTrie> {
        let mut trie = match format {
            VocabularyFormat::Lines => contents
                .lines()
                .filter(|line| !(self.skip_blank_lines && line.trim().is_empty()))
                .collect::<PrefixTrie>(),
            VocabularyFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(contents).map_err(|e| VocabularyError::Parse {
                        path: origin.to_path_buf(),
                        message: e.to_string(),
                    })?;
                let serde_json::Value::Object(object) = value else {
                    return Err(VocabularyError::NotAMapping(origin.to_path_buf()));
                };
                let map: HashMap<String, serde_json::Value> = object.into_iter().collect();
                PrefixTrie::from_map(&map)
            }
            VocabularyFormat::Toml => {
                let table: toml::Table =
                    toml::from_str(contents).map_err(|e| VocabularyError::Parse {
                        path: origin.to_path_buf(),
                        message: e.to_string(),
                    })?;
                let map: HashMap<String, toml::Value> = table.into_iter().collect();
                PrefixTrie::from_map(&map)
            }
        };

        trie.set_config(self.trie_config);
        tracing::debug!(?format, entries = trie.len(), "parsed vocabulary");
        Ok(trie)
    }
}
