//! Vocabulary source configuration module.
//!
//! Describes where the strings inserted into the trie come from.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::vocabulary::VocabularyFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Vocabulary source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Path to the vocabulary file (None when supplied on the command line)
    pub path: Option<PathBuf>,

    /// File format; inferred from the extension when absent
    pub format: Option<VocabularyFormat>,

    /// Whether blank lines of a line-based vocabulary are skipped
    pub skip_blank_lines: bool,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: None,
            skip_blank_lines: true,
        }
    }
}

impl Validate for VocabularyConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "vocabulary.path must not be empty".to_string(),
                ));
            }
            if self.format.is_none() && VocabularyFormat::from_path(path).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "vocabulary.format is required for {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
