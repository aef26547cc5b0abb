//! Check configuration.
//!
//! The defaults match the annotation sheets this tool was written for.
//! A YAML or JSON file can override the column headers and the sentence
//! delimiter for sheets laid out differently.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::criterion::ReferenceKind;

/// Header of the column holding the summary under test.
pub const DEFAULT_SUMMARY_COLUMN: &str = "待测摘要文本";

/// Header of the column holding the reference answer.
pub const DEFAULT_REFERENCE_ANSWER_COLUMN: &str = "标准答案";

/// Full-stop used to segment reference texts into sentences.
pub const DEFAULT_SENTENCE_DELIMITER: char = '。';

/// Errors that can occur when loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Settings for a check run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Column rated by `Non-redundancy` and `Fluency`
    pub summary_column: String,

    /// Column rated by `Informativeness`
    pub reference_answer_column: String,

    /// Sentence delimiter
    pub sentence_delimiter: char,

    /// Print each mismatch to stdout as it is found
    pub echo: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            summary_column: DEFAULT_SUMMARY_COLUMN.to_string(),
            reference_answer_column: DEFAULT_REFERENCE_ANSWER_COLUMN.to_string(),
            sentence_delimiter: DEFAULT_SENTENCE_DELIMITER,
            echo: true,
        }
    }
}

impl CheckConfig {
    /// Parse a config from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: CheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CheckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load a config file, picking the parser from the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => Self::from_json_file(path),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Disable or enable the stdout echo.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Header of the column a reference kind lives in.
    pub fn column_for(&self, kind: ReferenceKind) -> &str {
        match kind {
            ReferenceKind::Summary => &self.summary_column,
            ReferenceKind::ReferenceAnswer => &self.reference_answer_column,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.summary_column.trim().is_empty() {
            return Err(ConfigError::MissingField("summary_column".to_string()));
        }

        if self.reference_answer_column.trim().is_empty() {
            return Err(ConfigError::MissingField(
                "reference_answer_column".to_string(),
            ));
        }

        Ok(())
    }
}
