//! Decoder configuration.

use qp_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a message decoder.
///
/// The format is kept as the raw identifier so that an unsupported value
/// is reported by the decoder as a [`ConfigError::UnknownFormat`] rather
/// than failing deserialization.
///
/// # Example
///
/// ```yaml
/// format: json
/// expression: Detail.Location
/// path_filters:
///   - "s3://logs-bucket/*.zst"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderConfig {
    /// Message format identifier (`plain`, `sns`, `json`, `s3::ObjectCreated`)
    pub format: String,

    /// Extraction expression for expression-based formats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Glob patterns a resolved path must match (any of them) to be ingested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_filters: Vec<String>,
}

impl DecoderConfig {
    /// Create a configuration for the given format.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            expression: None,
            path_filters: Vec::new(),
        }
    }

    /// Set the extraction expression.
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    /// Add a path filter pattern.
    pub fn with_path_filter(mut self, pattern: impl Into<String>) -> Self {
        self.path_filters.push(pattern.into());
        self
    }

    /// Returns the configured expression, treating an empty string as absent.
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// Parse a configuration from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Load(format!("invalid YAML: {e}")))
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Load(format!("invalid JSON: {e}")))
    }

    /// Read a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }
}
