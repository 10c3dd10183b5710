//! Extractor configuration.

use serde::{Deserialize, Serialize};

/// Settings for dental extraction requests.
///
/// Every field has a default, so a partial JSON object is enough.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Chat model name passed to the backend
    pub model: String,
    /// Sampling temperature; extraction should be deterministic
    pub temperature: f32,
    /// Reply token cap
    pub max_tokens: u32,
    /// Prepend few-shot examples to the request
    pub include_examples: bool,
    /// Species used when the caller does not name one
    pub default_species: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.0,
            max_tokens: 1000,
            include_examples: true,
            default_species: "dog".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Load from a JSON string; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
