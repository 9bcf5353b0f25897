//! # Configuration surface
//!
//! Everything the classifier keys its decisions on (brand rules, word
//! lists, thresholds) lives here as versioned, swappable data. New brands
//! and models are added by editing (or loading) configuration, not by
//! touching pipeline code. Configuration is loaded once, validated
//! fail-fast, and immutable thereafter.

pub mod brands;
pub mod lexicon;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use brands::{default_brand_rules, default_strict_query_patterns, BrandRule};
pub use lexicon::{ColorFamily, Lexicon, MatchThresholds};

/// Complete classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Brand extraction rules, iterated in order.
    pub brand_rules: Vec<BrandRule>,

    /// Target-query patterns that trigger the strict model-matching path.
    pub strict_query_patterns: Vec<String>,

    /// Word lists for exclusion, noise stripping, and core identifiers.
    pub lexicon: Lexicon,

    /// Numeric matching thresholds.
    pub thresholds: MatchThresholds,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            brand_rules: default_brand_rules(),
            strict_query_patterns: default_strict_query_patterns(),
            lexicon: Lexicon::default(),
            thresholds: MatchThresholds::default(),
        }
    }
}

impl FilterConfig {
    /// Decodes a configuration from a JSON document. Absent fields fall
    /// back to the built-in defaults, so a deployment can override just
    /// the brand table or just the thresholds.
    ///
    /// # Errors
    ///
    /// Returns `MarketsiftError::Decode` on malformed JSON. Semantic
    /// validation (patterns, thresholds) happens in `Classifier::new`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and decodes a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `MarketsiftError::Io` if the file cannot be read and
    /// `MarketsiftError::Decode` if it is not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
