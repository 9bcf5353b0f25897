use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured brand/model/variant information extracted from a free-text
/// listing title (or search query).
///
/// Ephemeral: created per parse call, compared, and dropped. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedModel {
    /// Canonical brand name (e.g. "iPhone", "Samsung", "Redmi").
    pub brand: String,

    /// Canonical base model identifier without variant qualifiers
    /// (e.g. "16", "Note 10", "S24").
    pub base_model: String,

    /// Variant suffix tokens, lowercased ("pro max" becomes {"pro", "max"}).
    /// Empty for a base model.
    pub variant_suffix: BTreeSet<String>,

    /// The (cleaned, lowercased) title this model was parsed from.
    pub raw_title: String,
}

impl ParsedModel {
    /// Creates a parsed model with no variant suffix.
    #[must_use]
    pub fn new(
        brand: impl Into<String>,
        base_model: impl Into<String>,
        raw_title: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            base_model: base_model.into(),
            variant_suffix: BTreeSet::new(),
            raw_title: raw_title.into(),
        }
    }

    /// Returns `true` if any variant suffix was captured.
    #[must_use]
    pub fn has_variant(&self) -> bool {
        !self.variant_suffix.is_empty()
    }

    /// Renders the canonical full model string, e.g. "iPhone 16 pro max".
    #[must_use]
    pub fn full_model(&self) -> String {
        let mut out = format!("{} {}", self.brand, self.base_model);
        for token in &self.variant_suffix {
            out.push(' ');
            out.push_str(token);
        }
        out
    }

    /// Comma-joined variant tokens for reason strings.
    #[must_use]
    pub fn variant_list(&self) -> String {
        self.variant_suffix
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ParsedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_model())
    }
}
