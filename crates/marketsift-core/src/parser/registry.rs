use std::collections::BTreeSet;

use regex::Regex;

use crate::config::{BrandRule, FilterConfig};
use crate::error::{MarketsiftError, Result};

/// A brand rule with its pattern compiled.
#[derive(Debug)]
pub struct CompiledBrandRule {
    /// Stable rule key.
    pub key: String,
    /// Canonical brand name.
    pub brand: String,
    /// Compiled extraction pattern with named capture groups.
    pub regex: Regex,
    /// Prefix prepended to the captured model.
    pub model_prefix: String,
}

/// Immutable, load-once registry of compiled brand rules plus the union of
/// all brands' variant vocabularies.
///
/// Compiled exactly once at classifier construction; safe to share across
/// threads thereafter.
#[derive(Debug)]
pub struct BrandRegistry {
    rules: Vec<CompiledBrandRule>,
    vocabulary: BTreeSet<String>,
}

impl BrandRegistry {
    /// Compiles every brand rule in the configuration, failing fast on the
    /// first malformed one.
    ///
    /// # Errors
    ///
    /// Returns `MarketsiftError::InvalidBrandRule` if a pattern does not
    /// compile or lacks the required `model` capture group.
    pub fn compile(config: &FilterConfig) -> Result<Self> {
        let mut rules = Vec::with_capacity(config.brand_rules.len());
        let mut vocabulary = BTreeSet::new();

        for rule in &config.brand_rules {
            rules.push(Self::compile_rule(rule)?);
            vocabulary.extend(rule.variant_tokens.iter().map(|t| t.to_lowercase()));
        }

        // Accessory-flavored suffixes participate in the "additional
        // suffix" scan alongside real variant tokens.
        vocabulary.extend(
            config
                .lexicon
                .suffix_extras
                .iter()
                .map(|t| t.to_lowercase()),
        );

        Ok(Self { rules, vocabulary })
    }

    fn compile_rule(rule: &BrandRule) -> Result<CompiledBrandRule> {
        let regex = Regex::new(&rule.pattern).map_err(|e| MarketsiftError::InvalidBrandRule {
            key: rule.key.clone(),
            message: e.to_string(),
        })?;

        if !regex.capture_names().flatten().any(|name| name == "model") {
            return Err(MarketsiftError::InvalidBrandRule {
                key: rule.key.clone(),
                message: "pattern lacks a `model` capture group".into(),
            });
        }

        Ok(CompiledBrandRule {
            key: rule.key.clone(),
            brand: rule.brand.clone(),
            regex,
            model_prefix: rule.model_prefix.clone(),
        })
    }

    /// Compiled rules in registration order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledBrandRule] {
        &self.rules
    }

    /// Union of all brands' variant tokens plus accessory suffix extras,
    /// lowercased.
    #[must_use]
    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;

    #[test]
    fn default_config_compiles() {
        let registry = BrandRegistry::compile(&FilterConfig::default()).unwrap();
        assert!(!registry.rules().is_empty());
        // Vocabulary carries both variant tokens and accessory suffixes
        assert!(registry.vocabulary().contains("pro"));
        assert!(registry.vocabulary().contains("ultra"));
        assert!(registry.vocabulary().contains("case"));
    }

    #[test]
    fn bad_pattern_fails_fast() {
        let mut config = FilterConfig::default();
        config.brand_rules[0].pattern = "(unclosed".into();
        let err = BrandRegistry::compile(&config).unwrap_err();
        assert!(matches!(err, MarketsiftError::InvalidBrandRule { .. }));
    }

    #[test]
    fn missing_model_group_fails_fast() {
        let mut config = FilterConfig::default();
        config.brand_rules[0].pattern = r"iphone\s*(?P<number>\d+)".into();
        let err = BrandRegistry::compile(&config).unwrap_err();
        match err {
            MarketsiftError::InvalidBrandRule { key, message } => {
                assert_eq!(key, config.brand_rules[0].key);
                assert!(message.contains("model"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
