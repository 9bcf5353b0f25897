//! # Classification pipeline
//!
//! The [`Classifier`] wires the parser and the matching stages into one
//! decision path. Everything regex-shaped is compiled once in
//! [`Classifier::new`]; [`Classifier::classify`] is pure and infallible
//! after that.

pub mod batch;

use regex::Regex;
use tracing::debug;

use crate::config::FilterConfig;
use crate::error::Result;
use crate::matcher::{ColorMatcher, ExclusionFilter, FallbackMatcher, VariantPolicy};
use crate::parser::{BrandRegistry, ModelParser, TitleCleaner};
use crate::types::{ClassificationResult, MatchStage, ParsedModel, Verdict};

pub use batch::{BatchResult, ExcludedTitle};

/// Decides whether scraped listing titles match a target search query.
///
/// Decision path, in order:
/// 1. the global exclusion blacklist (accessories, version noise, monitor
///    listings) rejects regardless of the query;
/// 2. queries naming a concrete phone model go straight to strict
///    brand/model/variant matching; the substring gate is skipped there
///    because "iphone 16 pro max" contains "iphone 16" yet is a different
///    product;
/// 3. a verbatim substring hit includes;
/// 4. if both sides parse to the same brand, the suffix policy decides;
/// 5. otherwise the tiered fallback matcher decides.
#[derive(Debug)]
pub struct Classifier {
    cleaner: TitleCleaner,
    exclusion: ExclusionFilter,
    parser: ModelParser,
    variant_policy: VariantPolicy,
    fallback: FallbackMatcher,
    strict_queries: Vec<Regex>,
}

impl Classifier {
    /// Compiles all patterns and validates thresholds, failing fast so a
    /// misconfigured deployment never processes a single listing.
    ///
    /// # Errors
    ///
    /// Returns `MarketsiftError::InvalidThreshold` for out-of-range
    /// thresholds, `MarketsiftError::InvalidBrandRule` for malformed brand
    /// rules, and `MarketsiftError::Regex` for malformed lexicon or
    /// strict-query patterns.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.thresholds.validate()?;

        let registry = BrandRegistry::compile(&config)?;
        let variant_policy = VariantPolicy::new(
            registry.vocabulary().clone(),
            ColorMatcher::new(&config.lexicon)?,
        );
        let strict_queries = config
            .strict_query_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            cleaner: TitleCleaner::new()?,
            exclusion: ExclusionFilter::new(&config.lexicon)?,
            fallback: FallbackMatcher::new(&config)?,
            parser: ModelParser::new(registry, &config)?,
            variant_policy,
            strict_queries,
        })
    }

    /// Classifies one listing title against the target search query.
    ///
    /// Pure and deterministic: the same inputs always produce the same
    /// result, and the reason string is never empty.
    #[must_use]
    pub fn classify(&self, title: &str, target: &str) -> ClassificationResult {
        let result = self.decide(title, target);
        debug!(title, target, %result, "classified listing");
        result
    }

    fn decide(&self, title: &str, target: &str) -> ClassificationResult {
        if title.trim().is_empty() {
            return ClassificationResult::exclude("empty listing title", MatchStage::Excluded);
        }
        if target.trim().is_empty() {
            return ClassificationResult::exclude("empty search query", MatchStage::Excluded);
        }

        // Blacklist first: an accessory listing is never a match, whatever
        // the query says.
        if let Some(term) = self.exclusion.excluded_term(title) {
            return ClassificationResult::exclude(term.to_string(), MatchStage::Excluded);
        }

        let title_clean = self.cleaner.clean(title);
        let target_clean = self.cleaner.clean(target);

        // Strict path for concrete model queries, bypassing the substring
        // gate.
        if self.is_strict_query(&target_clean) {
            if let Some(target_model) = self.parser.parse(&target_clean) {
                return match self.parser.parse(&title_clean) {
                    Some(candidate) => ClassificationResult::from_verdict(
                        self.model_verdict(&target_model, &candidate),
                        MatchStage::VariantPolicy,
                    ),
                    None => ClassificationResult::from_verdict(
                        self.fallback.evaluate(&title_clean, &target_clean),
                        MatchStage::Fallback,
                    ),
                };
            }
        }

        if title_clean.contains(&target_clean) {
            return ClassificationResult::include(
                format!("search query {target_clean:?} found in title"),
                MatchStage::ExactSubstring,
            );
        }

        // Brand disagreement outside the strict path defers to the
        // fallback matcher; brand detection is unreliable for non-phone
        // electronics.
        match (
            self.parser.parse(&target_clean),
            self.parser.parse(&title_clean),
        ) {
            (Some(target_model), Some(candidate))
                if target_model.brand.eq_ignore_ascii_case(&candidate.brand) =>
            {
                ClassificationResult::from_verdict(
                    self.variant_policy.evaluate(&target_model, &candidate),
                    MatchStage::VariantPolicy,
                )
            }
            _ => ClassificationResult::from_verdict(
                self.fallback.evaluate(&title_clean, &target_clean),
                MatchStage::Fallback,
            ),
        }
    }

    /// Strict-path verdict: a parsed candidate of another brand is a
    /// different product, full stop.
    fn model_verdict(&self, target: &ParsedModel, candidate: &ParsedModel) -> Verdict {
        if !target.brand.eq_ignore_ascii_case(&candidate.brand) {
            return Verdict::Exclude(format!(
                "different brand: {} vs {}",
                candidate.brand, target.brand
            ));
        }
        self.variant_policy.evaluate(target, candidate)
    }

    fn is_strict_query(&self, target_clean: &str) -> bool {
        self.strict_queries.iter().any(|re| re.is_match(target_clean))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Decision;

    fn classifier() -> Classifier {
        Classifier::new(FilterConfig::default()).unwrap()
    }

    #[test]
    fn base_model_query_rejects_variant_listing() {
        let c = classifier();
        let r = c.classify("iPhone 16 Pro Max 256GB", "iPhone 16");
        assert_eq!(r.decision, Decision::Exclude);
        assert_eq!(r.stage, MatchStage::VariantPolicy);
        assert!(r.reason.contains("variant suffix"), "reason: {}", r.reason);
    }

    #[test]
    fn base_model_query_accepts_base_listing() {
        let c = classifier();
        let r = c.classify("iPhone 16 128GB Black", "iPhone 16");
        assert!(r.is_included(), "reason: {}", r.reason);
    }

    #[test]
    fn variant_query_accepts_exact_variant_listing() {
        let c = classifier();
        let r = c.classify(
            "iPhone 16 Pro 128GB Titanium - Excellent Condition",
            "iPhone 16 Pro",
        );
        assert!(r.is_included(), "reason: {}", r.reason);
        assert_eq!(r.stage, MatchStage::VariantPolicy);
    }

    #[test]
    fn variant_query_rejects_superset_variant() {
        let c = classifier();
        let r = c.classify("iPhone 16 Pro Max 256GB", "iPhone 16 Pro");
        assert!(!r.is_included());
        assert!(r.reason.contains("variant mismatch"), "reason: {}", r.reason);
    }

    #[test]
    fn different_model_numbers_rejected() {
        let c = classifier();
        let r = c.classify("iPhone 15 128GB", "iPhone 16");
        assert!(!r.is_included());
        assert!(r.reason.contains("different model number"));
    }

    #[test]
    fn redmi_note_base_and_variant() {
        let c = classifier();
        assert!(c.classify("Redmi Note 10 128GB", "Redmi Note 10").is_included());

        let r = c.classify("Redmi Note 10 Pro", "Redmi Note 10");
        assert!(!r.is_included());
        assert!(r.reason.contains("variant suffix"), "reason: {}", r.reason);
    }

    #[test]
    fn cross_brand_listing_rejected() {
        let c = classifier();
        let r = c.classify("Samsung Galaxy S24", "iPhone 16");
        assert!(!r.is_included());
        assert!(r.reason.contains("different brand"), "reason: {}", r.reason);
    }

    #[test]
    fn accessory_listing_excluded_before_matching() {
        let c = classifier();
        let r = c.classify("iPhone 16 Case MagSafe", "iPhone 16");
        assert!(!r.is_included());
        assert_eq!(r.stage, MatchStage::Excluded);
        assert!(r.reason.contains("accessory"), "reason: {}", r.reason);
    }

    #[test]
    fn monitor_listing_excluded() {
        let c = classifier();
        let r = c.classify("Samsung S24C360EAE 24 inch Curved", "Samsung S24");
        assert!(!r.is_included());
        assert_eq!(r.stage, MatchStage::Excluded);
    }

    #[test]
    fn non_phone_query_matches_by_substring() {
        let c = classifier();
        let r = c.classify(
            "Apple iPad 9th Generation 64GB Space Grey",
            "iPad 9th Generation",
        );
        assert!(r.is_included(), "reason: {}", r.reason);
        assert_eq!(r.stage, MatchStage::ExactSubstring);
    }

    #[test]
    fn unparseable_sides_fall_back_to_tiered_matching() {
        let c = classifier();
        let r = c.classify("White Nintendo Switch OLED", "nintendo switch oled white");
        assert!(r.is_included(), "reason: {}", r.reason);
        assert_eq!(r.stage, MatchStage::Fallback);

        let r = c.classify("Vintage leather satchel", "nintendo switch oled");
        assert!(!r.is_included());
    }

    #[test]
    fn degenerate_inputs_get_nonempty_reasons() {
        let c = classifier();
        for (title, target) in [("", "iphone 16"), ("iphone 16", ""), ("   ", "  ")] {
            let r = c.classify(title, target);
            assert!(!r.is_included());
            assert!(!r.reason.is_empty());
            assert_eq!(r.stage, MatchStage::Excluded);
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let c = classifier();
        let a = c.classify("iPhone 16 Pro Max 256GB", "iPhone 16");
        let b = c.classify("iPhone 16 Pro Max 256GB", "iPhone 16");
        assert_eq!(a, b);
    }

    #[test]
    fn case_insensitive_inputs() {
        let c = classifier();
        let upper = c.classify("IPHONE 16 128GB BLACK", "IPHONE 16");
        let lower = c.classify("iphone 16 128gb black", "iphone 16");
        assert_eq!(upper.decision, lower.decision);
        assert!(upper.is_included());
    }

    #[test]
    fn color_query_binds_listing_color() {
        let c = classifier();

        let r = c.classify("iPhone 16 Black 128GB", "iPhone 16 White");
        assert!(!r.is_included());
        assert!(r.reason.contains("color"), "reason: {}", r.reason);

        let r = c.classify("iPhone 16 128GB Unlocked", "iPhone 16 White");
        assert!(!r.is_included());
        assert!(r.reason.contains("color"), "reason: {}", r.reason);

        let r = c.classify("iPhone 16 Pearl White 128GB", "iPhone 16 White");
        assert!(r.is_included(), "reason: {}", r.reason);
    }

    #[test]
    fn strict_query_with_unparseable_listing_uses_fallback() {
        // More lenient than outright exclusion: an unparseable listing
        // still gets the tiered matcher rather than an automatic reject.
        let c = classifier();
        let r = c.classify("phone bargain deal", "iPhone 16");
        assert!(!r.is_included());
        assert_eq!(r.stage, MatchStage::Fallback);
    }

    #[test]
    fn optional_model_rule_never_panics_in_classify() {
        use crate::config::BrandRule;

        let mut config = FilterConfig::default();
        config.brand_rules.push(BrandRule {
            key: "fairphone".into(),
            brand: "Fairphone".into(),
            pattern: r"fairphone(?:\s+(?P<model>\d+))?\b".into(),
            model_prefix: String::new(),
            variant_tokens: vec![],
        });
        let c = Classifier::new(config).unwrap();

        let r = c.classify("fairphone latest edition", "fairphone 5");
        assert!(!r.reason.is_empty());
    }

    #[test]
    fn classifier_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }

    #[test]
    fn invalid_threshold_rejected_at_construction() {
        let mut config = FilterConfig::default();
        config.thresholds.fuzzy_similarity = 2.0;
        assert!(Classifier::new(config).is_err());
    }

    #[test]
    fn malformed_strict_pattern_rejected_at_construction() {
        let mut config = FilterConfig::default();
        config.strict_query_patterns.push("(unclosed".into());
        assert!(Classifier::new(config).is_err());
    }
}
