use std::collections::{BTreeMap, BTreeSet, HashSet};

use regex::Regex;

use crate::config::{FilterConfig, MatchThresholds};
use crate::error::Result;
use crate::parser::MatchNormalizer;
use crate::types::Verdict;

/// A small extracted attribute used for medium-length query matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoreKey {
    Brand,
    Product,
    Generation,
    Storage,
    Model,
}

/// Tiered matcher for everything the model parser cannot handle: non-phone
/// products, unusual naming, and freeform queries.
///
/// Strategy by meaningful-word count of the target query:
/// - detailed (7+ words): exact substring or nothing (precision intent);
/// - medium (4-6 words): core identifiers at 80%, then word overlap at 0.85;
/// - short (up to 3 words): word overlap at 0.7, then fuzzy similarity.
#[derive(Debug)]
pub struct FallbackMatcher {
    thresholds: MatchThresholds,
    normalizer: MatchNormalizer,
    noise_words: HashSet<String>,
    basic_stopwords: HashSet<String>,
    re_brand: Option<Regex>,
    re_product: Option<Regex>,
    re_generation: Regex,
    re_storage: Regex,
    re_model_number: Regex,
}

impl FallbackMatcher {
    /// Compiles the matcher from configuration.
    pub fn new(config: &FilterConfig) -> Result<Self> {
        Ok(Self {
            thresholds: config.thresholds,
            normalizer: MatchNormalizer::new()?,
            noise_words: lowercase_set(&config.lexicon.noise_words),
            basic_stopwords: lowercase_set(&config.lexicon.basic_stopwords),
            re_brand: alternation(&config.lexicon.core_brand_words)?,
            re_product: alternation(&config.lexicon.core_product_words)?,
            re_generation: Regex::new(r"(?P<n>\d+)(?:st|nd|rd|th)?\s*generation")?,
            re_storage: Regex::new(r"(?P<n>\d+)\s*(?P<unit>gb|tb)")?,
            // A bare number is a model candidate unless a storage unit
            // follows it.
            re_model_number: Regex::new(r"\b(?P<n>\d+)\b(?:\s*(?P<unit>gb|tb))?")?,
        })
    }

    /// Decides whether `title` plausibly matches the free-text `target`.
    /// Inputs are expected lowercased and cleaned.
    #[must_use]
    pub fn evaluate(&self, title: &str, target: &str) -> Verdict {
        let title = title.trim();
        let target = target.trim();

        // Exact substring always wins.
        if !target.is_empty() && title.contains(target) {
            return Verdict::Include(format!("exact substring match: {target:?} found in title"));
        }

        let meaningful_words = target
            .split_whitespace()
            .filter(|w| !self.basic_stopwords.contains(*w))
            .count();

        // Detailed queries signal precision intent: no partial credit.
        if meaningful_words > self.thresholds.medium_query_max_words {
            return Verdict::Exclude(format!(
                "detailed query of {meaningful_words} words requires an exact match"
            ));
        }

        let title_norm = self.normalizer.normalize(title);
        let target_norm = self.normalizer.normalize(target);

        let target_words = self.content_words(&target_norm);
        let title_words = self.content_words(&title_norm);

        if target_words.is_empty() {
            return Verdict::Exclude(
                "no meaningful words in search query after noise filtering".into(),
            );
        }

        // Medium queries: try core identifiers before raw word overlap.
        if meaningful_words > self.thresholds.short_query_max_words {
            if let Some(verdict) = self.core_identifier_match(&title_norm, &target_norm) {
                return verdict;
            }
        }

        let matched = target_words.intersection(&title_words).count();
        let overlap = matched as f64 / target_words.len() as f64;
        let required = if target_words.len() <= self.thresholds.short_query_max_words {
            self.thresholds.short_overlap_ratio
        } else if target_words.len() <= self.thresholds.medium_query_max_words {
            self.thresholds.medium_overlap_ratio
        } else {
            1.0
        };

        if overlap >= required {
            return Verdict::Include(format!(
                "word overlap: {matched}/{} words matched ({:.0}%)",
                target_words.len(),
                overlap * 100.0
            ));
        }

        // Last resort for short queries: normalized string similarity.
        if target_words.len() <= self.thresholds.short_query_max_words {
            let similarity = strsim::normalized_levenshtein(title, target);
            if similarity >= self.thresholds.fuzzy_similarity {
                return Verdict::Include(format!("fuzzy similarity match: {similarity:.2}"));
            }
            return Verdict::Exclude(format!(
                "no sufficient match (word overlap {:.0}%, similarity {similarity:.2})",
                overlap * 100.0
            ));
        }

        Verdict::Exclude(format!(
            "no sufficient match (word overlap {:.0}%, required {:.0}%)",
            overlap * 100.0,
            required * 100.0
        ))
    }

    /// Noise-stripped word set.
    fn content_words<'a>(&self, text: &'a str) -> BTreeSet<&'a str> {
        text.split_whitespace()
            .filter(|w| !self.noise_words.contains(*w))
            .collect()
    }

    /// Compares core identifiers; `None` means inconclusive (the target
    /// yielded no identifiers), falling through to word overlap.
    fn core_identifier_match(&self, title_norm: &str, target_norm: &str) -> Option<Verdict> {
        let target_core = self.extract_core_identifiers(target_norm);
        if target_core.is_empty() {
            return None;
        }
        let title_core = self.extract_core_identifiers(title_norm);

        let total = target_core.len();
        let matched = target_core
            .iter()
            .filter(|(key, value)| {
                title_core
                    .get(*key)
                    .is_some_and(|other| identifier_matches(**key, value, other))
            })
            .count();

        let ratio = matched as f64 / total as f64;
        if ratio >= self.thresholds.core_identifier_ratio {
            return Some(Verdict::Include(format!(
                "core identifier match: {matched}/{total} identifiers matched ({:.0}%)",
                ratio * 100.0
            )));
        }
        None
    }

    /// Pulls brand, product type, generation, storage, and model number
    /// out of normalized text.
    fn extract_core_identifiers(&self, text: &str) -> BTreeMap<CoreKey, String> {
        let mut identifiers = BTreeMap::new();

        if let Some(re) = &self.re_brand {
            if let Some(found) = re.find(text) {
                identifiers.insert(CoreKey::Brand, found.as_str().to_owned());
            }
        }
        if let Some(re) = &self.re_product {
            if let Some(found) = re.find(text) {
                identifiers.insert(CoreKey::Product, found.as_str().to_owned());
            }
        }
        if let Some(caps) = self.re_generation.captures(text) {
            identifiers.insert(CoreKey::Generation, format!("{}th generation", &caps["n"]));
        }
        if let Some(caps) = self.re_storage.captures(text) {
            identifiers.insert(
                CoreKey::Storage,
                format!("{}{}", &caps["n"], &caps["unit"]),
            );
        }
        for caps in self.re_model_number.captures_iter(text) {
            if caps.name("unit").is_none() {
                identifiers.insert(CoreKey::Model, caps["n"].to_owned());
                break;
            }
        }

        identifiers
    }
}

/// Flexible per-kind comparison: numeric identifiers compare digits only
/// ("64gb" matches "64g"), everything else compares exactly.
fn identifier_matches(key: CoreKey, target_value: &str, title_value: &str) -> bool {
    if target_value == title_value {
        return true;
    }
    match key {
        CoreKey::Storage | CoreKey::Generation => {
            let digits = |s: &str| -> String { s.chars().filter(char::is_ascii_digit).collect() };
            let a = digits(target_value);
            !a.is_empty() && a == digits(title_value)
        }
        CoreKey::Brand | CoreKey::Product | CoreKey::Model => false,
    }
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn alternation(words: &[String]) -> Result<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }
    let escaped: Vec<String> = words
        .iter()
        .map(|w| regex::escape(&w.to_lowercase()))
        .collect();
    Ok(Some(Regex::new(&format!(
        r"\b(?:{})\b",
        escaped.join("|")
    ))?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;

    fn matcher() -> FallbackMatcher {
        FallbackMatcher::new(&FilterConfig::default()).unwrap()
    }

    #[test]
    fn exact_substring_wins() {
        let m = matcher();
        let v = m.evaluate("apple ipad 9th generation 64gb grey", "ipad");
        assert!(v.is_include());
        assert!(v.reason().contains("substring"));
    }

    #[test]
    fn detailed_query_requires_exact_match() {
        let m = matcher();
        // 8 meaningful words, high overlap but no exact substring
        let v = m.evaluate(
            "apple ipad 9th generation 64gb grey immaculate",
            "apple ipad 9th generation 64gb space grey excellent condition",
        );
        assert!(!v.is_include());
        assert!(v.reason().contains("exact match"));
    }

    #[test]
    fn medium_query_passes_on_core_identifiers() {
        let m = matcher();
        // "64g" and "9th-gen" spellings differ, digits agree
        let v = m.evaluate("apple ipad 9th-gen 64g grey", "apple ipad 9th generation 64gb");
        assert!(v.is_include(), "reason: {}", v.reason());
        assert!(v.reason().contains("core identifier"));
    }

    #[test]
    fn short_query_passes_on_word_overlap() {
        let m = matcher();
        let v = m.evaluate("black iphone 16 excellent", "iphone 16 black");
        assert!(v.is_include(), "reason: {}", v.reason());
        assert!(v.reason().contains("word overlap"));
    }

    #[test]
    fn short_query_falls_back_to_fuzzy_similarity() {
        let m = matcher();
        let v = m.evaluate("iphone 16", "iphon 16");
        assert!(v.is_include(), "reason: {}", v.reason());
        assert!(v.reason().contains("fuzzy"));
    }

    #[test]
    fn unrelated_titles_rejected() {
        let m = matcher();
        let v = m.evaluate("vintage leather satchel", "iphone 16");
        assert!(!v.is_include());
        assert!(!v.reason().is_empty());
    }

    #[test]
    fn noise_only_query_rejected() {
        let m = matcher();
        let v = m.evaluate("iphone 16", "new used");
        assert!(!v.is_include());
        assert!(v.reason().contains("meaningful"));
    }

    #[test]
    fn storage_digits_match_across_spellings() {
        assert!(identifier_matches(CoreKey::Storage, "64gb", "64g"));
        assert!(!identifier_matches(CoreKey::Storage, "64gb", "128gb"));
        assert!(identifier_matches(
            CoreKey::Generation,
            "9th generation",
            "9 generation"
        ));
        assert!(!identifier_matches(CoreKey::Brand, "apple", "samsung"));
    }
}
