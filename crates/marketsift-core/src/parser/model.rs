use std::collections::{BTreeSet, HashSet};

use regex::{Captures, Regex};

use crate::config::FilterConfig;
use crate::error::Result;
use crate::parser::registry::BrandRegistry;
use crate::types::ParsedModel;

/// Parses brand/model/variant structure out of free-text listing titles.
///
/// Brand rules from the registry are tried in registration order; if none
/// match, a generic `<brand> <model> <variant?>` fallback is attempted.
/// Parse failure is not an error; it signals "hand off to the fallback
/// matcher".
#[derive(Debug)]
pub struct ModelParser {
    registry: BrandRegistry,
    // Generic fallback: "<brand> <series-word> <number>" tried before
    // "<brand> <number>" so "acme note 10" does not parse as brand "note".
    re_generic_series: Regex,
    re_generic_simple: Regex,
    condition_words: HashSet<String>,
}

impl ModelParser {
    /// Builds a parser from an already-compiled registry.
    pub fn new(registry: BrandRegistry, config: &FilterConfig) -> Result<Self> {
        Ok(Self {
            registry,
            re_generic_series: Regex::new(
                r"(?P<brand>[a-z]+)\s+(?P<series>note|mate|find|reno|nova|mi)\s+(?P<model>\d+[a-z]?)(?:\s+(?P<variant>pro|plus|max|ultra|lite))?\b",
            )?,
            re_generic_simple: Regex::new(
                r"(?P<brand>[a-z]+)\s+(?P<model>\d+[a-z]?)(?:\s+(?P<variant>pro|plus|max|ultra|lite|mini|se|neo|turbo|gt|ace))?\b",
            )?,
            condition_words: config
                .lexicon
                .condition_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        })
    }

    /// The compiled registry backing this parser.
    #[must_use]
    pub fn registry(&self) -> &BrandRegistry {
        &self.registry
    }

    /// Attempts to parse a (cleaned, lowercased) title into a structured
    /// model. Returns `None` if no brand rule and no generic pattern match.
    #[must_use]
    pub fn parse(&self, title: &str) -> Option<ParsedModel> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        for rule in self.registry.rules() {
            let Some(caps) = rule.regex.captures(title) else {
                continue;
            };
            // A rule may wrap `model` in an optional group; a match where
            // the group did not participate is a miss, not a panic.
            let Some(model) = caps.name("model") else {
                continue;
            };
            let mut base_model = format!("{}{}", rule.model_prefix, model.as_str());
            if let Some(second) = caps.name("model2") {
                base_model.push(' ');
                base_model.push_str(second.as_str());
            }
            return Some(ParsedModel {
                brand: rule.brand.clone(),
                base_model,
                variant_suffix: variant_set(&caps),
                raw_title: title.to_owned(),
            });
        }

        self.parse_generic(title)
    }

    /// Generic fallback for model names no brand rule covers, e.g.
    /// "Fairphone 5" or "Nokia 105". Condition words are rejected as false
    /// brand names so "Used 12 Pro" does not parse as brand "Used".
    fn parse_generic(&self, title: &str) -> Option<ParsedModel> {
        for caps in self.re_generic_series.captures_iter(title) {
            let brand = &caps["brand"];
            if self.condition_words.contains(brand) {
                continue;
            }
            let base_model = format!("{} {}", titlecase(&caps["series"]), &caps["model"]);
            return Some(ParsedModel {
                brand: titlecase(brand),
                base_model,
                variant_suffix: variant_set(&caps),
                raw_title: title.to_owned(),
            });
        }

        for caps in self.re_generic_simple.captures_iter(title) {
            let brand = &caps["brand"];
            if self.condition_words.contains(brand) {
                continue;
            }
            return Some(ParsedModel {
                brand: titlecase(brand),
                base_model: caps["model"].to_owned(),
                variant_suffix: variant_set(&caps),
                raw_title: title.to_owned(),
            });
        }

        None
    }
}

/// Splits the `variant` capture into a lowercased token set
/// ("pro max" becomes {"pro", "max"}).
fn variant_set(caps: &Captures<'_>) -> BTreeSet<String> {
    caps.name("variant")
        .map(|m| {
            m.as_str()
                .split_whitespace()
                .map(str::to_owned)
                .collect::<BTreeSet<_>>()
        })
        .unwrap_or_default()
}

fn titlecase(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
