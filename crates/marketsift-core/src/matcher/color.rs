use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::config::Lexicon;
use crate::error::Result;

#[derive(Debug)]
struct ColorVariation {
    family: String,
    text: String,
    regex: Regex,
}

/// Extracts phone colors from free text and compares them by family.
///
/// A listing rarely uses the plain family name; "pearl white" and
/// "space grey" must resolve to "white" and "gray". When several
/// variations appear, the longest one wins ("black titanium" is titanium,
/// not black).
#[derive(Debug)]
pub struct ColorMatcher {
    variations: Vec<ColorVariation>,
    families: BTreeMap<String, BTreeSet<String>>,
}

impl ColorMatcher {
    /// Compiles one word-boundary pattern per color variation.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut variations = Vec::new();
        let mut families: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for family in &lexicon.color_families {
            let name = family.family.to_lowercase();
            let entry = families.entry(name.clone()).or_default();
            for variation in &family.variations {
                let text = variation.to_lowercase();
                let regex = Regex::new(&format!(r"\b{}\b", regex::escape(&text)))?;
                entry.insert(text.clone());
                variations.push(ColorVariation {
                    family: name.clone(),
                    text,
                    regex,
                });
            }
        }

        Ok(Self { variations, families })
    }

    /// The family of the most specific color variation found, if any.
    /// Ties on length go to the earliest declared family.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<&str> {
        let text = text.to_lowercase();
        let mut best: Option<&ColorVariation> = None;
        for variation in &self.variations {
            if variation.regex.is_match(&text)
                && best.is_none_or(|b| variation.text.len() > b.text.len())
            {
                best = Some(variation);
            }
        }
        best.map(|v| v.family.as_str())
    }

    /// Two families match when equal or when they share a variation
    /// ("graphite" also sells as "space gray").
    #[must_use]
    pub fn families_match(&self, target: &str, candidate: &str) -> bool {
        if target == candidate {
            return true;
        }
        match (self.families.get(target), self.families.get(candidate)) {
            (Some(a), Some(b)) => !a.is_disjoint(b),
            _ => false,
        }
    }
}
