use regex::Regex;

use crate::error::Result;

/// Strips marketplace noise from a title before parsing: condition words,
/// filler, packaging mentions, and prices. Storage tokens ("128gb") are
/// deliberately kept so the fallback matcher can use them as core
/// identifiers.
#[derive(Debug)]
pub struct TitleCleaner {
    noise: Vec<Regex>,
}

impl TitleCleaner {
    /// Compiles the cleaning patterns.
    pub fn new() -> Result<Self> {
        let patterns = [
            r"\b(?:new|used|excellent|good|fair|condition|mint|sealed|unopened)\b",
            r"\b(?:with|without|includes|included)\b",
            r"\b(?:original|genuine|authentic|official)\b",
            r"\b(?:box|packaging|accessories)\b",
            // Prices: $450, €300, 4500 kr, 4500 sek
            r"\$\d+|€\d+|£\d+|\d+\s*kr\b|\d+\s*sek\b",
        ];
        let noise = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { noise })
    }

    /// Lowercases, strips noise, and collapses whitespace.
    #[must_use]
    pub fn clean(&self, title: &str) -> String {
        let mut work = title.to_lowercase();
        for re in &self.noise {
            work = re.replace_all(&work, " ").into_owned();
        }
        collapse_whitespace(&work)
    }
}

/// Normalizes a (lowercased) string for word-overlap and core-identifier
/// matching: storage and generation spellings are canonicalized and
/// punctuation becomes whitespace, so "64g" matches "64GB" and "9th-gen"
/// matches "9th generation".
#[derive(Debug)]
pub struct MatchNormalizer {
    re_storage_gb: Regex,
    re_storage_tb: Regex,
    re_generation: Regex,
    re_punct: Regex,
}

impl MatchNormalizer {
    /// Compiles the normalization patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            // "64 g" / "64g" -> "64gb"; "64gb" is untouched because `g` is
            // not at a word boundary there.
            re_storage_gb: Regex::new(r"(\d+)\s*g\b")?,
            re_storage_tb: Regex::new(r"(\d+)\s*t\b")?,
            re_generation: Regex::new(r"(\d+)(?:st|nd|rd|th)?\s*-?\s*gen(?:eration)?\b")?,
            re_punct: Regex::new(r"[^a-z0-9\s]")?,
        })
    }

    /// Canonicalizes the given lowercased text.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let mut work = text.to_lowercase();
        work = self.re_storage_gb.replace_all(&work, "${1}gb").into_owned();
        work = self.re_storage_tb.replace_all(&work, "${1}tb").into_owned();
        work = self
            .re_generation
            .replace_all(&work, "${1}th generation")
            .into_owned();
        work = self.re_punct.replace_all(&work, " ").into_owned();
        collapse_whitespace(&work)
    }
}

/// Joins whitespace-separated words with single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaner_strips_condition_and_prices() {
        let cleaner = TitleCleaner::new().unwrap();
        assert_eq!(
            cleaner.clean("iPhone 16 128GB Black - Excellent Condition $450"),
            "iphone 16 128gb black -"
        );
        assert_eq!(cleaner.clean("New Sealed iPhone 16"), "iphone 16");
    }

    #[test]
    fn cleaner_keeps_storage_tokens() {
        let cleaner = TitleCleaner::new().unwrap();
        assert!(cleaner.clean("iPad 9th Generation 64GB").contains("64gb"));
    }

    #[test]
    fn normalizer_canonicalizes_storage() {
        let n = MatchNormalizer::new().unwrap();
        assert_eq!(n.normalize("ipad 64g grey"), "ipad 64gb grey");
        assert_eq!(n.normalize("ipad 64gb grey"), "ipad 64gb grey");
        assert_eq!(n.normalize("drive 1t"), "drive 1tb");
    }

    #[test]
    fn normalizer_canonicalizes_generation() {
        let n = MatchNormalizer::new().unwrap();
        assert_eq!(n.normalize("ipad 9th-gen"), "ipad 9th generation");
        assert_eq!(n.normalize("ipad 9 gen"), "ipad 9th generation");
        assert_eq!(n.normalize("ipad 9th generation"), "ipad 9th generation");
    }

    #[test]
    fn normalizer_strips_punctuation() {
        let n = MatchNormalizer::new().unwrap();
        assert_eq!(n.normalize("iphone-16, (black)!"), "iphone 16 black");
    }
}
