use regex::Regex;

use crate::config::Lexicon;
use crate::error::Result;

/// Why a title was globally excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcludedTerm {
    /// An accessory keyword or phrase was found.
    Accessory(String),
    /// Version/packaging noise was found ("v2", "mk2").
    VersionNoise(String),
    /// The title looks like a monitor listing, not a phone.
    MonitorListing,
}

impl std::fmt::Display for ExcludedTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accessory(term) => write!(f, "contains accessory keyword {term:?}"),
            Self::VersionNoise(term) => write!(f, "contains version/packaging noise {term:?}"),
            Self::MonitorListing => write!(f, "matches a monitor listing pattern"),
        }
    }
}

/// Static blacklist checked on every decision path.
///
/// Two token classes with different matching semantics: multi-word phrases
/// ("screen protector") match as plain substrings, single-word tokens
/// ("case") match with word boundaries so they cannot fire inside
/// unrelated words ("staircase"). Collapsing the two classes to plain
/// substring matching produces false exclusions.
#[derive(Debug)]
pub struct ExclusionFilter {
    phrases: Vec<String>,
    accessory_words: Option<Regex>,
    version_words: Option<Regex>,
    monitor_patterns: Vec<Regex>,
}

impl ExclusionFilter {
    /// Compiles the filter from the lexicon, failing fast on malformed
    /// monitor patterns.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        Ok(Self {
            phrases: lexicon
                .accessory_phrases
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            accessory_words: word_boundary_alternation(&lexicon.accessory_words)?,
            version_words: word_boundary_alternation(&lexicon.version_noise_words)?,
            monitor_patterns: lexicon
                .monitor_patterns
                .iter()
                .map(|p| Regex::new(p))
                .collect::<std::result::Result<Vec<_>, _>>()?,
        })
    }

    /// Returns the first blacklisted term found in the title, if any.
    #[must_use]
    pub fn excluded_term(&self, title: &str) -> Option<ExcludedTerm> {
        let title = title.to_lowercase();

        if self.monitor_patterns.iter().any(|re| re.is_match(&title)) {
            return Some(ExcludedTerm::MonitorListing);
        }

        if let Some(phrase) = self.phrases.iter().find(|p| title.contains(p.as_str())) {
            return Some(ExcludedTerm::Accessory(phrase.clone()));
        }

        if let Some(re) = &self.accessory_words {
            if let Some(found) = re.find(&title) {
                return Some(ExcludedTerm::Accessory(found.as_str().to_owned()));
            }
        }

        if let Some(re) = &self.version_words {
            if let Some(found) = re.find(&title) {
                return Some(ExcludedTerm::VersionNoise(found.as_str().to_owned()));
            }
        }

        None
    }

    /// Returns `true` if the title contains any globally excluded term.
    #[must_use]
    pub fn is_excluded(&self, title: &str) -> bool {
        self.excluded_term(title).is_some()
    }
}

/// Builds `\b(?:w1|w2|…)\b` from a word list, or `None` for an empty list.
fn word_boundary_alternation(words: &[String]) -> Result<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }
    let escaped: Vec<String> = words
        .iter()
        .map(|w| regex::escape(&w.to_lowercase()))
        .collect();
    let pattern = format!(r"\b(?:{})\b", escaped.join("|"));
    Ok(Some(Regex::new(&pattern)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Lexicon;

    fn filter() -> ExclusionFilter {
        ExclusionFilter::new(&Lexicon::default()).unwrap()
    }

    #[test]
    fn accessory_word_is_excluded() {
        let f = filter();
        assert_eq!(
            f.excluded_term("iPhone 16 Case MagSafe"),
            Some(ExcludedTerm::Accessory("case".into()))
        );
        assert!(f.is_excluded("Samsung charger fast charge"));
    }

    #[test]
    fn single_words_respect_word_boundaries() {
        let f = filter();
        // "case" inside "bookcase"/"staircase" must not fire
        assert!(!f.is_excluded("wooden bookcase"));
        assert!(!f.is_excluded("staircase gate"));
        // "unlocked" must not be flagged by "unlock"
        assert!(!f.is_excluded("iphone 16 factory unlocked"));
    }

    #[test]
    fn phrases_match_as_substrings() {
        let f = filter();
        assert_eq!(
            f.excluded_term("iPhone 16 screen protector 2-pack"),
            Some(ExcludedTerm::Accessory("screen protector".into()))
        );
        assert!(f.is_excluded("tempered glass for iphone 16"));
    }

    #[test]
    fn version_noise_uses_word_boundaries() {
        let f = filter();
        assert_eq!(
            f.excluded_term("gadget mk2 black"),
            Some(ExcludedTerm::VersionNoise("mk2".into()))
        );
        assert!(f.is_excluded("gadget v2 black"));
        // "generation" must not be flagged by any version token
        assert!(!f.is_excluded("apple ipad 9th generation 64gb"));
    }

    #[test]
    fn monitor_listings_are_excluded() {
        let f = filter();
        assert_eq!(
            f.excluded_term("Samsung S24C360EAE curved"),
            Some(ExcludedTerm::MonitorListing)
        );
        assert!(f.is_excluded("samsung 27 inch gaming monitor"));
        assert!(f.is_excluded("dell u28e590d 4k uhd"));
    }

    #[test]
    fn clean_phone_titles_pass() {
        let f = filter();
        assert!(!f.is_excluded("iPhone 16 128GB Black"));
        assert!(!f.is_excluded("iphone 16 pro 128gb titanium"));
        assert!(!f.is_excluded("redmi note 10 128gb"));
        assert!(!f.is_excluded("samsung galaxy s24"));
    }
}
