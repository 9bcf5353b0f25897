use serde::{Deserialize, Serialize};

use crate::error::{MarketsiftError, Result};

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

fn colors(family: &str, variations: &[&str]) -> ColorFamily {
    ColorFamily {
        family: family.to_owned(),
        variations: owned(variations),
    }
}

/// A color family and the marketing names it sells under. Families may
/// share variations ("space gray" appears under both "gray" and
/// "graphite"); shared variations make the families match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFamily {
    /// Canonical family name (e.g. "white").
    pub family: String,

    /// Variations reported under this family (e.g. "pearl white").
    pub variations: Vec<String>,
}

/// Word lists consumed by the exclusion filter, the variant policy, and the
/// fallback matcher. Versioned, swappable data: loading a different lexicon
/// changes behavior without touching pipeline code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Multi-word accessory phrases, matched as plain substrings
    /// ("screen protector").
    pub accessory_phrases: Vec<String>,

    /// Single-word accessory tokens, matched with word boundaries
    /// ("case" must not fire inside "staircase").
    pub accessory_words: Vec<String>,

    /// Version/packaging noise tokens, matched with word boundaries.
    pub version_noise_words: Vec<String>,

    /// Regex patterns flagging monitor listings (model codes like
    /// "S24C360EAE", size/resolution indicators).
    pub monitor_patterns: Vec<String>,

    /// Accessory-flavored suffix tokens folded into the variant vocabulary
    /// so the suffix policy also rejects them as "additional suffix".
    pub suffix_extras: Vec<String>,

    /// Minimal stopword set used only for counting meaningful query words.
    pub basic_stopwords: Vec<String>,

    /// Broad noise-word set stripped before word-overlap scoring
    /// (condition adjectives, filler, sale jargon, pickup/location words).
    pub noise_words: Vec<String>,

    /// Condition words rejected as false brand names by the generic parser
    /// ("New Phone 12" is not a brand called "New").
    pub condition_words: Vec<String>,

    /// Brand words recognized by the core-identifier extractor.
    pub core_brand_words: Vec<String>,

    /// Product-type keywords recognized by the core-identifier extractor.
    pub core_product_words: Vec<String>,

    /// Color families used by the variant policy's color gate: a color
    /// named in the search query is binding on the listing.
    pub color_families: Vec<ColorFamily>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            accessory_phrases: owned(&[
                "hard case",
                "soft case",
                "clear case",
                "screen protector",
                "screen guard",
                "tempered glass",
                "glass protector",
                "privacy screen",
                "power bank",
                "wireless charger",
                "car charger",
                "wall charger",
                "usb cable",
                "lightning cable",
                "charging pad",
                "charging station",
                "charging dock",
                "wireless headphones",
                "car mount",
                "desk stand",
                "phone stand",
                "phone holder",
                "ring holder",
                "pop socket",
                "memory card",
                "sd card",
                "micro sd",
                "flash drive",
                "sim card",
                "sim tray",
                "sim tool",
                "camera lens",
                "ring light",
                "selfie stick",
                "cleaning kit",
                "accessories pack",
                "package deal",
                "lot of",
                "empty box",
                "box only",
                "spare parts",
                "screen replacement",
                "back cover",
                "smart tv",
                "gaming monitor",
                "curved monitor",
                "4k monitor",
            ]),
            accessory_words: owned(&[
                "case",
                "cases",
                "cover",
                "covers",
                "protection",
                "protective",
                "shell",
                "shells",
                "sleeve",
                "sleeves",
                "pouch",
                "pouches",
                "bumper",
                "bumpers",
                "holster",
                "holsters",
                "wallet",
                "flip",
                "folio",
                "silicone",
                "tpu",
                "shockproof",
                "film",
                "shield",
                "charger",
                "charging",
                "cable",
                "cables",
                "adapter",
                "adapters",
                "magsafe",
                "headphones",
                "earphones",
                "airpods",
                "earbuds",
                "headset",
                "speaker",
                "speakers",
                "stand",
                "stands",
                "holder",
                "holders",
                "mount",
                "mounts",
                "tripod",
                "kickstand",
                "battery",
                "batteries",
                "replacement",
                "repair",
                "stylus",
                "bundle",
                "combo",
                "monitor",
                "monitors",
                "ultrawide",
                "television",
                "projector",
                "webcam",
                "unlock",
                "unlocking",
                "jailbreak",
            ]),
            version_noise_words: owned(&["version", "ver", "v2", "v3", "mk2", "mk3"]),
            monitor_patterns: owned(&[
                // Samsung monitor model codes: S24C360EAE, S27AG50
                r"s\d+[a-z]+\d+[a-z]*\d*[a-z]*",
                // Generic monitor codes: C24F390, U28E590D
                r"\b[a-z]\d+[a-z]\d+[a-z]?\b",
                // Size indicators: 24 inch, 27"
                r#"\d+["']?\s*(?:inch|in)\b"#,
                // Resolution indicators
                r"\b(?:fhd|qhd|uhd|1440p|2160p)\b",
                r"\b(?:curved|gaming|ultrawide)\s*(?:monitor|display)\b",
            ]),
            suffix_extras: owned(&[
                "case", "cover", "screen", "protector", "charger", "cable", "adapter", "battery",
                "headphone", "airpod", "earpod", "speaker", "dock", "stand",
            ]),
            basic_stopwords: owned(&[
                "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "as",
                "by",
            ]),
            noise_words: owned(&[
                // Condition words
                "new",
                "used",
                "excellent",
                "good",
                "fair",
                "condition",
                "mint",
                "sealed",
                "unopened",
                "refurbished",
                "barely",
                "hardly",
                "lightly",
                // Inclusion words
                "with",
                "without",
                "includes",
                "included",
                "comes",
                "complete",
                // Quality words
                "original",
                "genuine",
                "authentic",
                "official",
                "brand",
                "perfect",
                // Packaging words
                "box",
                "packaging",
                "accessories",
                "manual",
                "charger",
                "cable",
                // Location/pickup words
                "pickup",
                "delivery",
                "collection",
                "meet",
                "location",
                "area",
                "cabramatta",
                // Generic filler
                "the",
                "a",
                "an",
                "and",
                "or",
                "but",
                "in",
                "on",
                "at",
                "to",
                "for",
                "of",
                "as",
                "by",
                "is",
                "are",
                "was",
                "were",
                "be",
                "been",
                "have",
                "has",
                "had",
                "will",
                "would",
                "could",
                // Sale jargon
                "sale",
                "sell",
                "selling",
                "price",
                "cheap",
                "bargain",
                "deal",
                "offer",
                "obo",
                // Connectivity
                "wifi",
                "only",
                "cellular",
                "4g",
                "5g",
            ]),
            condition_words: owned(&[
                "new", "used", "mint", "excellent", "good", "fair", "with", "without", "original",
            ]),
            core_brand_words: owned(&["apple", "samsung", "google", "microsoft", "nintendo"]),
            core_product_words: owned(&[
                "ipad", "iphone", "macbook", "galaxy", "pixel", "surface", "switch",
            ]),
            color_families: vec![
                colors("black", &["black", "jet black", "matte black", "space black"]),
                colors("white", &["white", "pearl white", "ceramic white", "cloud white"]),
                colors(
                    "red",
                    &["red", "product red", "cherry red", "sunset red", "coral red"],
                ),
                colors(
                    "blue",
                    &[
                        "blue",
                        "pacific blue",
                        "sierra blue",
                        "sky blue",
                        "navy blue",
                        "midnight blue",
                    ],
                ),
                colors(
                    "green",
                    &[
                        "green",
                        "alpine green",
                        "midnight green",
                        "pine green",
                        "forest green",
                    ],
                ),
                colors("purple", &["purple", "deep purple", "lavender", "violet"]),
                colors("pink", &["pink", "rose pink", "coral pink", "blush pink"]),
                colors("yellow", &["yellow", "canary yellow", "lemon yellow"]),
                colors("orange", &["orange", "sunset orange", "coral orange"]),
                colors("gold", &["gold", "rose gold", "champagne gold", "bronze gold"]),
                colors("silver", &["silver", "platinum silver", "mystic silver"]),
                colors(
                    "gray",
                    &[
                        "gray",
                        "grey",
                        "space gray",
                        "space grey",
                        "graphite",
                        "charcoal",
                        "slate",
                    ],
                ),
                colors("bronze", &["bronze", "mystic bronze", "copper bronze"]),
                colors(
                    "titanium",
                    &[
                        "titanium",
                        "natural titanium",
                        "blue titanium",
                        "white titanium",
                        "black titanium",
                    ],
                ),
                colors(
                    "phantom",
                    &["phantom", "phantom black", "phantom silver", "phantom white"],
                ),
                colors("midnight", &["midnight", "midnight green", "midnight blue"]),
                colors("starlight", &["starlight", "starlight gold"]),
                colors("graphite", &["graphite", "space gray"]),
                colors("cream", &["cream", "phantom cream"]),
                colors("lavender", &["lavender", "phantom lavender"]),
                colors("mint", &["mint", "mint green"]),
                colors("coral", &["coral", "living coral"]),
                colors("sage", &["sage", "sage green"]),
                colors("hazel", &["hazel", "sorta sage"]),
            ],
        }
    }
}

/// Numeric knobs for the fallback matcher, grouped per word-count bucket.
///
/// The values are empirically chosen; they are configuration, not
/// constants, and are candidates for precision/recall tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchThresholds {
    /// Queries with at most this many meaningful words are "short".
    pub short_query_max_words: usize,

    /// Queries with at most this many meaningful words (and more than
    /// `short_query_max_words`) are "medium"; anything above is "detailed"
    /// and requires an exact substring match.
    pub medium_query_max_words: usize,

    /// Word-overlap ratio required for short queries.
    pub short_overlap_ratio: f64,

    /// Word-overlap ratio required for medium queries.
    pub medium_overlap_ratio: f64,

    /// Share of the target's core identifiers that must match for a
    /// medium query to pass on identifiers alone.
    pub core_identifier_ratio: f64,

    /// Normalized string similarity accepted as a last resort for short
    /// queries.
    pub fuzzy_similarity: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            short_query_max_words: 3,
            medium_query_max_words: 6,
            short_overlap_ratio: 0.7,
            medium_overlap_ratio: 0.85,
            core_identifier_ratio: 0.8,
            fuzzy_similarity: 0.7,
        }
    }
}

impl MatchThresholds {
    /// Fail-fast validation, run once before any listing is processed.
    pub fn validate(&self) -> Result<()> {
        if self.short_query_max_words == 0 {
            return Err(MarketsiftError::InvalidThreshold(
                "short_query_max_words must be at least 1".into(),
            ));
        }
        if self.medium_query_max_words <= self.short_query_max_words {
            return Err(MarketsiftError::InvalidThreshold(format!(
                "medium_query_max_words ({}) must exceed short_query_max_words ({})",
                self.medium_query_max_words, self.short_query_max_words
            )));
        }
        for (name, value) in [
            ("short_overlap_ratio", self.short_overlap_ratio),
            ("medium_overlap_ratio", self.medium_overlap_ratio),
            ("core_identifier_ratio", self.core_identifier_ratio),
            ("fuzzy_similarity", self.fuzzy_similarity),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(MarketsiftError::InvalidThreshold(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
