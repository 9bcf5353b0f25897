use serde::{Deserialize, Serialize};

/// A data-driven brand extraction rule.
///
/// Each rule pairs one regex with a small named-field extractor so the rest
/// of the pipeline stays brand-agnostic: new brands are additive data, not
/// new code paths. Patterns match against cleaned, lowercased titles and
/// use named capture groups:
///
/// - `model` (required): the base model number or word,
/// - `model2` (optional): a secondary model word appended after a space
///   (used for iPad generations, e.g. "air" + "4"),
/// - `variant` (optional): the variant suffix. Alternatives must be
///   ordered longest-combination-first ("pro max" before "pro" before
///   "max") so a greedy match never truncates a compound suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRule {
    /// Stable rule key, unique within the table (e.g. "redmi_note").
    pub key: String,

    /// Canonical brand name reported in parse results (e.g. "Redmi").
    pub brand: String,

    /// Extraction regex with named capture groups.
    pub pattern: String,

    /// Prefix prepended to the captured model to form the canonical
    /// `base_model` (e.g. "Note " so "redmi note 10" becomes "Note 10").
    #[serde(default)]
    pub model_prefix: String,

    /// Variant tokens this brand is known to ship. The union across all
    /// rules forms the variant vocabulary used by the suffix policy.
    #[serde(default)]
    pub variant_tokens: Vec<String>,
}

impl BrandRule {
    fn new(key: &str, brand: &str, pattern: &str, model_prefix: &str, variants: &[&str]) -> Self {
        Self {
            key: key.to_owned(),
            brand: brand.to_owned(),
            pattern: pattern.to_owned(),
            model_prefix: model_prefix.to_owned(),
            variant_tokens: variants.iter().map(|v| (*v).to_owned()).collect(),
        }
    }
}

/// Built-in brand rule table, iterated in registration order.
///
/// Order matters: compound series come before their plain counterparts
/// ("redmi_note" before "redmi") so the more specific rule wins.
#[must_use]
pub fn default_brand_rules() -> Vec<BrandRule> {
    vec![
        BrandRule::new(
            "iphone",
            "iPhone",
            r"iphone\s*(?P<model>\d+)(?:\s+(?P<variant>pro\s*max|pro\s*plus|pro|plus\s*max|plus|max|mini|se))?\b",
            "",
            &["pro", "plus", "max", "mini", "se"],
        ),
        // iPad models have no sub-variants; "air"/"pro"/"mini" are part of
        // the base model, optionally followed by a generation number.
        BrandRule::new(
            "ipad_named",
            "iPad",
            r"(?:apple\s+)?ipad\s+(?P<model>air|pro|mini)(?:\s*(?P<model2>\d+))?\b",
            "",
            &[],
        ),
        BrandRule::new(
            "ipad_numbered",
            "iPad",
            r"(?:apple\s+)?ipad\s*(?P<model>\d+)(?:st|nd|rd|th)?(?:\s*gen(?:eration)?)?\b",
            "",
            &[],
        ),
        BrandRule::new(
            "galaxy_note",
            "Samsung",
            r"(?:samsung\s+)?galaxy\s+note\s*(?P<model>\d+)(?:\s*(?P<variant>ultra|plus))?\b",
            "Note ",
            &["ultra", "plus", "note", "edge", "active", "fe", "lite", "neo"],
        ),
        // The trailing word boundary rejects Samsung monitor model codes
        // like "s24c360eae" (a letter follows the digits, so no match).
        BrandRule::new(
            "galaxy_s",
            "Samsung",
            r"(?:samsung\s+)?galaxy\s+s(?P<model>\d+)(?:\s*(?P<variant>ultra|plus|edge|fe|lite|neo))?\b",
            "S",
            &["ultra", "plus", "edge", "fe", "lite", "neo"],
        ),
        BrandRule::new(
            "samsung_s",
            "Samsung",
            r"samsung\s+s(?P<model>\d+)(?:\s*(?P<variant>ultra|plus|edge|fe|lite|neo))?\b",
            "S",
            &["ultra", "plus", "edge", "fe", "lite", "neo"],
        ),
        BrandRule::new(
            "pixel",
            "Google Pixel",
            r"(?:google\s+)?pixel\s*(?P<model>\d+)(?:\s*(?P<variant>xl|pro|a))?\b",
            "",
            &["xl", "pro", "a", "lite"],
        ),
        BrandRule::new(
            "oneplus",
            "OnePlus",
            r"oneplus\s*(?P<model>\d+)(?:\s*(?P<variant>pro|rt|r|t|ace))?\b",
            "",
            &["t", "pro", "r", "rt", "ace"],
        ),
        BrandRule::new(
            "redmi_note",
            "Redmi",
            r"redmi\s+note\s*(?P<model>\d+)(?:\s*(?P<variant>pro\s*max|pro\s*plus|pro|plus\s*max|plus|max|ultra|turbo|s))?\b",
            "Note ",
            &["pro", "plus", "max", "ultra", "turbo", "k", "s"],
        ),
        BrandRule::new(
            "redmi",
            "Redmi",
            r"redmi\s*(?P<model>\d+[a-z]?)(?:\s*(?P<variant>pro|plus|max|ultra|turbo|k|s))?\b",
            "",
            &["pro", "plus", "max", "ultra", "turbo", "k", "s"],
        ),
        BrandRule::new(
            "xiaomi_mi",
            "Xiaomi",
            r"xiaomi\s+mi\s*(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|ultra|turbo|t|lite|youth))?\b",
            "Mi ",
            &["pro", "plus", "max", "ultra", "turbo", "t", "lite", "youth"],
        ),
        BrandRule::new(
            "xiaomi",
            "Xiaomi",
            r"xiaomi\s*(?P<model>\d+[a-z]?)(?:\s*(?P<variant>pro|plus|max|ultra|turbo|t|lite|youth))?\b",
            "",
            &["pro", "plus", "max", "ultra", "turbo", "t", "lite", "youth"],
        ),
        BrandRule::new(
            "huawei_p",
            "Huawei",
            r"huawei\s+p(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|ultra|lite))?\b",
            "P",
            &["pro", "plus", "max", "ultra", "lite", "youth", "nova"],
        ),
        BrandRule::new(
            "huawei_mate",
            "Huawei",
            r"huawei\s+mate\s*(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|ultra|lite))?\b",
            "Mate ",
            &["pro", "plus", "max", "ultra", "lite"],
        ),
        BrandRule::new(
            "huawei_nova",
            "Huawei",
            r"huawei\s+nova\s*(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|ultra|lite))?\b",
            "Nova ",
            &["pro", "plus", "max", "ultra", "lite"],
        ),
        BrandRule::new(
            "oppo_find",
            "Oppo",
            r"oppo\s+find\s*x?(?P<model>\d+)(?:\s*(?P<variant>pro|plus|neo|lite))?\b",
            "Find X",
            &["pro", "plus", "neo", "lite", "k", "r", "a"],
        ),
        BrandRule::new(
            "oppo_reno",
            "Oppo",
            r"oppo\s+reno\s*(?P<model>\d+)(?:\s*(?P<variant>pro|plus|neo|lite))?\b",
            "Reno ",
            &["pro", "plus", "neo", "lite"],
        ),
        BrandRule::new(
            "oppo_a",
            "Oppo",
            r"oppo\s+a(?P<model>\d+)(?:\s*(?P<variant>pro|plus|neo|lite))?\b",
            "A",
            &["pro", "plus", "neo", "lite"],
        ),
        BrandRule::new(
            "vivo_x",
            "Vivo",
            r"vivo\s+x(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|neo|lite))?\b",
            "X",
            &["pro", "plus", "max", "neo", "lite", "s", "t", "y"],
        ),
        BrandRule::new(
            "vivo_y",
            "Vivo",
            r"vivo\s+y(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|neo|lite))?\b",
            "Y",
            &["pro", "plus", "max", "neo", "lite"],
        ),
        BrandRule::new(
            "vivo_v",
            "Vivo",
            r"vivo\s+v(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|neo|lite))?\b",
            "V",
            &["pro", "plus", "max", "neo", "lite"],
        ),
        BrandRule::new(
            "realme",
            "Realme",
            r"realme\s*(?P<model>\d+)(?:\s*(?P<variant>pro|plus|max|ultra|neo|x|gt|c))?\b",
            "",
            &["pro", "plus", "max", "ultra", "neo", "x", "gt", "c"],
        ),
        BrandRule::new(
            "honor",
            "Honor",
            r"honor\s*(?P<model>\d+[a-z]?)(?:\s*(?P<variant>pro|plus|max|ultra|lite|x))?\b",
            "",
            &["pro", "plus", "max", "ultra", "lite", "x"],
        ),
    ]
}

/// Default strict-query patterns: target queries matching any of these are
/// routed straight to strict model matching, bypassing the verbatim
/// substring gate (so "iPhone 16" never matches "iPhone 16 Pro" just
/// because one contains the other).
#[must_use]
pub fn default_strict_query_patterns() -> Vec<String> {
    [
        r"iphone\s*\d+",
        r"samsung\s+s\d+",
        r"galaxy\s+s\d+",
        r"galaxy\s+note\s*\d+",
        r"pixel\s*\d+",
        r"redmi\s+note\s*\d+",
        r"redmi\s*\d+",
    ]
    .iter()
    .map(|p| (*p).to_owned())
    .collect()
}
