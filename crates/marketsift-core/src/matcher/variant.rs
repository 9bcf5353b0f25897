use std::collections::BTreeSet;

use crate::matcher::ColorMatcher;
use crate::types::{ParsedModel, Verdict};

/// Suffix-aware include/exclude policy, applied when target and candidate
/// parse to the same brand.
///
/// A base-model search ("iPhone 16") accepts only base-model listings; a
/// variant search ("iPhone 16 Pro") accepts only listings with exactly the
/// same suffix set. Both checks also scan the candidate's raw title for
/// known suffix tokens the parser may have under-captured; this is what
/// makes "iPhone 16 Pro" reject "iPhone 16 Pro Max" even though {pro} is a
/// subset of {pro, max}.
#[derive(Debug)]
pub struct VariantPolicy {
    /// Union of all brands' variant tokens plus accessory suffix extras.
    vocabulary: BTreeSet<String>,
    colors: ColorMatcher,
}

impl VariantPolicy {
    /// Builds the policy over the given suffix vocabulary and color table.
    #[must_use]
    pub fn new(vocabulary: BTreeSet<String>, colors: ColorMatcher) -> Self {
        Self { vocabulary, colors }
    }

    /// Decides whether `candidate` is the same SKU the `target` asks for.
    /// Only meaningful when both sides share a brand.
    #[must_use]
    pub fn evaluate(&self, target: &ParsedModel, candidate: &ParsedModel) -> Verdict {
        // Base model equality is mandatory.
        if !target
            .base_model
            .eq_ignore_ascii_case(&candidate.base_model)
        {
            return Verdict::Exclude(format!(
                "different model number: {} vs {}",
                candidate.base_model, target.base_model
            ));
        }

        if let Some(verdict) = self.color_mismatch(target, candidate) {
            return verdict;
        }

        if target.variant_suffix.is_empty() {
            self.evaluate_base_search(target, candidate)
        } else {
            self.evaluate_variant_search(target, candidate)
        }
    }

    /// Color gate: a color named in the search is binding. A listing that
    /// names another color, or no color at all, is a different SKU. A
    /// colorless search accepts any listing color.
    fn color_mismatch(&self, target: &ParsedModel, candidate: &ParsedModel) -> Option<Verdict> {
        let target_color = self.colors.extract(&target.raw_title)?;
        match self.colors.extract(&candidate.raw_title) {
            Some(candidate_color) => {
                if self.colors.families_match(target_color, candidate_color) {
                    None
                } else {
                    Some(Verdict::Exclude(format!(
                        "color mismatch: listing is {candidate_color:?} but search wants {target_color:?}"
                    )))
                }
            }
            None => Some(Verdict::Exclude(format!(
                "search specifies color {target_color:?} but listing names no color"
            ))),
        }
    }

    /// Target is a bare base model: the candidate must be one too.
    fn evaluate_base_search(&self, target: &ParsedModel, candidate: &ParsedModel) -> Verdict {
        if candidate.has_variant() {
            return Verdict::Exclude(format!(
                "base-model search but listing has variant suffix: {}",
                candidate.variant_list()
            ));
        }

        // Catch suffixes the parser under-captured ("Pro" hiding later in
        // the title).
        if let Some(token) = self.extra_suffix_token(target, candidate) {
            return Verdict::Exclude(format!(
                "base-model search but title carries suffix {token:?}"
            ));
        }

        Verdict::Include("exact base model match, no variant suffix".into())
    }

    /// Target names a variant: the candidate must carry exactly that
    /// suffix set and nothing more.
    fn evaluate_variant_search(&self, target: &ParsedModel, candidate: &ParsedModel) -> Verdict {
        if !candidate.has_variant() {
            return Verdict::Exclude(format!(
                "search wants variant {} but listing is the base model",
                target.variant_list()
            ));
        }

        if target.variant_suffix != candidate.variant_suffix {
            return Verdict::Exclude(format!(
                "variant mismatch: listing has {} but search wants {}",
                candidate.variant_list(),
                target.variant_list()
            ));
        }

        if let Some(token) = self.extra_suffix_token(target, candidate) {
            return Verdict::Exclude(format!("listing carries additional suffix {token:?}"));
        }

        Verdict::Include(format!("exact variant match: {}", target.variant_list()))
    }

    /// First known suffix token present as a standalone word in the
    /// candidate's raw title but absent from the target's. Single-letter
    /// vocabulary entries are skipped; they collide with colors and
    /// shorthand too easily.
    fn extra_suffix_token(&self, target: &ParsedModel, candidate: &ParsedModel) -> Option<String> {
        let target_words = title_words(&target.raw_title);
        let candidate_words = title_words(&candidate.raw_title);

        candidate_words
            .iter()
            .find(|word| self.vocabulary.contains(**word) && !target_words.contains(*word))
            .map(|word| (*word).to_owned())
    }
}

/// Standalone words of length > 1 in a title.
fn title_words(title: &str) -> BTreeSet<&str> {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| w.len() > 1)
        .collect()
}
