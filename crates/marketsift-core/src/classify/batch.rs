use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::Classifier;

/// A title rejected by the classifier, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedTitle {
    /// The original (unmodified) listing title.
    pub title: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Outcome of classifying a batch of titles against one query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchResult {
    /// Titles that matched, in input order.
    pub included: Vec<String>,
    /// Rejected titles with reasons, in input order.
    pub excluded: Vec<ExcludedTitle>,
}

impl BatchResult {
    /// Total number of titles processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.included.len() + self.excluded.len()
    }

    /// Exclusion reasons with their occurrence counts, most useful for
    /// spotting an over-eager word list after a lexicon change.
    #[must_use]
    pub fn exclusion_stats(&self) -> BTreeMap<String, usize> {
        let mut stats = BTreeMap::new();
        for excluded in &self.excluded {
            *stats.entry(excluded.reason.clone()).or_insert(0) += 1;
        }
        stats
    }
}

impl Classifier {
    /// Classifies every title against the target query, preserving input
    /// order on both sides of the split.
    #[must_use]
    pub fn classify_batch<S: AsRef<str>>(&self, titles: &[S], target: &str) -> BatchResult {
        let mut result = BatchResult::default();

        for title in titles {
            let title = title.as_ref();
            let outcome = self.classify(title, target);
            if outcome.is_included() {
                result.included.push(title.to_owned());
            } else {
                result.excluded.push(ExcludedTitle {
                    title: title.to_owned(),
                    reason: outcome.reason,
                });
            }
        }

        info!(
            target_query = target,
            total = result.total(),
            included = result.included.len(),
            excluded = result.excluded.len(),
            "classified batch"
        );
        result
    }

    /// Splits arbitrary records by their title, keeping the records
    /// themselves. Rejected records come back with the exclusion reason.
    pub fn partition<T, F>(&self, items: Vec<T>, target: &str, title_of: F) -> (Vec<T>, Vec<(T, String)>)
    where
        F: Fn(&T) -> &str,
    {
        let mut included = Vec::new();
        let mut excluded = Vec::new();

        for item in items {
            let outcome = self.classify(title_of(&item), target);
            if outcome.is_included() {
                included.push(item);
            } else {
                excluded.push((item, outcome.reason));
            }
        }

        (included, excluded)
    }
}
