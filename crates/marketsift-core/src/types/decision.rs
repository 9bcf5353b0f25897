use serde::{Deserialize, Serialize};

/// Final include/exclude decision for a listing title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The listing matches the target query.
    Include,
    /// The listing does not match the target query.
    Exclude,
}

/// Which pipeline stage produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStage {
    /// The target query appeared verbatim in the title.
    ExactSubstring,
    /// Both sides parsed to the same brand and the suffix policy decided.
    VariantPolicy,
    /// The tiered fallback matcher decided.
    Fallback,
    /// The global exclusion filter (or degenerate input) decided.
    Excluded,
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ExactSubstring => "exact-substring",
            Self::VariantPolicy => "variant-policy",
            Self::Fallback => "fallback",
            Self::Excluded => "excluded",
        };
        write!(f, "{name}")
    }
}

/// Tagged include/exclude outcome produced by the internal evaluators.
///
/// The reason is always non-empty and human-readable; the orchestrator
/// attaches the pipeline stage to build a [`ClassificationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Matched, with the reason it matched.
    Include(String),
    /// Rejected, with the reason it was rejected.
    Exclude(String),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Include`].
    #[must_use]
    pub fn is_include(&self) -> bool {
        matches!(self, Self::Include(_))
    }

    /// The reason string, regardless of polarity.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Include(reason) | Self::Exclude(reason) => reason,
        }
    }
}

/// The primary output of the classification pipeline.
///
/// Every decision carries a non-empty human-readable reason, used for
/// audit logs and exclusion statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Include or exclude.
    pub decision: Decision,

    /// Why the decision was made.
    pub reason: String,

    /// Which stage of the pipeline decided.
    pub stage: MatchStage,
}

impl ClassificationResult {
    /// Builds an include result.
    #[must_use]
    pub fn include(reason: impl Into<String>, stage: MatchStage) -> Self {
        Self {
            decision: Decision::Include,
            reason: reason.into(),
            stage,
        }
    }

    /// Builds an exclude result.
    #[must_use]
    pub fn exclude(reason: impl Into<String>, stage: MatchStage) -> Self {
        Self {
            decision: Decision::Exclude,
            reason: reason.into(),
            stage,
        }
    }

    /// Lifts a [`Verdict`] into a result at the given stage.
    #[must_use]
    pub fn from_verdict(verdict: Verdict, stage: MatchStage) -> Self {
        match verdict {
            Verdict::Include(reason) => Self::include(reason, stage),
            Verdict::Exclude(reason) => Self::exclude(reason, stage),
        }
    }

    /// Returns `true` if the listing should be kept.
    #[must_use]
    pub fn is_included(&self) -> bool {
        self.decision == Decision::Include
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let polarity = match self.decision {
            Decision::Include => "include",
            Decision::Exclude => "exclude",
        };
        write!(f, "{polarity} [{}]: {}", self.stage, self.reason)
    }
}
