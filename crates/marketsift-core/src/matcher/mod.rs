//! # Matching stages
//!
//! Three independent evaluators composed by the classifier: the global
//! [`ExclusionFilter`] (accessory/noise blacklist), the suffix-aware
//! [`VariantPolicy`] for parsed models, and the tiered [`FallbackMatcher`]
//! for everything else.

pub mod color;
pub mod exclusion;
pub mod fallback;
pub mod variant;

pub use color::ColorMatcher;
pub use exclusion::{ExcludedTerm, ExclusionFilter};
pub use fallback::FallbackMatcher;
pub use variant::VariantPolicy;
