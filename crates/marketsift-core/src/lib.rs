//! # Marketsift Core
//!
//! Decides whether scraped marketplace listing titles actually match a
//! target search query. Parses brand/model/variant structure out of
//! free-text titles, applies a suffix-aware inclusion policy ("iPhone 16"
//! must not match "iPhone 16 Pro Max"), rejects accessory and off-category
//! listings, and falls back to tiered word matching for everything that
//! does not parse.
//!
//! ## Quick Start
//!
//! ```rust
//! use marketsift_core::{Classifier, FilterConfig};
//!
//! let classifier = Classifier::new(FilterConfig::default()).unwrap();
//!
//! let result = classifier.classify("iPhone 16 Pro 128GB Titanium", "iPhone 16 Pro");
//! assert!(result.is_included());
//!
//! let result = classifier.classify("iPhone 16 Pro Max 256GB", "iPhone 16 Pro");
//! assert!(!result.is_included());
//! ```
pub mod classify;
pub mod config;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export primary API
pub use classify::{BatchResult, Classifier, ExcludedTitle};
pub use config::{BrandRule, ColorFamily, FilterConfig, Lexicon, MatchThresholds};
pub use error::{MarketsiftError, Result};
pub use matcher::{ColorMatcher, ExcludedTerm, ExclusionFilter, FallbackMatcher, VariantPolicy};
pub use parser::{ModelParser, TitleCleaner};
pub use types::{ClassificationResult, Decision, MatchStage, ParsedModel};
