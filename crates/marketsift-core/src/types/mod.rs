pub mod decision;
pub mod parsed;

pub use decision::{ClassificationResult, Decision, MatchStage, Verdict};
pub use parsed::ParsedModel;
