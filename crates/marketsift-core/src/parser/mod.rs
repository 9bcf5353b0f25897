pub mod model;
pub mod normalize;
pub mod registry;

pub use model::ModelParser;
pub use normalize::{collapse_whitespace, MatchNormalizer, TitleCleaner};
pub use registry::{BrandRegistry, CompiledBrandRule};
