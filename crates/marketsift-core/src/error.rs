use thiserror::Error;

/// Errors that can occur while building a marketsift classifier.
///
/// Classification itself is infallible; every variant here is a
/// configuration-time failure surfaced before any listing is processed.
#[derive(Debug, Error)]
pub enum MarketsiftError {
    /// A brand rule in the configuration is malformed.
    #[error("brand rule {key:?} is invalid: {message}")]
    InvalidBrandRule {
        /// The `key` of the offending rule.
        key: String,
        /// What is wrong with it.
        message: String,
    },

    /// A matching threshold is out of range or the word-count buckets overlap.
    #[error("invalid threshold configuration: {0}")]
    InvalidThreshold(String),

    /// A regex pattern in the configuration failed to compile.
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be decoded.
    #[error("failed to decode configuration: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for marketsift operations.
pub type Result<T> = std::result::Result<T, MarketsiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = MarketsiftError::InvalidBrandRule {
            key: "iphone".into(),
            message: "missing `model` capture group".into(),
        };
        assert!(err.to_string().contains("iphone"));
        assert!(err.to_string().contains("model"));

        let err = MarketsiftError::InvalidThreshold("fuzzy_similarity must be in (0, 1]".into());
        assert!(err.to_string().contains("fuzzy_similarity"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarketsiftError>();
    }
}
