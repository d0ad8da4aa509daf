//! Error types for the reference extractor.
//!
//! Uses one crate-wide error enum, `ExtractError`, plus a `Result` alias.
//! Failures that are local to an optional enrichment (ordinal resolution
//! inside the resolver, the statute-suffix lookup) never surface here; they
//! are swallowed at the call site per the extraction policy.

use thiserror::Error;

/// Main error type for the wetref library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A word was offered as a Dutch ordinal but is not one.
    #[error("Not a recognized Dutch ordinal word: '{0}'")]
    InvalidOrdinal(String),

    /// Ordinal words are only generated for 0..100.
    #[error("No Dutch ordinal word available for {0} (supported range: 0..100)")]
    OrdinalOutOfRange(u32),

    /// A fixed-format near-match failed structural validation.
    ///
    /// The corresponding match is still emitted, flagged `invalid`, so a
    /// caller can see "looked like an identifier but isn't".
    #[error("Invalid {kind} identifier '{text}': {reason}")]
    InvalidIdentifier {
        kind: &'static str,
        text: String,
        reason: String,
    },

    /// The process-wide lexicon was initialized twice.
    #[error("Global statute lexicon was already initialized")]
    LexiconInitialized,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Lexicon dataset file could not be parsed.
    #[error("Lexicon YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON output serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ordinal_display() {
        let err = ExtractError::InvalidOrdinal("twede".to_string());
        assert!(err.to_string().contains("twede"));
    }

    #[test]
    fn test_invalid_identifier_display() {
        let err = ExtractError::InvalidIdentifier {
            kind: "ecli",
            text: "ECLI:XX:etc".to_string(),
            reason: "year field is not numeric".to_string(),
        };
        let s = err.to_string();
        assert!(s.contains("ecli"));
        assert!(s.contains("ECLI:XX:etc"));
        assert!(s.contains("year field"));
    }
}
