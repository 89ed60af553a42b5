//! Error types for ruslex
//!
//! This module defines the error types used throughout the library.
//! All errors are designed to be informative and actionable.
//!
//! A noun lookup that finds nothing is *not* an error — see
//! [`crate::collocations::QueryOutcome`]. Errors here cover fatal
//! conditions only: an analysis run either completes fully or fails
//! with one of these.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Main error type for ruslex
#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    /// Input text is empty or contains only whitespace
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// The analyzer could not extract any tokens from the document
    #[error("Tokenization failure: {message}")]
    NoTokens { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AnalysisError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a tokenization failure error
    pub fn no_tokens(message: impl Into<String>) -> Self {
        Self::NoTokens {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check whether this error aborts a whole analysis run
    /// (as opposed to a recoverable per-sentence condition, which the
    /// analyzer handles internally and never surfaces as an error).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::NoTokens { .. })
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::empty_input("no text provided");
        assert!(err.to_string().contains("Empty input"));
        assert!(err.to_string().contains("no text provided"));

        let err = AnalysisError::no_tokens("document has no word tokens");
        assert!(err.to_string().contains("Tokenization failure"));
    }

    #[test]
    fn test_is_fatal() {
        assert!(AnalysisError::empty_input("x").is_fatal());
        assert!(AnalysisError::no_tokens("x").is_fatal());
        assert!(!AnalysisError::invalid_config("x").is_fatal());
        assert!(!AnalysisError::serialization("x").is_fatal());
    }

    #[test]
    fn test_from_serde_json() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: AnalysisError = bad.unwrap_err().into();
        assert!(matches!(err, AnalysisError::Serialization { .. }));
    }
}
