//! Shared error types for the library

use thiserror::Error;

/// Main error type for alletaal-lint operations
#[derive(Debug, Error)]
pub enum LintError {
    /// Annotation output that violates the token contract (bad head or token index).
    /// Indicates an adapter bug, never a text-quality issue.
    #[error("Data integrity error in sentence {sentence:?}: {message}")]
    DataIntegrity { sentence: String, message: String },

    /// A non-finite value reached the score calculator
    #[error("Invalid feature value for {feature}: {value}")]
    InvalidFeature { feature: &'static str, value: f64 },

    /// Malformed CoNLL-U annotation
    #[error("Annotation error at line {line}: {message}")]
    Annotation { line: usize, message: String },

    /// External annotation pipeline failure
    #[error("Annotation pipeline error: {0}")]
    Pipeline(String),

    /// Malformed frequency lexicon
    #[error("Lexicon error at line {line}: {message}")]
    Lexicon { line: usize, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LintError {
    pub fn data_integrity(sentence: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataIntegrity {
            sentence: sentence.into(),
            message: message.into(),
        }
    }

    pub fn annotation(line: usize, message: impl Into<String>) -> Self {
        Self::Annotation {
            line,
            message: message.into(),
        }
    }

    pub fn lexicon(line: usize, message: impl Into<String>) -> Self {
        Self::Lexicon {
            line,
            message: message.into(),
        }
    }

    /// Contract violations are programming errors upstream; nothing here is retryable.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::DataIntegrity { .. } | Self::InvalidFeature { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, LintError>;
