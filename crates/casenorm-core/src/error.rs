//! Error types for case normalization
//!
//! Converting a `&str` never fails. Errors only arise at the untyped-input
//! boundary (`InvalidInputType`) and while building a configuration.

use thiserror::Error;

/// Casenorm error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not a text string (strict policy only)
    #[error("Type mismatch: expected string, found {found}")]
    InvalidInputType { found: String },

    /// Delimiter is alphanumeric, whitespace, a control character, or a combining mark
    #[error("Invalid delimiter {0:?}: must be a printable, non-alphanumeric character")]
    InvalidDelimiter(char),

    /// Extra separator is alphanumeric or a combining mark
    #[error("Invalid separator {0:?}: must not be alphanumeric or a combining mark")]
    InvalidSeparator(char),

    /// Options could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_input_type(found: impl Into<String>) -> Self {
        Error::InvalidInputType {
            found: found.into(),
        }
    }
}

/// Result type alias for casenorm operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input_type() {
        let err = Error::invalid_input_type("number");
        assert_eq!(err.to_string(), "Type mismatch: expected string, found number");
    }

    #[test]
    fn test_display_invalid_delimiter() {
        let err = Error::InvalidDelimiter('a');
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_display_invalid_separator() {
        let err = Error::InvalidSeparator('Z');
        assert!(err.to_string().starts_with("Invalid separator 'Z'"));
    }
}
