//! Error types for parsing operations
//!
//! None of these escape [`crate::parse`]: the orchestrator converts every
//! error into the canonical empty document. They are public so that callers
//! driving the lower-level pieces (option loading, pattern access) can react
//! to them.

use thiserror::Error;

/// Errors that can occur while parsing lesson markup
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was empty or not text
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A tag pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),
    /// Parser options could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
    /// Unexpected failure inside the pipeline (panic caught)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Stable numeric code, suitable for structured logs
    pub fn code(&self) -> u32 {
        match self {
            ParseError::InvalidInput(_) => 5,
            ParseError::Pattern(_) => 6,
            ParseError::Config(_) => 7,
            ParseError::Internal(_) => 99,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            ParseError::InvalidInput("empty".to_string()),
            ParseError::Pattern("bad".to_string()),
            ParseError::Internal("boom".to_string()),
        ];
        let codes: Vec<u32> = errors.iter().map(ParseError::code).collect();
        assert_eq!(codes, vec![5, 6, 99]);
    }

    #[test]
    fn test_config_error_from_toml() {
        let err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err = ParseError::from(err);
        assert_eq!(err.code(), 7);
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseError::InvalidInput("markup is empty".to_string()).to_string(),
            "Invalid input: markup is empty"
        );
        assert_eq!(
            ParseError::Internal("panic".to_string()).to_string(),
            "Internal error: panic"
        );
    }
}
