//! Error types for templated-sql
//!
//! Two families live here. [`Error`] is returned from fallible API calls
//! (building or registering a dialect). [`LexErrorKind`] is never returned:
//! the tokenizer is total, so lexical problems are recorded as [`LexError`]
//! diagnostics next to the `Error` token that covers the offending text.

use crate::tokens::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The result type for templated-sql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or looking up a dialect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid or conflicting dialect options
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// No built-in or registered dialect has this name
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// A dialect with this name is already built in or registered
    #[error("Dialect already exists: {0}")]
    DialectAlreadyExists(String),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown dialect error
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Error::UnknownDialect(name.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::configuration(err.to_string())
    }
}

/// Why a region of input was tokenized as `Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated quoted identifier")]
    UnterminatedQuotedIdentifier,

    #[error("unterminated dollar-quoted string")]
    UnterminatedDollarString,

    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    #[error("bit literal may only contain 0 and 1")]
    MalformedBitLiteral,

    #[error("hex literal may only contain hexadecimal digits")]
    MalformedHexLiteral,

    #[error("placeholder is missing its expression")]
    MissingResolvableExpression,

    #[error("placeholders cannot be nested")]
    NestedResolvable,

    #[error("expected `}}}}` to close the placeholder")]
    ExpectedResolvableClose,

    #[error("unterminated placeholder")]
    UnterminatedResolvable,

    #[error("`}}}}` without a matching `{{{{`")]
    UnmatchedResolvableClose,

    #[error("only whitespace and one placeholder may appear between these quotes")]
    UnexpectedQuotedContent,

    #[error("a quoted region may contain only one placeholder")]
    MultipleResolvables,

    #[error("quoted region around a placeholder is never closed")]
    UnterminatedQuotedRegion,

    #[error("`.` must join two identifier parts")]
    StrayDot,

    #[error("unexpected character")]
    UnexpectedCharacter,
}

/// A lexical diagnostic: the reason and the span of its `Error` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.span.line, self.span.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        let err = Error::configuration("`'` cannot quote identifiers");
        assert_eq!(
            err.to_string(),
            "Configuration error: `'` cannot quote identifiers"
        );
    }

    #[test]
    fn test_json_error_becomes_configuration_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(Error::from(json_err), Error::Configuration { .. }));
    }

    #[test]
    fn test_lex_error_display() {
        let err = LexError::new(LexErrorKind::ExpectedResolvableClose, Span::new(7, 12, 1, 8));
        assert_eq!(
            err.to_string(),
            "expected `}}` to close the placeholder at line 1, column 8"
        );
        let err = LexError::new(LexErrorKind::UnmatchedResolvableClose, Span::new(0, 2, 1, 1));
        assert_eq!(err.to_string(), "`}}` without a matching `{{` at line 1, column 1");
    }
}
