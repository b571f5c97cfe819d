//! Templated SQL - dialect-aware SQL tokenization with template placeholders
//!
//! This library converts SQL text into a token stream that covers every byte
//! of the input, recognizing `{{ ... }}` placeholders (resolvables) wherever
//! a name or literal could stand.
//!
//! # Architecture
//!
//! 1. **Dialects** - Presets and custom configurations ([`DialectConfig`])
//! 2. **Classifier** - Pure literal recognition (`b'0101'`, `$$text$$`, ...)
//! 3. **Tokenizer** - A scanner with a quoted-region mode for `'{{ x }}'`
//! 4. **Composite identifiers** - `schema.{{ 'table' }}` style name runs
//!
//! Tokenization never fails. Text that cannot be tokenized becomes an
//! `Error` token, and [`Tokenizer::scan`] reports why.

pub mod classify;
pub mod composite;
pub mod dialects;
pub mod error;
mod quote_region;
mod resolvable;
pub mod tokens;

pub use classify::{classify, classify_literal, LiteralMatch};
pub use composite::{composite_identifiers, CompositeIdentifier};
pub use dialects::{
    unregister_custom_dialect, CustomDialectBuilder, Dialect, DialectConfig, DialectOptions,
    DialectType,
};
pub use error::{Error, LexError, LexErrorKind, Result};
pub use tokens::{Span, Token, TokenKind, Tokenized, Tokenizer};

/// Tokenize SQL with a built-in dialect.
///
/// # Example
///
/// ```
/// use templated_sql::{tokenize, DialectType, TokenKind};
///
/// let tokens = tokenize("SELECT b'0101'", DialectType::MySQL);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::Keyword, TokenKind::Whitespace, TokenKind::Bits]);
/// ```
pub fn tokenize(sql: &str, dialect: DialectType) -> Vec<Token> {
    Dialect::get(dialect).tokenize(sql)
}

/// Tokenize SQL using a string dialect name.
///
/// Supports both built-in and custom dialect names.
pub fn tokenize_by_name(sql: &str, dialect: &str) -> Result<Vec<Token>> {
    let d = Dialect::get_by_name(dialect).ok_or_else(|| Error::unknown_dialect(dialect))?;
    Ok(d.tokenize(sql))
}
