//! Standard SQL Dialect

use super::keywords::{SQL_KEYWORDS, SQL_TYPES};
use super::DialectConfig;

/// ANSI SQL: `"` quotes identifiers, `?` is the only special variable
pub(crate) fn tokenizer_config() -> DialectConfig {
    DialectConfig {
        keywords: DialectConfig::word_set(SQL_KEYWORDS),
        types: DialectConfig::word_set(SQL_TYPES),
        // b"..." reads as a bit literal unless a dialect opts out
        bit_literal_double_quote_allowed: true,
        treat_bits_as_bytes: false,
        dollar_quoting: false,
        backslash_escapes: false,
        hash_comments: false,
        slash_comments: false,
        space_after_dashes: false,
        double_quoted_strings: false,
        char_set_casts: false,
        identifier_quotes: vec!['"'],
        operator_chars: "*+-%<>!=&|~^/".chars().collect(),
        special_var_chars: vec!['?'],
    }
}
