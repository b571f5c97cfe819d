//! PostgreSQL Dialect
//!
//! Key differences from standard SQL:
//! - `$$...$$` and `$tag$...$tag$` dollar-quoted strings
//! - `$1` positional parameters
//! - A wider operator alphabet (`@>`, `#>>`, `?|`, `~*`, ...)
//! - `b"..."` is not a literal: `"` always quotes an identifier

use super::keywords::{join, POSTGRES_KEYWORDS, POSTGRES_TYPES, SQL_KEYWORDS, SQL_TYPES};
use super::DialectConfig;

pub(crate) fn tokenizer_config() -> DialectConfig {
    let mut config = super::standard::tokenizer_config();
    config.keywords = DialectConfig::word_set(&join(&[SQL_KEYWORDS, POSTGRES_KEYWORDS]));
    config.types = DialectConfig::word_set(&join(&[SQL_TYPES, POSTGRES_TYPES]));
    config.dollar_quoting = true;
    config.char_set_casts = true;
    config.bit_literal_double_quote_allowed = false;
    config.operator_chars = "+-*/<>=~!@#%^&|?".chars().collect();
    config.special_var_chars = vec!['$'];
    config
}
