//! BigQuery Dialect
//!
//! Key differences from standard SQL:
//! - `b'...'` and `b"..."` are byte strings, not bit strings
//! - Backticks quote identifiers, double quotes delimit strings
//! - Backslash escapes inside strings

use super::keywords::{join, BIGQUERY_KEYWORDS, BIGQUERY_TYPES, SQL_KEYWORDS, SQL_TYPES};
use super::DialectConfig;

pub(crate) fn tokenizer_config() -> DialectConfig {
    let mut config = super::standard::tokenizer_config();
    config.keywords = DialectConfig::word_set(&join(&[SQL_KEYWORDS, BIGQUERY_KEYWORDS]));
    config.types = DialectConfig::word_set(&join(&[SQL_TYPES, BIGQUERY_TYPES]));
    config.treat_bits_as_bytes = true;
    config.bit_literal_double_quote_allowed = true;
    config.backslash_escapes = true;
    config.double_quoted_strings = true;
    config.identifier_quotes = vec!['`'];
    config.special_var_chars = vec!['@', '?'];
    config
}
