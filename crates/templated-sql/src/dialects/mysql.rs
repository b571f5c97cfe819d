//! MySQL Dialect
//!
//! Key differences from standard SQL:
//! - Backticks quote identifiers, double quotes delimit strings
//! - Backslash escapes inside strings
//! - `#` line comments, and `--` only starts a comment when followed by a space
//! - Charset introducers (`_utf8mb4'...'`, `N'...'`) and `@var` / `@@sysvar`

use super::keywords::{join, MYSQL_KEYWORDS, MYSQL_TYPES, SQL_KEYWORDS, SQL_TYPES};
use super::DialectConfig;

pub(crate) fn tokenizer_config() -> DialectConfig {
    let mut config = super::standard::tokenizer_config();
    config.keywords = DialectConfig::word_set(&join(&[SQL_KEYWORDS, MYSQL_KEYWORDS]));
    config.types = DialectConfig::word_set(&join(&[SQL_TYPES, MYSQL_TYPES]));
    config.backslash_escapes = true;
    config.hash_comments = true;
    config.space_after_dashes = true;
    config.char_set_casts = true;
    config.double_quoted_strings = true;
    config.identifier_quotes = vec!['`'];
    config.operator_chars = "*+-%<>!=&|^/".chars().collect();
    config.special_var_chars = vec!['@', '?'];
    config
}
