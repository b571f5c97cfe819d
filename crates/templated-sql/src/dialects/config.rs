//! Dialect configuration record and the options used to derive one

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lexical rules of one SQL dialect.
///
/// A config is plain data consumed by the single tokenizer implementation.
/// Build one from a preset ([`crate::DialectType::config`]), from
/// [`DialectOptions`], or through [`crate::CustomDialectBuilder`]; all of
/// those run [`DialectConfig::validate`]. Once wrapped in an `Arc` and handed
/// to a [`crate::Tokenizer`] it is shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectConfig {
    /// Keyword table (uppercase)
    pub keywords: HashSet<String>,
    /// Type-name table (uppercase); words here become `Type` tokens
    pub types: HashSet<String>,
    /// Whether `b"..."` is a bit/byte literal in addition to `b'...'`
    pub bit_literal_double_quote_allowed: bool,
    /// Whether `b'...'` holds bytes (BigQuery) rather than binary digits
    pub treat_bits_as_bytes: bool,
    /// Whether `$$...$$` and `$tag$...$tag$` are strings
    pub dollar_quoting: bool,
    /// Whether backslash escapes the next character inside strings
    pub backslash_escapes: bool,
    /// Whether `#` starts a line comment
    pub hash_comments: bool,
    /// Whether `//` starts a line comment
    pub slash_comments: bool,
    /// Whether `--` needs a following space to start a comment (MySQL)
    pub space_after_dashes: bool,
    /// Whether `"` delimits strings rather than identifiers
    pub double_quoted_strings: bool,
    /// Whether `N'...'` and `_charset'...'` introducers are recognized
    pub char_set_casts: bool,
    /// Characters that quote identifiers
    pub identifier_quotes: Vec<char>,
    /// Characters that form operator runs
    pub operator_chars: Vec<char>,
    /// Characters that start special variables (`?`, `@name`, `$1`)
    pub special_var_chars: Vec<char>,
}

/// Characters whose meaning is fixed by the tokenizer itself
const STRUCTURAL_CHARS: &[char] = &['\'', '{', '}', '(', ')', '[', ']', '.', ';', ','];

impl Default for DialectConfig {
    fn default() -> Self {
        crate::dialects::standard::tokenizer_config()
    }
}

impl DialectConfig {
    /// Word table built from a whitespace separated list
    pub fn word_set(words: &str) -> HashSet<String> {
        words
            .split_whitespace()
            .map(str::to_uppercase)
            .collect()
    }

    /// Whether `word` is in the keyword table (case-insensitive)
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word.to_uppercase())
    }

    /// Whether `word` is in the type table (case-insensitive)
    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(&word.to_uppercase())
    }

    pub fn is_identifier_quote(&self, c: char) -> bool {
        self.identifier_quotes.contains(&c)
    }

    pub fn is_operator_char(&self, c: char) -> bool {
        self.operator_chars.contains(&c)
    }

    pub fn is_special_var_char(&self, c: char) -> bool {
        self.special_var_chars.contains(&c)
    }

    /// Overlay explicit options on this config and validate the result
    pub fn with_options(mut self, options: &DialectOptions) -> Result<Self> {
        options.apply(&mut self);
        self.validate()?;
        Ok(self)
    }

    /// Reject option combinations the tokenizer cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.identifier_quotes.contains(&'\'') {
            return Err(Error::configuration(
                "`'` delimits strings and cannot quote identifiers",
            ));
        }
        if self.double_quoted_strings && self.identifier_quotes.contains(&'"') {
            return Err(Error::configuration(
                "`\"` cannot delimit both strings and identifiers",
            ));
        }
        if let Some(c) = self
            .operator_chars
            .iter()
            .find(|c| self.special_var_chars.contains(c))
        {
            return Err(Error::configuration(format!(
                "`{c}` is both an operator character and a special variable prefix"
            )));
        }
        if self.hash_comments
            && (self.is_operator_char('#') || self.is_special_var_char('#'))
        {
            return Err(Error::configuration(
                "`#` cannot start comments and also be an operator or special variable",
            ));
        }
        check_char_set("an operator", &self.operator_chars)?;
        check_char_set("a special variable", &self.special_var_chars)?;
        check_char_set("an identifier quote", &self.identifier_quotes)?;
        if let Some(c) = self
            .identifier_quotes
            .iter()
            .find(|c| self.operator_chars.contains(c) || self.special_var_chars.contains(c))
        {
            return Err(Error::configuration(format!(
                "`{c}` cannot quote identifiers and also be an operator or special variable"
            )));
        }
        check_words("keyword", &self.keywords)?;
        check_words("type", &self.types)?;
        Ok(())
    }
}

fn check_char_set(what: &str, chars: &[char]) -> Result<()> {
    for &c in chars {
        if c.is_whitespace() || c.is_alphanumeric() || c == '_' || STRUCTURAL_CHARS.contains(&c) {
            return Err(Error::configuration(format!(
                "`{}` cannot be used as {what} character",
                c.escape_default()
            )));
        }
    }
    Ok(())
}

fn check_words(what: &str, words: &HashSet<String>) -> Result<()> {
    for word in words {
        let mut chars = word.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
            && chars.all(|c| c.is_alphanumeric() || c == '_');
        if !valid {
            return Err(Error::configuration(format!(
                "{what} table entry {word:?} is not a word"
            )));
        }
    }
    Ok(())
}

/// Explicit options record for building a dialect.
///
/// Every field is optional; unset fields keep the value of the preset the
/// options are applied to. Unknown keys are rejected when deserializing.
///
/// ```
/// use templated_sql::DialectOptions;
///
/// let opts = DialectOptions::from_json(r#"{"treatBitsAsBytes": true}"#).unwrap();
/// assert_eq!(opts.treat_bits_as_bytes, Some(true));
/// assert!(DialectOptions::from_json(r#"{"treatBitsAsByte": true}"#).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DialectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_bits_as_bytes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_literal_double_quote_allowed: Option<bool>,
    #[serde(
        alias = "dollarQuotingEnabled",
        alias = "doubleDollarQuotedStrings",
        skip_serializing_if = "Option::is_none"
    )]
    pub dollar_quoting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backslash_escapes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slash_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after_dashes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_quoted_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_set_casts: Option<bool>,
    /// Identifier quote characters, e.g. ``"`"``
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_quotes: Option<String>,
    /// Operator characters, e.g. `"*+-%<>!=&|^"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_chars: Option<String>,
    /// Special variable prefixes, e.g. `"@?"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_var: Option<String>,
    /// Replacement keyword table, whitespace separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Replacement type table, whitespace separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
}

impl DialectOptions {
    /// Parse an options record from JSON, rejecting unknown keys
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn apply(&self, config: &mut DialectConfig) {
        let flags = [
            (self.treat_bits_as_bytes, &mut config.treat_bits_as_bytes),
            (
                self.bit_literal_double_quote_allowed,
                &mut config.bit_literal_double_quote_allowed,
            ),
            (self.dollar_quoting, &mut config.dollar_quoting),
            (self.backslash_escapes, &mut config.backslash_escapes),
            (self.hash_comments, &mut config.hash_comments),
            (self.slash_comments, &mut config.slash_comments),
            (self.space_after_dashes, &mut config.space_after_dashes),
            (self.double_quoted_strings, &mut config.double_quoted_strings),
            (self.char_set_casts, &mut config.char_set_casts),
        ];
        for (value, slot) in flags {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(quotes) = &self.identifier_quotes {
            config.identifier_quotes = quotes.chars().collect();
        }
        if let Some(ops) = &self.operator_chars {
            config.operator_chars = ops.chars().collect();
        }
        if let Some(vars) = &self.special_var {
            config.special_var_chars = vars.chars().collect();
        }
        if let Some(words) = &self.keywords {
            config.keywords = DialectConfig::word_set(words);
        }
        if let Some(words) = &self.types {
            config.types = DialectConfig::word_set(words);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> DialectConfig {
        DialectConfig::default()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(standard().validate().is_ok());
    }

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        let config = standard();
        assert!(config.is_keyword("select"));
        assert!(config.is_keyword("SeLeCt"));
        assert!(!config.is_keyword("my_table"));
    }

    #[test]
    fn test_options_overlay() {
        let opts = DialectOptions {
            treat_bits_as_bytes: Some(true),
            keywords: Some("select from".to_string()),
            ..Default::default()
        };
        let config = standard().with_options(&opts).unwrap();
        assert!(config.treat_bits_as_bytes);
        assert_eq!(config.keywords.len(), 2);
        assert!(config.is_keyword("From"));
        // Unset options keep the preset value
        assert_eq!(config.identifier_quotes, vec!['"']);
    }

    #[test]
    fn test_single_quote_identifier_rejected() {
        let opts = DialectOptions {
            identifier_quotes: Some("'".to_string()),
            ..Default::default()
        };
        let err = standard().with_options(&opts).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_double_quote_conflict_rejected() {
        // Standard quotes identifiers with `"`
        let opts = DialectOptions {
            double_quoted_strings: Some(true),
            ..Default::default()
        };
        assert!(standard().with_options(&opts).is_err());

        let opts = DialectOptions {
            double_quoted_strings: Some(true),
            identifier_quotes: Some("`".to_string()),
            ..Default::default()
        };
        assert!(standard().with_options(&opts).is_ok());
    }

    #[test]
    fn test_operator_special_var_overlap_rejected() {
        let opts = DialectOptions {
            operator_chars: Some("+-?".to_string()),
            special_var: Some("?".to_string()),
            ..Default::default()
        };
        let err = standard().with_options(&opts).unwrap_err();
        assert!(err.to_string().contains("`?`"), "{err}");
    }

    #[test]
    fn test_structural_operator_rejected() {
        for ops in ["+.", "+;", "{", "a", "+ "] {
            let opts = DialectOptions {
                operator_chars: Some(ops.to_string()),
                ..Default::default()
            };
            assert!(standard().with_options(&opts).is_err(), "accepted {ops:?}");
        }
    }

    #[test]
    fn test_hash_comment_conflict_rejected() {
        let opts = DialectOptions {
            hash_comments: Some(true),
            operator_chars: Some("#+".to_string()),
            ..Default::default()
        };
        assert!(standard().with_options(&opts).is_err());
    }

    #[test]
    fn test_bad_keyword_entry_rejected() {
        let opts = DialectOptions {
            keywords: Some("select 1abc".to_string()),
            ..Default::default()
        };
        assert!(standard().with_options(&opts).is_err());
    }

    #[test]
    fn test_json_keys() {
        let opts = DialectOptions::from_json(
            r#"{"treatBitsAsBytes": true, "dollarQuotingEnabled": true, "specialVar": "@"}"#,
        )
        .unwrap();
        assert_eq!(opts.treat_bits_as_bytes, Some(true));
        assert_eq!(opts.dollar_quoting, Some(true));
        assert_eq!(opts.special_var.as_deref(), Some("@"));
    }

    #[test]
    fn test_json_unknown_key_rejected() {
        let err = DialectOptions::from_json(r#"{"treatBitsAsBytes": true, "colour": 1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("colour"), "{err}");
    }
}
