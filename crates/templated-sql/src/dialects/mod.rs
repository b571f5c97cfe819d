//! SQL dialects
//!
//! A dialect is a name bound to a [`DialectConfig`]. The built-in presets
//! ([`DialectType`]) are configured once and shared; custom dialects are
//! derived from a preset plus [`DialectOptions`] through
//! [`CustomDialectBuilder`] and can be registered for lookup by name.

mod bigquery;
mod config;
pub mod keywords;
mod mysql;
mod postgres;
mod standard;

pub use config::{DialectConfig, DialectOptions};

use crate::error::{Error, Result};
use crate::tokens::{Token, Tokenized, Tokenizer};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Built-in dialect presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectType {
    /// ANSI SQL
    Standard,
    MySQL,
    PostgreSQL,
    BigQuery,
}

impl DialectType {
    pub const ALL: [DialectType; 4] = [
        DialectType::Standard,
        DialectType::MySQL,
        DialectType::PostgreSQL,
        DialectType::BigQuery,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            DialectType::Standard => "standard",
            DialectType::MySQL => "mysql",
            DialectType::PostgreSQL => "postgresql",
            DialectType::BigQuery => "bigquery",
        }
    }

    /// A fresh copy of this preset's configuration
    pub fn config(self) -> DialectConfig {
        match self {
            DialectType::Standard => standard::tokenizer_config(),
            DialectType::MySQL => mysql::tokenizer_config(),
            DialectType::PostgreSQL => postgres::tokenizer_config(),
            DialectType::BigQuery => bigquery::tokenizer_config(),
        }
    }

    /// The shared, lazily built configuration of this preset
    pub fn shared_config(self) -> Arc<DialectConfig> {
        static PRESETS: Lazy<[Arc<DialectConfig>; 4]> =
            Lazy::new(|| DialectType::ALL.map(|d| Arc::new(d.config())));
        Arc::clone(&PRESETS[self as usize])
    }
}

impl fmt::Display for DialectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "sql" | "ansi" | "generic" => Ok(DialectType::Standard),
            "mysql" | "mariadb" => Ok(DialectType::MySQL),
            "postgresql" | "postgres" | "pg" => Ok(DialectType::PostgreSQL),
            "bigquery" => Ok(DialectType::BigQuery),
            _ => Err(Error::unknown_dialect(s)),
        }
    }
}

static CUSTOM_DIALECTS: Lazy<RwLock<HashMap<String, Arc<DialectConfig>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn registry_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// A named dialect: the handle used to tokenize
#[derive(Debug, Clone)]
pub struct Dialect {
    name: String,
    dialect_type: Option<DialectType>,
    config: Arc<DialectConfig>,
}

impl Dialect {
    /// Get a built-in dialect
    pub fn get(dialect_type: DialectType) -> Self {
        Self {
            name: dialect_type.name().to_string(),
            dialect_type: Some(dialect_type),
            config: dialect_type.shared_config(),
        }
    }

    /// Look up a built-in dialect name (or alias), then the custom registry
    pub fn get_by_name(name: &str) -> Option<Self> {
        if let Ok(dialect_type) = name.parse::<DialectType>() {
            return Some(Self::get(dialect_type));
        }
        let registry = CUSTOM_DIALECTS
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        registry.get(&registry_key(name)).map(|config| Self {
            name: name.to_string(),
            dialect_type: None,
            config: Arc::clone(config),
        })
    }

    /// Build an unregistered dialect from options over the standard preset
    pub fn from_options(name: impl Into<String>, options: &DialectOptions) -> Result<Self> {
        CustomDialectBuilder::new(name).options(options.clone()).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The preset this dialect is, if it is a built-in one
    pub fn dialect_type(&self) -> Option<DialectType> {
        self.dialect_type
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    pub fn shared_config(&self) -> Arc<DialectConfig> {
        Arc::clone(&self.config)
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.shared_config())
    }

    /// Tokenize SQL with this dialect's rules
    pub fn tokenize(&self, sql: &str) -> Vec<Token> {
        self.tokenizer().tokenize(sql)
    }

    /// Tokenize SQL and collect lexical diagnostics
    pub fn scan(&self, sql: &str) -> Tokenized {
        self.tokenizer().scan(sql)
    }
}

type ConfigModifier = Box<dyn FnOnce(&mut DialectConfig) + Send>;

/// Builder for dialects derived from a preset.
///
/// ```
/// use templated_sql::{CustomDialectBuilder, DialectOptions, DialectType, TokenKind};
///
/// let dialect = CustomDialectBuilder::new("warehouse")
///     .based_on(DialectType::Standard)
///     .options(DialectOptions {
///         treat_bits_as_bytes: Some(true),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// let kinds: Vec<TokenKind> = dialect.tokenize("b'0101'").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::Bytes]);
/// ```
pub struct CustomDialectBuilder {
    name: String,
    base: DialectType,
    options: DialectOptions,
    modifier: Option<ConfigModifier>,
}

impl CustomDialectBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: DialectType::Standard,
            options: DialectOptions::default(),
            modifier: None,
        }
    }

    /// Preset the options are applied to (default: standard)
    pub fn based_on(mut self, base: DialectType) -> Self {
        self.base = base;
        self
    }

    pub fn options(mut self, options: DialectOptions) -> Self {
        self.options = options;
        self
    }

    /// Edit the config directly after options are applied; the result is
    /// still validated
    pub fn config_modifier<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut DialectConfig) + Send + 'static,
    {
        self.modifier = Some(Box::new(modifier));
        self
    }

    /// Build the dialect without registering it
    pub fn build(self) -> Result<Dialect> {
        if self.name.trim().is_empty() {
            return Err(Error::configuration("dialect name cannot be empty"));
        }
        let mut config = self.base.config();
        self.options.apply(&mut config);
        if let Some(modifier) = self.modifier {
            modifier(&mut config);
        }
        config.validate()?;
        Ok(Dialect {
            name: self.name,
            dialect_type: None,
            config: Arc::new(config),
        })
    }

    /// Build the dialect and make it available to [`Dialect::get_by_name`]
    pub fn register(self) -> Result<()> {
        if self.name.parse::<DialectType>().is_ok() {
            return Err(Error::DialectAlreadyExists(self.name));
        }
        let dialect = self.build()?;
        let key = registry_key(&dialect.name);
        let mut registry = CUSTOM_DIALECTS
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if registry.contains_key(&key) {
            return Err(Error::DialectAlreadyExists(dialect.name));
        }
        debug!(dialect = %dialect.name, "registered custom dialect");
        registry.insert(key, dialect.config);
        Ok(())
    }
}

/// Remove a registered custom dialect; returns whether it existed
pub fn unregister_custom_dialect(name: &str) -> bool {
    let mut registry = CUSTOM_DIALECTS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.remove(&registry_key(name)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for dialect_type in DialectType::ALL {
            assert!(
                dialect_type.config().validate().is_ok(),
                "{dialect_type} preset is invalid"
            );
        }
    }

    #[test]
    fn test_dialect_type_names_round_trip() {
        for dialect_type in DialectType::ALL {
            assert_eq!(dialect_type.name().parse::<DialectType>().unwrap(), dialect_type);
        }
        assert_eq!("Postgres".parse::<DialectType>().unwrap(), DialectType::PostgreSQL);
        assert!(matches!(
            "oracle".parse::<DialectType>(),
            Err(Error::UnknownDialect(_))
        ));
    }

    #[test]
    fn test_shared_config_is_reused() {
        let a = DialectType::MySQL.shared_config();
        let b = Dialect::get(DialectType::MySQL).shared_config();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_preset_differences() {
        assert!(DialectType::PostgreSQL.config().dollar_quoting);
        assert!(!DialectType::MySQL.config().dollar_quoting);
        assert!(DialectType::BigQuery.config().treat_bits_as_bytes);
        assert!(DialectType::MySQL.config().hash_comments);
        assert!(!DialectType::PostgreSQL.config().bit_literal_double_quote_allowed);
    }

    #[test]
    fn test_builder_rejects_invalid_modifier() {
        let result = CustomDialectBuilder::new("broken")
            .config_modifier(|config| config.identifier_quotes.push('\''))
            .build();
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        assert!(CustomDialectBuilder::new("  ").build().is_err());
    }
}
