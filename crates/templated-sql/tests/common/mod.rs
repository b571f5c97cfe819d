#![allow(dead_code)]
//! Common test utilities for tokenizer tests

use templated_sql::{composite_identifiers, Dialect, DialectType, Token, TokenKind};

/// Token kinds of `sql` under a built-in dialect
pub fn kinds(sql: &str, dialect: DialectType) -> Vec<TokenKind> {
    Dialect::get(dialect)
        .tokenize(sql)
        .iter()
        .map(|t| t.kind)
        .collect()
}

/// Render tokens as a flat, comma separated shape with composite
/// identifiers grouped, e.g.
/// `Keyword,Whitespace,CompositeIdentifier(Identifier,".",Resolvable)`
pub fn shape(tokens: &[Token]) -> String {
    let composites = composite_identifiers(tokens);
    let mut parts = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match composites.iter().find(|c| c.tokens.start == i) {
            Some(composite) => {
                let inner: Vec<String> = tokens[composite.tokens.clone()]
                    .iter()
                    .map(|t| label(t.kind))
                    .collect();
                parts.push(format!("CompositeIdentifier({})", inner.join(",")));
                i = composite.tokens.end;
            }
            None => {
                parts.push(label(tokens[i].kind));
                i += 1;
            }
        }
    }
    parts.join(",")
}

/// [`shape`] of `sql` under a built-in dialect
pub fn shape_of(sql: &str, dialect: DialectType) -> String {
    shape(&Dialect::get(dialect).tokenize(sql))
}

fn label(kind: TokenKind) -> String {
    match kind {
        TokenKind::Dot => "\".\"".to_string(),
        TokenKind::Semicolon => "\";\"".to_string(),
        other => other.to_string(),
    }
}

/// Tokens cover the input exactly, in order
pub fn assert_total_coverage(sql: &str, tokens: &[Token]) {
    let mut offset = 0;
    for token in tokens {
        assert_eq!(token.span.start, offset, "gap or overlap before {token} in {sql:?}");
        assert!(token.span.end > token.span.start, "empty token {token} in {sql:?}");
        offset = token.span.end;
    }
    assert_eq!(offset, sql.len(), "tokens stop short of the end of {sql:?}");
}
