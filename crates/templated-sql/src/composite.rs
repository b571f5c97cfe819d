//! Composite identifiers: `part (. part)+` runs in a token stream
//!
//! Parts are `Identifier`, `QuotedIdentifier` or `Resolvable` tokens, so
//! `{{ 'schema' }}.users` and `public.{{ 'table' }}` come out the same shape
//! as `public.users`.

use crate::tokens::{Span, Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A dotted name: a range of token indices and the source span it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeIdentifier {
    /// Indices into the token slice, parts and dots alternating
    pub tokens: Range<usize>,
    pub span: Span,
}

impl CompositeIdentifier {
    /// The part tokens, without the dots
    pub fn parts<'t>(&self, tokens: &'t [Token]) -> impl Iterator<Item = &'t Token> + 't {
        tokens[self.tokens.clone()].iter().step_by(2)
    }

    pub fn part_count(&self) -> usize {
        (self.tokens.len() + 1) / 2
    }
}

/// Find every maximal composite identifier in `tokens`
pub fn composite_identifiers(tokens: &[Token]) -> Vec<CompositeIdentifier> {
    let mut found = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if !tokens[i].kind.is_identifier_like() {
            i += 1;
            continue;
        }
        let mut end = i + 1;
        while end + 1 < tokens.len()
            && tokens[end].kind == TokenKind::Dot
            && tokens[end + 1].kind.is_identifier_like()
        {
            end += 2;
        }
        if end > i + 1 {
            let first = tokens[i].span;
            found.push(CompositeIdentifier {
                tokens: i..end,
                span: Span::new(first.start, tokens[end - 1].span.end, first.line, first.column),
            });
        }
        i = end;
    }
    found
}
