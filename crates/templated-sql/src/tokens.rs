//! Token types and tokenization for templated SQL
//!
//! This module defines the token model and the tokenizer that converts SQL
//! text, possibly containing `{{ ... }}` placeholders, into a token stream
//! that covers every byte of the input.

use crate::classify::{
    classify_literal, is_whitespace, is_word_char, is_word_start, number_len, quoted_len,
    word_kind,
};
use crate::dialects::{DialectConfig, DialectType};
use crate::error::{LexError, LexErrorKind};
use crate::quote_region::{plan_quote_region, QuotePlan};
use crate::resolvable::{self, ResolvableScan};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "bindings")]
use ts_rs::TS;

/// Represents a position in the source SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "bindings", derive(TS))]
#[cfg_attr(feature = "bindings", ts(export))]
pub struct Span {
    /// Starting byte offset
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
    /// Line number of the first character (1-based)
    pub line: usize,
    /// Column number of the first character (1-based, in characters)
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "bindings", derive(TS))]
#[cfg_attr(feature = "bindings", ts(export))]
pub enum TokenKind {
    Keyword,
    /// A built-in type name such as `INTEGER`
    Type,
    Identifier,
    /// `"name"` or `` `name` ``, depending on the dialect
    QuotedIdentifier,
    /// `b'0101'` or `0b0101`
    Bits,
    /// `b'...'` in dialects that treat bit literals as byte strings
    Bytes,
    String,
    Number,
    /// A `{{ ... }}` placeholder
    Resolvable,
    /// A `'` that opens or closes a quoted region around a placeholder
    OrphanSingleQuote,
    Operator,
    /// `?`, `@name`, `@@name`, `$1` and the like
    SpecialVar,
    Dot,
    Semicolon,
    /// `,`
    Punctuation,
    Paren,
    Bracket,
    Brace,
    Whitespace,
    LineComment,
    BlockComment,
    /// Input that could not be tokenized; paired with a [`LexError`]
    Error,
}

impl TokenKind {
    /// Kinds that may be a part of a composite identifier
    pub fn is_identifier_like(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::Resolvable
        )
    }

    /// Whitespace and comments
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A token: its kind and where it sits in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "bindings", derive(TS))]
#[cfg_attr(feature = "bindings", ts(export))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The token's text in `source` (the string it was scanned from)
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.kind, self.span.start, self.span.end)
    }
}

/// Tokens plus a diagnostic for every `Error` token, ordered by position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Tokenized {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// SQL Tokenizer
///
/// Cheap to clone; the dialect configuration is shared.
///
/// ```
/// use templated_sql::{DialectType, TokenKind, Tokenizer};
///
/// let tokenizer = Tokenizer::new(DialectType::PostgreSQL.shared_config());
/// let kinds: Vec<TokenKind> = tokenizer
///     .tokenize("SELECT $$hello$$")
///     .iter()
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds, vec![TokenKind::Keyword, TokenKind::Whitespace, TokenKind::String]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: Arc<DialectConfig>,
}

impl Tokenizer {
    /// Create a new tokenizer with the given configuration
    pub fn new(config: impl Into<Arc<DialectConfig>>) -> Self {
        Self {
            config: config.into(),
        }
    }

    /// Create a tokenizer for a built-in dialect
    pub fn for_dialect(dialect_type: DialectType) -> Self {
        Self::new(dialect_type.shared_config())
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Tokenize a SQL string
    pub fn tokenize(&self, sql: &str) -> Vec<Token> {
        self.scan(sql).tokens
    }

    /// Tokenize a SQL string, keeping the lexical diagnostics
    pub fn scan(&self, sql: &str) -> Tokenized {
        let tokenized = TokenizerState::new(sql, &self.config).tokenize();
        debug!(
            bytes = sql.len(),
            tokens = tokenized.tokens.len(),
            errors = tokenized.errors.len(),
            "tokenized"
        );
        tokenized
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::for_dialect(DialectType::Standard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    /// After an `OrphanSingleQuote` at token index `open`
    InsideQuote { open: usize, placeholders: usize },
}

/// Internal state for tokenization
struct TokenizerState<'a> {
    source: &'a str,
    config: &'a DialectConfig,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    mode: Mode,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
}

impl<'a> TokenizerState<'a> {
    fn new(source: &'a str, config: &'a DialectConfig) -> Self {
        Self {
            source,
            config,
            tokens: Vec::new(),
            errors: Vec::new(),
            mode: Mode::Normal,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    fn tokenize(mut self) -> Tokenized {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            match self.mode {
                Mode::Normal => self.scan_token(),
                Mode::InsideQuote { open, placeholders } => {
                    self.scan_quoted_region_token(open, placeholders)
                }
            }
        }

        if let Mode::InsideQuote { open, .. } = self.mode {
            self.demote(open, LexErrorKind::UnterminatedQuotedRegion);
        }
        self.validate_dots();
        self.errors.sort_by_key(|e| e.span.start);

        Tokenized {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.current..]
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.rest().chars().nth(1).unwrap_or('\0')
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Advance over `len` bytes (always a char boundary)
    fn advance_by(&mut self, len: usize) {
        let target = (self.current + len).min(self.source.len());
        while self.current < target {
            self.advance();
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    fn previous_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }

    fn scan_token(&mut self) {
        let c = self.peek();

        if is_whitespace(c) {
            self.scan_whitespace();
        } else if self.starts_with("{{") {
            self.scan_resolvable();
        } else if self.starts_with("}}") {
            self.advance_by(2);
            self.add_error(LexErrorKind::UnmatchedResolvableClose);
        } else if c == '\'' {
            self.scan_single_quote();
        } else if let Some(literal) = classify_literal(self.rest(), self.config) {
            self.advance_by(literal.len);
            match literal.outcome {
                Ok(kind) => self.add_token(kind),
                Err(reason) => self.add_error(reason),
            }
        } else if self.at_line_comment() {
            self.scan_line_comment();
        } else if self.starts_with("/*") {
            self.scan_block_comment();
        } else if c == '"' && self.config.double_quoted_strings {
            self.scan_delimited(c, TokenKind::String, LexErrorKind::UnterminatedString);
        } else if self.config.is_identifier_quote(c) {
            self.scan_delimited(
                c,
                TokenKind::QuotedIdentifier,
                LexErrorKind::UnterminatedQuotedIdentifier,
            );
        } else if c.is_ascii_digit() || (c == '.' && self.starts_fraction()) {
            self.advance_by(number_len(self.rest()));
            self.add_token(TokenKind::Number);
        } else if self.config.is_special_var_char(c) {
            self.scan_special_var();
        } else if let Some(kind) = single_char_kind(c) {
            self.advance();
            self.add_token(kind);
        } else if self.config.is_operator_char(c) {
            self.scan_operator();
        } else if is_word_start(c) {
            self.scan_word();
        } else {
            self.advance();
            self.add_error(LexErrorKind::UnexpectedCharacter);
        }
    }

    fn scan_whitespace(&mut self) {
        self.advance_while(is_whitespace);
        self.add_token(TokenKind::Whitespace);
    }

    /// Returns whether a `Resolvable` was produced
    fn scan_resolvable(&mut self) -> bool {
        match resolvable::scan(self.rest(), self.config) {
            ResolvableScan::Complete(len) => {
                self.advance_by(len);
                self.add_token(TokenKind::Resolvable);
                true
            }
            ResolvableScan::Failed { len, reason } => {
                self.advance_by(len);
                self.add_error(reason);
                false
            }
        }
    }

    fn scan_single_quote(&mut self) {
        match plan_quote_region(self.rest(), self.config.backslash_escapes) {
            QuotePlan::Literal(len) => {
                self.advance_by(len);
                self.add_token(TokenKind::String);
            }
            QuotePlan::Unterminated(len) => {
                self.advance_by(len);
                self.add_error(LexErrorKind::UnterminatedString);
            }
            QuotePlan::Split => {
                self.advance();
                self.add_token(TokenKind::OrphanSingleQuote);
                self.mode = Mode::InsideQuote {
                    open: self.tokens.len() - 1,
                    placeholders: 0,
                };
            }
        }
    }

    /// Inside `'...'` that holds a placeholder: whitespace, one placeholder
    /// and the closing quote are the only valid tokens
    fn scan_quoted_region_token(&mut self, open: usize, placeholders: usize) {
        let c = self.peek();

        if is_whitespace(c) {
            self.scan_whitespace();
        } else if self.starts_with("{{") {
            if self.scan_resolvable() && placeholders > 0 {
                self.demote(self.tokens.len() - 1, LexErrorKind::MultipleResolvables);
            }
            self.mode = Mode::InsideQuote {
                open,
                placeholders: placeholders + 1,
            };
        } else if c == '\'' && !(placeholders == 0 && self.peek_next() == '\'') {
            self.advance();
            self.add_token(TokenKind::OrphanSingleQuote);
            self.mode = Mode::Normal;
        } else {
            self.scan_quoted_content(placeholders);
        }
    }

    /// A run of literal text inside a placeholder region
    fn scan_quoted_content(&mut self, placeholders: usize) {
        while !self.is_at_end() {
            let c = self.peek();
            if c == '\'' {
                // A doubled quote before the placeholder is part of the text
                if placeholders == 0 && self.peek_next() == '\'' {
                    self.advance();
                    self.advance();
                    continue;
                }
                break;
            }
            if c == '\\' && self.config.backslash_escapes {
                self.advance();
                if !self.is_at_end() {
                    self.advance();
                }
                continue;
            }
            if is_whitespace(c) || self.starts_with("{{") {
                break;
            }
            self.advance();
        }
        self.add_error(LexErrorKind::UnexpectedQuotedContent);
    }

    fn at_line_comment(&self) -> bool {
        match self.peek() {
            '-' => {
                self.peek_next() == '-'
                    && (!self.config.space_after_dashes
                        || self.rest()[2..].chars().next().map_or(true, is_whitespace))
            }
            '#' => self.config.hash_comments,
            '/' => self.config.slash_comments && self.peek_next() == '/',
            _ => false,
        }
    }

    fn scan_line_comment(&mut self) {
        self.advance_while(|c| c != '\n');
        self.add_token(TokenKind::LineComment);
    }

    fn scan_block_comment(&mut self) {
        self.advance_by(2);
        let mut depth = 1usize;
        while !self.is_at_end() {
            if self.starts_with("/*") {
                self.advance_by(2);
                depth += 1;
            } else if self.starts_with("*/") {
                self.advance_by(2);
                depth -= 1;
                if depth == 0 {
                    self.add_token(TokenKind::BlockComment);
                    return;
                }
            } else {
                self.advance();
            }
        }
        self.add_error(LexErrorKind::UnterminatedBlockComment);
    }

    /// A string or quoted identifier closed by the same `quote`
    fn scan_delimited(&mut self, quote: char, kind: TokenKind, unterminated: LexErrorKind) {
        let escapes = kind == TokenKind::String && self.config.backslash_escapes;
        match quoted_len(self.rest(), quote, escapes) {
            Ok(len) => {
                self.advance_by(len);
                self.add_token(kind);
            }
            Err(len) => {
                self.advance_by(len);
                self.add_error(unterminated);
            }
        }
    }

    /// `.5`, unless the dot qualifies a preceding name
    fn starts_fraction(&self) -> bool {
        self.peek_next().is_ascii_digit()
            && !self.previous_kind().is_some_and(TokenKind::is_identifier_like)
    }

    fn scan_special_var(&mut self) {
        let sigil = self.advance();
        if sigil == '@' && self.peek() == '@' {
            self.advance();
        }
        let next = self.peek();
        if matches!(next, '\'' | '"' | '`') {
            if let Ok(len) = quoted_len(self.rest(), next, false) {
                self.advance_by(len);
            }
        } else {
            self.advance_while(is_word_char);
        }
        self.add_token(TokenKind::SpecialVar);
    }

    fn scan_operator(&mut self) {
        self.advance();
        while self.config.is_operator_char(self.peek())
            && !self.at_line_comment()
            && !self.starts_with("/*")
        {
            self.advance();
        }
        self.add_token(TokenKind::Operator);
    }

    fn scan_word(&mut self) {
        self.advance_while(is_word_char);
        let word = &self.source[self.start..self.current];
        let qualified = self.peek() == '.' || self.previous_kind() == Some(TokenKind::Dot);
        let kind = if qualified {
            TokenKind::Identifier
        } else {
            word_kind(word, self.config)
        };
        self.add_token(kind);
    }

    /// A `.` stays a `Dot` only between two identifier parts
    fn validate_dots(&mut self) {
        for i in 0..self.tokens.len() {
            if self.tokens[i].kind != TokenKind::Dot {
                continue;
            }
            let joins = i > 0
                && self.tokens[i - 1].kind.is_identifier_like()
                && self
                    .tokens
                    .get(i + 1)
                    .is_some_and(|t| t.kind.is_identifier_like());
            if !joins {
                self.demote(i, LexErrorKind::StrayDot);
            }
        }
    }

    fn current_span(&self) -> Span {
        Span::new(self.start, self.current, self.start_line, self.start_column)
    }

    fn add_token(&mut self, kind: TokenKind) {
        let span = self.current_span();
        self.tokens.push(Token::new(kind, span));
    }

    fn add_error(&mut self, reason: LexErrorKind) {
        let span = self.current_span();
        trace!(?reason, start = span.start, end = span.end, "lexical error");
        self.tokens.push(Token::new(TokenKind::Error, span));
        self.errors.push(LexError::new(reason, span));
    }

    /// Turn an already emitted token into an `Error`
    fn demote(&mut self, index: usize, reason: LexErrorKind) {
        let token = &mut self.tokens[index];
        token.kind = TokenKind::Error;
        let span = token.span;
        trace!(?reason, start = span.start, end = span.end, "lexical error");
        self.errors.push(LexError::new(reason, span));
    }
}

fn single_char_kind(c: char) -> Option<TokenKind> {
    Some(match c {
        '.' => TokenKind::Dot,
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Punctuation,
        '(' | ')' => TokenKind::Paren,
        '[' | ']' => TokenKind::Bracket,
        '{' | '}' => TokenKind::Brace,
        _ => return None,
    })
}
