//! Literal classification
//!
//! Pure functions from the text at a scan position (plus a dialect config)
//! to a token kind and length. The tokenizer asks [`classify_literal`] before
//! it tries generic word scanning, so a prefixed literal such as `b'0101'`
//! always wins over the identifier `b`.

use crate::dialects::DialectConfig;
use crate::error::LexErrorKind;
use crate::tokens::TokenKind;

/// A literal recognized at the start of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralMatch {
    /// Length in bytes of the literal, delimiters included
    pub len: usize,
    /// The literal's kind, or why the literal is malformed
    pub outcome: Result<TokenKind, LexErrorKind>,
}

impl LiteralMatch {
    fn ok(kind: TokenKind, len: usize) -> Self {
        Self {
            len,
            outcome: Ok(kind),
        }
    }

    fn error(reason: LexErrorKind, len: usize) -> Self {
        Self {
            len,
            outcome: Err(reason),
        }
    }

    /// The token kind to emit (`Error` for malformed literals)
    pub fn kind(&self) -> TokenKind {
        self.outcome.unwrap_or(TokenKind::Error)
    }
}

/// Classify a prefixed or delimited literal at the start of `rest`.
///
/// Priority order:
/// 1. `0b01` is a bit literal in every dialect
/// 2. `b'...'` is bits, or bytes under `treat_bits_as_bytes`
/// 3. `b"..."` likewise, when the dialect allows the double-quoted form
/// 4. `$$...$$` / `$tag$...$tag$` is a string when dollar quoting is on
///
/// plus `0x1F` / `x'1F'` numbers, `e'...'` escape strings and, with
/// `char_set_casts`, `n'...'` and `_utf8mb4'...'` strings.
///
/// Returns `None` when no literal starts here.
pub fn classify_literal(rest: &str, config: &DialectConfig) -> Option<LiteralMatch> {
    let bytes = rest.as_bytes();
    let first = *bytes.first()?;
    let second = bytes.get(1).copied();

    match (first, second) {
        (b'0', Some(b'b' | b'B')) => {
            digit_run(bytes, 2, |b| b == b'0' || b == b'1').map(|len| LiteralMatch::ok(TokenKind::Bits, len))
        }
        (b'0', Some(b'x' | b'X')) => {
            digit_run(bytes, 2, |b| b.is_ascii_hexdigit()).map(|len| LiteralMatch::ok(TokenKind::Number, len))
        }
        (b'b' | b'B', Some(b'\'')) => Some(bit_or_byte_literal(rest, '\'', config)),
        (b'b' | b'B', Some(b'"')) if config.bit_literal_double_quote_allowed => {
            Some(bit_or_byte_literal(rest, '"', config))
        }
        (b'x' | b'X', Some(b'\'')) => Some(hex_literal(rest)),
        (b'e' | b'E', Some(b'\'')) => {
            // Escape strings always honor backslashes
            Some(prefixed_string(rest, 1, true))
        }
        (b'n' | b'N', Some(b'\'')) if config.char_set_casts => {
            Some(prefixed_string(rest, 1, config.backslash_escapes))
        }
        (b'_', _) if config.char_set_casts => charset_introducer(rest, config),
        (b'$', _) if config.dollar_quoting => dollar_quoted(rest),
        _ => None,
    }
}

/// Classify a complete lexeme.
///
/// Literals, numbers and words get their kind; anything that does not form
/// exactly one lexeme is `Error`.
///
/// ```
/// use templated_sql::{classify, DialectType, TokenKind};
///
/// let mysql = DialectType::MySQL.config();
/// assert_eq!(classify("b'0101'", &mysql), TokenKind::Bits);
/// assert_eq!(classify("select", &mysql), TokenKind::Keyword);
/// assert_eq!(classify("orders", &mysql), TokenKind::Identifier);
///
/// let bigquery = DialectType::BigQuery.config();
/// assert_eq!(classify("b'0101'", &bigquery), TokenKind::Bytes);
/// ```
pub fn classify(lexeme: &str, config: &DialectConfig) -> TokenKind {
    if let Some(literal) = classify_literal(lexeme, config) {
        return if literal.len == lexeme.len() {
            literal.kind()
        } else {
            TokenKind::Error
        };
    }
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(c) if is_word_start(c) && chars.all(is_word_char) => word_kind(lexeme, config),
        Some(c) if c.is_ascii_digit() && number_len(lexeme) == lexeme.len() => TokenKind::Number,
        _ => TokenKind::Error,
    }
}

/// Keyword, type or plain identifier, by table lookup
pub(crate) fn word_kind(word: &str, config: &DialectConfig) -> TokenKind {
    if config.is_keyword(word) {
        TokenKind::Keyword
    } else if config.is_type(word) {
        TokenKind::Type
    } else {
        TokenKind::Identifier
    }
}

pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub(crate) fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Length of the word run at the start of `s`
pub(crate) fn word_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Length of a quoted run starting with `quote`, both delimiters included.
///
/// A doubled delimiter is an escaped delimiter; with `backslash_escapes` a
/// backslash escapes the next character. `Err` carries the length up to end
/// of input when the closing delimiter is missing.
pub(crate) fn quoted_len(rest: &str, quote: char, backslash_escapes: bool) -> Result<usize, usize> {
    let mut chars = rest.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\\' && backslash_escapes {
            chars.next();
        } else if c == quote {
            if chars.peek().is_some_and(|&(_, next)| next == quote) {
                chars.next();
            } else {
                return Ok(i + c.len_utf8());
            }
        }
    }
    Err(rest.len())
}

/// Length of a numeric literal starting with a digit or `.digit`
pub(crate) fn number_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut i = count_digits(bytes, 0);

    if bytes.get(i) == Some(&b'.') {
        let next = bytes.get(i + 1).copied();
        let fraction = next.is_some_and(|b| b.is_ascii_digit());
        // `1.` keeps its dot unless the dot qualifies a following name
        let trailing = i > 0
            && !next.is_some_and(|b| {
                b == b'.' || b == b'_' || b == b'{' || b == b'"' || b == b'`' || b.is_ascii_alphabetic() || b >= 0x80
            });
        if fraction || trailing {
            i += 1;
            i += count_digits(bytes, i);
        }
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let digits = count_digits(bytes, j);
        if digits > 0 {
            i = j + digits;
        }
    }
    i
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// `prefix` followed by at least one byte matching `digit`
fn digit_run(bytes: &[u8], prefix: usize, digit: impl Fn(u8) -> bool) -> Option<usize> {
    let count = bytes[prefix..].iter().take_while(|&&b| digit(b)).count();
    (count > 0).then_some(prefix + count)
}

fn bit_or_byte_literal(rest: &str, quote: char, config: &DialectConfig) -> LiteralMatch {
    let as_bytes = config.treat_bits_as_bytes;
    match quoted_len(&rest[1..], quote, as_bytes && config.backslash_escapes) {
        Err(len) => LiteralMatch::error(LexErrorKind::UnterminatedString, len + 1),
        Ok(len) => {
            let total = len + 1;
            if as_bytes {
                LiteralMatch::ok(TokenKind::Bytes, total)
            } else if rest[2..total - 1].bytes().all(|b| b == b'0' || b == b'1') {
                LiteralMatch::ok(TokenKind::Bits, total)
            } else {
                LiteralMatch::error(LexErrorKind::MalformedBitLiteral, total)
            }
        }
    }
}

fn hex_literal(rest: &str) -> LiteralMatch {
    match quoted_len(&rest[1..], '\'', false) {
        Err(len) => LiteralMatch::error(LexErrorKind::UnterminatedString, len + 1),
        Ok(len) => {
            let total = len + 1;
            if rest[2..total - 1].bytes().all(|b| b.is_ascii_hexdigit()) {
                LiteralMatch::ok(TokenKind::Number, total)
            } else {
                LiteralMatch::error(LexErrorKind::MalformedHexLiteral, total)
            }
        }
    }
}

/// A single-quoted string after a `prefix`-byte introducer
fn prefixed_string(rest: &str, prefix: usize, backslash_escapes: bool) -> LiteralMatch {
    match quoted_len(&rest[prefix..], '\'', backslash_escapes) {
        Ok(len) => LiteralMatch::ok(TokenKind::String, prefix + len),
        Err(len) => LiteralMatch::error(LexErrorKind::UnterminatedString, prefix + len),
    }
}

/// `_charset'...'`, e.g. `_utf8mb4'text'`
fn charset_introducer(rest: &str, config: &DialectConfig) -> Option<LiteralMatch> {
    let bytes = rest.as_bytes();
    let name = bytes[1..].iter().take_while(|b| b.is_ascii_alphanumeric()).count();
    if name < 2 || bytes.get(1 + name) != Some(&b'\'') {
        return None;
    }
    Some(prefixed_string(rest, 1 + name, config.backslash_escapes))
}

/// `$$body$$` or `$tag$body$tag$`
fn dollar_quoted(rest: &str) -> Option<LiteralMatch> {
    let after = &rest[1..];
    let tag_len = if after.starts_with('$') {
        0
    } else {
        if !after.starts_with(is_word_start) {
            return None;
        }
        let len = word_len(after);
        if !after[len..].starts_with('$') {
            return None;
        }
        len
    };
    let delimiter = &rest[..tag_len + 2];
    let body = delimiter.len();
    Some(match rest[body..].find(delimiter) {
        Some(pos) => LiteralMatch::ok(TokenKind::String, body + pos + delimiter.len()),
        None => LiteralMatch::error(LexErrorKind::UnterminatedDollarString, rest.len()),
    })
}
