//! Placeholder (`{{ ... }}`) scanning
//!
//! A placeholder holds exactly one inner expression: a quoted string, a
//! number or a dotted name path. The inner expression is not itself scanned
//! for placeholders.

use crate::classify::{is_whitespace, is_word_start, number_len, quoted_len, word_len};
use crate::dialects::DialectConfig;
use crate::error::LexErrorKind;

/// Outcome of scanning at a `{{`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvableScan {
    /// A well-formed placeholder of this many bytes
    Complete(usize),
    /// Malformed; `len` bytes become one `Error` token
    Failed { len: usize, reason: LexErrorKind },
}

enum Inner {
    Expression(usize),
    Unterminated,
    Missing,
}

/// Scan the placeholder at the start of `rest` (which begins with `{{`)
pub(crate) fn scan(rest: &str, config: &DialectConfig) -> ResolvableScan {
    let mut pos = skip_whitespace(rest, 2);

    if rest[pos..].starts_with("{{") {
        return failed(rest, pos, LexErrorKind::NestedResolvable);
    }
    match inner_expression(&rest[pos..], config) {
        Inner::Expression(len) => pos += len,
        Inner::Unterminated => return failed(rest, pos, LexErrorKind::UnterminatedString),
        Inner::Missing => return failed(rest, pos, LexErrorKind::MissingResolvableExpression),
    }

    pos = skip_whitespace(rest, pos);
    if rest[pos..].starts_with("}}") {
        ResolvableScan::Complete(pos + 2)
    } else {
        failed(rest, pos, LexErrorKind::ExpectedResolvableClose)
    }
}

fn inner_expression(s: &str, config: &DialectConfig) -> Inner {
    match s.chars().next() {
        Some(quote @ ('\'' | '"')) => match quoted_len(s, quote, config.backslash_escapes) {
            Ok(len) => Inner::Expression(len),
            Err(_) => Inner::Unterminated,
        },
        Some(c) if c.is_ascii_digit() => Inner::Expression(number_len(s)),
        Some(c) if is_word_start(c) => Inner::Expression(path_len(s)),
        _ => Inner::Missing,
    }
}

/// `name(.name)*`
fn path_len(s: &str) -> usize {
    let mut len = word_len(s);
    while s[len..].starts_with('.') && s[len + 1..].starts_with(is_word_start) {
        len += 1 + word_len(&s[len + 1..]);
    }
    len
}

fn skip_whitespace(rest: &str, from: usize) -> usize {
    let tail = &rest[from..];
    from + (tail.len() - tail.trim_start_matches(is_whitespace).len())
}

/// Fail from `from`, resuming after the next `}}`. A nested opener is
/// skipped as a whole, so it resumes after the `}}` that balances the
/// outer `{{`. Without a close the error runs to the end of input.
fn failed(rest: &str, from: usize, reason: LexErrorKind) -> ResolvableScan {
    let close = match reason {
        LexErrorKind::NestedResolvable => balanced_close(rest.as_bytes(), from),
        _ => rest[from..].find("}}").map(|pos| from + pos + 2),
    };
    match close {
        Some(len) => ResolvableScan::Failed { len, reason },
        None => ResolvableScan::Failed {
            len: rest.len(),
            reason: match reason {
                LexErrorKind::ExpectedResolvableClose => LexErrorKind::UnterminatedResolvable,
                other => other,
            },
        },
    }
}

fn balanced_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = from;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'{', b'{') => {
                depth += 1;
                i += 2;
            }
            (b'}', b'}') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => i += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::DialectType;

    fn scan_standard(rest: &str) -> ResolvableScan {
        scan(rest, &DialectType::Standard.config())
    }

    #[test]
    fn test_inner_expressions() {
        assert_eq!(scan_standard("{{ 'schema' }}.x"), ResolvableScan::Complete(14));
        assert_eq!(scan_standard("{{\"t\"}}"), ResolvableScan::Complete(7));
        assert_eq!(scan_standard("{{ 42 }}"), ResolvableScan::Complete(8));
        assert_eq!(scan_standard("{{ vars.schema }} x"), ResolvableScan::Complete(17));
        assert_eq!(scan_standard("{{ '}}' }}"), ResolvableScan::Complete(10));
    }

    #[test]
    fn test_missing_expression() {
        assert_eq!(
            scan_standard("{{ }} x"),
            ResolvableScan::Failed {
                len: 5,
                reason: LexErrorKind::MissingResolvableExpression
            }
        );
    }

    #[test]
    fn test_nested_resyncs_after_balanced_close() {
        let sql = "{{ {{ 'x' }} }} rest";
        assert_eq!(
            scan_standard(sql),
            ResolvableScan::Failed {
                len: 15,
                reason: LexErrorKind::NestedResolvable
            }
        );
    }

    #[test]
    fn test_missing_close() {
        assert_eq!(
            scan_standard("{{ a b }} c"),
            ResolvableScan::Failed {
                len: 9,
                reason: LexErrorKind::ExpectedResolvableClose
            }
        );
        assert_eq!(
            scan_standard("{{ a"),
            ResolvableScan::Failed {
                len: 4,
                reason: LexErrorKind::UnterminatedResolvable
            }
        );
    }

    #[test]
    fn test_failure_resumes_at_first_close() {
        assert_eq!(
            scan_standard("{{ x y {{ 'b' }} z }}"),
            ResolvableScan::Failed {
                len: 16,
                reason: LexErrorKind::ExpectedResolvableClose
            }
        );
        assert_eq!(
            scan_standard("{{ 'a' {{ 'b' }} c"),
            ResolvableScan::Failed {
                len: 16,
                reason: LexErrorKind::ExpectedResolvableClose
            }
        );
    }

    #[test]
    fn test_unterminated_inner_string() {
        assert_eq!(
            scan_standard("{{ 'abc }} x"),
            ResolvableScan::Failed {
                len: 10,
                reason: LexErrorKind::UnterminatedString
            }
        );
    }
}
