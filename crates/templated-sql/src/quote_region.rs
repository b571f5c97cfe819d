//! Lookahead at a `'`: string literal, or a quoted region around a placeholder

/// What the tokenizer should do with the `'` at the scan position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuotePlan {
    /// A complete string literal of this many bytes
    Literal(usize),
    /// No closing quote; the rest of the input (this many bytes)
    Unterminated(usize),
    /// A `{{` comes before the closing quote: emit an orphan quote and
    /// tokenize the region piece by piece
    Split,
}

/// `rest` starts with `'`. Follows string escape rules (doubled `''`, and
/// backslashes when `backslash_escapes`) up to the closing quote.
pub(crate) fn plan_quote_region(rest: &str, backslash_escapes: bool) -> QuotePlan {
    let mut chars = rest.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' if backslash_escapes => {
                chars.next();
            }
            '\'' => {
                if chars.peek().is_some_and(|&(_, next)| next == '\'') {
                    chars.next();
                } else {
                    return QuotePlan::Literal(i + 1);
                }
            }
            '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => return QuotePlan::Split,
            _ => {}
        }
    }
    QuotePlan::Unterminated(rest.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_literals() {
        assert_eq!(plan_quote_region("'abc' x", false), QuotePlan::Literal(5));
        assert_eq!(plan_quote_region("'' x", false), QuotePlan::Literal(2));
        assert_eq!(plan_quote_region("'a''b'", false), QuotePlan::Literal(6));
        assert_eq!(plan_quote_region("'{ }'", false), QuotePlan::Literal(5));
    }

    #[test]
    fn test_placeholder_before_close_splits() {
        assert_eq!(plan_quote_region("'{{ 'my_table' }}';", false), QuotePlan::Split);
        assert_eq!(plan_quote_region("' {{ x }} '", false), QuotePlan::Split);
        assert_eq!(plan_quote_region("'a''{{ x }}'", false), QuotePlan::Split);
    }

    #[test]
    fn test_placeholder_after_close_is_not_ours() {
        assert_eq!(plan_quote_region("'a' {{ x }}", false), QuotePlan::Literal(3));
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(plan_quote_region(r"'a\' {{ x }}'", true), QuotePlan::Split);
        assert_eq!(plan_quote_region(r"'a\' {{ x }}'", false), QuotePlan::Literal(4));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(plan_quote_region("'abc", false), QuotePlan::Unterminated(4));
    }
}
