#![no_main]

use libfuzzer_sys::fuzz_target;
use templated_sql::dialects::{Dialect, DialectType};
use templated_sql::TokenKind;

fuzz_target!(|data: &[u8]| {
    if let Ok(sql) = std::str::from_utf8(data) {
        for dialect_type in DialectType::ALL {
            let tokenized = Dialect::get(dialect_type).scan(sql);

            // Tokens tile the input with no gaps or overlaps
            let mut offset = 0;
            for token in &tokenized.tokens {
                assert_eq!(token.span.start, offset);
                assert!(token.span.end > token.span.start);
                offset = token.span.end;
            }
            assert_eq!(offset, sql.len());

            let error_tokens = tokenized
                .tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Error)
                .count();
            assert_eq!(error_tokens, tokenized.errors.len());
        }
    }
});
