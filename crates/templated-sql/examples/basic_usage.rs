//! Basic usage examples for templated-sql.
//!
//! Run with: cargo run --example basic_usage -p templated-sql

use templated_sql::{
    composite_identifiers, tokenize, CustomDialectBuilder, Dialect, DialectOptions, DialectType,
};

fn main() {
    tokenizing();
    diagnostics();
    composites();
    custom_dialect();
}

/// Tokenize SQL with a built-in dialect.
fn tokenizing() {
    println!("=== Tokenizing ===\n");

    let sql = "SELECT my_column FROM '{{ 'my_table' }}';";
    for token in tokenize(sql, DialectType::PostgreSQL) {
        println!("{:<18} {:?}", token.kind.to_string(), token.text(sql));
    }
    println!();
}

/// Malformed input still tokenizes; `scan` explains the `Error` tokens.
fn diagnostics() {
    println!("=== Diagnostics ===\n");

    let sql = "SELECT {{ {{ 'x' }} }} FROM t.";
    let tokenized = Dialect::get(DialectType::PostgreSQL).scan(sql);
    for error in &tokenized.errors {
        println!("{:?}: {}", &sql[error.span.start..error.span.end], error);
    }
    println!();
}

/// Find dotted names, placeholders included.
fn composites() {
    println!("=== Composite identifiers ===\n");

    let sql = "SELECT * FROM {{ 'schema' }}.users JOIN public.{{ 'table' }} ON 1 = 1";
    let tokens = tokenize(sql, DialectType::PostgreSQL);
    for composite in composite_identifiers(&tokens) {
        println!(
            "{} ({} parts)",
            &sql[composite.span.start..composite.span.end],
            composite.part_count()
        );
    }
    println!();
}

/// Register a dialect that reads `b'...'` as a byte string.
fn custom_dialect() {
    println!("=== Custom dialect ===\n");

    let registered = CustomDialectBuilder::new("warehouse")
        .options(DialectOptions {
            treat_bits_as_bytes: Some(true),
            ..Default::default()
        })
        .register();
    if let Err(err) = registered {
        eprintln!("{err}");
        return;
    }

    if let Some(dialect) = Dialect::get_by_name("warehouse") {
        for token in dialect.tokenize("SELECT b'0101'") {
            println!("{}", token.kind);
        }
    }
}
