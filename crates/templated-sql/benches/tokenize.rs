use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use templated_sql::dialects::{Dialect, DialectType};

const SIMPLE_SELECT: &str = "SELECT a, b, c FROM table1";

const TEMPLATED_SELECT: &str = r#"
SELECT
    u.id,
    u.name,
    {{ 'email_column' }},
    COUNT(o.id) as order_count
FROM {{ 'schema' }}.users u
LEFT JOIN {{ 'schema' }}.{{ 'orders_table' }} o ON u.id = o.user_id
WHERE u.created_at > '{{ start_date }}'
    AND u.status = 'active'
    AND u.flags = b'0101'
GROUP BY u.id, u.name
ORDER BY order_count DESC
LIMIT {{ 100 }};
"#;

fn bench_tokenize_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_by_size");
    let dialect = Dialect::get(DialectType::PostgreSQL);
    let large = TEMPLATED_SELECT.repeat(50);

    let queries = [
        ("simple", SIMPLE_SELECT),
        ("templated", TEMPLATED_SELECT),
        ("templated_x50", large.as_str()),
    ];

    for (name, sql) in queries {
        group.bench_with_input(BenchmarkId::new("postgresql", name), &sql, |b, sql| {
            b.iter(|| dialect.tokenize(black_box(sql)))
        });
    }

    group.finish();
}

fn bench_tokenize_by_dialect(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_by_dialect");

    for dialect_type in DialectType::ALL {
        let dialect = Dialect::get(dialect_type);
        group.bench_with_input(
            BenchmarkId::new("templated_query", dialect_type.name()),
            &TEMPLATED_SELECT,
            |b, sql| b.iter(|| dialect.scan(black_box(sql))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize_by_size, bench_tokenize_by_dialect);
criterion_main!(benches);
