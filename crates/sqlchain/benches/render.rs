use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlchain::{NoopSink, StatementBuilder, StatementKind, table};

/// Build a SELECT over `n` columns with `n` WHERE clauses:
/// select col0, col1, ... from `t` where col0 = 0 and col1 = 1 ...
fn build_select(n: usize) -> StatementBuilder {
    let cols: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut qb = table("t").sink(NoopSink).columns(cols);
    for i in 0..n {
        qb = qb.where_eq(format!("col{i}"), i as i64);
    }
    qb.limit(100)
}

/// Build an UPDATE with `n` SET pairs.
fn build_update(n: usize) -> StatementBuilder {
    let mut qb = table("t").sink(NoopSink);
    for i in 0..n {
        qb = qb.set(format!("col{i}"), format!("value {i}"));
    }
    qb.where_eq("id", 1).with_mode(StatementKind::Update)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/render");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.render()));
        });
    }

    group.finish();
}

fn bench_build_placeholders(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/build");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_update(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_chain_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/chain_and_render");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).render()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_build_placeholders,
    bench_chain_and_render
);
criterion_main!(benches);
