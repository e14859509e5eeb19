use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use minigo_parser::parser::Parser;

fn expr(source: &str) {
    let source = source.into();
    let _ast = Parser::new(&source).parse_expr();
    assert!(source.has_no_errors());
}

fn program(source: &str) {
    let source = source.into();
    let _ast = Parser::new(&source).parse_program();
    assert!(source.has_no_errors());
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| expr(&source)));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "1".to_string();
    for _i in 0..200 {
        source.push_str(" == 2 < 3 + 5 * 5");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| b.iter(|| expr(&source)));
}

fn many_stmts(c: &mut Criterion) {
    let mut group = c.benchmark_group("many-stmts");

    let mut source = String::new();
    for _i in 0..500 {
        source.push_str("x = x + 1\n");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("many-stmts", |b| b.iter(|| program(&source)));
}

criterion_group!(benches, long_expr, stress_precedence, many_stmts);
criterion_main!(benches);
