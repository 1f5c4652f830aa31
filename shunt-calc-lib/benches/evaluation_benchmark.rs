use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shunt_calc::interpreter::evaluate_expression;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_expression");
    let expressions = [
        "5".to_string(),
        "3+4*2".to_string(),
        "(3 + 4) * 2 - 10 / 4".to_string(),
        "-(1.5 + 2.25) * (((3 - 1) / 2) + 8 * 0.5) + -7".to_string(),
        format!("1{}", "+1".repeat(127)),
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate_expression(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
