use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sexpr::expr::SExpr;
use sexpr::list::List;
use sexpr::{eval, list, sexpr};

fn wide_sum(n: i64) -> SExpr {
    let mut list = List::from(vec![sexpr!["+"]]);
    list.extend((0..n).map(SExpr::from));
    let result = eval(&SExpr::List(list)).unwrap();
    assert_eq!(result, sexpr![(n * (n - 1) / 2) as f32]);
    result
}

fn deep_sum(depth: usize) -> SExpr {
    let mut expr = list!["+", 1];
    for _ in 0..depth {
        expr = list!["+", 1, expr];
    }
    let result = eval(&expr).unwrap();
    assert_eq!(result, sexpr![(depth + 1) as f32]);
    result
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("wide sum 1000", |b| b.iter(|| wide_sum(black_box(1000))));
    c.bench_function("deep sum 500", |b| b.iter(|| deep_sum(black_box(500))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
