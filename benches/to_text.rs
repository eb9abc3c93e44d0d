use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use valtext::{to_text, Matrix, Value};

fn benchmark_scalars(c: &mut Criterion) {
    let number = Value::from(4.2);
    let text = Value::from("already text");

    c.bench_function("to_text_number", |b| b.iter(|| to_text(black_box(&number))));
    c.bench_function("to_text_text", |b| b.iter(|| to_text(black_box(&text))));
}

fn benchmark_flat_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_text_flat_array");

    for size in [10, 100, 1000].iter() {
        let input = Value::Array((0..*size).map(|i| Value::from(i as f64 / 7.0)).collect());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_text(black_box(&input)))
        });
    }
    group.finish();
}

fn benchmark_nested_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_text_nested_array");

    for depth in [2, 4, 8].iter() {
        let mut input = Value::Array(vec![Value::from(1), Value::from(true), Value::Null]);
        for _ in 1..*depth {
            input = Value::Array(vec![input.clone(), input]);
        }

        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| to_text(black_box(&input)))
        });
    }
    group.finish();
}

fn benchmark_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_text_matrix");

    for size in [8, 32, 64].iter() {
        let m = Matrix::new(
            (0..size * size).map(|i| Value::from(i as f64)).collect(),
            vec![*size as usize, *size as usize],
        )
        .unwrap();
        let input = Value::Matrix(m);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_text(black_box(&input)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_scalars,
    benchmark_flat_array,
    benchmark_nested_array,
    benchmark_matrix
);
criterion_main!(benches);
