//! Performance benchmarks for 4x4 matrix composition and inversion across
//! element kinds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fulgor_numerics::numerics::ops::matrix::{
    invert_f32, invert_f64, multiply_f32, multiply_f64, rotation_y, scaling, translation,
};
use fulgor_numerics::prelude::*;

fn model_matrix() -> Matrix4<f64> {
    translation(1.0, -2.0, 3.0).rotate_y(0.7).scale(2.0, 2.0, 2.0)
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    let a = model_matrix();
    let b = rotation_y(0.3);
    let a32: Matrix4<f32> = Matrix4::from_fn(|r, c| (r * 4 + c) as f32 * 0.5);
    let b32: Matrix4<f32> = Matrix4::identity().scale(1.5, 0.5, 2.0);

    group.bench_function("f64", |bench| bench.iter(|| multiply_f64(black_box(&a), black_box(&b))));
    group.bench_function("f32", |bench| bench.iter(|| multiply_f32(black_box(&a32), black_box(&b32))));

    // Mixed operands go through the cast policy for every element
    group.bench_function("f32_x_f64_into_f64", |bench| {
        bench.iter(|| multiply_f64(black_box(&a32), black_box(&b)))
    });

    group.bench_function("operator_f64", |bench| bench.iter(|| black_box(a) * black_box(b)));

    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");

    let m = model_matrix();
    let m32: Matrix4<f32> = Matrix4::identity().rotate_x(0.4).translate(1.0, 2.0, 3.0);
    let singular = scaling(0.0, 1.0, 1.0);

    group.bench_function("f64", |bench| bench.iter(|| invert_f64(black_box(&m))));
    group.bench_function("f32", |bench| bench.iter(|| invert_f32(black_box(&m32))));
    group.bench_function("singular_early_exit", |bench| bench.iter(|| invert_f64(black_box(&singular))));

    group.finish();
}

fn bench_transform_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_chain");

    for &steps in &[1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("compose", steps), &steps, |bench, &steps| {
            bench.iter(|| {
                let mut m = Matrix4::<f64>::identity();
                for i in 0..steps {
                    m = m.rotate_z(0.1 * i as f64).translate(1.0, 0.0, 0.0);
                }
                black_box(m.transform_point(Point3::origin()))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_invert, bench_transform_chain);

criterion_main!(benches);
