use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figura_skeleton_core::{builtin, BodyMeasurements, Proportions};

fn bench_generate(c: &mut Criterion) {
    let measurements = BodyMeasurements {
        height: 1.76,
        wingspan: 1.8,
    };

    c.bench_function("generate_default", |b| {
        b.iter(|| builtin::generate(black_box(&measurements)))
    });

    let input = (Proportions::default(), measurements);
    c.bench_function("generate_with_proportions", |b| {
        b.iter(|| builtin::generate_with(black_box(&input)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
