use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use julia_field::{Complex, JuliaParams, compute_field, compute_field_parallel_rayon};

fn dendrite_params() -> JuliaParams {
    JuliaParams::new(
        Complex::new(-0.7, 0.27),
        Complex::new(-1.6, -1.0),
        Complex::new(1.6, 1.0),
        0.005,
        256,
    )
    .expect("benchmark params are valid")
}

fn bench_compute_field_serial(c: &mut Criterion) {
    let params = dendrite_params();
    c.bench_function("compute_field_serial", |b| {
        b.iter(|| compute_field(black_box(&params)))
    });
}

fn bench_compute_field_rayon(c: &mut Criterion) {
    let params = dendrite_params();
    c.bench_function("compute_field_rayon", |b| {
        b.iter(|| compute_field_parallel_rayon(black_box(&params)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_compute_field_serial, bench_compute_field_rayon
}
criterion_main!(benches);
