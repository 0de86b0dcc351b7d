use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_matrix::{ECLevel, build_matrices_parallel, build_matrix};

fn bench_build_short(c: &mut Criterion) {
    c.bench_function("build_hello_l", |b| {
        b.iter(|| build_matrix(black_box("HELLO"), black_box(ECLevel::L)))
    });
}

fn bench_build_high_ec(c: &mut Criterion) {
    c.bench_function("build_hello_h", |b| {
        b.iter(|| build_matrix(black_box("HELLO"), black_box(ECLevel::H)))
    });
}

fn bench_build_near_capacity(c: &mut Criterion) {
    let payload = "x".repeat(30);
    c.bench_function("build_30_bytes_l", |b| {
        b.iter(|| build_matrix(black_box(&payload), black_box(ECLevel::L)))
    });
}

fn bench_build_batch_parallel(c: &mut Criterion) {
    let payloads: Vec<String> = (0..64).map(|i| format!("PAYLOAD-{:04}", i)).collect();
    let refs: Vec<&str> = payloads.iter().map(String::as_str).collect();

    c.bench_function("build_batch_64_parallel", |b| {
        b.iter(|| build_matrices_parallel(black_box(&refs), black_box(ECLevel::M)))
    });
}

criterion_group!(
    benches,
    bench_build_short,
    bench_build_high_ec,
    bench_build_near_capacity,
    bench_build_batch_parallel
);
criterion_main!(benches);
