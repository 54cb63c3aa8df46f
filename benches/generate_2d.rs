use criterion::{black_box, criterion_group, criterion_main, Criterion};
use naca_rs::airfoil::sampling::Spacing;
use naca_rs::{generate_naca4_full, generate_naca5_full, GenerationOptions};

fn benchmark(c: &mut Criterion) {
    let options = GenerationOptions::new(10.0, 200, Spacing::Cosine);
    let dense = GenerationOptions::new(10.0, 2000, Spacing::Cosine);

    c.bench_function("NACA 2412 generation", |b| {
        b.iter(|| generate_naca4_full(black_box("2412"), black_box(&options)))
    });
    c.bench_function("NACA 23012 generation", |b| {
        b.iter(|| generate_naca5_full(black_box("23012"), black_box(&options)))
    });
    c.bench_function("NACA 2412 generation, 2000 stations", |b| {
        b.iter(|| generate_naca4_full(black_box("2412"), black_box(&dense)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
