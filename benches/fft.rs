use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix2_fft::fft::fft_recursive::fft_recursive;
use radix2_fft::utils::complex::Complex;

fn bench_fft_recursive(c: &mut Criterion) {
    for size in [64, 256, 1024, 4096] {
        let signal = (0..size)
            .map(|i| Complex::new((i % 2) as f64, 0_f64))
            .collect::<Vec<_>>();

        c.bench_function(&format!("fft_recursive_{}", size), |b| {
            b.iter(|| black_box(fft_recursive(black_box(signal.clone()))));
        });
    }
}

criterion_group!(benches, bench_fft_recursive);
criterion_main!(benches);
