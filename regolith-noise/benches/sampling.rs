#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use regolith_digest::Md5Hash;
use regolith_noise::{CellNoise2, NoiseGenerator, PerlinNoise2, WhiteNoise2};

/// Sweep a square grid of samples through a generator.
fn sample_grid<G: NoiseGenerator>(generator: &mut G, side: i32) {
    for ix in 0..side {
        for iy in 0..side {
            let x = f64::from(ix) * 0.37;
            let y = f64::from(iy) * 0.37;
            black_box(generator.generate(x, y));
        }
    }
}

fn bench_white_grid(c: &mut Criterion) {
    let mut noise = WhiteNoise2::new(Md5Hash::keyed(b"bench"));
    c.bench_function("white_noise_64x64", |b| {
        b.iter(|| sample_grid(&mut noise, black_box(64)));
    });
}

fn bench_cell_grid(c: &mut Criterion) {
    let mut noise = CellNoise2::new(Md5Hash::keyed(b"bench"), 8, 8)
        .expect("valid bench resolution");
    c.bench_function("cell_noise_64x64", |b| {
        b.iter(|| sample_grid(&mut noise, black_box(64)));
    });
}

fn bench_perlin_grid(c: &mut Criterion) {
    let mut noise = PerlinNoise2::new(Md5Hash::keyed(b"bench"));
    noise.set_seed(b"bench");
    c.bench_function("perlin_noise_64x64", |b| {
        b.iter(|| sample_grid(&mut noise, black_box(64)));
    });
}

fn bench_perlin_octave_sums(c: &mut Criterion) {
    // Callers compose octaves themselves; this tracks what a typical
    // fractal sum costs per sample count.
    let mut group = c.benchmark_group("perlin_octave_sum");
    for octaves in [1u32, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(octaves),
            &octaves,
            |b, &octaves| {
                let mut noise = PerlinNoise2::new(Md5Hash::keyed(b"bench"));
                noise.set_seed(b"bench");
                b.iter(|| {
                    let mut total = 0.0;
                    let mut frequency = 1.0;
                    let mut amplitude = 1.0;
                    for _ in 0..octaves {
                        total += amplitude
                            * noise.generate(black_box(12.3) * frequency, black_box(-4.7) * frequency);
                        frequency *= 2.0;
                        amplitude *= 0.5;
                    }
                    total
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_white_grid,
    bench_cell_grid,
    bench_perlin_grid,
    bench_perlin_octave_sums
);
criterion_main!(benches);
