//! Benchmarks for the one-pole control smoother.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use touch_am::dsp::OnePole;

use crate::BLOCK_SIZES;

pub fn bench_smoother(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/smoother");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut smoother = OnePole::new(18.0, 48_000.0);

        group.bench_with_input(BenchmarkId::new("step", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = smoother.process(black_box(1.0));
                }
            })
        });
    }

    group.finish();
}
