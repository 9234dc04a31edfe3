//! Benchmarks for wavetable lookup.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use touch_am::dsp::{TableShape, WavetableOscillator};

use crate::BLOCK_SIZES;

pub fn bench_wavetable(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/wavetable");
    let table = TableShape::Sine.build(1024);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Interpolated - two reads and a lerp per sample
        let mut osc = WavetableOscillator::new(48_000.0, &table, true);
        osc.set_frequency(440.0);
        group.bench_with_input(BenchmarkId::new("interpolated", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });

        // Truncating - single read
        let mut osc = WavetableOscillator::new(48_000.0, &table, false);
        osc.set_frequency(440.0);
        group.bench_with_input(BenchmarkId::new("truncating", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });

        // Per-sample retune, as the engine does while gliding
        let mut osc = WavetableOscillator::new(48_000.0, &table, true);
        group.bench_with_input(BenchmarkId::new("retuned", size), &size, |b, _| {
            b.iter(|| {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    osc.set_frequency(black_box(220.0 + i as f32));
                    *sample = osc.process();
                }
            })
        });
    }

    group.finish();
}
