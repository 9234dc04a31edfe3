//! Benchmarks for complete engine blocks.

use std::{hint::black_box, sync::Arc};

use criterion::{BenchmarkId, Criterion};
use touch_am::{EngineConfig, SynthEngine, TouchState, CONTROL_AXES};

use crate::BLOCK_SIZES;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        // === MONO, HELD TARGETS ===
        // No touch: the smoothers settle on the initial targets
        let touch = Arc::new(TouchState::new(CONTROL_AXES));
        let mut engine = SynthEngine::configure(EngineConfig::default(), touch, -6.0f32, (), ())
            .expect("default config is valid");
        let mut buffer = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new("mono", size), &size, |b, _| {
            b.iter(|| {
                engine.process_block(black_box(&mut buffer), 1);
            })
        });

        // === STEREO, MOVING TOUCH ===
        // The location changes between blocks, so the gate and smoothers work
        let touch = Arc::new(TouchState::new(CONTROL_AXES));
        let mut engine =
            SynthEngine::configure(EngineConfig::default(), touch.clone(), -6.0f32, (), ())
                .expect("default config is valid");
        let mut buffer = vec![0.0f32; size * 2];
        let mut step = 0u32;
        group.bench_with_input(BenchmarkId::new("stereo_touch", size), &size, |b, _| {
            b.iter(|| {
                step = step.wrapping_add(1);
                let position = (step % 100) as f32 / 100.0;
                touch.publish(0.5, &[position, 1.0 - position]);
                engine.process_block(black_box(&mut buffer), 2);
            })
        });
    }

    group.finish();
}
