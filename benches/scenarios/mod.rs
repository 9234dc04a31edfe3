//! Real-world scenario benchmarks.
//!
//! These render complete engine blocks the way the audio callback does.

mod engine;

pub use engine::bench_engine;
