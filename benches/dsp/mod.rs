//! Benchmarks for low-level DSP primitives.

mod smoother;
mod wavetable;

pub use smoother::bench_smoother;
pub use wavetable::bench_wavetable;
