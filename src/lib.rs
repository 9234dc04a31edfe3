pub mod control; // Touch state, gating and the sensor poller
pub mod dsp;
pub mod engine; // Per-sample synthesis and collaborator seams

pub use control::{AtomicF32, TouchGate, TouchState};
pub use engine::{config::EngineConfig, ConfigError, SynthEngine};

/// Number of touch axes driving the synth (vertical → carrier, horizontal → modulator).
pub const CONTROL_AXES: usize = 2;
