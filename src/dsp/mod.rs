//! Low-level DSP primitives used by the synthesis engine.
//!
//! These components are allocation-free and realtime-safe once configured,
//! making them safe to own directly inside the engine and call from the audio
//! callback. They stay focused on the signal-processing math so the engine
//! can layer on orchestration and collaborator plumbing.

/// Gain, decibel and amplitude modulation helpers.
pub mod amplify;
/// Linear range mapping for control values.
pub mod range;
/// One-pole low-pass smoother for control signals.
pub mod smoother;
/// Phase-accumulating wavetable oscillator and table shapes.
pub mod wavetable;

pub use range::{map_range, Range};
pub use smoother::OnePole;
pub use wavetable::{TableShape, WavetableOscillator};
