//! Per-sample telemetry for an oscilloscope.

#[cfg(feature = "rtrb")]
use rtrb::Producer;

use crate::CONTROL_AXES;

/// One logged sample: the engine output and the held control targets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScopeFrame {
    pub output: f32,
    pub controls: [f32; CONTROL_AXES],
}

/// Receives one [`ScopeFrame`] per sample from the audio thread.
///
/// Implementations must not block or allocate; dropping frames is fine.
pub trait TelemetrySink: Send {
    fn log(&mut self, frame: ScopeFrame);
}

/// Discard telemetry.
impl TelemetrySink for () {
    #[inline]
    fn log(&mut self, _frame: ScopeFrame) {}
}

/// Push into a lock-free ring, dropping the frame when the reader lags.
#[cfg(feature = "rtrb")]
impl TelemetrySink for Producer<ScopeFrame> {
    #[inline]
    fn log(&mut self, frame: ScopeFrame) {
        let _ = self.push(frame);
    }
}
