// core/clock.rs
//
// Converts raw frame timestamps into clamped per-frame deltas.

/// Delta assumed on the very first frame, in milliseconds (~60 Hz).
pub const NOMINAL_FRAME_MS: f32 = 16.7;
/// Lower clamp bound for a frame delta, in milliseconds.
pub const MIN_FRAME_MS: f32 = 0.001;
/// Upper clamp bound for a frame delta, in milliseconds.
pub const MAX_FRAME_MS: f32 = 100.0;

/// Tracks the previous frame timestamp and hands out clamped deltas.
///
/// Clamping neutralizes pathological deltas — tab backgrounding, clock
/// anomalies — and the undefined delta before the first frame.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed milliseconds since the previous call, clamped to
    /// [`MIN_FRAME_MS`, `MAX_FRAME_MS`]. The first call returns
    /// [`NOMINAL_FRAME_MS`].
    pub fn delta_ms(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) as f32).clamp(MIN_FRAME_MS, MAX_FRAME_MS),
            None => NOMINAL_FRAME_MS,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}
