// clock.rs - Frame timing
//
// Turns host timestamps (milliseconds, as handed to requestAnimationFrame
// callbacks) into absolute time and a clamped frame step. Tests feed it
// synthetic timestamps.

/// Time inputs for one frame, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Absolute time, drives twinkle phase.
    pub t: f32,
    /// Step since the previous frame, clamped.
    pub dt: f32,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: f64,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last_ms: 0.0, max_dt: max_dt.max(0.0) }
    }

    /// Record a frame at `now_ms`. A suspended tab can hand over a huge gap;
    /// the step never exceeds `max_dt`. Backwards or garbage timestamps give 0.
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let delta = (now_ms - self.last_ms) / 1000.0;
        let dt = if delta.is_finite() && delta > 0.0 { (delta as f32).min(self.max_dt) } else { 0.0 };
        if now_ms.is_finite() {
            self.last_ms = now_ms;
        }
        let t = if now_ms.is_finite() { (now_ms / 1000.0) as f32 } else { 0.0 };
        FrameTime { t, dt }
    }
}
