// driver.rs - Animation loop
//
// One frame = clock tick, simulation update, paint. Where the timestamps come
// from is up to a `Scheduler`: the browser pushes them through
// requestAnimationFrame (see web/), headless runs and tests pull them from
// `FixedStep`.

use rand::Rng;

use crate::clock::{FrameClock, FrameTime};
use crate::config::StarfieldConfig;
use crate::error::Result;
use crate::render::{Surface, paint};
use crate::sim::Sky;

/// Source of frame timestamps in milliseconds. `None` ends the run.
pub trait Scheduler {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Evenly spaced synthetic frames.
#[derive(Debug, Clone)]
pub struct FixedStep {
    now_ms: f64,
    step_ms: f64,
    remaining: usize,
}

impl FixedStep {
    pub fn new(start_ms: f64, step_ms: f64, frames: usize) -> Self {
        Self { now_ms: start_ms, step_ms, remaining: frames }
    }

    /// ~60 fps starting at t=0.
    pub fn sixty_fps(frames: usize) -> Self {
        Self::new(0.0, 1000.0 / 60.0, frames)
    }
}

impl Scheduler for FixedStep {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 { return None; }
        self.remaining -= 1;
        self.now_ms += self.step_ms;
        Some(self.now_ms)
    }
}

/// Owns the world and its clock; advances and paints one frame at a time.
#[derive(Debug)]
pub struct Animator {
    sky: Sky,
    clock: FrameClock,
    frames: u64,
}

impl Animator {
    pub fn new<R: Rng + ?Sized>(
        w: f32,
        h: f32,
        config: StarfieldConfig,
        reduced_motion: bool,
        rng: &mut R,
    ) -> Self {
        let clock = FrameClock::new(config.max_frame_dt);
        Self { sky: Sky::new(w, h, config, reduced_motion, rng), clock, frames: 0 }
    }

    pub fn frame<S, R>(&mut self, now_ms: f64, surface: &mut S, rng: &mut R) -> Result<FrameTime>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let time = self.clock.tick(now_ms);
        self.sky.update(time, rng);
        paint(&self.sky, surface)?;
        self.frames += 1;
        Ok(time)
    }

    /// Drain `scheduler`, painting every frame. Returns the number of frames run.
    pub fn run<T, S, R>(&mut self, scheduler: &mut T, surface: &mut S, rng: &mut R) -> Result<usize>
    where
        T: Scheduler + ?Sized,
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let mut n = 0;
        while let Some(ts) = scheduler.next_frame() {
            self.frame(ts, surface, rng)?;
            n += 1;
        }
        Ok(n)
    }

    pub fn resize<R: Rng + ?Sized>(&mut self, w: f32, h: f32, rng: &mut R) {
        self.sky.resize(w, h, rng);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.sky.set_pointer(x, y);
    }

    pub fn sky(&self) -> &Sky { &self.sky }
    pub fn frames(&self) -> u64 { self.frames }
}
