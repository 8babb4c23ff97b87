// star.rs - Background stars
//
// A star drifts downward at a speed scaled by its depth and re-enters at the
// top once it sinks below the viewport. Opacity twinkles around a per-star
// base value.

use rand::Rng;

use crate::config::{Bounds, StarfieldConfig};

const TAU: f32 = std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub depth: f32,  // 0.2=far, 1.0=near
    pub drift: f32,

    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
    pub base_alpha: f32,

    /// Opacity computed on the last update, in [0, 1].
    pub alpha: f32,
}

/// Star count for a viewport: one per `density_area` px², capped.
pub fn star_count(w: f32, h: f32, density_area: f32, max_stars: usize) -> usize {
    let area = w * h;
    if !area.is_finite() || area <= 0.0 || !(density_area > 0.0) { return 0; }
    let n = (area / density_area).floor();
    if n >= max_stars as f32 { max_stars } else { n as usize }
}

impl Star {
    pub fn spawn<R: Rng + ?Sized>(w: f32, h: f32, cfg: &StarfieldConfig, rng: &mut R) -> Self {
        let base_alpha = cfg.base_alpha.sample(rng);
        Self {
            x: Bounds(0.0, w).sample(rng),
            y: Bounds(0.0, h).sample(rng),
            radius: cfg.radius.sample(rng),
            depth: cfg.depth.sample(rng),
            drift: cfg.drift.sample(rng),
            twinkle_phase: Bounds(0.0, TAU).sample(rng),
            twinkle_speed: cfg.twinkle_speed.sample(rng),
            base_alpha,
            alpha: base_alpha.clamp(0.0, 1.0),
        }
    }

    /// Advance one frame. `t` is absolute time in seconds, `dt` the frame step.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        t: f32,
        dt: f32,
        w: f32,
        h: f32,
        reduced: bool,
        cfg: &StarfieldConfig,
        rng: &mut R,
    ) {
        if !reduced {
            self.y += self.drift * (cfg.drift_bias + self.depth) * cfg.drift_scale * dt;
        }
        if self.y > h + cfg.wrap_margin {
            self.y = -cfg.wrap_margin;
            self.x = Bounds(0.0, w).sample(rng);
        }
        self.alpha = self.opacity(t, reduced, cfg.twinkle_amplitude);
    }

    /// Twinkled opacity at time `t`, clamped to [0, 1].
    #[inline]
    pub fn opacity(&self, t: f32, reduced: bool, amplitude: f32) -> f32 {
        let twinkle = if reduced { 0.0 } else { (t * self.twinkle_speed + self.twinkle_phase).sin() * amplitude };
        let a = self.base_alpha + twinkle;
        if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) }
    }
}

/// Fresh field for a `w`×`h` viewport.
pub fn spawn_field<R: Rng + ?Sized>(w: f32, h: f32, cfg: &StarfieldConfig, rng: &mut R) -> Vec<Star> {
    let n = star_count(w, h, cfg.density_area, cfg.max_stars);
    (0..n).map(|_| Star::spawn(w, h, cfg, rng)).collect()
}
