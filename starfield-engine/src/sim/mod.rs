// sim/ - Starfield simulation
//
// All mutable animation state lives in one owned `Sky`, so a field can be
// created, stepped and inspected without any rendering surface.
// Each particle type in its own module.

mod shooting;
mod star;

pub use shooting::ShootingStar;
pub use star::{Star, spawn_field, star_count};

use rand::Rng;

use crate::clock::FrameTime;
use crate::config::StarfieldConfig;

/// Last known cursor position, viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

/// Starfield world
#[derive(Debug)]
pub struct Sky {
    // Viewport
    w: f32,
    h: f32,

    // Entities
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,

    // Inputs
    pointer: Pointer,
    reduced_motion: bool,

    // Step of the most recent update, used for streak tails
    last_dt: f32,

    config: StarfieldConfig,
}

impl Sky {
    pub fn new<R: Rng + ?Sized>(
        w: f32,
        h: f32,
        config: StarfieldConfig,
        reduced_motion: bool,
        rng: &mut R,
    ) -> Self {
        let stars = spawn_field(w, h, &config, rng);
        log::debug!("starfield {w}x{h}: {} stars", stars.len());
        Self {
            w,
            h,
            stars,
            shooting: Vec::new(),
            pointer: Pointer::default(),
            reduced_motion,
            last_dt: 0.0,
            config,
        }
    }

    /// Replace the whole star list for a new viewport size.
    pub fn resize<R: Rng + ?Sized>(&mut self, w: f32, h: f32, rng: &mut R) {
        self.w = w;
        self.h = h;
        self.stars = spawn_field(w, h, &self.config, rng);
        log::debug!("starfield resized to {w}x{h}: {} stars", self.stars.len());
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Pointer { x, y };
    }

    /// Pointer offset from the viewport center, scaled down. Multiplied by
    /// each star's depth when drawing.
    pub fn parallax(&self) -> (f32, f32) {
        if self.reduced_motion || !(self.w > 0.0) || !(self.h > 0.0) {
            return (0.0, 0.0);
        }
        let k = self.config.parallax;
        ((self.pointer.x / self.w - 0.5) * k, (self.pointer.y / self.h - 0.5) * k)
    }

    /// Advance every particle by one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, time: FrameTime, rng: &mut R) {
        let FrameTime { t, dt } = time;
        let (w, h, reduced) = (self.w, self.h, self.reduced_motion);

        for s in &mut self.stars {
            s.update(t, dt, w, h, reduced, &self.config, rng);
        }

        if !reduced && shooting::should_spawn(self.config.shooting.spawn_chance, rng) {
            self.shooting.push(ShootingStar::spawn(w, h, &self.config.shooting, rng));
        }
        shooting::update(&mut self.shooting, dt);

        self.last_dt = dt;
    }

    // Accessors
    pub fn stars(&self) -> &[Star] { &self.stars }
    pub fn shooting_stars(&self) -> &[ShootingStar] { &self.shooting }
    pub fn pointer(&self) -> Pointer { self.pointer }
    pub fn reduced_motion(&self) -> bool { self.reduced_motion }
    pub fn last_dt(&self) -> f32 { self.last_dt }
    pub fn config(&self) -> &StarfieldConfig { &self.config }
    pub fn width(&self) -> f32 { self.w }
    pub fn height(&self) -> f32 { self.h }
}
