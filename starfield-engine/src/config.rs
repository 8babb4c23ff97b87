// config.rs - Tunables for the starfield
//
// Defaults give the stock look of the site background. A page can override any
// subset through JSON (missing fields keep their default).

use log::LevelFilter;
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StarfieldError};
use crate::render::{GradientStop, Rgba};

/// Half-open sampling interval `[min, max)`, written as `[min, max]` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds(pub f32, pub f32);

impl Bounds {
    /// Uniform sample. Degenerate or inverted bounds do not panic.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let u: f32 = Standard.sample(rng);
        self.0 + u * (self.1 - self.0)
    }

    fn check(&self, name: &str) -> Result<()> {
        if !self.0.is_finite() || !self.1.is_finite() || self.0 > self.1 {
            return Err(StarfieldError::InvalidConfig(format!(
                "{name}: [{}, {}] is not a valid range",
                self.0, self.1
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Viewport area (px²) per star.
    pub density_area: f32,
    pub max_stars: usize,

    pub radius: Bounds,
    pub depth: Bounds,
    pub drift: Bounds,
    pub twinkle_speed: Bounds,
    pub base_alpha: Bounds,

    pub twinkle_amplitude: f32,
    /// Stars wrap once they sink this far below the bottom edge.
    pub wrap_margin: f32,
    pub drift_bias: f32,
    pub drift_scale: f32,
    /// Full parallax swing in px between opposite viewport edges.
    pub parallax: f32,
    /// Upper bound on a frame's dt, seconds.
    pub max_frame_dt: f32,

    pub shooting: ShootingConfig,
    pub theme: Theme,
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShootingConfig {
    /// Probability of a spawn on any given frame.
    pub spawn_chance: f32,
    /// Origin, as fractions of viewport width / height.
    pub origin_x: Bounds,
    pub origin_y: Bounds,
    /// px/s
    pub speed: Bounds,
    /// Launch angle as fractions of π (0 points right, 0.5 straight down).
    pub angle: Bounds,
    /// Seconds.
    pub lifetime: Bounds,
    /// Tail length as a multiple of the frame's displacement.
    pub tail: f32,
    pub line_width: f32,
    pub peak_alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub star: Rgba,
    pub shooting: Rgba,
    pub background: Vec<GradientStop>,
    /// Gradient center, as fractions of viewport width / height.
    pub gradient_center: (f32, f32),
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            density_area: 12000.0,
            max_stars: 240,
            radius: Bounds(0.6, 1.8),
            depth: Bounds(0.2, 1.0),
            drift: Bounds(0.05, 0.25),
            twinkle_speed: Bounds(0.6, 1.4),
            base_alpha: Bounds(0.35, 0.9),
            twinkle_amplitude: 0.25,
            wrap_margin: 10.0,
            drift_bias: 0.6,
            drift_scale: 60.0,
            parallax: 12.0,
            max_frame_dt: 0.033,
            shooting: ShootingConfig::default(),
            theme: Theme::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Default for ShootingConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.006,
            origin_x: Bounds(-0.2, 0.4),
            origin_y: Bounds(-0.2, 0.3),
            speed: Bounds(900.0, 1400.0),
            angle: Bounds(0.20, 0.35),
            lifetime: Bounds(0.35, 0.55),
            tail: 180.0 * 0.02,
            line_width: 2.0,
            peak_alpha: 0.9,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            star: Rgba::new(255, 255, 255, 1.0),
            shooting: Rgba::new(180, 140, 255, 1.0),
            background: vec![
                GradientStop { offset: 0.0, color: Rgba::new(26, 31, 60, 0.85) },
                GradientStop { offset: 0.55, color: Rgba::new(7, 10, 16, 0.95) },
                GradientStop { offset: 1.0, color: Rgba::new(7, 10, 16, 1.0) },
            ],
            gradient_center: (0.25, 0.25),
        }
    }
}

impl StarfieldConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.density_area > 0.0) {
            return Err(StarfieldError::InvalidConfig(format!(
                "density_area must be positive, got {}",
                self.density_area
            )));
        }
        if !(self.max_frame_dt >= 0.0) {
            return Err(StarfieldError::InvalidConfig("max_frame_dt must be >= 0".into()));
        }
        if !(0.0..=1.0).contains(&self.shooting.spawn_chance) {
            return Err(StarfieldError::InvalidConfig("spawn_chance must be within [0, 1]".into()));
        }

        self.radius.check("radius")?;
        self.depth.check("depth")?;
        self.drift.check("drift")?;
        self.twinkle_speed.check("twinkle_speed")?;
        self.base_alpha.check("base_alpha")?;

        let s = &self.shooting;
        s.origin_x.check("shooting.origin_x")?;
        s.origin_y.check("shooting.origin_y")?;
        s.speed.check("shooting.speed")?;
        s.angle.check("shooting.angle")?;
        s.lifetime.check("shooting.lifetime")?;
        Ok(())
    }
}
