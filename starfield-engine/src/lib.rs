// ============================================================================
// STARFIELD - Twinkling parallax sky with shooting stars, plus page extras
// ============================================================================
//
// Platform-free core (simulation, timing, painting, reveal bookkeeping) that
// builds and tests natively; `web` binds it to the DOM on wasm32.

pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod footer;
pub mod render;
pub mod reveal;
pub mod sim;

#[cfg(target_arch = "wasm32")]
mod web;

pub use clock::{FrameClock, FrameTime};
pub use config::{Bounds, ShootingConfig, StarfieldConfig, Theme};
pub use driver::{Animator, FixedStep, Scheduler};
pub use error::{Result, StarfieldError};
pub use render::{GradientStop, RadialGradient, Rgba, Surface, paint};
pub use reveal::{REVEAL_THRESHOLD, RevealTracker};
pub use sim::{Pointer, ShootingStar, Sky, Star};

#[cfg(target_arch = "wasm32")]
pub use web::{Starfield, mount, start};
