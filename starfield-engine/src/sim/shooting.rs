// shooting.rs - Shooting stars
//
// Short-lived streaks launched from the upper-left region toward the lower
// right. They never wrap and ignore parallax.

use std::f32::consts::PI;

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::config::ShootingConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub age: f32,
    pub lifetime: f32,
}

impl ShootingStar {
    pub fn spawn<R: Rng + ?Sized>(w: f32, h: f32, cfg: &ShootingConfig, rng: &mut R) -> Self {
        let x = cfg.origin_x.sample(rng) * w;
        let y = cfg.origin_y.sample(rng) * h;
        let speed = cfg.speed.sample(rng);
        let angle = cfg.angle.sample(rng) * PI;
        Self {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            age: 0.0,
            lifetime: cfg.lifetime.sample(rng),
        }
    }

    /// Advance by `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Fraction of lifetime used, 0 at spawn.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.lifetime > 0.0 { (self.age / self.lifetime).clamp(0.0, 1.0) } else { 1.0 }
    }
}

/// Roll the per-frame spawn chance.
#[inline]
pub fn should_spawn<R: Rng + ?Sized>(chance: f32, rng: &mut R) -> bool {
    let roll: f32 = Standard.sample(rng);
    roll < chance
}

/// Advance every streak, then drop the ones that burned out.
pub fn update(streaks: &mut Vec<ShootingStar>, dt: f32) {
    for s in streaks.iter_mut() {
        s.advance(dt);
    }
    streaks.retain(|s| !s.expired());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn streak(lifetime: f32) -> ShootingStar {
        ShootingStar { x: 0.0, y: 0.0, vx: 100.0, vy: 50.0, age: 0.0, lifetime }
    }

    #[test]
    fn spawn_near_upper_left() {
        let cfg = ShootingConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let s = ShootingStar::spawn(1000.0, 500.0, &cfg, &mut rng);
            assert!(s.x >= -200.0 && s.x <= 400.0);
            assert!(s.y >= -100.0 && s.y <= 150.0);
            let speed = (s.vx * s.vx + s.vy * s.vy).sqrt();
            assert!(speed >= 899.0 && speed <= 1401.0, "{speed}");
            // heading right and down
            assert!(s.vx > 0.0 && s.vy > 0.0);
            assert!((0.35..=0.55).contains(&s.lifetime));
            assert_eq!(s.age, 0.0);
        }
    }

    #[test]
    fn advances_by_velocity() {
        let mut s = streak(1.0);
        s.advance(0.1);
        assert!((s.x - 10.0).abs() < 1e-4);
        assert!((s.y - 5.0).abs() < 1e-4);
        assert!((s.age - 0.1).abs() < 1e-6);
    }

    #[test]
    fn removed_once_lifetime_reached() {
        let mut v = vec![streak(0.5)];
        update(&mut v, 0.25);
        assert_eq!(v.len(), 1);
        update(&mut v, 0.2);
        assert_eq!(v.len(), 1);
        update(&mut v, 0.1);
        assert!(v.is_empty());
    }

    #[test]
    fn removed_exactly_at_lifetime() {
        let mut v = vec![streak(0.5)];
        update(&mut v, 0.5);
        assert!(v.is_empty());
    }

    #[test]
    fn only_live_streaks_survive() {
        let mut v = vec![streak(0.07), streak(1.0), streak(0.05)];
        update(&mut v, 0.08);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].lifetime, 1.0);
    }

    #[test]
    fn spawn_roll() {
        // StepRng(0, 0) always rolls 0.0, the max value always rolls just under 1.0
        assert!(should_spawn(0.006, &mut StepRng::new(0, 0)));
        assert!(!should_spawn(0.006, &mut StepRng::new(u64::MAX, 0)));
        assert!(!should_spawn(0.0, &mut StepRng::new(0, 0)));
    }

    #[test]
    fn progress_is_linear() {
        let mut s = streak(0.4);
        s.advance(0.1);
        assert!((s.progress() - 0.25).abs() < 1e-5);
        assert_eq!(streak(0.0).progress(), 1.0);
    }
}
