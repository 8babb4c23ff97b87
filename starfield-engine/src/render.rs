// render.rs - Paint simulation state onto a 2D surface
//
// Draw order per frame:
//   1. radial gradient over the whole viewport
//   2. one filled circle per star, shifted by parallax * depth
//   3. one line per live shooting star, fading with age
//
// The surface is a trait so the painter runs against a canvas in the browser
// and against a recorder in tests.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::Sky;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color, opacity multiplied by `k` and clamped to [0, 1].
    pub fn fade(self, k: f32) -> Self {
        let a = self.a * k;
        Self { a: if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) }, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Concentric radial gradient: inner circle of radius `r0`, outer `r1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient<'a> {
    pub cx: f32,
    pub cy: f32,
    pub r0: f32,
    pub r1: f32,
    pub stops: &'a [GradientStop],
}

pub trait Surface {
    /// Fill the `w`×`h` rectangle at the origin with a gradient.
    fn fill_gradient(&mut self, g: &RadialGradient<'_>, w: f32, h: f32) -> Result<()>;
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Rgba) -> Result<()>;
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) -> Result<()>;
}

/// Paint one full frame.
pub fn paint<S: Surface + ?Sized>(sky: &Sky, surface: &mut S) -> Result<()> {
    paint_background(sky, surface)?;
    paint_stars(sky, surface)?;
    paint_shooting(sky, surface)
}

pub fn paint_background<S: Surface + ?Sized>(sky: &Sky, surface: &mut S) -> Result<()> {
    let (w, h) = (sky.width(), sky.height());
    let theme = &sky.config().theme;
    let g = RadialGradient {
        cx: w * theme.gradient_center.0,
        cy: h * theme.gradient_center.1,
        r0: 0.0,
        r1: w.max(h),
        stops: &theme.background,
    };
    surface.fill_gradient(&g, w, h)
}

pub fn paint_stars<S: Surface + ?Sized>(sky: &Sky, surface: &mut S) -> Result<()> {
    let (px, py) = sky.parallax();
    let color = sky.config().theme.star;
    for s in sky.stars() {
        surface.fill_circle(s.x + px * s.depth, s.y + py * s.depth, s.radius, color.fade(s.alpha))?;
    }
    Ok(())
}

/// Streak tail trails the head along the velocity, proportional to the last step.
pub fn paint_shooting<S: Surface + ?Sized>(sky: &Sky, surface: &mut S) -> Result<()> {
    let cfg = &sky.config().shooting;
    let color = sky.config().theme.shooting;
    let k = sky.last_dt() * cfg.tail;
    for sh in sky.shooting_stars() {
        let tail = (sh.x - sh.vx * k, sh.y - sh.vy * k);
        let fade = cfg.peak_alpha * (1.0 - sh.progress());
        surface.stroke_line(tail, (sh.x, sh.y), cfg.line_width, color.fade(fade))?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clock::FrameTime;
    use crate::config::StarfieldConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Gradient { cx: f32, cy: f32, r0: f32, r1: f32, stops: Vec<GradientStop>, w: f32, h: f32 },
        Circle { x: f32, y: f32, r: f32, color: Rgba },
        Line { from: (f32, f32), to: (f32, f32), width: f32, color: Rgba },
    }

    /// Records every draw call.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub ops: Vec<Op>,
    }

    impl Recorder {
        pub fn circles(&self) -> impl Iterator<Item = &Op> {
            self.ops.iter().filter(|o| matches!(o, Op::Circle { .. }))
        }

        pub fn lines(&self) -> impl Iterator<Item = &Op> {
            self.ops.iter().filter(|o| matches!(o, Op::Line { .. }))
        }
    }

    impl Surface for Recorder {
        fn fill_gradient(&mut self, g: &RadialGradient<'_>, w: f32, h: f32) -> Result<()> {
            self.ops.push(Op::Gradient { cx: g.cx, cy: g.cy, r0: g.r0, r1: g.r1, stops: g.stops.to_vec(), w, h });
            Ok(())
        }

        fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Rgba) -> Result<()> {
            self.ops.push(Op::Circle { x, y, r, color });
            Ok(())
        }

        fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) -> Result<()> {
            self.ops.push(Op::Line { from, to, width, color });
            Ok(())
        }
    }

    fn sky(reduced: bool) -> Sky {
        let mut rng = StdRng::seed_from_u64(77);
        Sky::new(1200.0, 800.0, StarfieldConfig::default(), reduced, &mut rng)
    }

    #[test]
    fn css_string() {
        assert_eq!(Rgba::new(180, 140, 255, 0.5).css(), "rgba(180, 140, 255, 0.5)");
    }

    #[test]
    fn fade_clamps() {
        assert_eq!(Rgba::new(1, 2, 3, 0.8).fade(2.0).a, 1.0);
        assert_eq!(Rgba::new(1, 2, 3, 0.8).fade(-1.0).a, 0.0);
        assert_eq!(Rgba::new(1, 2, 3, 1.0).fade(f32::NAN).a, 0.0);
    }

    #[test]
    fn background_then_stars() {
        let s = sky(false);
        let mut rec = Recorder::default();
        paint(&s, &mut rec).unwrap();

        assert_eq!(rec.ops.len(), 1 + 80);
        match &rec.ops[0] {
            Op::Gradient { cx, cy, r0, r1, stops, w, h } => {
                assert_eq!((*cx, *cy), (300.0, 200.0));
                assert_eq!((*r0, *r1), (0.0, 1200.0));
                assert_eq!((*w, *h), (1200.0, 800.0));
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[1].offset, 0.55);
                assert_eq!(stops[0].color, Rgba::new(26, 31, 60, 0.85));
            }
            other => panic!("expected gradient first, got {other:?}"),
        }
        assert!(rec.ops[1..].iter().all(|o| matches!(o, Op::Circle { .. })));
    }

    #[test]
    fn stars_shift_by_depth() {
        let mut s = sky(false);
        s.set_pointer(1200.0, 800.0); // parallax (6, 6)
        let mut rec = Recorder::default();
        paint_stars(&s, &mut rec).unwrap();

        for (op, st) in rec.circles().zip(s.stars()) {
            let Op::Circle { x, y, r, color } = op else { unreachable!() };
            assert!((x - (st.x + 6.0 * st.depth)).abs() < 1e-3);
            assert!((y - (st.y + 6.0 * st.depth)).abs() < 1e-3);
            assert_eq!(*r, st.radius);
            assert_eq!((color.r, color.g, color.b), (255, 255, 255));
            assert_eq!(color.a, st.alpha);
        }
    }

    #[test]
    fn reduced_motion_ignores_pointer() {
        let mut s = sky(true);
        s.set_pointer(1200.0, 0.0);
        let mut rec = Recorder::default();
        paint_stars(&s, &mut rec).unwrap();
        for (op, st) in rec.circles().zip(s.stars()) {
            let Op::Circle { x, y, .. } = op else { unreachable!() };
            assert_eq!((*x, *y), (st.x, st.y));
        }
    }

    #[test]
    fn streak_fades_and_trails() {
        let mut s = sky(false);
        s.update(FrameTime { t: 0.0, dt: 0.02 }, &mut StepRng::new(0, 0));
        assert_eq!(s.shooting_stars().len(), 1);
        let sh = s.shooting_stars()[0].clone();

        let mut rec = Recorder::default();
        paint_shooting(&s, &mut rec).unwrap();
        let lines: Vec<_> = rec.lines().collect();
        assert_eq!(lines.len(), 1);
        let Op::Line { from, to, width, color } = lines[0] else { unreachable!() };
        assert_eq!(*to, (sh.x, sh.y));
        assert!((from.0 - (sh.x - sh.vx * 0.02 * 3.6)).abs() < 1e-2);
        assert!((from.1 - (sh.y - sh.vy * 0.02 * 3.6)).abs() < 1e-2);
        assert_eq!(*width, 2.0);
        assert_eq!((color.r, color.g, color.b), (180, 140, 255));
        let expected = 0.9 * (1.0 - sh.age / sh.lifetime);
        assert!((color.a - expected).abs() < 1e-5);
    }

    #[test]
    fn expired_streaks_not_drawn() {
        let mut s = sky(false);
        s.update(FrameTime { t: 0.0, dt: 0.02 }, &mut StepRng::new(0, 0));
        let mut quiet = StepRng::new(u64::MAX, 0);
        for i in 1..30 {
            s.update(FrameTime { t: i as f32 * 0.033, dt: 0.033 }, &mut quiet);
        }
        let mut rec = Recorder::default();
        paint(&s, &mut rec).unwrap();
        assert_eq!(rec.lines().count(), 0);
    }
}
