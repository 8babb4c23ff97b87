// canvas.rs - `Surface` over a CanvasRenderingContext2d

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, StarfieldError};
use crate::render::{RadialGradient, Rgba, Surface};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(StarfieldError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StarfieldError::MissingContext)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fill_gradient(&mut self, g: &RadialGradient<'_>, w: f32, h: f32) -> Result<()> {
        let (cx, cy) = (g.cx as f64, g.cy as f64);
        let grad = self.ctx.create_radial_gradient(cx, cy, g.r0 as f64, cx, cy, g.r1 as f64)?;
        for stop in g.stops {
            grad.add_color_stop(stop.offset, &stop.color.css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
        Ok(())
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Rgba) -> Result<()> {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.arc(x as f64, y as f64, r.max(0.0) as f64, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) -> Result<()> {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke();
        Ok(())
    }
}
