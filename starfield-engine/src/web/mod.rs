// web/ - Browser bindings
//
// Wires the simulation to the page: canvas sizing, resize and pointer
// listeners, the requestAnimationFrame loop, scroll reveal and footer year.
// The animator is shared between callbacks through Rc<RefCell<_>>; the page
// runtime never runs them concurrently.

mod canvas;
mod footer;
mod reveal;

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::config::StarfieldConfig;
use crate::driver::Animator;
use crate::error::{Result, StarfieldError};

use canvas::CanvasSurface;

pub const CANVAS_ID: &str = "starfield";
/// Optional JSON config on the canvas element.
pub const CONFIG_ATTR: &str = "data-starfield";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[wasm_bindgen]
pub struct Starfield {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    animator: Animator,
    rng: StdRng,
}

#[wasm_bindgen]
impl Starfield {
    /// Attach to `canvas_id`. Without `config_json` the canvas' `data-starfield`
    /// attribute is used, then the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> std::result::Result<Starfield, JsValue> {
        Ok(Self::attach(canvas_id, config_json.as_deref())?)
    }

    /// Advance and paint one frame; `now_ms` is a requestAnimationFrame timestamp.
    pub fn frame(&mut self, now_ms: f64) -> std::result::Result<(), JsValue> {
        Ok(self.tick(now_ms)?)
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.animator.resize(w as f32, h as f32, &mut self.rng);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.animator.set_pointer(x, y);
    }

    // Accessors for JS
    pub fn star_count(&self) -> usize { self.animator.sky().stars().len() }
    pub fn shooting_count(&self) -> usize { self.animator.sky().shooting_stars().len() }
    pub fn width(&self) -> u32 { self.canvas.width() }
    pub fn height(&self) -> u32 { self.canvas.height() }
}

impl Starfield {
    fn attach(canvas_id: &str, config_json: Option<&str>) -> Result<Self> {
        let window = web_sys::window().ok_or(StarfieldError::MissingWindow)?;
        let document = window.document().ok_or(StarfieldError::MissingWindow)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| StarfieldError::MissingCanvas(canvas_id.to_string()))?;
        let surface = CanvasSurface::new(&canvas)?;

        let config = match config_json.map(str::to_owned).or_else(|| canvas.get_attribute(CONFIG_ATTR)) {
            Some(json) => StarfieldConfig::from_json(&json)?,
            None => StarfieldConfig::default(),
        };
        log::set_max_level(config.log_level);

        let reduced = prefers_reduced_motion(&window);
        let (w, h) = viewport(&window);
        canvas.set_width(w);
        canvas.set_height(h);

        let mut rng = StdRng::from_entropy();
        let animator = Animator::new(w as f32, h as f32, config, reduced, &mut rng);
        log::info!(
            "starfield: {}x{}, {} stars{}",
            w,
            h,
            animator.sky().stars().len(),
            if reduced { ", reduced motion" } else { "" }
        );
        Ok(Self { canvas, surface, animator, rng })
    }

    fn tick(&mut self, now_ms: f64) -> Result<()> {
        self.animator.frame(now_ms, &mut self.surface, &mut self.rng)?;
        Ok(())
    }
}

fn viewport(window: &Window) -> (u32, u32) {
    let dim = |v: std::result::Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).filter(|d| d.is_finite() && *d > 0.0).unwrap_or(0.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Read once at startup; later preference changes are not tracked.
fn prefers_reduced_motion(window: &Window) -> bool {
    matches!(window.match_media(REDUCED_MOTION_QUERY), Ok(Some(m)) if m.matches())
}

/// Run the starfield on `canvas_id` for the lifetime of the page.
pub fn mount(canvas_id: &str) -> Result<()> {
    let window = web_sys::window().ok_or(StarfieldError::MissingWindow)?;
    let field = Rc::new(RefCell::new(Starfield::attach(canvas_id, None)?));

    // Resize: regenerate the whole field
    {
        let field = field.clone();
        let win = window.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let (w, h) = viewport(&win);
            field.borrow_mut().resize(w, h);
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // Pointer
    {
        let field = field.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            field.borrow_mut().set_pointer(e.client_x() as f32, e.client_y() as f32);
        });
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    // Frame loop, reschedules itself forever
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();
    *slot.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        if let Err(e) = field.borrow_mut().tick(now_ms) {
            log::error!("starfield frame: {e}");
        }
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("starfield: {e:?}");
            }
        }
    }));
    if let Some(cb) = slot.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    match mount(CANVAS_ID) {
        Ok(()) => {}
        Err(StarfieldError::MissingCanvas(_) | StarfieldError::MissingContext) => {
            log::warn!("Starfield canvas not found.")
        }
        Err(e) => log::warn!("starfield disabled: {e}"),
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    if let Err(e) = reveal::observe_all(&document) {
        log::debug!("reveal disabled: {e}");
    }
    footer::set_year(&document);
}
