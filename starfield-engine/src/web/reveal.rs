// reveal.rs - Scroll reveal over IntersectionObserver
//
// Elements marked `data-reveal` get `is-visible` the first time they scroll
// into view, then stop being observed.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;
use crate::reveal::{REVEAL_THRESHOLD, RevealTracker};

pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Observe every marked element present now. Returns how many are watched.
pub fn observe_all(document: &Document) -> Result<usize> {
    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    if nodes.length() == 0 { return Ok(0); }

    let tracker = Rc::new(RefCell::new(RevealTracker::<Element>::new()));

    let seen = tracker.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                let target = entry.target();
                if !seen.borrow_mut().intersect(&target, entry.is_intersecting()) { continue; }
                if let Err(e) = target.class_list().add_1(VISIBLE_CLASS) {
                    log::debug!("reveal: {e:?}");
                }
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else { continue };
        if tracker.borrow_mut().watch(el.clone()) {
            observer.observe(&el);
        }
    }

    let n = tracker.borrow().watching();
    log::debug!("reveal: watching {n} elements");
    Ok(n)
}
