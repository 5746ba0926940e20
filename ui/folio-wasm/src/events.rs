//! Event binding.
//!
//! Every listener lives for the lifetime of the page, so closures are
//! forgotten after registration. Handlers run synchronously to completion.

use crate::state::Page;
use crate::{contact, menu, scroll, skills, theme};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attach `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        gloo_console::warn!(format!("folio: cannot listen for {event}: {:?}", e));
        return;
    }
    cb.forget();
}

/// Like [`listen`] but hands the handler its own clone of the page.
pub fn listen_page<F>(page: &Rc<Page>, target: &EventTarget, event: &str, mut handler: F)
where
    F: FnMut(&Page, web_sys::Event) + 'static,
{
    let page = Rc::clone(page);
    listen(target, event, move |e| handler(&page, e));
}

/// Call `handler(page, index, element)` when `targets[index]` intersects the
/// viewport. `handler` returns `true` once the element needs no further
/// callbacks, which stops observing it.
pub fn on_visible<F>(
    page: &Rc<Page>,
    targets: &[Element],
    root_margin: Option<&str>,
    threshold: f64,
    mut handler: F,
) where
    F: FnMut(&Page, usize, &Element) -> bool + 'static,
{
    if targets.is_empty() {
        return;
    }

    let page2 = Rc::clone(page);
    let observed = targets.to_vec();
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let Some(index) = observed.iter().position(|el| *el == target) else {
                continue;
            };
            if handler(&page2, index, &target) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    opts.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => observer,
        Err(e) => {
            gloo_console::warn!(format!("folio: IntersectionObserver unavailable: {:?}", e));
            return;
        }
    };
    for target in targets {
        observer.observe(target);
    }
    cb.forget();
}

/// Bind all UI event listeners. Call once after the theme is applied.
pub fn bind_events(page: &Rc<Page>) {
    // ── Theme ──
    theme::bind(page);

    // ── Navigation ──
    menu::bind(page);
    scroll::bind_anchors(page);

    // ── Scroll state ──
    scroll::bind(page);
    scroll::observe_sections(page);
    skills::observe(page);

    // ── Contact form ──
    contact::bind(page);
}
