//! Scroll-driven navigation state: active nav link, section reveal, and
//! smooth scrolling for in-page anchors.

use crate::dom;
use crate::events;
use crate::state::Page;
use folio_core::SectionDescriptor;
use folio_core::scroll::{anchor_target, link_href};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Measure every section from live layout. Never cached: sections move as
/// images load and the viewport resizes.
fn measure(page: &Page) -> Vec<SectionDescriptor> {
    page.els
        .sections
        .iter()
        .filter_map(|el| {
            let html = el.dyn_ref::<HtmlElement>()?;
            Some(SectionDescriptor::new(
                el.id(),
                f64::from(html.offset_top()),
                f64::from(html.offset_height()),
            ))
        })
        .collect()
}

/// Recompute which nav link is active for the current scroll position.
pub fn on_scroll(page: &Page) {
    let scroll_y = page.window.scroll_y().unwrap_or(0.0);
    let sections = measure(page);
    let Some(id) = page.scroll.active_section(&sections, scroll_y) else {
        return;
    };

    let href = link_href(id);
    for link in &page.els.nav_links {
        let is_active = link.get_attribute("href").as_deref() == Some(href.as_str());
        dom::toggle_class(link, "active", is_active);
    }
}

/// Track scroll and settle the initial highlight before any event arrives.
pub fn bind(page: &Rc<Page>) {
    events::listen_page(page, &page.window, "scroll", |page, _| on_scroll(page));
    on_scroll(page);
}

/// Fade sections in the first time they enter the viewport.
pub fn observe_sections(page: &Rc<Page>) {
    events::on_visible(
        page,
        &page.els.sections,
        Some(page.config.reveal_root_margin.as_str()),
        page.config.reveal_threshold,
        |page, index, el| {
            if page.reveals.borrow_mut().reveal(index) {
                dom::add_class(el, "visible");
            }
            true
        },
    );
}

/// Smooth-scroll in-page anchors whose target exists; leave the rest to the
/// browser.
pub fn bind_anchors(page: &Rc<Page>) {
    for anchor in &page.els.anchors {
        let anchor2 = anchor.clone();
        events::listen_page(page, anchor, "click", move |page, e| {
            let Some(href) = anchor2.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(|id| page.document.get_element_by_id(id))
            else {
                return;
            };
            e.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}
