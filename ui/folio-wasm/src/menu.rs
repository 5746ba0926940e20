//! Hamburger menu and body scroll lock.

use crate::dom;
use crate::events;
use crate::state::Page;
use folio_core::MenuState;
use std::rc::Rc;

fn render(page: &Page, state: MenuState) {
    let els = &page.els;
    for el in [&els.nav, &els.hamburger].into_iter().flatten() {
        dom::toggle_class(el, "is-open", state.is_open());
    }
    if let Some(body) = &els.body {
        let _ = body.style().set_property("overflow", state.body_overflow());
    }
}

pub fn open(page: &Page) {
    let state = page.menu.borrow_mut().open();
    render(page, state);
}

pub fn close(page: &Page) {
    let state = page.menu.borrow_mut().close();
    render(page, state);
}

pub fn toggle(page: &Page) {
    if page.menu.borrow().state().is_open() {
        close(page);
    } else {
        open(page);
    }
}

/// Hamburger toggles; any nav link closes.
pub fn bind(page: &Rc<Page>) {
    if let Some(hamburger) = &page.els.hamburger {
        events::listen_page(page, hamburger, "click", |page, _| toggle(page));
    }
    for link in &page.els.nav_links {
        events::listen_page(page, link, "click", |page, _| close(page));
    }
}
