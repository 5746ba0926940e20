//! Light/dark theme on the document element.
//!
//! The effective theme is exposed to CSS as `<html data-theme="…">`.

use crate::events;
use crate::state::Page;
use folio_core::Theme;
use std::rc::Rc;

fn render(page: &Page, theme: Theme) {
    if let Some(root) = &page.els.root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Resolve and apply the preferred theme. Runs before any other binding so
/// the page never settles on the wrong theme.
pub fn init(page: &Page) {
    let theme = page.theme.borrow_mut().initialize();
    render(page, theme);
}

pub fn toggle(page: &Page) {
    let theme = page.theme.borrow_mut().toggle_theme();
    render(page, theme);
}

pub fn bind(page: &Rc<Page>) {
    if let Some(btn) = &page.els.theme_toggle {
        events::listen_page(page, btn, "click", |page, _| toggle(page));
    }
}
