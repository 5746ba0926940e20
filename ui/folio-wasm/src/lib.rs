//! Portfolio page enhancements, compiled to WebAssembly.
//!
//! Binds the theme toggle, hamburger menu, scroll-driven navigation state,
//! skill bars and contact form of a static portfolio page. All decisions are
//! made in `folio-core`; this crate only reads and writes the DOM.

pub mod contact;
pub mod dom;
pub mod events;
pub mod menu;
pub mod scroll;
pub mod skills;
pub mod state;
pub mod theme;

use state::Page;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let page = Page::new(window, document);

    // Theme first, before anything else renders
    theme::init(&page);

    events::bind_events(&page);
    set_year(&page);

    gloo_console::log!(format!(
        "folio: {} sections, {} skill cards bound",
        page.els.sections.len(),
        page.els.skill_cards.len()
    ));
    Ok(())
}

/// Footer copyright year.
fn set_year(page: &Page) {
    if let Some(year) = &page.els.year {
        let now = js_sys::Date::new_0();
        dom::set_text(year, &now.get_full_year().to_string());
    }
}
