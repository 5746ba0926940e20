//! Page context.
//!
//! Everything the handlers share is built once in [`Page::new`] and handed to
//! each listener as an `Rc<Page>`. WASM is single-threaded, so interior
//! mutability is plain `RefCell`; no handler holds a borrow across another
//! handler's run.

use crate::dom::Elements;
use folio_core::{
    ContactForm, FolioConfig, MenuController, PreferenceStore, RevealTracker, ScrollTracker,
    SkillBoard, StoreError, ThemeController,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Window};

// ── localStorage ──

/// `localStorage`-backed preference store. Privacy modes and sandboxed
/// frames can deny storage entirely; that surfaces as `StoreError` and the
/// caller keeps going without persistence.
pub struct LocalStore {
    window: Window,
}

impl LocalStore {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        self.window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// `prefers-color-scheme: dark` as reported by the browser.
pub fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mql| mql.matches())
}

// ── Config ──

/// Read the optional `#folio-config` JSON block, falling back to defaults.
pub fn load_config(doc: &Document) -> FolioConfig {
    let Some(raw) = doc
        .get_element_by_id("folio-config")
        .and_then(|el| el.text_content())
    else {
        return FolioConfig::default();
    };

    match FolioConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            gloo_console::warn!(format!("folio: {e}; using defaults"));
            FolioConfig::default()
        }
    }
}

// ── Page context ──

pub struct Page {
    pub window: Window,
    pub document: Document,
    pub els: Elements,
    pub config: FolioConfig,
    pub theme: RefCell<ThemeController<LocalStore>>,
    pub menu: RefCell<MenuController>,
    pub scroll: ScrollTracker,
    pub reveals: RefCell<RevealTracker>,
    pub skills: RefCell<SkillBoard>,
    pub form: RefCell<ContactForm>,
}

impl Page {
    pub fn new(window: Window, document: Document) -> Rc<Page> {
        let config = load_config(&document);
        let els = Elements::bind(&document);

        let theme = ThemeController::new(
            LocalStore::new(window.clone()),
            config.storage_key.clone(),
            prefers_dark(&window),
        );
        let skills = crate::skills::read_board(&els);

        Rc::new(Page {
            scroll: ScrollTracker::from_config(&config),
            form: RefCell::new(ContactForm::new(config.acknowledgment.clone())),
            theme: RefCell::new(theme),
            menu: RefCell::new(MenuController::new()),
            reveals: RefCell::new(RevealTracker::new()),
            skills: RefCell::new(skills),
            window,
            document,
            els,
            config,
        })
    }
}
