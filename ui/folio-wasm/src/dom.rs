//! DOM element bindings.
//!
//! Every element the page logic touches is resolved once at startup. Markup
//! varies between pages, so each lookup is optional and every operation on
//! an absent element is a no-op.

use folio_core::Field;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

// ── Helpers ──

pub fn by_id_typed<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok()?
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    match doc.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query the first matching descendant of `parent`.
pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

/// Set an inline style property (custom properties included).
pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

/// Closest `.contact-form__group` ancestor, which carries the `invalid` class.
pub fn form_group(el: &Element) -> Option<Element> {
    el.closest(".contact-form__group").ok()?
}

// ── Form inputs ──

/// A contact field control; `message` is a textarea, the others are inputs.
#[derive(Clone)]
pub enum FieldInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldInput {
    fn bind(doc: &Document, id: &str) -> Option<Self> {
        let el = doc.get_element_by_id(id)?;
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(FieldInput::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(FieldInput::TextArea),
        }
    }

    pub fn value(&self) -> String {
        match self {
            FieldInput::Input(el) => el.value(),
            FieldInput::TextArea(el) => el.value(),
        }
    }

    pub fn element(&self) -> &Element {
        match self {
            FieldInput::Input(el) => el.as_ref(),
            FieldInput::TextArea(el) => el.as_ref(),
        }
    }
}

/// One contact field with its paired error display.
#[derive(Clone)]
pub struct FieldBinding {
    pub field: Field,
    pub input: Option<FieldInput>,
    pub error: Option<Element>,
}

impl FieldBinding {
    fn bind(doc: &Document, field: Field) -> Self {
        Self {
            field,
            input: FieldInput::bind(doc, field.id()),
            error: doc.get_element_by_id(field.error_id()),
        }
    }

    /// Current raw value, empty when the control is missing.
    pub fn value(&self) -> String {
        self.input.as_ref().map(FieldInput::value).unwrap_or_default()
    }

    /// Render `message` under the field; `""` clears it.
    pub fn show_error(&self, message: &str) {
        if let Some(error) = &self.error {
            set_text(error, message);
            if let Some(group) = form_group(error) {
                toggle_class(&group, "invalid", !message.is_empty());
            }
        }
    }

    pub fn clear_error(&self) {
        self.show_error("");
        if let Some(group) = self.input.as_ref().and_then(|i| form_group(i.element())) {
            remove_class(&group, "invalid");
        }
    }
}

// ── Elements struct ──

/// All DOM references used by the page logic.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub root: Option<Element>,
    pub body: Option<HtmlElement>,

    // Navigation
    pub hamburger: Option<Element>,
    pub nav: Option<Element>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    pub theme_toggle: Option<Element>,

    // Content
    pub sections: Vec<Element>,
    pub skill_cards: Vec<Element>,
    pub year: Option<Element>,

    // Contact
    pub contact_form: Option<HtmlFormElement>,
    pub fields: [FieldBinding; 3],
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind(doc: &Document) -> Elements {
        Elements {
            root: doc.document_element(),
            body: doc.body(),

            hamburger: doc.get_element_by_id("hamburger"),
            nav: query(doc, ".navbar__nav"),
            nav_links: query_all(doc, ".navbar__link"),
            anchors: query_all(doc, "a[href^=\"#\"]"),
            theme_toggle: doc.get_element_by_id("themeToggle"),

            sections: query_all(doc, ".section"),
            skill_cards: query_all(doc, ".skill-card"),
            year: doc.get_element_by_id("year"),

            contact_form: by_id_typed::<HtmlFormElement>(doc, "contactForm"),
            fields: Field::ALL.map(|field| FieldBinding::bind(doc, field)),
        }
    }

    pub fn field(&self, field: Field) -> &FieldBinding {
        &self.fields[field as usize]
    }
}
