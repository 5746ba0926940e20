//! Contact form: inline validation and local acknowledgment.
//!
//! Nothing is transmitted. A valid submission clears the form and shows a
//! thank-you alert.

use crate::dom::FieldBinding;
use crate::events;
use crate::state::Page;
use folio_core::{Field, FormValues};
use std::rc::Rc;

fn read_values(page: &Page) -> FormValues {
    let value = |field: Field| page.els.field(field).value();
    FormValues {
        name: value(Field::Name),
        email: value(Field::Email),
        message: value(Field::Message),
    }
}

fn clear_errors(page: &Page) {
    for binding in &page.els.fields {
        binding.clear_error();
    }
}

pub fn on_submit(page: &Page, event: web_sys::Event) {
    event.prevent_default();

    let values = read_values(page);
    clear_errors(page);

    let outcome = page.form.borrow_mut().submit(&values);
    for binding in &page.els.fields {
        let error = outcome.error(binding.field);
        if !error.is_empty() {
            binding.show_error(error);
        }
    }

    if outcome.reset {
        if let Some(form) = &page.els.contact_form {
            form.reset();
        }
        clear_errors(page);
    }
    if let Some(message) = outcome.acknowledgment {
        let _ = page.window.alert_with_message(&message);
    }
}

pub fn on_input(page: &Page, binding: &FieldBinding) {
    page.form.borrow_mut().input(binding.field);
    binding.clear_error();
}

pub fn on_blur(page: &Page, binding: &FieldBinding) {
    let error = page.form.borrow_mut().blur(binding.field, &binding.value());
    if error.is_empty() {
        binding.clear_error();
    } else {
        binding.show_error(error);
    }
}

pub fn bind(page: &Rc<Page>) {
    let Some(form) = &page.els.contact_form else {
        return;
    };
    events::listen_page(page, form, "submit", on_submit);

    for binding in &page.els.fields {
        let Some(input) = &binding.input else {
            continue;
        };
        let on_edit = binding.clone();
        events::listen_page(page, input.element(), "input", move |page, _| {
            on_input(page, &on_edit)
        });
        let on_leave = binding.clone();
        events::listen_page(page, input.element(), "blur", move |page, _| {
            on_blur(page, &on_leave)
        });
    }
}
