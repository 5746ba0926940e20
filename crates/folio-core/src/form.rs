//! Contact form validation.
//!
//! Each field moves through `Untouched → Editing → Valid | Invalid`. Typing
//! clears the field's error at once; blur re-validates that field; a submit
//! attempt validates all three regardless of history. Nothing is sent
//! anywhere: a valid submit only resets the form and yields an
//! acknowledgment for the page to show.

use regex::Regex;
use std::sync::LazyLock;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// `""` if valid, otherwise the message to show under the field.
pub fn validate_name(value: &str) -> &'static str {
    if value.trim().chars().count() < 2 {
        return NAME_TOO_SHORT;
    }
    ""
}

pub fn validate_email(value: &str) -> &'static str {
    let value = value.trim();
    if value.is_empty() {
        return EMAIL_REQUIRED;
    }
    if !EMAIL_PATTERN.is_match(value) {
        return EMAIL_INVALID;
    }
    ""
}

pub fn validate_message(value: &str) -> &'static str {
    if value.trim().chars().count() < 10 {
        return MESSAGE_TOO_SHORT;
    }
    ""
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Element id of the inline error display.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn validate(self, value: &str) -> &'static str {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Message => validate_message(value),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Editing,
    Invalid,
    Valid,
}

/// Raw field values as read from the page at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct FieldSlot {
    state: FieldState,
    error: &'static str,
}

impl FieldSlot {
    fn settle(&mut self, error: &'static str) {
        self.error = error;
        self.state = if error.is_empty() {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
    }
}

/// What the page must do after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Error per field in [`Field::ALL`] order; `""` for valid fields.
    pub errors: [&'static str; 3],
    /// Clear the input values.
    pub reset: bool,
    /// Message to show the user, present only on success.
    pub acknowledgment: Option<String>,
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(|e| e.is_empty())
    }

    pub fn error(&self, field: Field) -> &'static str {
        self.errors[field.index()]
    }
}

#[derive(Debug)]
pub struct ContactForm {
    fields: [FieldSlot; 3],
    acknowledgment: String,
}

impl ContactForm {
    pub fn new(acknowledgment: impl Into<String>) -> Self {
        Self {
            fields: [FieldSlot::default(); 3],
            acknowledgment: acknowledgment.into(),
        }
    }

    pub fn state(&self, field: Field) -> FieldState {
        self.fields[field.index()].state
    }

    /// Error currently displayed for `field`, `""` if none.
    pub fn error(&self, field: Field) -> &'static str {
        self.fields[field.index()].error
    }

    /// User typed into `field`.
    pub fn input(&mut self, field: Field) {
        let slot = &mut self.fields[field.index()];
        slot.state = FieldState::Editing;
        slot.error = "";
    }

    /// `field` lost focus holding `value`. Returns the error to display.
    pub fn blur(&mut self, field: Field, value: &str) -> &'static str {
        let error = field.validate(value);
        self.fields[field.index()].settle(error);
        tracing::debug!(field = field.id(), valid = error.is_empty(), "field validated");
        error
    }

    pub fn submit(&mut self, values: &FormValues) -> SubmitOutcome {
        for slot in &mut self.fields {
            slot.error = "";
        }

        let mut errors = [""; 3];
        for field in Field::ALL {
            let error = field.validate(values.get(field));
            self.fields[field.index()].settle(error);
            errors[field.index()] = error;
        }

        let valid = errors.iter().all(|e| e.is_empty());
        tracing::debug!(valid, "contact form submitted");

        if !valid {
            return SubmitOutcome {
                errors,
                reset: false,
                acknowledgment: None,
            };
        }

        // The reset puts every field back to its pristine state.
        self.fields = [FieldSlot::default(); 3];
        SubmitOutcome {
            errors,
            reset: true,
            acknowledgment: Some(self.acknowledgment.clone()),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ACKNOWLEDGMENT)
    }
}
