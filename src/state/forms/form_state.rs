//! Contact form state: values, inline errors and the submitted snapshot

use super::field::{Field, FormData};
use crate::state::validation::{validate, ValidationError};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    Reset,
    #[default]
    Submit,
}

impl FormButton {
    pub fn toggle(self) -> Self {
        match self {
            Self::Reset => Self::Submit,
            Self::Submit => Self::Reset,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Submit => "Submit",
        }
    }
}

/// Inline validation errors, one slot per validated field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub contact_number: Option<ValidationError>,
}

impl FormErrors {
    /// Build the error set from a list of failures
    pub fn from_failures(failures: &[ValidationError]) -> Self {
        let mut errors = Self::default();
        for failure in failures {
            if let Some(slot) = errors.slot_mut(failure.field()) {
                *slot = Some(*failure);
            }
        }
        errors
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut Option<ValidationError>> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ContactNumber => Some(&mut self.contact_number),
            Field::Name | Field::Address => None,
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ContactNumber => self.contact_number,
            Field::Name | Field::Address => None,
        }
    }

    /// Clear a single field's error; no-op for fields without one
    pub fn clear(&mut self, field: Field) {
        if let Some(slot) = self.slot_mut(field) {
            *slot = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.contact_number.is_none()
    }
}

/// A snapshot of form data that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub data: FormData,
    pub submitted_at: DateTime<Local>,
}

/// Serialized shape of a submission; the password is never included
#[derive(Debug, Serialize)]
struct SubmissionRecord<'a> {
    name: &'a str,
    email: &'a str,
    address: &'a str,
    contact_number: &'a str,
    submitted_at: DateTime<Local>,
}

impl Submission {
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            submitted_at: Local::now(),
        }
    }

    /// Pretty JSON of the displayed summary fields
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SubmissionRecord {
            name: &self.data.name,
            email: &self.data.email,
            address: &self.data.address,
            contact_number: &self.data.contact_number,
            submitted_at: self.submitted_at,
        })
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed and the snapshot was taken
    Submitted,
    /// One or more rules failed; errors were stored on the form
    Invalid(Vec<ValidationError>),
    /// A required field is empty; nothing was validated
    MissingRequired(Field),
}

/// The contact form and everything it remembers between key presses
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub data: FormData,
    pub errors: FormErrors,
    submitted: Option<Submission>,
    /// Acknowledgment of the last submit has not been dismissed yet
    ack_pending: bool,
    /// Focus slot: 0..=4 are fields, 5 is the button row
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl ContactForm {
    /// Focus slot index of the button row
    pub const BUTTONS_ROW: usize = Field::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Option<&Submission> {
        self.submitted.as_ref()
    }

    pub fn is_ack_pending(&self) -> bool {
        self.ack_pending
    }

    /// Summary to display, withheld until the acknowledgment is dismissed
    pub fn visible_submission(&self) -> Option<&Submission> {
        if self.ack_pending {
            None
        } else {
            self.submitted()
        }
    }

    pub fn dismiss_ack(&mut self) {
        self.ack_pending = false;
    }

    /// The focused field, or `None` on the button row
    pub fn focused_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Replace a field's value and clear that field's error
    pub fn change_field(&mut self, field: Field, value: String) {
        self.data.set(field, value);
        self.errors.clear(field);
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let mut value = self.data.get(field).to_string();
            value.push(c);
            self.change_field(field, value);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut value = self.data.get(field).to_string();
            value.pop();
            self.change_field(field, value);
        }
    }

    /// Validate and, if everything passes, take a snapshot of the form
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(field) = self.data.first_missing() {
            return SubmitOutcome::MissingRequired(field);
        }

        let failures = validate(&self.data);
        if failures.is_empty() {
            self.errors = FormErrors::default();
            self.submitted = Some(Submission::new(self.data.clone()));
            self.ack_pending = true;
            SubmitOutcome::Submitted
        } else {
            self.errors = FormErrors::from_failures(&failures);
            SubmitOutcome::Invalid(failures)
        }
    }

    /// Return to an empty form regardless of prior state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        Self::BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
}
