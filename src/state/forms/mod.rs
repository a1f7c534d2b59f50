//! Form domain layer
//!
//! Field keys, the value record and the contact form state machine.

mod field;
mod form_state;

pub use field::{Field, FormData};
pub use form_state::{ContactForm, Form, FormButton, SubmitOutcome, Submission};
