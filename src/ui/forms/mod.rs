//! Form rendering module
//!
//! - `field_renderer`: input boxes and inline error lines
//! - `contact_form`: the contact form and its action row

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
