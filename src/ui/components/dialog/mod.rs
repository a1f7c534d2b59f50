//! Dialog components for TUI

mod ack_dialog;
mod base;

pub use ack_dialog::render_ack_dialog;
