//! Application state definitions

use super::forms::ContactForm;
use crate::config::TuiConfig;

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    /// The submit acknowledgment dialog is open
    Acknowledgment,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ContactForm,
    pub config: TuiConfig,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            form: ContactForm::new(),
            config,
            status_message: None,
        }
    }

    pub fn focus(&self) -> Focus {
        if self.form.is_ack_pending() {
            Focus::Acknowledgment
        } else {
            Focus::Form
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
