//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Field, Focus, Form, FormButton, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
const CTRL_C_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::new(config),
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }
        self.last_ctrl_c = None;

        match self.state.focus() {
            Focus::Acknowledgment => self.handle_ack_key(key),
            Focus::Form => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= CTRL_C_WINDOW => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.set_status("Press Ctrl+C again to quit");
            }
        }
    }

    /// Keys while the submit acknowledgment is open; everything else is swallowed
    fn handle_ack_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.state.form.dismiss_ack();
        }
    }

    /// Keys while the form has focus
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons = self.state.form.is_buttons_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        // AltGr arrives as Ctrl+Alt on Windows and still types a character
        let shortcut = ctrl && !alt;
        let typed = ctrl == alt;
        let copy = !alt && key.modifiers.contains(crate::platform::COPY_MODIFIER);

        match key.code {
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => self.reset(),
            KeyCode::Char('y') if copy => {
                self.copy_summary().await;
            }
            KeyCode::Char('y') if on_buttons => self.copy_summary().await,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Button row navigation
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')
                if on_buttons =>
            {
                let form = &mut self.state.form;
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                FormButton::Reset => self.reset(),
                FormButton::Submit => self.submit(),
            },
            KeyCode::Enter => {
                if self.state.form.focused_field() == Some(Field::Address) {
                    self.state.form.input_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            // Form field input (only when not on the button row)
            KeyCode::Char(c) if !on_buttons && typed => self.state.form.input_char(c),
            KeyCode::Backspace if !on_buttons => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and move to the submitted state on success
    pub fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Submitted => {
                tracing::info!("Contact form submitted");
            }
            SubmitOutcome::Invalid(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field().label()).collect();
                tracing::debug!("Contact form rejected: {fields:?}");
                if let Some(first) = errors.first() {
                    self.state.form.set_active_field(first.field().index());
                }
                let noun = if errors.len() == 1 { "field needs" } else { "fields need" };
                self.state.set_status(format!("{} {noun} attention", errors.len()));
            }
            SubmitOutcome::MissingRequired(field) => {
                tracing::debug!("Contact form missing required field {}", field.label());
                self.state.form.set_active_field(field.index());
                self.state.set_status(format!("Please fill out the {} field", field.label()));
            }
        }
    }

    /// Clear the form and any submitted data
    pub fn reset(&mut self) {
        tracing::debug!("Contact form reset");
        self.state.form.reset();
        self.state.set_status("Form cleared");
    }

    /// Copy the visible summary to the clipboard as JSON
    async fn copy_summary(&mut self) {
        let Some(submission) = self.state.form.visible_submission() else {
            self.state.set_status("Nothing submitted yet");
            return;
        };

        let json = match submission.to_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!("Failed to serialize summary: {err}");
                self.state.set_status("Failed to copy summary");
                return;
            }
        };

        // Clipboard backends may block on the display server
        let result = tokio::task::spawn_blocking(move || copy_to_clipboard(&json)).await;
        match result {
            Ok(Ok(())) => self.state.set_status("Summary copied to clipboard"),
            Ok(Err(err)) => {
                tracing::warn!("Clipboard copy failed: {err:#}");
                self.state.set_status("Failed to copy summary");
            }
            Err(err) => {
                tracing::warn!("Clipboard task failed: {err}");
                self.state.set_status("Failed to copy summary");
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
