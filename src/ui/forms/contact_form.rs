//! Contact form rendering

use super::field_renderer::{draw_error_line, draw_field};
use crate::app::App;
use crate::state::{ContactForm, Field, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single-line input box
const FIELD_HEIGHT: u16 = 3;

/// Height of the multiline address box
const MULTILINE_HEIGHT: u16 = 5;

/// Rows reserved for an inline error message
const ERROR_HEIGHT: u16 = 2;

/// Layout rows for the fields (input box plus optional error line) and buttons
fn form_constraints() -> Vec<Constraint> {
    let mut constraints = Vec::new();
    for field in Field::ALL {
        let height = if field.is_multiline() {
            MULTILINE_HEIGHT
        } else {
            FIELD_HEIGHT
        };
        constraints.push(Constraint::Length(height));
        if field.is_validated() {
            constraints.push(Constraint::Length(ERROR_HEIGHT));
        }
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));
    constraints
}

/// The outer border turns red while any field has an error
fn border_color(form: &ContactForm) -> Color {
    if form.errors.is_empty() {
        Color::Cyan
    } else {
        Color::Red
    }
}

/// Draw the contact form with its Reset/Submit row
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mask_password = app.state.config.mask_password();

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(form)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(form_constraints())
        .horizontal_margin(1)
        .split(inner);

    let mut row = 0;
    for field in Field::ALL {
        let error = form.errors.get(field);
        draw_field(
            frame,
            rows[row],
            field.label(),
            &form.data.display_value(field, mask_password),
            form.focused_field() == Some(field),
            field.is_multiline(),
            error.is_some(),
        );
        row += 1;
        if field.is_validated() {
            draw_error_line(frame, rows[row], error);
            row += 1;
        }
    }

    draw_buttons(frame, rows[row], form);
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let is_focused = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12), // Reset
            Constraint::Length(1),
            Constraint::Length(12), // Submit
        ])
        .split(area);

    for (button, chunk, color) in [
        (FormButton::Reset, chunks[1], Color::Gray),
        (FormButton::Submit, chunks[3], Color::Green),
    ] {
        render_action_button(
            frame,
            chunk,
            button.label(),
            is_focused && form.selected_button == button,
            Some(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_cover_fields_errors_and_buttons() {
        // 5 fields + 3 error lines + buttons + filler
        assert_eq!(form_constraints().len(), 10);
    }

    #[test]
    fn test_border_color_follows_errors() {
        let mut form = ContactForm::new();
        assert_eq!(border_color(&form), Color::Cyan);

        form.change_field(Field::Name, "Jane".to_string());
        form.change_field(Field::Address, "1 Main St".to_string());
        form.submit();
        assert_eq!(border_color(&form), Color::Red);

        form.change_field(Field::Email, "jane@example.com".to_string());
        form.change_field(Field::Password, "abc12!".to_string());
        form.change_field(Field::ContactNumber, "1234567890".to_string());
        assert_eq!(border_color(&form), Color::Cyan);
    }
}
