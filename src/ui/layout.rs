//! Layout components (columns, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the right-hand column holding the summary and contact panels
const SIDE_PANEL_WIDTH: u16 = 44;

/// Split the screen into the form column and an optional side column
pub fn create_layout(area: Rect, with_side_panel: bool) -> (Rect, Option<Rect>) {
    // Reserve bottom line for status bar
    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area)[0];

    if !with_side_panel {
        return (content, None);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                  // Form
            Constraint::Length(SIDE_PANEL_WIDTH), // Summary and contact info
        ])
        .split(content);

    (chunks[0], Some(chunks[1]))
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current focus
fn get_hints(app: &App) -> String {
    let form = &app.state.form;
    match app.state.focus() {
        Focus::Acknowledgment => "Enter:continue".to_string(),
        Focus::Form if form.is_buttons_row_active() => {
            let mut hints = "←/→:choose  Enter:press  Tab:next".to_string();
            if form.visible_submission().is_some() {
                hints.push_str("  y:copy");
            }
            hints
        }
        Focus::Form => {
            let mut hints =
                format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset");
            if form.visible_submission().is_some() {
                hints.push_str(&format!("  {COPY_SHORTCUT}:copy"));
            }
            hints
        }
    }
}
