//! UI module for rendering the TUI

mod components;
mod contact_info;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let submission = app.state.form.visible_submission();
    let show_contact_info = app.state.config.show_contact_info();

    let (form_area, side_area) =
        layout::create_layout(frame.area(), submission.is_some() || show_contact_info);

    forms::draw_contact_form(frame, form_area, app);

    if let Some(side_area) = side_area {
        draw_side_panels(frame, side_area, app);
    }

    layout::draw_status_bar(frame, app);

    // Modal acknowledgment goes on top of everything
    if app.state.form.is_ack_pending() {
        components::render_ack_dialog(frame, app.state.config.ack_message());
    }
}

/// Stack the submitted summary above the static contact panel
fn draw_side_panels(frame: &mut Frame, area: Rect, app: &App) {
    let submission = app.state.form.visible_submission();
    let show_contact_info = app.state.config.show_contact_info();

    let mut constraints = Vec::new();
    if let Some(submission) = submission {
        constraints.push(Constraint::Length(summary::panel_height(submission)));
    }
    if show_contact_info {
        constraints.push(Constraint::Length(contact_info::PANEL_HEIGHT));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    if let Some(submission) = submission {
        summary::draw(frame, chunks[next], submission);
        next += 1;
    }
    if show_contact_info {
        contact_info::draw(frame, chunks[next]);
    }
}
