//! Submit acknowledgment dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the blocking acknowledgment shown after a successful submit
pub fn render_ack_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" to continue"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            accent: Color::Green,
            message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
