//! Field rendering utilities for forms

use crate::state::ValidationError;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a labeled input box with a cursor when active
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    has_error: bool,
) {
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else {
        text_style
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if is_multiline {
        // split keeps a trailing empty line so the cursor follows a newline
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        let offset = if is_active {
            scroll_offset(lines.len(), area.height.saturating_sub(2))
        } else {
            0
        };
        Paragraph::new(lines).scroll((offset, 0))
    } else {
        Paragraph::new(Line::from(vec![Span::styled(display_value, text_style), cursor]))
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
/// Rows to scroll so the last of `line_count` lines stays visible
fn scroll_offset(line_count: usize, inner_height: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height)
}

/// Draw the inline error line under a validated field
pub fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<ValidationError>) {
    let Some(error) = error else {
        return;
    };
    let line = Paragraph::new(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(line, area.inner(Margin::new(1, 0)));
}
