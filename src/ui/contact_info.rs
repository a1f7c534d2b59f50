//! Static contact information panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const CONTACT_EMAIL: &str = "info@company.com";
pub const CONTACT_PHONE: &str = "+1234567890";
pub const CONTACT_TIMINGS: &str = "Mon-Fri, 9:00 AM - 5:00 PM";
pub const WEBSITE_URL: &str = "https://www.company.com";
pub const LOCATION_NAME: &str = "Twitter HQ";
/// Latitude and longitude of the office
pub const LOCATION_COORDS: (f64, f64) = (37.7749, -122.4194);

/// Rows the panel occupies, borders included
pub const PANEL_HEIGHT: u16 = 9;

fn labeled(label: &'static str, value: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

pub fn draw(frame: &mut Frame, area: Rect) {
    let (lat, lon) = LOCATION_COORDS;
    let lines = vec![
        labeled("Email", CONTACT_EMAIL),
        labeled("Phone", CONTACT_PHONE),
        labeled("Timings", CONTACT_TIMINGS),
        Line::from(Span::styled(
            WEBSITE_URL,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        labeled("Location", LOCATION_NAME),
        Line::from(Span::styled(
            format!("{lat:.4}, {lon:.4}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Contact Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}
