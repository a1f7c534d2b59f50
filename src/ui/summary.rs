//! Submitted information panel

use crate::state::Submission;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows needed to show a submission, borders included
pub fn panel_height(submission: &Submission) -> u16 {
    let address_lines = submission.data.address.split('\n').count();
    // name, email, address..., contact number, blank, submitted at, borders
    u16::try_from(address_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(5 + 2)
}

fn labeled<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

/// Draw the read-only summary; the password is never shown
pub fn draw(frame: &mut Frame, area: Rect, submission: &Submission) {
    let data = &submission.data;

    let mut lines = vec![labeled("Name", &data.name), labeled("Email", &data.email)];

    let mut address = data.address.split('\n');
    lines.push(labeled("Address", address.next().unwrap_or_default()));
    lines.extend(address.map(|l| Line::from(format!("         {l}"))));

    lines.push(labeled("Contact Number", &data.contact_number));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Submitted {}",
            submission.submitted_at.format("%Y-%m-%d %H:%M:%S")
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Submitted Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormData;

    fn submission_with_address(address: &str) -> Submission {
        Submission::new(FormData {
            address: address.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_panel_height_counts_address_lines() {
        assert_eq!(panel_height(&submission_with_address("1 Main St")), 8);
        assert_eq!(panel_height(&submission_with_address("1 Main St\nSpringfield")), 9);
    }

    #[test]
    fn test_panel_height_saturates_on_huge_address() {
        let address = "\n".repeat(usize::from(u16::MAX) - 1);
        assert_eq!(panel_height(&submission_with_address(&address)), u16::MAX);
        let address = "\n".repeat(100_000);
        assert_eq!(panel_height(&submission_with_address(&address)), u16::MAX);
    }
}
