//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            accent: Color::White,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

/// Horizontal padding inside the dialog border
const PADDING: u16 = 4;

/// Width and height of the dialog, clamped to `max_width` and the screen
fn dialog_size(
    title: &str,
    lines: &[String],
    has_hint: bool,
    max_width: u16,
    area: Rect,
) -> (u16, u16) {
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(PADDING + 2)
        .min(max_width)
        .min(area.width);

    // title + blank + message + (blank + hint) + borders
    let hint_lines = if has_hint { 2 } else { 0 };
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2 + hint_lines + 2)
        .max(5)
        .min(area.height);

    (width, height)
}

/// Render a centered modal dialog over whatever is on screen
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let max_line_width = config.max_width.saturating_sub(PADDING + 2) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let (dialog_width, dialog_height) = dialog_size(
        config.title,
        &wrapped_lines,
        config.hint.is_some(),
        config.max_width,
        area,
    );

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));
    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap; words longer than the width are left intact
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
