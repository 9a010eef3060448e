//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a message dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

/// Compute the rectangle of a dialog centred in `area`
pub fn dialog_rect(area: Rect, config: &DialogConfig) -> Rect {
    let padding = 4u16; // 2 chars padding on each side
    let max_width = config.max_width.min(area.width).max(padding + 3);
    let wrapped_lines = wrap_text(config.message, (max_width - padding - 2) as usize);

    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(Span::width).sum::<usize>())
        .unwrap_or(0);
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count())
        .max(hint_width) as u16;
    let width = (content_width + padding + 2).min(max_width).min(area.width);

    // title + blank + message lines + (blank + hint) + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + wrapped_lines.len() as u16 + hint_lines + 2)
        .max(5)
        .min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a centered dialog overlay on top of whatever is already drawn
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let dialog_area = dialog_rect(frame.area(), &config);
    let max_line_width = dialog_area.width.saturating_sub(6) as usize;

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(
        wrap_text(config.message, max_line_width.max(1))
            .into_iter()
            .map(Line::from),
    );
    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text at word boundaries to fit within a maximum width (in chars)
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if !current_line.is_empty() && current_len + word.chars().count() + 1 > max_width {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_single_line() {
        assert_eq!(wrap_text("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_words() {
        assert_eq!(
            wrap_text("Invalid phone number. Please enter a 10-digit phone number.", 24),
            vec![
                "Invalid phone number.",
                "Please enter a 10-digit",
                "phone number.",
            ]
        );
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_dialog_rect_is_centered_and_clamped() {
        let config = DialogConfig {
            title: "Error",
            message: "Please fill out the Email field.",
            hint: Some(vec![Span::raw("Press Enter")]),
            ..Default::default()
        };
        let area = Rect::new(0, 0, 80, 24);
        let rect = dialog_rect(area, &config);
        assert_eq!(rect.width, 32 + 6);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, (80 - rect.width) / 2);

        let tiny = dialog_rect(Rect::new(0, 0, 20, 4), &config);
        assert!(tiny.width <= 20);
        assert_eq!(tiny.height, 4);
    }
}
