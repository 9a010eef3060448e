//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Short input hint shown on the right of the field border
fn kind_hint(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Text => None,
        FieldKind::Email => Some("email"),
        FieldKind::Tel => Some("tel"),
        FieldKind::Date => Some("date"),
    }
}

/// Trailing part of `text` that fits in `width` cells
fn visible_tail(text: &str, width: usize) -> &str {
    let len = text.chars().count();
    if len <= width {
        return text;
    }
    let start = text
        .char_indices()
        .nth(len - width)
        .map_or(text.len(), |(i, _)| i);
    &text[start..]
}

/// Draw a single-line form field with its label as the border title
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (text, is_placeholder) = field.display_value();
    // Long values scroll so the end and the cursor stay in view
    let text = if is_placeholder {
        text
    } else {
        let inner_width = area.width.saturating_sub(2) as usize;
        visible_tail(text, inner_width.saturating_sub(usize::from(is_active)))
    };
    let text_style = if is_placeholder {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = Vec::with_capacity(2);
    if is_active && is_placeholder {
        // Cursor sits before the placeholder while nothing is typed
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(text, text_style));
    } else {
        spans.push(Span::styled(text, text_style));
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(hint) = kind_hint(field.kind) {
        block = block.title(Line::from(format!(" {hint} ")).right_aligned());
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
