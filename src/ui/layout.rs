//! Status bar

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::BUTTONS_ROW;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar: key hints plus the transient status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current state
fn get_hints(app: &App) -> String {
    if app.state.has_error() {
        "Enter/Esc:dismiss".to_string()
    } else if !app.state.modal.is_open() {
        "Enter:open form  q:quit".to_string()
    } else if app.state.form.active_field_index == BUTTONS_ROW {
        format!("←/→:button  Enter:press  Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:close")
    } else {
        format!("Tab:next  Enter:submit  {SUBMIT_SHORTCUT}:submit  Esc:close")
    }
}
