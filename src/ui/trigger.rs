//! Closed-state screen with the "Open Form" trigger

use super::components::render_button;
use crate::app::App;
use crate::state::trigger_area;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Label of the trigger control
pub const TRIGGER_LABEL: &str = "Open Form";

/// Draw the title and the trigger button centred in the main area
pub fn draw(frame: &mut Frame, main: Rect, app: &App) {
    let button_area = trigger_area(main);

    if button_area.y > main.y + 1 {
        let title_area = Rect {
            x: main.x,
            y: button_area.y - 2,
            width: main.width,
            height: 1,
        };
        let title = Paragraph::new(Line::from(Span::styled(
            "User Details Modal",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);
    }

    // The trigger is the only focusable control while closed
    render_button(frame, button_area, TRIGGER_LABEL, true, None);

    let hint = if app.state.status_message.is_some() {
        Some("Press Enter to fill out another form")
    } else if !app.state.form.is_empty() {
        // Cancelled or dismissed dialogs keep what was typed
        Some("Unsent details are kept until you submit")
    } else {
        None
    };

    if let Some(hint) = hint {
        if button_area.bottom() < main.bottom() {
            let hint_area = Rect {
                x: main.x,
                y: button_area.bottom(),
                width: main.width,
                height: 1,
            };
            let hint = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center);
            frame.render_widget(hint, hint_area);
        }
    }
}
