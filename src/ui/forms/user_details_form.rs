//! User details dialog rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{DialogLayout, FieldName, FormButton};
use crate::ui::components::render_button;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Draw the dimmed backdrop and the dialog with its fields and buttons
pub fn draw_user_details_dialog(frame: &mut Frame, main: Rect, app: &App) {
    let layout = DialogLayout::compute(main, app.config.dialog_width());
    let form = &app.state.form;

    draw_backdrop(frame, main);

    frame.render_widget(Clear, layout.dialog);
    let block = Block::default()
        .title(" User Details ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, layout.dialog);

    for name in FieldName::ALL {
        draw_field(
            frame,
            layout.field(name),
            form.field(name),
            form.active_field_name() == Some(name),
        );
    }

    let buttons_focused = form.is_buttons_row_active();
    for (button, accent) in [
        (FormButton::Cancel, Color::Gray),
        (FormButton::Submit, Color::Green),
    ] {
        render_button(
            frame,
            layout.button(button),
            button.label(),
            buttons_focused && form.selected_button == button,
            Some(accent),
        );
    }
}

fn draw_backdrop(frame: &mut Frame, area: Rect) {
    let backdrop = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(backdrop, area);
}
