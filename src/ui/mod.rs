//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod trigger;

use crate::app::App;
use crate::state::split_screen;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = split_screen(frame.area());

    if app.state.modal.is_open() {
        forms::draw_user_details_dialog(frame, main_area, app);
    } else {
        trigger::draw(frame, main_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);

    // Blocking notification goes on top of everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
