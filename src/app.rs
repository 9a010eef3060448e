//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{hit_test, AppState, CloseReason, FieldName, Form, FormButton, UiArea};
use crate::validation::{validate, Clock, SystemClock};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Status message shown after a successful submission
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Source of today's date for date-of-birth checks
    clock: Box<dyn Clock>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance using the system clock
    pub fn new(config: TuiConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: TuiConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::default(),
            config,
            clock,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.modal.is_open()
    }

    /// Show the user details dialog
    pub fn open_modal(&mut self) {
        if self.state.open_modal() {
            self.state.status_message = None;
            tracing::debug!("User details dialog opened");
        }
    }

    /// Hide the dialog without touching field values
    pub fn close_modal(&mut self, reason: CloseReason) {
        if self.state.close_modal() {
            tracing::debug!("User details dialog closed ({reason})");
            tracing::debug!(
                active_listeners = self.state.listeners.len(),
                "Escape listener released"
            );
        }
    }

    /// Replace one field's value
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.state.form.set_field(name, value);
    }

    /// Validate the form; on success reset it and close, on failure report
    /// the first failing rule and leave everything as it was.
    pub fn submit(&mut self) {
        match validate(&self.state.form, self.clock.as_ref()) {
            Ok(()) => {
                tracing::debug!(
                    username = %self.state.form.value(FieldName::Username).trim(),
                    "Form submitted"
                );
                self.state.form.reset();
                self.close_modal(CloseReason::Submitted);
                self.state.status_message = Some(SUBMITTED_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::debug!(rule = err.rule(), field = %err.field(), "Submission rejected");
                self.state.show_error(err.to_string());
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C quits from anywhere, dialog and error overlay included
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Global listeners take precedence over focused controls
        if key.code == KeyCode::Esc && self.state.listeners.is_listening(KeyCode::Esc) {
            self.close_modal(CloseReason::Escape);
            return Ok(());
        }

        if self.is_modal_open() {
            self.handle_dialog_key(key)
        } else {
            self.handle_closed_key(key)
        }
    }

    /// Keys while only the trigger is visible
    fn handle_closed_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => self.open_modal(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Keys while the dialog is open
    fn handle_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons = self.state.form.is_buttons_row_active();

        match key.code {
            // Submit shortcut works from anywhere in the dialog
            KeyCode::Char('s')
                if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
                    || key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Right if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => {
                let button = self.state.form.selected_button;
                self.press_button(button);
            }
            // Enter in any field submits, like a native form
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_active_field(|value| value.push(c));
            }
            KeyCode::Backspace => self.edit_active_field(|value| {
                value.pop();
            }),
            _ => {}
        }
        Ok(())
    }

    /// Apply a keystroke edit to the focused field (no-op on the buttons row)
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(name) = self.state.form.active_field_name() {
            let mut value = self.state.form.value(name).to_string();
            edit(&mut value);
            self.set_field(name, value);
        }
    }

    fn press_button(&mut self, button: FormButton) {
        match button {
            FormButton::Submit => self.submit(),
            FormButton::Cancel => self.close_modal(CloseReason::Cancel),
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }
        // The error dialog blocks everything underneath it
        if self.state.has_error() {
            return Ok(());
        }
        let Some((height, width)) = self.terminal_size else {
            return Ok(());
        };

        let screen = Rect::new(0, 0, width, height);
        let area = hit_test(
            screen,
            self.is_modal_open(),
            self.config.dialog_width(),
            mouse.column,
            mouse.row,
        );

        match area {
            UiArea::Trigger => self.open_modal(),
            UiArea::Backdrop => self.close_modal(CloseReason::Backdrop),
            UiArea::Field(name) => self.state.form.set_active_field(name.index()),
            UiArea::Button(button) => {
                self.state.form.selected_button = button;
                self.press_button(button);
            }
            UiArea::Dialog | UiArea::StatusBar | UiArea::Background => {}
        }
        Ok(())
    }
}
