//! Application state definitions

use super::forms::UserDetailsForm;
use super::listeners::{GlobalKeyListeners, ListenerGuard};
use crossterm::event::KeyCode;
use std::fmt;

/// Whether the user details dialog is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// Why the dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Cancel,
    Backdrop,
    Escape,
    Submitted,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Cancel => "cancel",
            Self::Backdrop => "backdrop click",
            Self::Escape => "escape",
            Self::Submitted => "submitted",
        };
        f.write_str(reason)
    }
}

/// Visibility flag plus the Escape listener that lives while the dialog is open
#[derive(Debug, Default)]
pub struct ModalState {
    visibility: ModalVisibility,
    escape_listener: Option<ListenerGuard>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    /// Show the dialog and register Escape-to-close. No-op if already open.
    pub fn open(&mut self, listeners: &mut GlobalKeyListeners) -> bool {
        if self.is_open() {
            return false;
        }
        self.visibility = ModalVisibility::Open;
        self.escape_listener = Some(listeners.register(KeyCode::Esc));
        true
    }

    /// Hide the dialog and release the Escape listener. Idempotent.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.visibility = ModalVisibility::Closed;
        self.escape_listener = None;
        true
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub modal: ModalState,
    pub form: UserDetailsForm,
    pub listeners: GlobalKeyListeners,
    /// Message of the blocking error dialog, if one is shown
    error: Option<String>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Open the dialog; focus starts on the first field
    pub fn open_modal(&mut self) -> bool {
        let opened = self.modal.open(&mut self.listeners);
        if opened {
            self.form.active_field_index = 0;
        }
        opened
    }

    pub fn close_modal(&mut self) -> bool {
        self.modal.close()
    }

    /// Show the blocking error dialog. Input is swallowed until it is dismissed,
    /// so at most one message is ever shown.
    pub fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
