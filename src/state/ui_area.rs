//! Screen geometry shared by rendering and mouse hit-testing
//!
//! Drawing and click handling must agree on where the trigger button, the
//! dialog, its fields and its buttons are, so both go through this module.
//!
//! # Layout (modal open)
//!
//! ```text
//! ┌ User Details ──────────────────┐   row 0: dialog border + title
//! │                                │   row 1: padding
//! │ ┌ Username ──────────────────┐ │   rows 2-13: four fields, 3 rows each
//! │ └────────────────────────────┘ │
//! │ ...                            │
//! │                                │   row 14: gap
//! │          ┌ Cancel ┐┌ Submit ┐  │   rows 15-17: buttons
//! └────────────────────────────────┘   row 18: border
//! ```
//!
//! Everything outside the dialog rectangle (except the status bar) is backdrop.

use super::forms::{FieldName, FormButton};
use ratatui::layout::{Position, Rect};

/// Height of a single-line bordered input field
pub const FIELD_HEIGHT: u16 = 3;
/// Height of a bordered button
pub const BUTTON_HEIGHT: u16 = 3;
/// Width of each dialog button
pub const BUTTON_WIDTH: u16 = 12;
/// Total dialog height including borders
pub const DIALOG_HEIGHT: u16 = 2 + 1 + 4 * FIELD_HEIGHT + 1 + BUTTON_HEIGHT;
/// Default dialog width
pub const DEFAULT_DIALOG_WIDTH: u16 = 60;
/// Narrowest dialog we try to draw
pub const MIN_DIALOG_WIDTH: u16 = 30;
/// Height of the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

const TRIGGER_WIDTH: u16 = 15;

/// What lies under a given screen cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// The "Open Form" button (modal closed)
    Trigger,
    /// Dimmed area around the dialog (modal open)
    Backdrop,
    /// Inside the dialog but not on an interactive element
    Dialog,
    Field(FieldName),
    Button(FormButton),
    StatusBar,
    /// Anything else while the modal is closed
    Background,
}

/// Split the screen into main content and status bar
pub fn split_screen(screen: Rect) -> (Rect, Rect) {
    let status_height = STATUS_BAR_HEIGHT.min(screen.height);
    let main = Rect {
        height: screen.height - status_height,
        ..screen
    };
    let status = Rect {
        y: screen.y + main.height,
        height: status_height,
        ..screen
    };
    (main, status)
}

/// Centre a `width` x `height` rectangle inside `area`, clamped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where the "Open Form" button sits inside the main area
pub fn trigger_area(main: Rect) -> Rect {
    centered(main, TRIGGER_WIDTH, BUTTON_HEIGHT)
}

/// Rectangles of the open dialog and its interactive elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub dialog: Rect,
    pub fields: [Rect; 4],
    pub cancel: Rect,
    pub submit: Rect,
}

impl DialogLayout {
    /// Compute the layout for a dialog centred in `main`
    pub fn compute(main: Rect, preferred_width: u16) -> Self {
        let width = preferred_width.max(MIN_DIALOG_WIDTH);
        let dialog = centered(main, width, DIALOG_HEIGHT);

        let inner_x = dialog.x + 2;
        let inner_width = dialog.width.saturating_sub(4);
        let first_field_y = dialog.y + 2;

        let fields = [0u16, 1, 2, 3].map(|i| {
            Rect {
                x: inner_x,
                y: first_field_y + i * FIELD_HEIGHT,
                width: inner_width,
                height: FIELD_HEIGHT,
            }
            .intersection(dialog)
        });

        let buttons_y = first_field_y + 4 * FIELD_HEIGHT + 1;
        let submit = Rect {
            x: (inner_x + inner_width).saturating_sub(BUTTON_WIDTH),
            y: buttons_y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        }
        .intersection(dialog);
        let cancel = Rect {
            x: submit.x.saturating_sub(BUTTON_WIDTH + 1),
            y: buttons_y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        }
        .intersection(dialog);

        Self {
            dialog,
            fields,
            cancel,
            submit,
        }
    }

    pub fn field(&self, name: FieldName) -> Rect {
        self.fields[name.index()]
    }

    pub fn button(&self, button: FormButton) -> Rect {
        match button {
            FormButton::Submit => self.submit,
            FormButton::Cancel => self.cancel,
        }
    }

    /// Classify a cell inside the main area while the modal is open
    pub fn hit_test(&self, column: u16, row: u16) -> UiArea {
        let pos = Position::new(column, row);
        if !self.dialog.contains(pos) {
            return UiArea::Backdrop;
        }
        if let Some(name) = FieldName::ALL
            .into_iter()
            .find(|name| self.field(*name).contains(pos))
        {
            return UiArea::Field(name);
        }
        if self.submit.contains(pos) {
            return UiArea::Button(FormButton::Submit);
        }
        if self.cancel.contains(pos) {
            return UiArea::Button(FormButton::Cancel);
        }
        UiArea::Dialog
    }
}

/// Classify a screen cell given the current modal visibility
pub fn hit_test(screen: Rect, modal_open: bool, dialog_width: u16, column: u16, row: u16) -> UiArea {
    let (main, status) = split_screen(screen);
    if status.contains(Position::new(column, row)) {
        return UiArea::StatusBar;
    }
    if modal_open {
        DialogLayout::compute(main, dialog_width).hit_test(column, row)
    } else if trigger_area(main).contains(Position::new(column, row)) {
        UiArea::Trigger
    } else {
        UiArea::Background
    }
}
