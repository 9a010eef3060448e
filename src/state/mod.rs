//! Application state module

mod app_state;
mod forms;
mod listeners;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use listeners::*;
pub use ui_area::*;
