//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `user_details_form`: The user details dialog surface

mod field_renderer;
mod user_details_form;

pub use user_details_form::draw_user_details_dialog;
