//! Form domain layer
//!
//! Type-safe field values and the focus model for the user details dialog.

mod field;
mod form_state;

pub use field::{FieldKind, FieldName, FormField};
pub use form_state::{Form, FormButton, UserDetailsForm, BUTTONS_ROW};
