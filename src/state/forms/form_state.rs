//! Form state management for the user details form

use super::field::{FieldKind, FieldName, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the dialog's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Cancel,
}

impl FormButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Cancel => "Cancel",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Submit => Self::Cancel,
            Self::Cancel => Self::Submit,
        }
    }
}

/// Index of the buttons row in the focus order
pub const BUTTONS_ROW: usize = 4;

/// Username, email, phone and date of birth, edited field by field
#[derive(Debug, Clone)]
pub struct UserDetailsForm {
    pub username: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub date_of_birth: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl UserDetailsForm {
    pub fn new() -> Self {
        Self {
            username: FormField::new(
                FieldName::Username,
                "Username",
                "User Name",
                FieldKind::Text,
            ),
            email: FormField::new(
                FieldName::Email,
                "Email Address",
                "name@example.com",
                FieldKind::Email,
            ),
            phone: FormField::new(
                FieldName::Phone,
                "Phone Number",
                "10-digit phone number",
                FieldKind::Tel,
            ),
            date_of_birth: FormField::new(
                FieldName::DateOfBirth,
                "Date of Birth",
                "YYYY-MM-DD",
                FieldKind::Date,
            ),
            active_field_index: 0,
            selected_button: FormButton::Submit,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::DateOfBirth => &self.date_of_birth,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::DateOfBirth => &mut self.date_of_birth,
        }
    }

    /// Value of a single field
    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).value()
    }

    /// Replace exactly one field's value, leaving the others untouched
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_value(value.into());
    }

    /// Name of the focused field, or `None` when the buttons row is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    /// Clear all values and return focus to the first field
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True when every field holds the empty string
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|name| self.value(*name).is_empty())
    }
}

impl Default for UserDetailsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for UserDetailsForm {
    fn field_count(&self) -> usize {
        5 // username, email, phone, date of birth, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UserDetailsForm {
        let mut form = UserDetailsForm::new();
        form.set_field(FieldName::Username, "alice");
        form.set_field(FieldName::Email, "alice@example.com");
        form.set_field(FieldName::Phone, "1234567890");
        form.set_field(FieldName::DateOfBirth, "2000-01-01");
        form
    }

    mod user_details_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = UserDetailsForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, FormButton::Submit);
            assert!(form.is_empty());
            assert_eq!(form.username.name, FieldName::Username);
            assert_eq!(form.date_of_birth.kind, FieldKind::Date);
        }

        #[test]
        fn test_set_field_touches_only_one_field() {
            let mut form = filled_form();
            form.set_field(FieldName::Email, "bob@example.com");
            assert_eq!(form.value(FieldName::Email), "bob@example.com");
            assert_eq!(form.value(FieldName::Username), "alice");
            assert_eq!(form.value(FieldName::Phone), "1234567890");
            assert_eq!(form.value(FieldName::DateOfBirth), "2000-01-01");
        }

        #[test]
        fn test_set_field_accepts_anything() {
            let mut form = UserDetailsForm::new();
            form.set_field(FieldName::Phone, "not a number");
            assert_eq!(form.value(FieldName::Phone), "not a number");
        }

        #[test]
        fn test_field_lookup_matches_names() {
            let form = UserDetailsForm::new();
            for name in FieldName::ALL {
                assert_eq!(form.field(name).name, name);
            }
        }

        #[test]
        fn test_reset_clears_values_and_focus() {
            let mut form = filled_form();
            form.active_field_index = 3;
            form.selected_button = FormButton::Cancel;
            form.reset();
            assert!(form.is_empty());
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, FormButton::Submit);
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_field_count() {
            assert_eq!(UserDetailsForm::new().field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = UserDetailsForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = UserDetailsForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert_eq!(form.active_field_name(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = UserDetailsForm::new();
            form.set_active_field(42);
            assert_eq!(form.active_field_index, BUTTONS_ROW);
        }

        #[test]
        fn test_active_field_name_follows_focus() {
            let mut form = UserDetailsForm::new();
            form.set_active_field(2);
            assert_eq!(form.active_field_name(), Some(FieldName::Phone));
            form.next_field();
            assert_eq!(form.active_field_name(), Some(FieldName::DateOfBirth));
        }

        #[test]
        fn test_buttons_toggle() {
            let mut form = UserDetailsForm::new();
            form.next_button();
            assert_eq!(form.selected_button, FormButton::Cancel);
            form.prev_button();
            assert_eq!(form.selected_button, FormButton::Submit);
        }
    }
}
