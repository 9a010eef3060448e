//! User-input validation failures

use crate::state::FieldName;
use thiserror::Error;

/// Reason a submission was rejected. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out the {} field.", .0.label())]
    MissingField(FieldName),

    #[error("Invalid email. Please check your email address.")]
    MalformedEmail,

    #[error("Invalid phone number. Please enter a 10-digit phone number.")]
    MalformedPhone,

    #[error("Invalid date of birth. Please use the YYYY-MM-DD format.")]
    MalformedDateOfBirth,

    #[error("Invalid date of birth. Date of birth cannot be in the future.")]
    FutureDateOfBirth,
}

impl ValidationError {
    /// Field the failure is about, for logging
    pub fn field(&self) -> FieldName {
        match self {
            Self::MissingField(name) => *name,
            Self::MalformedEmail => FieldName::Email,
            Self::MalformedPhone => FieldName::Phone,
            Self::MalformedDateOfBirth | Self::FutureDateOfBirth => FieldName::DateOfBirth,
        }
    }

    /// Short rule identifier for logs
    pub fn rule(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "required",
            Self::MalformedEmail => "email_format",
            Self::MalformedPhone => "phone_format",
            Self::MalformedDateOfBirth => "date_format",
            Self::FutureDateOfBirth => "date_not_future",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_field_messages() {
        let messages: Vec<String> = FieldName::ALL
            .iter()
            .map(|name| ValidationError::MissingField(*name).to_string())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Please fill out the Username field.",
                "Please fill out the Email field.",
                "Please fill out the Phone Number field.",
                "Please fill out the Date of Birth field.",
            ]
        );
    }

    #[test]
    fn test_format_messages() {
        assert_eq!(
            ValidationError::MalformedEmail.to_string(),
            "Invalid email. Please check your email address."
        );
        assert_eq!(
            ValidationError::MalformedPhone.to_string(),
            "Invalid phone number. Please enter a 10-digit phone number."
        );
        assert_eq!(
            ValidationError::FutureDateOfBirth.to_string(),
            "Invalid date of birth. Date of birth cannot be in the future."
        );
    }

    #[test]
    fn test_field_mapping() {
        assert_eq!(
            ValidationError::MissingField(FieldName::Phone).field(),
            FieldName::Phone
        );
        assert_eq!(ValidationError::MalformedEmail.field(), FieldName::Email);
        assert_eq!(
            ValidationError::FutureDateOfBirth.field(),
            FieldName::DateOfBirth
        );
    }
}
