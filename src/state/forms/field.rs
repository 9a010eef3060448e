//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// Names of the fields collected by the user details form, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Email,
    Phone,
    DateOfBirth,
}

impl FieldName {
    /// All fields in declaration order (also the required-check order)
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Phone,
        FieldName::DateOfBirth,
    ];

    /// Identifier used when addressing the field by name
    pub fn id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DateOfBirth => "dateOfBirth",
        }
    }

    /// Human-readable label, as shown in the dialog and in error messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::DateOfBirth => "Date of Birth",
        }
    }

    /// Position of the field in the focus order
    pub fn index(self) -> usize {
        match self {
            Self::Username => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::DateOfBirth => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "phone" | "phonenumber" => Ok(Self::Phone),
            "dateOfBirth" | "dateofbirth" | "dob" => Ok(Self::DateOfBirth),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Input flavour of a field. Only affects presentation; input is never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    /// Create a new empty field
    pub fn new(name: FieldName, label: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            name,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Get the display value for rendering, falling back to the placeholder
    pub fn display_value(&self) -> (&str, bool) {
        if self.value.is_empty() {
            (&self.placeholder, true)
        } else {
            (&self.value, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;

        #[test]
        fn test_parse_canonical_ids() {
            for name in FieldName::ALL {
                assert_eq!(name.id().parse::<FieldName>(), Ok(name));
            }
        }

        #[test]
        fn test_parse_aliases() {
            assert_eq!("phonenumber".parse(), Ok(FieldName::Phone));
            assert_eq!("dob".parse(), Ok(FieldName::DateOfBirth));
            assert_eq!("dateofbirth".parse(), Ok(FieldName::DateOfBirth));
        }

        #[test]
        fn test_parse_unknown() {
            let err = "address".parse::<FieldName>().unwrap_err();
            assert_eq!(err.to_string(), "unknown form field: address");
        }

        #[test]
        fn test_index_round_trips() {
            for name in FieldName::ALL {
                assert_eq!(FieldName::from_index(name.index()), Some(name));
            }
            assert_eq!(FieldName::from_index(4), None);
        }

        #[test]
        fn test_labels() {
            assert_eq!(FieldName::Phone.label(), "Phone Number");
            assert_eq!(FieldName::DateOfBirth.label(), "Date of Birth");
        }
    }

    mod form_field {
        use super::*;

        fn field() -> FormField {
            FormField::new(FieldName::Username, "Username", "User Name", FieldKind::Text)
        }

        #[test]
        fn test_new_is_empty() {
            let field = field();
            assert_eq!(field.value(), "");
            assert!(field.is_blank());
        }

        #[test]
        fn test_set_value_replaces() {
            let mut field = field();
            field.set_value("alice".to_string());
            field.set_value("bob".to_string());
            assert_eq!(field.value(), "bob");
            assert!(!field.is_blank());
        }

        #[test]
        fn test_whitespace_is_blank() {
            let mut field = field();
            field.set_value("   ".to_string());
            assert!(field.is_blank());
        }

        #[test]
        fn test_display_value_uses_placeholder() {
            let mut field = field();
            assert_eq!(field.display_value(), ("User Name", true));
            field.set_value("alice".to_string());
            assert_eq!(field.display_value(), ("alice", false));
        }
    }
}
