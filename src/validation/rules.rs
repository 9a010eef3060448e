//! Validation rules, applied in a fixed order

use super::{Clock, ValidationError};
use crate::state::{FieldName, UserDetailsForm};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, "@", domain, ".", suffix; none of them empty or containing whitespace or "@"
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const PHONE_DIGITS: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Number of ASCII digits in the value, ignoring punctuation and spaces
pub fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Check a form snapshot, stopping at the first failing rule.
///
/// Order: every required field (username, email, phone, date of birth), then
/// the email, phone and date-of-birth format checks.
pub fn validate(form: &UserDetailsForm, clock: &dyn Clock) -> Result<(), ValidationError> {
    if let Some(missing) = FieldName::ALL
        .into_iter()
        .find(|name| form.field(*name).is_blank())
    {
        return Err(ValidationError::MissingField(missing));
    }

    if !is_valid_email(form.value(FieldName::Email).trim()) {
        return Err(ValidationError::MalformedEmail);
    }

    if digit_count(form.value(FieldName::Phone)) != PHONE_DIGITS {
        return Err(ValidationError::MalformedPhone);
    }

    let dob = parse_date_of_birth(form.value(FieldName::DateOfBirth).trim())
        .ok_or(ValidationError::MalformedDateOfBirth)?;
    if dob > clock.today() {
        return Err(ValidationError::FutureDateOfBirth);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MockClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today());
        clock
    }

    fn valid_form() -> UserDetailsForm {
        let mut form = UserDetailsForm::new();
        form.set_field(FieldName::Username, "alice");
        form.set_field(FieldName::Email, "alice@example.com");
        form.set_field(FieldName::Phone, "1234567890");
        form.set_field(FieldName::DateOfBirth, "2000-01-01");
        form
    }

    fn validate_with(name: FieldName, value: &str) -> Result<(), ValidationError> {
        let mut form = valid_form();
        form.set_field(name, value);
        validate(&form, &clock())
    }

    mod required {
        use super::*;

        #[test]
        fn test_valid_form_passes() {
            assert_eq!(validate(&valid_form(), &clock()), Ok(()));
        }

        #[test]
        fn test_each_empty_field_is_reported() {
            for name in FieldName::ALL {
                assert_eq!(
                    validate_with(name, ""),
                    Err(ValidationError::MissingField(name))
                );
            }
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            assert_eq!(
                validate_with(FieldName::Username, "  \t "),
                Err(ValidationError::MissingField(FieldName::Username))
            );
        }

        #[test]
        fn test_required_checks_run_in_declaration_order() {
            let form = UserDetailsForm::new();
            assert_eq!(
                validate(&form, &clock()),
                Err(ValidationError::MissingField(FieldName::Username))
            );
        }

        #[test]
        fn test_required_checks_precede_format_checks() {
            let mut form = valid_form();
            form.set_field(FieldName::Email, "not-an-email");
            form.set_field(FieldName::DateOfBirth, "");
            assert_eq!(
                validate(&form, &clock()),
                Err(ValidationError::MissingField(FieldName::DateOfBirth))
            );
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_rejects_missing_at() {
            assert_eq!(
                validate_with(FieldName::Email, "not-an-email"),
                Err(ValidationError::MalformedEmail)
            );
        }

        #[test]
        fn test_pattern() {
            assert!(is_valid_email("alice@example.com"));
            assert!(is_valid_email("a.b+c@sub.example.org"));
            assert!(!is_valid_email("alice@example"));
            assert!(!is_valid_email("@example.com"));
            assert!(!is_valid_email("alice@.com"));
            assert!(!is_valid_email("ali ce@example.com"));
            assert!(!is_valid_email("alice@@example.com"));
        }

        #[test]
        fn test_surrounding_whitespace_is_ignored() {
            assert_eq!(validate_with(FieldName::Email, " alice@example.com "), Ok(()));
        }

        #[test]
        fn test_email_checked_before_phone() {
            let mut form = valid_form();
            form.set_field(FieldName::Email, "nope");
            form.set_field(FieldName::Phone, "12");
            assert_eq!(
                validate(&form, &clock()),
                Err(ValidationError::MalformedEmail)
            );
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_too_few_digits() {
            assert_eq!(
                validate_with(FieldName::Phone, "12345"),
                Err(ValidationError::MalformedPhone)
            );
        }

        #[test]
        fn test_too_many_digits() {
            assert_eq!(
                validate_with(FieldName::Phone, "123456789012"),
                Err(ValidationError::MalformedPhone)
            );
        }

        #[test]
        fn test_punctuation_is_stripped() {
            assert_eq!(validate_with(FieldName::Phone, "123-456-7890"), Ok(()));
            assert_eq!(validate_with(FieldName::Phone, "(123) 456 7890"), Ok(()));
        }

        #[test]
        fn test_digit_count() {
            assert_eq!(digit_count("abc"), 0);
            assert_eq!(digit_count("+1 (234) 567-8901"), 11);
        }
    }

    mod date_of_birth {
        use super::*;

        #[test]
        fn test_tomorrow_is_rejected() {
            let tomorrow = today().succ_opt().unwrap().format("%Y-%m-%d").to_string();
            assert_eq!(
                validate_with(FieldName::DateOfBirth, &tomorrow),
                Err(ValidationError::FutureDateOfBirth)
            );
        }

        #[test]
        fn test_today_is_accepted() {
            let today = today().format("%Y-%m-%d").to_string();
            assert_eq!(validate_with(FieldName::DateOfBirth, &today), Ok(()));
        }

        #[test]
        fn test_unparseable_date() {
            assert_eq!(
                validate_with(FieldName::DateOfBirth, "01/01/2000"),
                Err(ValidationError::MalformedDateOfBirth)
            );
            assert_eq!(
                validate_with(FieldName::DateOfBirth, "2001-02-29"),
                Err(ValidationError::MalformedDateOfBirth)
            );
        }

        #[test]
        fn test_parse_date_of_birth() {
            assert_eq!(
                parse_date_of_birth("2000-01-01"),
                NaiveDate::from_ymd_opt(2000, 1, 1)
            );
            assert_eq!(parse_date_of_birth(""), None);
        }
    }
}
