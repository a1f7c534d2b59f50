//! Field validation rules for the contact form
//!
//! Every function here is pure. Failures are reported as [`ValidationError`]
//! values which the form state stores next to the offending field.

use super::forms::{Field, FormData};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length in characters
pub const PASSWORD_MIN_LEN: usize = 6;

/// Characters accepted as the password's special character
pub const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Required contact number length
pub const CONTACT_NUMBER_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// The three ways a submit can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    EmailFormat,
    #[error("Password must be at least 6 characters with 1 special character and 1 number")]
    PasswordPolicy,
    #[error("Contact number must be 10 digits long")]
    ContactNumberFormat,
}

impl ValidationError {
    /// The field this error is displayed under
    pub fn field(&self) -> Field {
        match self {
            Self::EmailFormat => Field::Email,
            Self::PasswordPolicy => Field::Password,
            Self::ContactNumberFormat => Field::ContactNumber,
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least six characters with a digit, a letter and one of `!@#$%^&*`
pub fn validate_password(password: &str) -> bool {
    if password.contains(['\n', '\r']) {
        return false;
    }

    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(&c))
        && password.chars().any(|c| c.is_ascii_alphabetic())
}

/// Exactly ten ASCII digits
pub fn validate_contact_number(number: &str) -> bool {
    number.chars().count() == CONTACT_NUMBER_LEN && number.chars().all(|c| c.is_ascii_digit())
}

/// Run every rule against the form, returning failures in field order
pub fn validate(data: &FormData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !validate_email(&data.email) {
        errors.push(ValidationError::EmailFormat);
    }
    if !validate_password(&data.password) {
        errors.push(ValidationError::PasswordPolicy);
    }
    if !validate_contact_number(&data.contact_number) {
        errors.push(ValidationError::ContactNumberFormat);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_accepts_plain_address() {
            assert!(validate_email("jane@example.com"));
            assert!(validate_email("a@b.c"));
            assert!(validate_email("first.last@sub.example.org"));
        }

        #[test]
        fn test_rejects_missing_at_or_dot() {
            for s in ["", "janeexample.com", "jane@examplecom", "plain", "@", "."] {
                assert!(!validate_email(s), "{s:?} should fail");
            }
        }

        #[test]
        fn test_rejects_whitespace() {
            assert!(!validate_email("ja ne@example.com"));
            assert!(!validate_email("jane@exa mple.com"));
            assert!(!validate_email(" jane@example.com"));
            assert!(!validate_email("jane@example.com\n"));
        }

        #[test]
        fn test_rejects_double_at() {
            assert!(!validate_email("jane@@example.com"));
            assert!(!validate_email("jane@ex@ample.com"));
        }

        #[test]
        fn test_rejects_empty_parts() {
            assert!(!validate_email("@example.com"));
            assert!(!validate_email("jane@.com"));
            assert!(!validate_email("jane@example."));
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_accepts_all_conditions() {
            assert!(validate_password("abc12!"));
            assert!(validate_password("Secr3t*pass"));
            assert!(validate_password("1a&1a&1a&"));
        }

        #[test]
        fn test_removing_any_condition_fails() {
            // too short
            assert!(!validate_password("a1!b2"));
            // no digit
            assert!(!validate_password("abcde!"));
            // no special
            assert!(!validate_password("abcde1"));
            // no letter
            assert!(!validate_password("12345!"));
        }

        #[test]
        fn test_every_special_character_counts() {
            for special in PASSWORD_SPECIALS {
                let candidate = format!("abc12{special}");
                assert!(validate_password(&candidate), "{candidate:?} should pass");
            }
        }

        #[test]
        fn test_other_punctuation_is_not_special() {
            assert!(!validate_password("abc12?"));
            assert!(!validate_password("abc12-"));
        }

        #[test]
        fn test_rejects_line_breaks() {
            assert!(!validate_password("abc\n12!"));
        }

        #[test]
        fn test_empty_fails() {
            assert!(!validate_password(""));
        }
    }

    mod contact_number {
        use super::*;

        #[test]
        fn test_ten_digits_pass() {
            assert!(validate_contact_number("1234567890"));
            assert!(validate_contact_number("0000000000"));
        }

        #[test]
        fn test_wrong_length_fails() {
            assert!(!validate_contact_number("123456789"));
            assert!(!validate_contact_number("12345678901"));
            assert!(!validate_contact_number(""));
        }

        #[test]
        fn test_non_digits_fail() {
            assert!(!validate_contact_number("12345abcde"));
            assert!(!validate_contact_number("12345 6789"));
            assert!(!validate_contact_number("-123456789"));
            assert!(!validate_contact_number("1234.56789"));
        }
    }

    mod whole_form {
        use super::*;
        use pretty_assertions::assert_eq;

        fn valid_form() -> FormData {
            FormData {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password: "abc12!".to_string(),
                address: "1 Main St".to_string(),
                contact_number: "1234567890".to_string(),
            }
        }

        #[test]
        fn test_valid_form_has_no_errors() {
            assert!(validate(&valid_form()).is_empty());
        }

        #[test]
        fn test_reports_failures_in_field_order() {
            let data = FormData::default();
            assert_eq!(
                validate(&data),
                vec![
                    ValidationError::EmailFormat,
                    ValidationError::PasswordPolicy,
                    ValidationError::ContactNumberFormat,
                ]
            );
        }

        #[test]
        fn test_name_and_address_are_not_validated() {
            let data = FormData {
                name: String::new(),
                address: String::new(),
                ..valid_form()
            };
            assert!(validate(&data).is_empty());
        }

        #[test]
        fn test_error_messages_and_fields() {
            assert_eq!(
                ValidationError::EmailFormat.to_string(),
                "Please enter a valid email address"
            );
            assert_eq!(
                ValidationError::PasswordPolicy.to_string(),
                "Password must be at least 6 characters with 1 special character and 1 number"
            );
            assert_eq!(
                ValidationError::ContactNumberFormat.to_string(),
                "Contact number must be 10 digits long"
            );
            assert_eq!(ValidationError::EmailFormat.field(), Field::Email);
            assert_eq!(ValidationError::PasswordPolicy.field(), Field::Password);
            assert_eq!(
                ValidationError::ContactNumberFormat.field(),
                Field::ContactNumber
            );
        }
    }
}
