//! Validation rules for the contact form.
//!
//! A single validator, [`validate_field`], is shared by live validation on
//! every change and by the full pass on submit.

use super::fields::Field;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum number of characters for the first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// `local@domain.tld`
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// A field value violating its rule. The variant names the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is a required field")]
    Required(Field),
    #[error("{0} must have at least {1} characters")]
    MinLength(Field, usize),
    #[error("{0} must be a valid email address")]
    Format(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::Required(f)
            | ValidationError::MinLength(f, _)
            | ValidationError::Format(f) => f,
        }
    }
}

/// Check `value` against the rule for `field`.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::FirstName => {
            if value.chars().count() < FIRST_NAME_MIN_LEN {
                return Err(ValidationError::MinLength(field, FIRST_NAME_MIN_LEN));
            }
        }
        Field::LastName => {
            if value.is_empty() {
                return Err(ValidationError::Required(field));
            }
        }
        Field::Email => {
            if value.is_empty() {
                return Err(ValidationError::Required(field));
            }
            if !EMAIL_REGEX.is_match(value) {
                return Err(ValidationError::Format(field));
            }
        }
        Field::Message => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_min_length() {
        for v in ["", "A", "Amy", "Abcd"] {
            let err = validate_field(Field::FirstName, v).unwrap_err();
            assert_eq!(err.to_string(), "firstName must have at least 5 characters");
            assert_eq!(err, ValidationError::MinLength(Field::FirstName, 5));
        }
        assert!(validate_field(Field::FirstName, "Taylor").is_ok());
        assert!(validate_field(Field::FirstName, "Amber").is_ok());
    }

    #[test]
    fn test_first_name_counts_chars_not_bytes() {
        // 4 characters, 6 bytes
        assert!(validate_field(Field::FirstName, "Åsaø").is_err());
        assert!(validate_field(Field::FirstName, "Zoë Ö").is_ok());
    }

    #[test]
    fn test_last_name_required() {
        let err = validate_field(Field::LastName, "").unwrap_err();
        assert_eq!(err.to_string(), "lastName is a required field");
        assert_eq!(err.field(), Field::LastName);
        assert!(validate_field(Field::LastName, "H").is_ok());
    }

    #[test]
    fn test_email() {
        assert_eq!(
            validate_field(Field::Email, "").unwrap_err().to_string(),
            "email is a required field"
        );
        for bad in ["ajgp", "ajgp@", "@chicago.gov", "weaver@chicago", "a b@c.de"] {
            let err = validate_field(Field::Email, bad).unwrap_err();
            assert_eq!(err.to_string(), "email must be a valid email address", "{bad}");
        }
        for good in ["weaver@chicago.prt.gov", "a.b+c@example.io", "x@y.co"] {
            assert!(validate_field(Field::Email, good).is_ok(), "{good}");
        }
    }

    #[test]
    fn test_message_always_valid() {
        assert!(validate_field(Field::Message, "").is_ok());
        assert!(validate_field(Field::Message, "Cut ties. I'm sorry.").is_ok());
    }
}
