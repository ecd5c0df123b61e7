//! The contact form: field values, live validation and the submission snapshot.

pub mod fields;
pub mod validate;

use std::collections::BTreeMap;

pub use fields::{Field, FormFields};
pub use validate::{validate_field, ValidationError};

/// Active errors keyed by field. A field is present iff its value currently
/// fails its rule.
pub type ValidationErrors = BTreeMap<Field, ValidationError>;

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: ValidationErrors,
    submitted: Option<FormFields>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Snapshot of the last successful submission, if any.
    pub fn submitted(&self) -> Option<&FormFields> {
        self.submitted.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Store a new value for `field` and re-run its rule.
    pub fn on_field_change(&mut self, field: Field, value: String) {
        match validate_field(field, &value) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
        self.fields.set(field, value);
    }

    /// Validate every field. On success the current values become the
    /// submitted snapshot and a copy is returned; otherwise the snapshot is
    /// left alone and the full error set is returned.
    pub fn on_submit(&mut self) -> Result<FormFields, &ValidationErrors> {
        self.errors = Field::ALL
            .iter()
            .filter_map(|&f| validate_field(f, self.fields.get(f)).err())
            .map(|e| (e.field(), e))
            .collect();

        if !self.errors.is_empty() {
            return Err(&self.errors);
        }
        let snapshot = self.fields.clone();
        self.submitted = Some(snapshot.clone());
        Ok(snapshot)
    }
}

#[cfg(test)]
impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut ContactForm, field: Field, text: &str) {
        // One change per keystroke, like the terminal input does.
        let mut value = String::new();
        for c in text.chars() {
            value.push(c);
            form.on_field_change(field, value.clone());
        }
    }

    fn fill_valid(form: &mut ContactForm) {
        type_into(form, Field::FirstName, "Taylor");
        type_into(form, Field::LastName, "Hebert");
        type_into(form, Field::Email, "weaver@chicago.prt.gov");
    }

    #[test]
    fn test_initial_state() {
        let form = ContactForm::new();
        for f in Field::ALL {
            assert_eq!(form.value(f), "");
        }
        assert!(form.errors().is_empty());
        assert!(form.submitted().is_none());
    }

    #[test]
    fn test_short_first_name_gives_one_error() {
        for v in ["A", "Am", "Amy", "Amyy"] {
            let mut form = ContactForm::new();
            type_into(&mut form, Field::FirstName, v);
            assert_eq!(form.value(Field::FirstName), v);
            assert_eq!(form.errors().len(), 1);
            assert_eq!(
                form.error(Field::FirstName).map(|e| e.to_string()).as_deref(),
                Some("firstName must have at least 5 characters")
            );
        }
    }

    #[test]
    fn test_error_clears_once_valid() {
        let mut form = ContactForm::new();
        type_into(&mut form, Field::FirstName, "Tay");
        assert!(form.error(Field::FirstName).is_some());
        type_into(&mut form, Field::FirstName, "Taylor");
        assert!(form.error(Field::FirstName).is_none());
        form.on_field_change(Field::FirstName, "Tayl".into());
        assert!(form.error(Field::FirstName).is_some());
    }

    #[test]
    fn test_submit_empty_gives_three_errors() {
        let mut form = ContactForm::new();
        let errors = form.on_submit().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(!errors.contains_key(&Field::Message));
        assert_eq!(
            form.error(Field::LastName).unwrap().to_string(),
            "lastName is a required field"
        );
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_submit_without_email_gives_one_error() {
        let mut form = ContactForm::new();
        type_into(&mut form, Field::FirstName, "Taylor");
        type_into(&mut form, Field::LastName, "Hebert");
        let errors = form.on_submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::Email));
    }

    #[test]
    fn test_invalid_email_text() {
        let mut form = ContactForm::new();
        type_into(&mut form, Field::Email, "ajgp");
        assert_eq!(
            form.error(Field::Email).unwrap().to_string(),
            "email must be a valid email address"
        );
    }

    #[test]
    fn test_successful_submit_snapshots_fields() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        let snapshot = form.on_submit().unwrap();
        assert_eq!(snapshot.first_name, "Taylor");
        assert_eq!(snapshot.message, "");
        assert_eq!(form.submitted(), Some(&snapshot));
        // fields persist after submit
        assert_eq!(form.value(Field::Email), "weaver@chicago.prt.gov");
    }

    #[test]
    fn test_snapshot_decoupled_from_edits() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        form.on_submit().unwrap();

        form.on_field_change(Field::LastName, String::new());
        assert_eq!(form.submitted().unwrap().last_name, "Hebert");

        // failed submit leaves the snapshot alone
        assert!(form.on_submit().is_err());
        assert_eq!(form.submitted().unwrap().last_name, "Hebert");
        assert!(form.is_submitted());

        type_into(&mut form, Field::LastName, "Laborn");
        form.on_submit().unwrap();
        assert_eq!(form.submitted().unwrap().last_name, "Laborn");
    }

    #[test]
    fn test_resubmit_is_idempotent() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        type_into(&mut form, Field::Message, "Cut ties. I'm sorry.");
        let first = form.on_submit().unwrap();
        let second = form.on_submit().unwrap();
        assert_eq!(first, second);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_replaces_stale_errors() {
        let mut form = ContactForm::new();
        assert_eq!(form.on_submit().unwrap_err().len(), 3);
        assert_eq!(form.on_submit().unwrap_err().len(), 3);
        type_into(&mut form, Field::FirstName, "Taylor");
        assert_eq!(form.errors().len(), 2);
    }
}
