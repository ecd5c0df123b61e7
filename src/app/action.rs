use crate::form::FormFields;

#[derive(Debug, PartialEq)]
pub enum Action {
    /// The form passed validation; carries the submitted snapshot.
    Submitted(FormFields),
    Quit,
}
