use std::fmt;

/// One of the four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Accessible label shown on the input. Required fields carry a `*`.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    /// Field name as it appears in error texts.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Message => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}
