use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// User model
///
/// Constraints on `name` and `email` are only checked by [`Validate::validate`],
/// which repositories call when accepting records. Reads never validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique identifier, absent until one is assigned
    id: Option<i64>,
    /// Full name of the user
    #[validate(custom(
        function = "validate_not_blank",
        message = "Name is required and cannot be blank"
    ))]
    name: String,
    /// Email address of the user
    #[validate(
        custom(
            function = "validate_not_blank",
            message = "Email is required and cannot be blank"
        ),
        email(message = "Email must be a valid email address")
    )]
    email: String,
}

impl User {
    /// Build a user with an assigned identifier.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build a user that has not been assigned an identifier yet.
    pub fn unassigned(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Identifier, if one has been assigned
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the identifier
    pub const fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    /// Replace the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "User{{id={id}")?,
            None => write!(f, "User{{id=null")?,
        }
        write!(f, ", name='{}', email='{}'}}", self.name, self.email)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
