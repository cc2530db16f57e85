//! User: an account that writes and approves reviews.

use serde::{Deserialize, Serialize};

use crate::entity::Identifiable;
use crate::error::{CoffeeError, ValidationError};
use crate::id::UserId;

/// A registered user. `login_name` and `email_address` are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub login_name: String,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
}

impl Identifiable for User {
    type Id = UserId;
    const NAME: &'static str = "User";

    fn id(&self) -> Option<UserId> {
        self.id
    }
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::Validation`] when `login_name` is empty or
    /// `email_address` has no `@`.
    pub fn validate(&self) -> Result<(), CoffeeError> {
        if self.login_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("login_name").into());
        }
        if !self.email_address.contains('@') {
            return Err(ValidationError::InvalidEmail(self.email_address.clone()).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    login_name: Option<String>,
    email_address: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn login_name(mut self, login_name: impl Into<String>) -> Self {
        self.login_name = Some(login_name.into());
        self
    }

    #[must_use]
    pub fn email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::Validation`] if invariants fail.
    pub fn build(self) -> Result<User, CoffeeError> {
        let user = User {
            id: self.id,
            login_name: self.login_name.unwrap_or_default(),
            email_address: self.email_address.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        };
        user.validate()?;
        Ok(user)
    }
}
