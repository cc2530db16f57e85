//! Error taxonomy shared across the workspace.
//!
//! Each failure kind is its own typed error and converts into
//! [`CoffeeError`] via `#[from]`. Adapters wrap their own errors into
//! [`CoffeeError::Storage`].

use std::fmt;

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum CoffeeError {
    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A write would violate a uniqueness constraint.
    #[error(transparent)]
    Duplication(#[from] DuplicationError),

    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The persistence layer failed for a reason unrelated to the data.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// No record of type `entity` has `field` equal to `value`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with {field} '{value}' does not exist")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub field: &'static str,
    pub value: String,
}

impl NotFoundError {
    /// Build the error for a lookup by identifier.
    #[must_use]
    pub fn by_id(entity: &'static str, id: impl fmt::Display) -> Self {
        Self {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }
}

/// Another record of type `entity` already has `field` equal to `value`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with {field} '{value}' already exists")]
pub struct DuplicationError {
    pub entity: &'static str,
    pub field: String,
    pub value: String,
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("email address '{0}' is malformed")]
    InvalidEmail(String),

    #[error("a new {0} must not carry an id")]
    IdAlreadySet(&'static str),

    #[error("users may not approve their own reviews")]
    SelfApproval,

    #[error("approval minimum count must be greater than zero")]
    ZeroApprovalCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_entity_field_and_value_when_not_found() {
        let err = NotFoundError::by_id("Review", 102);
        assert_eq!(err.to_string(), "Review with id '102' does not exist");
    }

    #[test]
    fn should_keep_message_when_wrapped_transparently() {
        let err: CoffeeError = DuplicationError {
            entity: "User",
            field: "login_name".to_string(),
            value: "jane".to_string(),
        }
        .into();
        assert!(matches!(err, CoffeeError::Duplication(_)));
        assert_eq!(err.to_string(), "User with login_name 'jane' already exists");
    }

    #[test]
    fn should_expose_validation_source() {
        let err: CoffeeError = ValidationError::SelfApproval.into();
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("users may not approve their own reviews")
        );
    }
}
