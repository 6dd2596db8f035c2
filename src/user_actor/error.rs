//! Error types for the User actor.

use crate::model::FieldViolation;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No user matches the id under the operation's activity filter.
    #[error("User with ID {0} not found")]
    NotFound(u64),

    /// Another user already holds this email (case-insensitive).
    #[error("A user with email {0} already exists")]
    AlreadyExists(String),

    /// One or more input fields broke their constraints.
    #[error("User validation error: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
