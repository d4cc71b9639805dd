//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{RoomKey, UserKey};

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ClientId validation error
    #[error("ClientId cannot be empty")]
    ClientIdEmpty,

    /// ClientId too long error
    #[error("ClientId cannot exceed {max} characters (got {actual})")]
    ClientIdTooLong { max: usize, actual: usize },

    #[error("UserId cannot be empty")]
    UserIdEmpty,

    #[error("UserName cannot be empty")]
    UserNameEmpty,

    #[error("UserName cannot exceed {max} characters (got {actual})")]
    UserNameTooLong { max: usize, actual: usize },

    #[error("RoomName cannot be empty")]
    RoomNameEmpty,

    #[error("RoomName cannot exceed {max} characters (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },

    #[error("MessageId cannot be empty")]
    MessageIdEmpty,

    /// MessageContent validation error
    #[error("MessageContent cannot be empty")]
    MessageContentEmpty,

    /// MessageContent too long error
    #[error("MessageContent cannot exceed {max} characters (got {actual})")]
    MessageContentTooLong { max: usize, actual: usize },
}

/// Errors reported by repository mutations.
///
/// Queries never fail with "not found"; they return `None` or an empty list.
/// These variants are for mutations whose referenced parent entity is not
/// registered, and for name collisions when uniqueness is enforced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The user a client, identity or membership refers to is not registered
    #[error("User not found: {0}")]
    UserNotFound(UserKey),

    /// The room a message or membership refers to is not registered
    #[error("Room not found: {0}")]
    RoomNotFound(RoomKey),

    #[error("User name already taken: {0}")]
    DuplicateUserName(String),

    #[error("Room name already taken: {0}")]
    DuplicateRoomName(String),
}
