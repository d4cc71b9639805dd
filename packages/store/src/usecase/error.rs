//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// ルーム参加のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Room is closed: {0}")]
    RoomClosed(String),

    /// The room is private and the user is not on its allowed list
    #[error("Not allowed to join private room: {0}")]
    NotAllowed(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ投稿のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostMessageError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Room is closed: {0}")]
    RoomClosed(String),

    #[error("User is not a member of room: {0}")]
    NotInRoom(String),

    #[error(transparent)]
    InvalidMessage(#[from] ValueObjectError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
