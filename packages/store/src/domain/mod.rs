//! Domain layer for the chat application.
//!
//! This module contains the entity model and the repository contracts.
//! It is independent of how (and whether) entities are persisted.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{Attachment, Client, Identity, Message, Notification, Room, User, UserStatus};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{KeyFactory, MessageIdFactory};
pub use repository::{
    AttachmentRepository, ChatRepository, ClientRepository, IdentityRepository,
    MessageRepository, NotificationRepository, RoomRepository, UserRepository,
};
pub use value_object::{
    AttachmentKey, ClientId, IdentityKey, MessageContent, MessageId, NotificationKey, RoomKey,
    RoomName, Timestamp, UserId, UserKey, UserName,
};

#[cfg(test)]
pub use repository::{
    MockAttachmentRepository, MockClientRepository, MockIdentityRepository,
    MockMessageRepository, MockNotificationRepository, MockRoomRepository, MockUserRepository,
};
