//! Core domain models for the chat application.
//!
//! Relationships between entities are expressed as keys. An entity never owns
//! another stored entity through a back-reference: `Client::user`,
//! `Identity::user` and `Message::room` point at their parent for lookup
//! only.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::value_object::{
    AttachmentKey, ClientId, IdentityKey, MessageContent, MessageId, NotificationKey, RoomKey,
    RoomName, Timestamp, UserId, UserKey, UserName,
};

/// Presence of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    #[default]
    Offline,
}

/// A chat user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store key
    pub key: UserKey,
    /// Public identifier, looked up ignoring case
    pub id: UserId,
    /// Display name, unique ignoring case
    pub name: UserName,
    pub status: UserStatus,
    /// Legacy single-provider identity
    pub identity: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
    pub afk: bool,
    pub is_admin: bool,
    pub last_activity: Timestamp,
    /// Identities linked to this user
    pub identities: Vec<IdentityKey>,
    /// Connections currently held by this user
    pub connected_clients: Vec<Client>,
    /// Rooms this user is a member of
    pub rooms: BTreeSet<RoomKey>,
}

impl User {
    /// Create a new offline user with no rooms, identities or clients
    pub fn new(key: UserKey, id: UserId, name: UserName) -> Self {
        Self {
            key,
            id,
            name,
            status: UserStatus::Offline,
            identity: None,
            email: None,
            note: None,
            afk: false,
            is_admin: false,
            last_activity: Timestamp::now(),
            identities: Vec::new(),
            connected_clients: Vec::new(),
            rooms: BTreeSet::new(),
        }
    }

    /// Set the presence status
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the legacy single-provider identity
    pub fn with_legacy_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Whether the user currently counts as online.
    ///
    /// Anything but `Offline` is online; `Inactive` users still hold a
    /// connection.
    pub fn is_online(&self) -> bool {
        self.status != UserStatus::Offline
    }

    /// Get a connected client by ID
    pub fn get_client(&self, client_id: &ClientId) -> Option<&Client> {
        self.connected_clients.iter().find(|c| &c.id == client_id)
    }
}

/// Represents a chat room with members and message history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Store key
    pub key: RoomKey,
    /// Room name, unique ignoring case
    pub name: RoomName,
    pub private: bool,
    pub closed: bool,
    pub topic: Option<String>,
    pub creator: Option<UserKey>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
    /// Users allowed into the room while it is private
    pub allowed_users: BTreeSet<UserKey>,
    /// Current members
    pub users: BTreeSet<UserKey>,
    /// Message history in insertion order
    pub messages: Vec<Message>,
}

impl Room {
    /// Create a new empty public room
    pub fn new(key: RoomKey, name: RoomName, created_at: Timestamp) -> Self {
        Self {
            key,
            name,
            private: false,
            closed: false,
            topic: None,
            creator: None,
            created_at,
            allowed_users: BTreeSet::new(),
            users: BTreeSet::new(),
            messages: Vec::new(),
        }
    }

    /// Make the room private, allowing only the given users in
    pub fn with_allowed_users(mut self, users: impl IntoIterator<Item = UserKey>) -> Self {
        self.private = true;
        self.allowed_users.extend(users);
        self
    }

    /// Whether `user` may see and join this room
    pub fn is_allowed(&self, user: &UserKey) -> bool {
        !self.private || self.allowed_users.contains(user)
    }

    /// Append a message to the room history
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Get a message by ID
    pub fn get_message(&self, message_id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == message_id)
    }
}

/// An external login linked to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub key: IdentityKey,
    pub provider_name: String,
    /// Identity string issued by the provider
    pub identity: String,
    pub email: Option<String>,
    /// Owning user
    pub user: Option<UserKey>,
}

impl Identity {
    pub fn new(
        key: IdentityKey,
        provider_name: impl Into<String>,
        identity: impl Into<String>,
        user: Option<UserKey>,
    ) -> Self {
        Self {
            key,
            provider_name: provider_name.into(),
            identity: identity.into(),
            email: None,
            user,
        }
    }

    /// Provider and identity must both match exactly
    pub fn matches(&self, provider_name: &str, identity: &str) -> bool {
        self.provider_name == provider_name && self.identity == identity
    }
}

/// One connection held by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    /// Owning user
    pub user: UserKey,
    pub user_agent: Option<String>,
    pub last_activity: Timestamp,
}

impl Client {
    pub fn new(id: ClientId, user: UserKey, last_activity: Timestamp) -> Self {
        Self {
            id,
            user,
            user_agent: None,
            last_activity,
        }
    }
}

/// Represents a chat message in the domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Room the message was posted to
    pub room: RoomKey,
    /// Sender, absent for system messages
    pub user: Option<UserKey>,
    pub content: MessageContent,
    /// Timestamp when the message was sent
    pub when: Timestamp,
    pub html_encoded: bool,
}

impl Message {
    /// Create a new chat message
    pub fn new(
        id: MessageId,
        room: RoomKey,
        user: Option<UserKey>,
        content: MessageContent,
        when: Timestamp,
    ) -> Self {
        Self {
            id,
            room,
            user,
            content,
            when,
            html_encoded: false,
        }
    }
}

/// A mention or other alert addressed to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub key: NotificationKey,
    /// Recipient
    pub user: UserKey,
    pub room: RoomKey,
    pub message: MessageId,
    pub read: bool,
}

impl Notification {
    pub fn new(key: NotificationKey, user: UserKey, room: RoomKey, message: MessageId) -> Self {
        Self {
            key,
            user,
            room,
            message,
            read: false,
        }
    }
}

/// An uploaded file shared in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub key: AttachmentKey,
    pub room: RoomKey,
    pub owner: UserKey,
    pub url: String,
    pub file_name: String,
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
    pub when: Timestamp,
}
