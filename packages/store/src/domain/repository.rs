//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! Contract shared by every implementation:
//!
//! - Lookups never fail. A missing entity is `None` or an empty `Vec`.
//! - Name and id lookups ignore case.
//! - Mutations that need a registered parent (room of a message, owner of a
//!   client or identity, both sides of a membership) return
//!   `RepositoryError::{UserNotFound, RoomNotFound}` and leave the store
//!   untouched.
//! - Listings are fully materialised snapshots; calling again re-runs the query.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{
    Attachment, AttachmentKey, Client, ClientId, Identity, IdentityKey, Message, MessageId,
    Notification, NotificationKey, RepositoryError, Room, RoomKey, User, UserKey,
};

/// User Repository trait
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザーを追加
    async fn add_user(&self, user: User) -> Result<(), RepositoryError>;

    /// ユーザーを削除（削除された場合 true）
    ///
    /// Does not cascade: messages, identities and notifications stay.
    async fn remove_user(&self, user: &UserKey) -> bool;

    /// 全てのユーザーを取得
    async fn users(&self) -> Vec<User>;

    async fn get_user_by_key(&self, user: &UserKey) -> Option<User>;

    /// ID でユーザーを取得（大文字小文字を区別しない）
    async fn get_user_by_id(&self, user_id: &str) -> Option<User>;

    /// 名前でユーザーを取得（大文字小文字を区別しない）
    async fn get_user_by_name(&self, user_name: &str) -> Option<User>;

    /// Match against the single legacy identity string stored on the user
    async fn get_user_by_legacy_identity(&self, identity: &str) -> Option<User>;

    /// Match a linked identity; provider and identity must both match
    async fn get_user_by_identity(&self, provider_name: &str, identity: &str) -> Option<User>;

    /// オンラインのユーザーを取得
    async fn get_online_users(&self) -> Vec<User>;

    /// Online users whose name contains `name`, ignoring case
    async fn search_users(&self, name: &str) -> Vec<User>;
}

/// Room Repository trait
///
/// Also owns the user↔room membership relation, which is always updated on
/// both sides at once.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ルームを追加
    async fn add_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// ルームを削除（削除された場合 true）
    async fn remove_room(&self, room: &RoomKey) -> bool;

    /// 全てのルームを取得
    async fn rooms(&self) -> Vec<Room>;

    async fn get_room_by_key(&self, room: &RoomKey) -> Option<Room>;

    /// 名前でルームを取得（大文字小文字を区別しない）
    async fn get_room_by_name(&self, room_name: &str) -> Option<Room>;

    /// Public rooms plus private rooms that list `user` as allowed
    async fn get_allowed_rooms(&self, user: &UserKey) -> Vec<Room>;

    /// ルーム内のオンラインのユーザーを取得
    async fn get_online_users_in_room(&self, room: &RoomKey) -> Vec<User>;

    /// ユーザーをルームに追加（双方向）
    async fn add_user_room(&self, user: &UserKey, room: &RoomKey) -> Result<(), RepositoryError>;

    /// ユーザーをルームから削除（双方向）
    async fn remove_user_room(&self, user: &UserKey, room: &RoomKey)
    -> Result<(), RepositoryError>;

    /// ユーザーがルームに参加しているか
    async fn is_user_in_room(&self, user: &UserKey, room: &RoomKey) -> bool;
}

/// Message Repository trait
///
/// Messages live inside their room; there is no global message collection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを Room に追加
    async fn add_message(&self, message: Message) -> Result<(), RepositoryError>;

    /// Messages of one room in insertion order
    async fn get_messages_by_room(&self, room: &RoomKey) -> Vec<Message>;

    /// Every message, in any room, strictly older than `message_id`.
    ///
    /// Scans all rooms: O(total messages). Unknown ids yield an empty list.
    async fn get_previous_messages(&self, message_id: &MessageId) -> Vec<Message>;

    /// ID でメッセージを取得（全ルームを走査）
    async fn get_message_by_id(&self, message_id: &MessageId) -> Option<Message>;
}

/// Client Repository trait
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// クライアントを所有ユーザーに追加
    async fn add_client(&self, client: Client) -> Result<(), RepositoryError>;

    /// クライアントを所有ユーザーから削除（削除された場合 true）
    async fn remove_client(&self, client: &Client) -> Result<bool, RepositoryError>;

    async fn get_client_by_id(&self, client_id: &ClientId) -> Option<Client>;

    async fn get_user_by_client_id(&self, client_id: &ClientId) -> Option<User>;
}

/// Identity Repository trait
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Register an identity and link it to its owner, if it names one
    async fn add_identity(&self, identity: Identity) -> Result<(), RepositoryError>;

    /// Remove an identity and unlink it from its owner
    async fn remove_identity(&self, identity: &IdentityKey) -> bool;
}

/// Notification Repository trait
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn add_notification(&self, notification: Notification);

    async fn remove_notification(&self, notification: &NotificationKey) -> bool;

    async fn get_notification_by_id(&self, notification: &NotificationKey) -> Option<Notification>;

    /// Notifications addressed to `user`
    async fn get_notifications_by_user(&self, user: &UserKey) -> Vec<Notification>;

    async fn get_unread_notification_count(&self, user: &UserKey) -> usize;
}

/// Attachment Repository trait
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn add_attachment(&self, attachment: Attachment);

    async fn remove_attachment(&self, attachment: &AttachmentKey) -> bool;

    async fn get_attachment_by_key(&self, attachment: &AttachmentKey) -> Option<Attachment>;
}

/// The full storage contract of the chat application.
///
/// Adds the unit-of-work hooks that a durable implementation needs. Stores
/// without a backing medium implement them as no-ops, but must keep them so
/// the two kinds of store stay interchangeable.
#[async_trait]
pub trait ChatRepository:
    UserRepository
    + RoomRepository
    + MessageRepository
    + ClientRepository
    + IdentityRepository
    + NotificationRepository
    + AttachmentRepository
{
    /// Flush pending changes to the backing store
    async fn commit_changes(&self) -> Result<(), RepositoryError>;

    /// Discard cached state and re-read it from the backing store
    async fn reload(&self);

    /// Release resources held by the store
    fn dispose(&self);
}
