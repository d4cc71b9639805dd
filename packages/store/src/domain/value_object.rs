//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Maximum length of identifiers and names
const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a message body
const MAX_MESSAGE_LENGTH: usize = 10000;

/// Case-insensitive equality used by every name / id lookup in the store.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn validate_name(
    value: &str,
    empty: ValueObjectError,
    too_long: impl FnOnce(usize, usize) -> ValueObjectError,
) -> Result<(), ValueObjectError> {
    if value.is_empty() {
        return Err(empty);
    }
    let len = value.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(too_long(MAX_NAME_LENGTH, len));
    }
    Ok(())
}

/// Surrogate keys assigned to stored entities.
///
/// The store identifies entities by these keys wherever a reference to a
/// stored object would otherwise be compared (room of a message, owner of a
/// client, ...).
macro_rules! entity_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Wrap an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_key!(
    /// Key of a stored user.
    UserKey
);
entity_key!(
    /// Key of a stored room.
    RoomKey
);
entity_key!(
    /// Key of a stored identity.
    IdentityKey
);
entity_key!(
    /// Key of a stored notification.
    NotificationKey
);
entity_key!(
    /// Key of a stored attachment.
    AttachmentKey
);

/// Client identifier value object.
///
/// Represents the identifier of one client connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    /// Create a new ClientId.
    ///
    /// # Arguments
    ///
    /// * `id` - The client identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the ClientId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        validate_name(&id, ValueObjectError::ClientIdEmpty, |max, actual| {
            ValueObjectError::ClientIdTooLong { max, actual }
        })?;
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier value object.
///
/// The externally visible user id. Lookups by this id ignore case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::UserIdEmpty);
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw id.
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User display name value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName.
    ///
    /// # Errors
    ///
    /// Fails if the name is empty or longer than 100 characters
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        validate_name(&name, ValueObjectError::UserNameEmpty, |max, actual| {
            ValueObjectError::UserNameTooLong { max, actual }
        })?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw name.
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room name value object.
///
/// Room names are the lookup key for rooms and are compared ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    /// Create a new RoomName.
    ///
    /// # Errors
    ///
    /// Fails if the name is empty or longer than 100 characters
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        validate_name(&name, ValueObjectError::RoomNameEmpty, |max, actual| {
            ValueObjectError::RoomNameTooLong { max, actual }
        })?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw name.
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Create a new MessageId.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::MessageIdEmpty);
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message content value object.
///
/// Represents the content of a chat message with validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create a new MessageContent.
    ///
    /// # Arguments
    ///
    /// * `content` - The message content string
    ///
    /// # Returns
    ///
    /// A Result containing the MessageContent or an error if validation fails
    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        if content.is_empty() {
            return Err(ValueObjectError::MessageContentEmpty);
        }
        let len = content.len();
        if len > MAX_MESSAGE_LENGTH {
            return Err(ValueObjectError::MessageContentTooLong {
                max: MAX_MESSAGE_LENGTH,
                actual: len,
            });
        }
        Ok(Self(content))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self(chat_store_shared::get_jst_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// RFC 3339 rendering in JST, if representable.
    pub fn to_rfc3339(&self) -> Option<String> {
        chat_store_shared::timestamp_to_jst_rfc3339(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_new_success() {
        // テスト項目: 有効なクライアント ID を作成できる
        // given (前提条件):
        let id = "conn-1".to_string();

        // when (操作):
        let result = ClientId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "conn-1");
    }

    #[test]
    fn test_client_id_new_empty_fails() {
        // テスト項目: 空のクライアント ID は作成できない
        // when (操作):
        let result = ClientId::new(String::new());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::ClientIdEmpty);
    }

    #[test]
    fn test_client_id_new_too_long_fails() {
        // テスト項目: 101 文字以上のクライアント ID は作成できない
        // when (操作):
        let result = ClientId::new("a".repeat(101));

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::ClientIdTooLong {
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn test_user_name_matches_ignores_case() {
        // テスト項目: ユーザー名の比較は大文字小文字を区別しない
        // given (前提条件):
        let name = UserName::new("Alice".to_string()).unwrap();

        // then (期待する結果):
        assert!(name.matches("alice"));
        assert!(name.matches("ALICE"));
        assert!(!name.matches("alic"));
    }

    #[test]
    fn test_user_name_new_empty_fails() {
        // テスト項目: 空のユーザー名は作成できない
        // when (操作):
        let result = UserName::new(String::new());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::UserNameEmpty);
    }

    #[test]
    fn test_room_name_too_long_counts_chars() {
        // テスト項目: ルーム名の長さは文字数で判定される
        // given (前提条件):
        let exactly_max = "部".repeat(100);
        let over_max = "部".repeat(101);

        // then (期待する結果):
        assert!(RoomName::new(exactly_max).is_ok());
        assert_eq!(
            RoomName::new(over_max).unwrap_err(),
            ValueObjectError::RoomNameTooLong {
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn test_user_id_matches_ignores_case() {
        // テスト項目: ユーザー ID の比較は大文字小文字を区別しない
        // given (前提条件):
        let id = UserId::new("ABC-123".to_string()).unwrap();

        // then (期待する結果):
        assert!(id.matches("abc-123"));
        assert!(!id.matches("abc-124"));
    }

    #[test]
    fn test_eq_ignore_case_non_ascii() {
        // テスト項目: ASCII 以外の文字も大文字小文字を無視して比較される
        // then (期待する結果):
        assert!(eq_ignore_case("ÉCOLE", "école"));
        assert!(!eq_ignore_case("école", "ecole"));
    }

    #[test]
    fn test_contains_ignore_case() {
        // テスト項目: 部分一致検索は大文字小文字を区別しない
        // then (期待する結果):
        assert!(contains_ignore_case("Alice", "ALI"));
        assert!(contains_ignore_case("Alice", ""));
        assert!(!contains_ignore_case("Bob", "ali"));
    }

    #[test]
    fn test_message_content_new_too_long_fails() {
        // テスト項目: 10001 バイト以上のメッセージ内容は作成できない
        // when (操作):
        let result = MessageContent::new("a".repeat(10001));

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::MessageContentTooLong {
                max: 10000,
                actual: 10001
            }
        );
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert_eq!(
            Timestamp::new(0).to_rfc3339().as_deref(),
            Some("1970-01-01T09:00:00+09:00")
        );
    }

    #[test]
    fn test_entity_key_roundtrips_uuid() {
        // テスト項目: キーは UUID を保持し、同じ UUID なら等価
        // given (前提条件):
        let uuid = Uuid::new_v4();

        // then (期待する結果):
        assert_eq!(RoomKey::from_uuid(uuid), RoomKey::from(uuid));
        assert_eq!(RoomKey::from_uuid(uuid).as_uuid(), &uuid);
        assert_eq!(RoomKey::from_uuid(uuid).to_string(), uuid.to_string());
    }
}
