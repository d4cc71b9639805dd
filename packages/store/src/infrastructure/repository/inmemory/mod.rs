//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する Repository trait 群の具体的な実装。
//! `Vec` をインメモリ DB として使用します。
//!
//! All collections live in a single [`StoreState`] behind one
//! `tokio::sync::Mutex`. Every operation takes the lock exactly once, so
//! two-sided updates (user↔room membership, identity linking) are never
//! observed half-applied. Queries are linear scans; there are no secondary
//! indexes.
//!
//! Each aggregate's trait implementation lives in its own submodule.

mod attachment;
mod client;
mod identity;
mod message;
mod notification;
mod room;
mod user;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::trace;

use crate::{
    config::StoreConfig,
    domain::{
        Attachment, ChatRepository, Identity, IdentityKey, Notification, RepositoryError, Room,
        RoomKey, User, UserKey,
    },
};

/// Canonical collections of the store
#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    rooms: Vec<Room>,
    identities: Vec<Identity>,
    attachments: Vec<Attachment>,
    notifications: Vec<Notification>,
}

impl StoreState {
    fn user(&self, key: &UserKey) -> Option<&User> {
        self.users.iter().find(|u| &u.key == key)
    }

    fn user_mut(&mut self, key: &UserKey) -> Option<&mut User> {
        self.users.iter_mut().find(|u| &u.key == key)
    }

    fn room(&self, key: &RoomKey) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.key == key)
    }

    fn room_mut(&mut self, key: &RoomKey) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| &r.key == key)
    }

    fn identity(&self, key: &IdentityKey) -> Option<&Identity> {
        self.identities.iter().find(|i| &i.key == key)
    }
}

/// インメモリ Chat Repository 実装
///
/// Volatile stand-in for a durable store: nothing survives the process.
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatRepository {
    state: Arc<Mutex<StoreState>>,
    config: StoreConfig,
}

impl InMemoryChatRepository {
    /// 新しい空の InMemoryChatRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository with explicit settings
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            state: Arc::default(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    /// No backing store; nothing to flush.
    async fn commit_changes(&self) -> Result<(), RepositoryError> {
        trace!("commit_changes: no-op for in-memory store");
        Ok(())
    }

    /// No backing store; the in-memory state is already authoritative.
    async fn reload(&self) {
        trace!("reload: no-op for in-memory store");
    }

    /// Nothing to release; state is dropped with the last clone.
    fn dispose(&self) {
        trace!("dispose: no-op for in-memory store");
    }
}
