//! In-memory data-access layer for a chat application.
//!
//! Users, rooms, messages, identities, client connections, notifications and
//! attachments are held in memory behind the repository traits in
//! [`domain::repository`]. Nothing is persisted; [`InMemoryChatRepository`]
//! is a volatile stand-in for a durable store and honours the same contract.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use config::{MembershipMatch, StoreConfig};
pub use domain::{ChatRepository, RepositoryError};
pub use infrastructure::repository::InMemoryChatRepository;
