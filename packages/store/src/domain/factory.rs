//! Domain factories for creating keys and identifiers.

use uuid::Uuid;

use super::{MessageId, error::ValueObjectError};

/// Factory for generating entity keys.
///
/// This factory encapsulates the logic for generating new store keys,
/// separating the generation concern from the key types themselves.
pub struct KeyFactory;

impl KeyFactory {
    /// Generate a new key backed by a random UUID v4.
    pub fn generate<K: From<Uuid>>() -> K {
        K::from(Uuid::new_v4())
    }
}

/// Factory for generating MessageId instances.
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// Generate a new MessageId with a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate() -> Result<MessageId, ValueObjectError> {
        MessageId::new(Uuid::new_v4().to_string())
    }
}
