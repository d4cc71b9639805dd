use async_trait::async_trait;
use tracing::{debug, warn};

use super::InMemoryChatRepository;
use crate::domain::{
    RepositoryError, User, UserKey, UserRepository, value_object::contains_ignore_case,
};

#[async_trait]
impl UserRepository for InMemoryChatRepository {
    async fn add_user(&self, user: User) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        if self.config.enforce_unique_names
            && state.users.iter().any(|u| u.name.matches(user.name.as_str()))
        {
            warn!(user_name = %user.name, "rejecting duplicate user name");
            return Err(RepositoryError::DuplicateUserName(user.name.to_string()));
        }
        debug!(user_key = %user.key, user_name = %user.name, "user added");
        state.users.push(user);
        Ok(())
    }

    async fn remove_user(&self, user: &UserKey) -> bool {
        let mut state = self.state.lock().await;
        let before = state.users.len();
        state.users.retain(|u| &u.key != user);
        let removed = state.users.len() != before;
        if removed {
            debug!(user_key = %user, "user removed");
        }
        removed
    }

    async fn users(&self) -> Vec<User> {
        let state = self.state.lock().await;
        state.users.clone()
    }

    async fn get_user_by_key(&self, user: &UserKey) -> Option<User> {
        let state = self.state.lock().await;
        state.user(user).cloned()
    }

    async fn get_user_by_id(&self, user_id: &str) -> Option<User> {
        let state = self.state.lock().await;
        state.users.iter().find(|u| u.id.matches(user_id)).cloned()
    }

    async fn get_user_by_name(&self, user_name: &str) -> Option<User> {
        let state = self.state.lock().await;
        state
            .users
            .iter()
            .find(|u| u.name.matches(user_name))
            .cloned()
    }

    async fn get_user_by_legacy_identity(&self, identity: &str) -> Option<User> {
        let state = self.state.lock().await;
        state
            .users
            .iter()
            .find(|u| u.identity.as_deref() == Some(identity))
            .cloned()
    }

    async fn get_user_by_identity(&self, provider_name: &str, identity: &str) -> Option<User> {
        let state = self.state.lock().await;
        state
            .users
            .iter()
            .find(|u| {
                u.identities.iter().any(|key| {
                    state
                        .identity(key)
                        .is_some_and(|i| i.matches(provider_name, identity))
                })
            })
            .cloned()
    }

    async fn get_online_users(&self) -> Vec<User> {
        let state = self.state.lock().await;
        state
            .users
            .iter()
            .filter(|u| u.is_online())
            .cloned()
            .collect()
    }

    async fn search_users(&self, name: &str) -> Vec<User> {
        let state = self.state.lock().await;
        state
            .users
            .iter()
            .filter(|u| u.is_online() && contains_ignore_case(u.name.as_str(), name))
            .cloned()
            .collect()
    }
}
