use async_trait::async_trait;
use tracing::{debug, warn};

use super::InMemoryChatRepository;
use crate::domain::{Client, ClientId, ClientRepository, RepositoryError, User};

#[async_trait]
impl ClientRepository for InMemoryChatRepository {
    async fn add_client(&self, client: Client) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let Some(owner) = state.user_mut(&client.user) else {
            warn!(client_id = %client.id, user_key = %client.user, "client for unknown user");
            return Err(RepositoryError::UserNotFound(client.user));
        };
        debug!(client_id = %client.id, user_key = %client.user, "client connected");
        owner.connected_clients.push(client);
        Ok(())
    }

    async fn remove_client(&self, client: &Client) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().await;
        let Some(owner) = state.user_mut(&client.user) else {
            warn!(client_id = %client.id, user_key = %client.user, "client removal for unknown user");
            return Err(RepositoryError::UserNotFound(client.user));
        };
        let before = owner.connected_clients.len();
        owner.connected_clients.retain(|c| c.id != client.id);
        let removed = owner.connected_clients.len() != before;
        if removed {
            debug!(client_id = %client.id, user_key = %client.user, "client disconnected");
        }
        Ok(removed)
    }

    async fn get_client_by_id(&self, client_id: &ClientId) -> Option<Client> {
        let state = self.state.lock().await;
        state
            .users
            .iter()
            .find_map(|u| u.get_client(client_id))
            .cloned()
    }

    async fn get_user_by_client_id(&self, client_id: &ClientId) -> Option<User> {
        let state = self.state.lock().await;
        state
            .users
            .iter()
            .find(|u| u.get_client(client_id).is_some())
            .cloned()
    }
}
