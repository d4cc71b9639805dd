use async_trait::async_trait;
use tracing::{debug, warn};

use super::InMemoryChatRepository;
use crate::domain::{Identity, IdentityKey, IdentityRepository, RepositoryError};

#[async_trait]
impl IdentityRepository for InMemoryChatRepository {
    async fn add_identity(&self, identity: Identity) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        match identity.user {
            Some(owner_key) => {
                let Some(owner) = state.user_mut(&owner_key) else {
                    warn!(identity_key = %identity.key, user_key = %owner_key, "identity for unknown user");
                    return Err(RepositoryError::UserNotFound(owner_key));
                };
                owner.identities.push(identity.key);
                debug!(identity_key = %identity.key, user_key = %owner_key, "identity linked");
            }
            None => {
                debug!(identity_key = %identity.key, "identity added without owner");
            }
        }
        state.identities.push(identity);
        Ok(())
    }

    async fn remove_identity(&self, identity: &IdentityKey) -> bool {
        let mut state = self.state.lock().await;
        let Some(position) = state.identities.iter().position(|i| &i.key == identity) else {
            return false;
        };
        let removed = state.identities.remove(position);
        if let Some(owner_key) = removed.user
            && let Some(owner) = state.user_mut(&owner_key)
        {
            owner.identities.retain(|k| k != identity);
        }
        debug!(identity_key = %identity, "identity removed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::user;
    use super::*;
    use crate::domain::{KeyFactory, UserRepository, UserStatus};

    #[tokio::test]
    async fn test_add_identity_links_owner() {
        // テスト項目: 所有ユーザーを持つ identity はユーザーの identity 一覧にも追加される
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let alice = user("Alice", UserStatus::Active);
        repo.add_user(alice.clone()).await.unwrap();
        let identity = Identity::new(KeyFactory::generate(), "github", "octocat", Some(alice.key));

        // when (操作):
        let result = repo.add_identity(identity.clone()).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let stored = repo.get_user_by_key(&alice.key).await.unwrap();
        assert_eq!(stored.identities, vec![identity.key]);
    }

    #[tokio::test]
    async fn test_add_identity_without_owner() {
        // テスト項目: 所有ユーザーのない identity はコレクションにのみ追加される
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let identity = Identity::new(KeyFactory::generate(), "github", "octocat", None);

        // when (操作):
        let result = repo.add_identity(identity.clone()).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(repo.get_user_by_identity("github", "octocat").await.is_none());
        assert!(repo.remove_identity(&identity.key).await);
    }

    #[tokio::test]
    async fn test_add_identity_unknown_owner_fails() {
        // テスト項目: 未登録ユーザーを所有者とする identity は追加されない
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let ghost = user("Ghost", UserStatus::Active);
        let identity = Identity::new(KeyFactory::generate(), "github", "ghost", Some(ghost.key));

        // when (操作):
        let result = repo.add_identity(identity.clone()).await;

        // then (期待する結果):
        assert_eq!(result, Err(RepositoryError::UserNotFound(ghost.key)));
        assert!(!repo.remove_identity(&identity.key).await);
    }

    #[tokio::test]
    async fn test_remove_identity_unlinks_owner() {
        // テスト項目: identity を削除すると所有ユーザーからもリンクが外れる
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let alice = user("Alice", UserStatus::Active);
        repo.add_user(alice.clone()).await.unwrap();
        let identity = Identity::new(KeyFactory::generate(), "github", "octocat", Some(alice.key));
        repo.add_identity(identity.clone()).await.unwrap();

        // when (操作):
        let removed = repo.remove_identity(&identity.key).await;

        // then (期待する結果):
        assert!(removed);
        assert!(repo.get_user_by_identity("github", "octocat").await.is_none());
        assert!(
            repo.get_user_by_key(&alice.key)
                .await
                .unwrap()
                .identities
                .is_empty()
        );
    }
}
