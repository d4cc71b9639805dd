use async_trait::async_trait;
use tracing::{debug, warn};

use super::InMemoryChatRepository;
use crate::domain::{Message, MessageId, MessageRepository, RepositoryError, RoomKey};

#[async_trait]
impl MessageRepository for InMemoryChatRepository {
    async fn add_message(&self, message: Message) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let Some(room) = state.room_mut(&message.room) else {
            warn!(room_key = %message.room, message_id = %message.id, "message for unknown room");
            return Err(RepositoryError::RoomNotFound(message.room));
        };
        debug!(room_key = %message.room, message_id = %message.id, "message added");
        room.add_message(message);
        Ok(())
    }

    async fn get_messages_by_room(&self, room: &RoomKey) -> Vec<Message> {
        let state = self.state.lock().await;
        state
            .room(room)
            .map(|r| r.messages.clone())
            .unwrap_or_default()
    }

    async fn get_previous_messages(&self, message_id: &MessageId) -> Vec<Message> {
        let state = self.state.lock().await;
        let rooms = &state.rooms;
        let all_messages = || rooms.iter().flat_map(|r| r.messages.iter());

        let Some(reference) = all_messages().find(|m| &m.id == message_id) else {
            return Vec::new();
        };
        let before = reference.when;

        all_messages()
            .filter(|m| m.when < before)
            .cloned()
            .collect()
    }

    async fn get_message_by_id(&self, message_id: &MessageId) -> Option<Message> {
        let state = self.state.lock().await;
        state
            .rooms
            .iter()
            .find_map(|r| r.get_message(message_id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{message, room};
    use super::*;
    use crate::domain::RoomRepository;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - メッセージはルームの中にのみ保存され、ルームごとの追加順が保たれること
    // - 全ルームを横断した過去メッセージ検索 / ID 検索
    // - 未登録ルームへの投稿が明示的なエラーになること
    // ========================================

    fn ids(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_get_messages_by_room_keeps_insertion_order() {
        // テスト項目: ルームのメッセージは追加順で返され、他ルームの追加順に影響されない
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let a = room("a");
        let b = room("b");
        repo.add_room(a.clone()).await.unwrap();
        repo.add_room(b.clone()).await.unwrap();

        // when (操作): タイムスタンプとは逆順に、ルームを交互に追加
        repo.add_message(message(a.key, "a1", 30)).await.unwrap();
        repo.add_message(message(b.key, "b1", 5)).await.unwrap();
        repo.add_message(message(a.key, "a2", 10)).await.unwrap();
        repo.add_message(message(b.key, "b2", 1)).await.unwrap();
        repo.add_message(message(a.key, "a3", 20)).await.unwrap();

        // then (期待する結果):
        assert_eq!(
            ids(&repo.get_messages_by_room(&a.key).await),
            vec!["a1", "a2", "a3"]
        );
        assert_eq!(
            ids(&repo.get_messages_by_room(&b.key).await),
            vec!["b1", "b2"]
        );
    }

    #[tokio::test]
    async fn test_add_message_unknown_room_fails() {
        // テスト項目: 未登録のルームへのメッセージ追加は RoomNotFound になる
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let ghost = room("ghost");

        // when (操作):
        let result = repo.add_message(message(ghost.key, "m1", 1)).await;

        // then (期待する結果):
        assert_eq!(result, Err(RepositoryError::RoomNotFound(ghost.key)));
        assert!(
            repo.get_message_by_id(&MessageId::new("m1".to_string()).unwrap())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_get_previous_messages_spans_all_rooms() {
        // テスト項目: 基準メッセージより厳密に古いメッセージが全ルームから返される
        // given (前提条件): M1(t=1, A), M2(t=2, B), M3(t=3, A)
        let repo = InMemoryChatRepository::new();
        let a = room("a");
        let b = room("b");
        repo.add_room(a.clone()).await.unwrap();
        repo.add_room(b.clone()).await.unwrap();
        repo.add_message(message(a.key, "m1", 1)).await.unwrap();
        repo.add_message(message(b.key, "m2", 2)).await.unwrap();
        repo.add_message(message(a.key, "m3", 3)).await.unwrap();

        // when (操作):
        let previous = repo
            .get_previous_messages(&MessageId::new("m3".to_string()).unwrap())
            .await;

        // then (期待する結果):
        let mut found = ids(&previous);
        found.sort_unstable();
        assert_eq!(found, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_get_previous_messages_excludes_equal_timestamps() {
        // テスト項目: 同じタイムスタンプのメッセージ（基準自身を含む）は含まれない
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let a = room("a");
        repo.add_room(a.clone()).await.unwrap();
        repo.add_message(message(a.key, "m1", 5)).await.unwrap();
        repo.add_message(message(a.key, "m2", 5)).await.unwrap();

        // when (操作):
        let previous = repo
            .get_previous_messages(&MessageId::new("m2".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert!(previous.is_empty());
    }

    #[tokio::test]
    async fn test_get_previous_messages_unknown_id_is_empty() {
        // テスト項目: 存在しない ID を基準にすると空のリストが返される
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let a = room("a");
        repo.add_room(a.clone()).await.unwrap();
        repo.add_message(message(a.key, "m1", 1)).await.unwrap();

        // when (操作):
        let previous = repo
            .get_previous_messages(&MessageId::new("missing".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert!(previous.is_empty());
    }

    #[tokio::test]
    async fn test_get_message_by_id_searches_every_room() {
        // テスト項目: ID によるメッセージ検索は全ルームを対象とする
        // given (前提条件):
        let repo = InMemoryChatRepository::new();
        let a = room("a");
        let b = room("b");
        repo.add_room(a.clone()).await.unwrap();
        repo.add_room(b.clone()).await.unwrap();
        repo.add_message(message(a.key, "m1", 1)).await.unwrap();
        repo.add_message(message(b.key, "m2", 2)).await.unwrap();

        // when (操作):
        let found = repo
            .get_message_by_id(&MessageId::new("m2".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert_eq!(found.map(|m| m.room), Some(b.key));
    }

    #[tokio::test]
    async fn test_get_messages_by_unknown_room_is_empty() {
        // テスト項目: 未登録ルームのメッセージ一覧は空
        // given (前提条件):
        let repo = InMemoryChatRepository::new();

        // then (期待する結果):
        assert!(
            repo.get_messages_by_room(&room("ghost").key)
                .await
                .is_empty()
        );
    }
}
