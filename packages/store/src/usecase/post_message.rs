//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 参加者チェックとメッセージ履歴への追加
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加中のルームへの投稿
//! - 異常系：存在しないルーム、未参加のルーム、閉鎖ルーム

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    Message, MessageContent, MessageIdFactory, MessageRepository, RoomRepository, Timestamp,
    UserKey,
};

use super::error::PostMessageError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    rooms: Arc<dyn RoomRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(rooms: Arc<dyn RoomRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { rooms, messages }
    }

    /// メッセージ投稿を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 保存されたメッセージ
    /// * `Err(PostMessageError)` - 投稿失敗
    pub async fn execute(
        &self,
        user: UserKey,
        room_name: &str,
        content: MessageContent,
    ) -> Result<Message, PostMessageError> {
        let room = self
            .rooms
            .get_room_by_name(room_name)
            .await
            .ok_or_else(|| PostMessageError::RoomNotFound(room_name.to_string()))?;

        if room.closed {
            return Err(PostMessageError::RoomClosed(room.name.to_string()));
        }
        if !self.rooms.is_user_in_room(&user, &room.key).await {
            return Err(PostMessageError::NotInRoom(room.name.to_string()));
        }

        let message = Message::new(
            MessageIdFactory::generate()?,
            room.key,
            Some(user),
            content,
            Timestamp::now(),
        );
        self.messages.add_message(message.clone()).await?;
        debug!(message_id = %message.id, room_name = %room.name, "message posted");

        Ok(message)
    }
}
