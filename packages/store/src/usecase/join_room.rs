//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 閉鎖ルーム・非公開ルームの入室チェック
//!
//! ### どのような状況を想定しているか
//! - 正常系：公開ルームへの参加
//! - 正常系：既に参加済み（何もしない）
//! - 異常系：存在しないルーム、閉鎖ルーム、許可されていない非公開ルーム

use std::sync::Arc;

use tracing::info;

use crate::domain::{RoomRepository, UserKey};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 新たに参加した
    /// * `Ok(false)` - 既に参加済みだった
    /// * `Err(JoinRoomError)` - 参加失敗
    pub async fn execute(&self, user: UserKey, room_name: &str) -> Result<bool, JoinRoomError> {
        // 1. ルームを名前で検索
        let room = self
            .repository
            .get_room_by_name(room_name)
            .await
            .ok_or_else(|| JoinRoomError::RoomNotFound(room_name.to_string()))?;

        // 2. 入室チェック
        if room.closed {
            return Err(JoinRoomError::RoomClosed(room.name.to_string()));
        }
        if !room.is_allowed(&user) {
            return Err(JoinRoomError::NotAllowed(room.name.to_string()));
        }

        // 3. 参加済みなら何もしない
        if self.repository.is_user_in_room(&user, &room.key).await {
            return Ok(false);
        }

        // 4. 双方向の参加関係を追加
        self.repository.add_user_room(&user, &room.key).await?;
        info!(user_key = %user, room_name = %room.name, "user joined room");
        Ok(true)
    }
}
