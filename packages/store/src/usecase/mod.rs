//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! Repository trait（ドメイン層）を通じてデータを操作します。

pub mod error;
pub mod join_room;
pub mod post_message;

pub use error::{JoinRoomError, PostMessageError};
pub use join_room::JoinRoomUseCase;
pub use post_message::PostMessageUseCase;
