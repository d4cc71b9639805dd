//! Shared builders for integration tests.

#![allow(dead_code)]

use chat_store::{
    InMemoryChatRepository,
    domain::{
        KeyFactory, Message, MessageContent, MessageId, Room, RoomKey, RoomName, RoomRepository,
        Timestamp, User, UserId, UserName, UserRepository, UserStatus,
    },
};

/// Install the test logger once; later calls are ignored.
pub fn init_logger() {
    chat_store_shared::setup_logger("chat-store", "debug");
}

pub fn user(name: &str, status: UserStatus) -> User {
    User::new(
        KeyFactory::generate(),
        UserId::new(format!("id-{}", name.to_lowercase())).expect("valid user id"),
        UserName::new(name.to_string()).expect("valid user name"),
    )
    .with_status(status)
}

pub fn room(name: &str) -> Room {
    Room::new(
        KeyFactory::generate(),
        RoomName::new(name.to_string()).expect("valid room name"),
        Timestamp::new(0),
    )
}

pub fn message(room: RoomKey, id: &str, when: i64) -> Message {
    Message::new(
        MessageId::new(id.to_string()).expect("valid message id"),
        room,
        None,
        MessageContent::new(format!("message {id}")).expect("valid content"),
        Timestamp::new(when),
    )
}

/// Repository pre-populated with the given users and rooms
pub async fn seeded(users: &[&User], rooms: &[&Room]) -> InMemoryChatRepository {
    init_logger();
    let repo = InMemoryChatRepository::new();
    for u in users {
        repo.add_user((*u).clone()).await.expect("add user");
    }
    for r in rooms {
        repo.add_room((*r).clone()).await.expect("add room");
    }
    repo
}
