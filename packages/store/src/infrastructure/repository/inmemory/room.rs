use async_trait::async_trait;
use tracing::{debug, warn};

use super::{InMemoryChatRepository, StoreState};
use crate::{
    config::MembershipMatch,
    domain::{RepositoryError, Room, RoomKey, RoomRepository, User, UserKey},
};

impl InMemoryChatRepository {
    /// Resolve both sides of a membership, or report which one is missing.
    ///
    /// Both lookups happen before the caller mutates anything.
    fn membership_sides<'a>(
        state: &'a mut StoreState,
        user: &UserKey,
        room: &RoomKey,
    ) -> Result<(&'a mut User, &'a mut Room), RepositoryError> {
        let StoreState { users, rooms, .. } = state;
        let Some(user_entry) = users.iter_mut().find(|u| &u.key == user) else {
            warn!(user_key = %user, room_key = %room, "membership change for unknown user");
            return Err(RepositoryError::UserNotFound(*user));
        };
        let Some(room_entry) = rooms.iter_mut().find(|r| &r.key == room) else {
            warn!(user_key = %user, room_key = %room, "membership change for unknown room");
            return Err(RepositoryError::RoomNotFound(*room));
        };
        Ok((user_entry, room_entry))
    }
}

#[async_trait]
impl RoomRepository for InMemoryChatRepository {
    async fn add_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        if self.config.enforce_unique_names
            && state.rooms.iter().any(|r| r.name.matches(room.name.as_str()))
        {
            warn!(room_name = %room.name, "rejecting duplicate room name");
            return Err(RepositoryError::DuplicateRoomName(room.name.to_string()));
        }
        debug!(room_key = %room.key, room_name = %room.name, "room added");
        state.rooms.push(room);
        Ok(())
    }

    async fn remove_room(&self, room: &RoomKey) -> bool {
        let mut state = self.state.lock().await;
        let before = state.rooms.len();
        state.rooms.retain(|r| &r.key != room);
        let removed = state.rooms.len() != before;
        if removed {
            debug!(room_key = %room, "room removed");
        }
        removed
    }

    async fn rooms(&self) -> Vec<Room> {
        let state = self.state.lock().await;
        state.rooms.clone()
    }

    async fn get_room_by_key(&self, room: &RoomKey) -> Option<Room> {
        let state = self.state.lock().await;
        state.room(room).cloned()
    }

    async fn get_room_by_name(&self, room_name: &str) -> Option<Room> {
        let state = self.state.lock().await;
        state
            .rooms
            .iter()
            .find(|r| r.name.matches(room_name))
            .cloned()
    }

    async fn get_allowed_rooms(&self, user: &UserKey) -> Vec<Room> {
        let state = self.state.lock().await;
        state
            .rooms
            .iter()
            .filter(|r| r.is_allowed(user))
            .cloned()
            .collect()
    }

    async fn get_online_users_in_room(&self, room: &RoomKey) -> Vec<User> {
        let state = self.state.lock().await;
        let Some(room) = state.room(room) else {
            return Vec::new();
        };
        state
            .users
            .iter()
            .filter(|u| u.is_online() && room.users.contains(&u.key))
            .cloned()
            .collect()
    }

    async fn add_user_room(&self, user: &UserKey, room: &RoomKey) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let (user_entry, room_entry) = Self::membership_sides(&mut state, user, room)?;
        user_entry.rooms.insert(*room);
        room_entry.users.insert(*user);
        debug!(user_key = %user, room_key = %room, "user joined room");
        Ok(())
    }

    async fn remove_user_room(
        &self,
        user: &UserKey,
        room: &RoomKey,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let (user_entry, room_entry) = Self::membership_sides(&mut state, user, room)?;
        user_entry.rooms.remove(room);
        room_entry.users.remove(user);
        debug!(user_key = %user, room_key = %room, "user left room");
        Ok(())
    }

    async fn is_user_in_room(&self, user: &UserKey, room: &RoomKey) -> bool {
        let state = self.state.lock().await;
        let Some(room) = state.room(room) else {
            return false;
        };
        match self.config.membership_match {
            MembershipMatch::Key => room.users.contains(user),
            MembershipMatch::Name => {
                let Some(user) = state.user(user) else {
                    return false;
                };
                room.users
                    .iter()
                    .filter_map(|member| state.user(member))
                    .any(|member| member.name.as_str() == user.name.as_str())
            }
        }
    }
}
