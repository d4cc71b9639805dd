use async_trait::async_trait;
use tracing::debug;

use super::InMemoryChatRepository;
use crate::domain::{Notification, NotificationKey, NotificationRepository, UserKey};

#[async_trait]
impl NotificationRepository for InMemoryChatRepository {
    async fn add_notification(&self, notification: Notification) {
        let mut state = self.state.lock().await;
        debug!(
            notification_key = %notification.key,
            user_key = %notification.user,
            "notification added"
        );
        state.notifications.push(notification);
    }

    async fn remove_notification(&self, notification: &NotificationKey) -> bool {
        let mut state = self.state.lock().await;
        let before = state.notifications.len();
        state.notifications.retain(|n| &n.key != notification);
        state.notifications.len() != before
    }

    async fn get_notification_by_id(&self, notification: &NotificationKey) -> Option<Notification> {
        let state = self.state.lock().await;
        state
            .notifications
            .iter()
            .find(|n| &n.key == notification)
            .cloned()
    }

    async fn get_notifications_by_user(&self, user: &UserKey) -> Vec<Notification> {
        let state = self.state.lock().await;
        state
            .notifications
            .iter()
            .filter(|n| &n.user == user)
            .cloned()
            .collect()
    }

    async fn get_unread_notification_count(&self, user: &UserKey) -> usize {
        let state = self.state.lock().await;
        state
            .notifications
            .iter()
            .filter(|n| &n.user == user && !n.read)
            .count()
    }
}
