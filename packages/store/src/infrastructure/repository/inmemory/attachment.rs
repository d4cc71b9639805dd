use async_trait::async_trait;
use tracing::debug;

use super::InMemoryChatRepository;
use crate::domain::{Attachment, AttachmentKey, AttachmentRepository};

#[async_trait]
impl AttachmentRepository for InMemoryChatRepository {
    async fn add_attachment(&self, attachment: Attachment) {
        let mut state = self.state.lock().await;
        debug!(
            attachment_key = %attachment.key,
            file_name = %attachment.file_name,
            "attachment added"
        );
        state.attachments.push(attachment);
    }

    async fn remove_attachment(&self, attachment: &AttachmentKey) -> bool {
        let mut state = self.state.lock().await;
        let before = state.attachments.len();
        state.attachments.retain(|a| &a.key != attachment);
        state.attachments.len() != before
    }

    async fn get_attachment_by_key(&self, attachment: &AttachmentKey) -> Option<Attachment> {
        let state = self.state.lock().await;
        state
            .attachments
            .iter()
            .find(|a| &a.key == attachment)
            .cloned()
    }
}
