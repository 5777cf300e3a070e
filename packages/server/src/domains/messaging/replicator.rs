//! Message replicator - best-effort mirroring of chat messages into the
//! real-time store.
//!
//! The primary relational store is authoritative; a mirror failure is
//! logged and swallowed, never rolled back or retried. Mirror entries are
//! keyed by the primary message id, so replaying a write overwrites the
//! existing entry instead of duplicating it, and they carry the message's
//! `sent_at` as the ordering key so replays cannot reorder a conversation's
//! visible history.
//!
//! Mirror layout, denormalized so each participant resolves the thread
//! under their own id:
//!
//! ```text
//! threads/{user}/{peer}/{message_id} = { message_id, conversation_id,
//!     sender_id, recipient_id, content, sent_at, is_read }
//! ```
//!
//! Reconciliation is an operational concern: `mirror_payload` and
//! `mirror_paths` are deterministic, so an external job can re-push any
//! primary row.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::common::{DomainError, UserId};
use crate::domains::messaging::models::Message;
use crate::kernel::BaseMirrorStore;

#[derive(Clone)]
pub struct MessageReplicator {
    mirror: Arc<dyn BaseMirrorStore>,
}

impl MessageReplicator {
    pub fn new(mirror: Arc<dyn BaseMirrorStore>) -> Self {
        Self { mirror }
    }

    /// The two mirror paths for a message, one per participant.
    pub fn mirror_paths(message: &Message, recipient: UserId) -> [String; 2] {
        [
            format!(
                "threads/{}/{}/{}",
                message.sender_id, recipient, message.id
            ),
            format!(
                "threads/{}/{}/{}",
                recipient, message.sender_id, message.id
            ),
        ]
    }

    /// The denormalized mirror entry for a message. Deterministic over the
    /// primary row.
    pub fn mirror_payload(message: &Message, recipient: UserId) -> serde_json::Value {
        json!({
            "message_id": message.id,
            "conversation_id": message.conversation_id,
            "sender_id": message.sender_id,
            "recipient_id": recipient,
            "content": message.content,
            "sent_at": message.sent_at.to_rfc3339(),
            "is_read": message.is_read,
        })
    }

    /// Mirror a freshly committed message. Best-effort.
    pub async fn replicate_send(&self, message: &Message, recipient: UserId) {
        let payload = Self::mirror_payload(message, recipient);
        for path in Self::mirror_paths(message, recipient) {
            if let Err(e) = self.mirror.set(&path, payload.clone()).await {
                let err = DomainError::UpstreamUnavailable(format!("{e:#}"));
                warn!(
                    message_id = %message.id,
                    path = %path,
                    "Mirror write failed (primary store is authoritative): {err}"
                );
            }
        }
    }

    /// Propagate read state to both mirror entries. Best-effort.
    pub async fn replicate_read(&self, message: &Message, recipient: UserId) {
        let patch = json!({
            "is_read": message.is_read,
            "read_at": message.read_at.map(|t| t.to_rfc3339()),
        });
        for path in Self::mirror_paths(message, recipient) {
            if let Err(e) = self.mirror.update(&path, patch.clone()).await {
                let err = DomainError::UpstreamUnavailable(format!("{e:#}"));
                warn!(
                    message_id = %message.id,
                    path = %path,
                    "Mirror read-state update failed: {err}"
                );
            }
        }
    }

    /// Remove both mirror entries for a deleted message. Best-effort.
    pub async fn replicate_delete(&self, message: &Message, recipient: UserId) {
        for path in Self::mirror_paths(message, recipient) {
            if let Err(e) = self.mirror.delete(&path).await {
                let err = DomainError::UpstreamUnavailable(format!("{e:#}"));
                warn!(
                    message_id = %message.id,
                    path = %path,
                    "Mirror delete failed: {err}"
                );
            }
        }
    }
}
