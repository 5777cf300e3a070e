use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Postgres, Transaction};

use crate::common::{ConversationId, MessageId, UserId};

/// Message model - a chat message in the primary store (source of truth).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
}

impl Message {
    pub async fn insert(
        conversation_id: ConversationId,
        sender_id: UserId,
        content: &str,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO messages (id, conversation_id, sender_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(MessageId::new())
        .bind(conversation_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn find_by_id<'e>(
        id: MessageId,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Conversation history in sent order.
    pub async fn find_for_conversation<'e>(
        conversation_id: ConversationId,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM messages WHERE conversation_id = $1 ORDER BY sent_at",
        )
        .bind(conversation_id)
        .fetch_all(executor)
        .await
    }

    /// Mark read; idempotent (the first read_at wins).
    pub async fn mark_read<'e>(id: MessageId, executor: impl PgExecutor<'e>) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE messages
             SET is_read = TRUE, read_at = COALESCE(read_at, now())
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .fetch_one(executor)
        .await
    }

    pub async fn delete<'e>(id: MessageId, executor: impl PgExecutor<'e>) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
