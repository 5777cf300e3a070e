use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Postgres, Transaction};

use crate::common::{ConversationId, UserId};

/// Conversation model - one row per participant pair.
///
/// The pair is stored normalized (participant_a < participant_b by uuid
/// order) so the unique key maps any two users to exactly one conversation.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Conversation {
    pub id: ConversationId,
    pub participant_a: UserId,
    pub participant_b: UserId,
    pub last_message_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Normalize a participant pair into storage order.
    pub fn normalize_pair(x: UserId, y: UserId) -> (UserId, UserId) {
        if x < y {
            (x, y)
        } else {
            (y, x)
        }
    }

    pub fn involves(&self, user: UserId) -> bool {
        self.participant_a == user || self.participant_b == user
    }

    /// The participant that is not `user`.
    pub fn other_participant(&self, user: UserId) -> UserId {
        if self.participant_a == user {
            self.participant_b
        } else {
            self.participant_a
        }
    }

    /// Find the conversation for a pair, creating it if absent.
    pub async fn find_or_create(
        x: UserId,
        y: UserId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Self> {
        let (a, b) = Self::normalize_pair(x, y);

        let existing = sqlx::query_as::<_, Self>(
            "SELECT * FROM conversations WHERE participant_a = $1 AND participant_b = $2",
        )
        .bind(a)
        .bind(b)
        .fetch_optional(&mut **tx)
        .await?;

        if let Some(conversation) = existing {
            return Ok(conversation);
        }

        sqlx::query_as::<_, Self>(
            "INSERT INTO conversations (id, participant_a, participant_b)
             VALUES ($1, $2, $3)
             ON CONFLICT (participant_a, participant_b) DO UPDATE SET participant_a = EXCLUDED.participant_a
             RETURNING *",
        )
        .bind(ConversationId::new())
        .bind(a)
        .bind(b)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn find_by_id<'e>(
        id: ConversationId,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM conversations WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Bump the last-activity timestamp to a message's sent_at.
    pub async fn touch(
        id: ConversationId,
        at: DateTime<Utc>,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<()> {
        sqlx::query(
            "UPDATE conversations SET last_message_at = GREATEST(last_message_at, $2) WHERE id = $1",
        )
        .bind(id)
        .bind(at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
