use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};
use std::fmt;
use std::str::FromStr;

use crate::common::{NotificationId, UserId};

/// Notification model - a persisted per-user notification row.
///
/// Durability comes solely from the primary store; there is no delivery
/// transport behind this.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient_id: UserId,
    pub kind: String,
    pub message: String,
    pub related_url: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification kind vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A matching job was published.
    NewJob,
    /// An application changed status.
    StatusUpdate,
    /// An interview was scheduled or is coming up.
    InterviewReminder,
    /// A chat message arrived.
    ChatMessage,
    /// Platform-level notice (role activation, audit entries).
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::NewJob => "new_job",
            NotificationKind::StatusUpdate => "status_update",
            NotificationKind::InterviewReminder => "interview_reminder",
            NotificationKind::ChatMessage => "chat_message",
            NotificationKind::System => "system",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "new_job" => Ok(NotificationKind::NewJob),
            "status_update" => Ok(NotificationKind::StatusUpdate),
            "interview_reminder" => Ok(NotificationKind::InterviewReminder),
            "chat_message" => Ok(NotificationKind::ChatMessage),
            "system" => Ok(NotificationKind::System),
            _ => Err(anyhow::anyhow!("Invalid notification kind: {}", s)),
        }
    }
}

impl Notification {
    /// Append a notification row. Works against the pool or inside a
    /// workflow transaction.
    pub async fn insert<'e>(
        recipient_id: UserId,
        kind: NotificationKind,
        message: &str,
        related_url: Option<&str>,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO notifications (id, recipient_id, kind, message, related_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(NotificationId::new())
        .bind(recipient_id)
        .bind(kind.as_str())
        .bind(message)
        .bind(related_url)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id(id: NotificationId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Unread notifications for a user, newest first.
    pub async fn find_unread(recipient_id: UserId, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM notifications
             WHERE recipient_id = $1 AND is_read = FALSE
             ORDER BY created_at DESC, id DESC",
        )
        .bind(recipient_id)
        .fetch_all(pool)
        .await
    }

    pub async fn mark_read(id: NotificationId, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
